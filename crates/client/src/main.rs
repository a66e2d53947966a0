//! Import form client binary.
//!
//! In the browser this is the page entrypoint; natively it runs a preview
//! against an in-memory form.

#[cfg(target_arch = "wasm32")]
fn main() {
    use importform_client::infrastructure::bootstrap;

    let config = importform_client::TogglerConfig::default();
    bootstrap::install_logging(config.log_level);

    if let Err(e) = bootstrap::register_on_content_loaded(config) {
        tracing::error!("Failed to register import form toggler: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    importform_client::preview::run()
}
