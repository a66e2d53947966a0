//! Bootstrap - logging setup and one-shot toggler start
//!
//! In the browser the toggler starts on `DOMContentLoaded`. When the wasm
//! module is instantiated after that event already fired, it starts right
//! away instead.

use thiserror::Error;

use crate::application::services::{FieldToggler, ToggleOutcome};
use crate::config::{ConfigError, LogLevel, TogglerConfig};
use crate::ports::outbound::{DomError, FormDocument};

#[cfg(target_arch = "wasm32")]
use crate::infrastructure::dom::WebDocument;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Failure to start the toggler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Validate `config` and run the toggler against `document`
pub fn run<D: FormDocument>(
    document: D,
    config: &TogglerConfig,
) -> Result<ToggleOutcome<D::Radio, D::Container>, BootstrapError> {
    config.validate()?;
    Ok(FieldToggler::new(document, config.ids.clone()).init()?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_logging(level: LogLevel) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = level.to_tracing();
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("importform_client={level},importform_domain={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn install_logging(level: LogLevel) {
    static LOGGING: std::sync::Once = std::sync::Once::new();

    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(level.to_tracing())
                .build(),
        );
    });
}

/// Run the toggler against `window.document` now
///
/// Returns whether the form was found and bound.
#[cfg(target_arch = "wasm32")]
pub fn run_in_page(config: &TogglerConfig) -> Result<bool, BootstrapError> {
    let document = WebDocument::from_window(config.hidden_class.clone())?;
    let outcome = run(document, config)?;
    Ok(outcome.is_bound())
}

/// Start the toggler once the page content is loaded
#[cfg(target_arch = "wasm32")]
pub fn register_on_content_loaded(config: TogglerConfig) -> Result<(), BootstrapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)?;

    if document.ready_state() != "loading" {
        return run_in_page(&config).map(|_| ());
    }

    let listener = Closure::once(move || {
        if let Err(e) = run_in_page(&config) {
            tracing::error!("Import form toggler failed to start: {}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())
        .map_err(DomError::from_js)?;
    listener.forget();
    tracing::debug!("Import form toggler waiting for DOMContentLoaded");
    Ok(())
}
