//! Native preview of the import form toggler
//!
//! Builds the admin import form in an in-memory document, checks the radio
//! named by `IMPORT_FORM_SOURCE` (`url`, `file` or `none`, default `url`),
//! runs the toggler and logs which field group ends up visible.
//! `IMPORT_FORM_CONFIG` may point to a JSON config file.

use anyhow::Context;
use importform_domain::{ElementRole, SourceKind};

use crate::config::TogglerConfig;
use crate::infrastructure::bootstrap;
use crate::infrastructure::dom::MemoryDocument;

const RADIO_GROUP: &str = "source_type";

pub fn load_config() -> anyhow::Result<TogglerConfig> {
    match std::env::var("IMPORT_FORM_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading toggler config {path}"))?;
            TogglerConfig::from_json(&json).with_context(|| format!("parsing {path}"))
        }
        Err(_) => Ok(TogglerConfig::default()),
    }
}

/// Parse `IMPORT_FORM_SOURCE`; `none` means no radio checked
pub fn parse_selection(value: Option<&str>) -> anyhow::Result<Option<SourceKind>> {
    match value.map(str::trim) {
        None | Some("") => Ok(Some(SourceKind::Url)),
        Some(v) if v.eq_ignore_ascii_case("none") => Ok(None),
        Some(v) => Ok(Some(v.parse()?)),
    }
}

/// Build the admin form with `selected` checked by default
pub fn build_form(config: &TogglerConfig, selected: Option<SourceKind>) -> MemoryDocument {
    let doc = MemoryDocument::new(&config.hidden_class);
    for kind in SourceKind::all() {
        doc.add_radio(
            config.ids.id_for(ElementRole::selector_for(*kind)),
            RADIO_GROUP,
            selected == Some(*kind),
        );
        doc.add_container(config.ids.id_for(ElementRole::field_for(*kind)), false);
    }
    doc
}

pub fn run() -> anyhow::Result<()> {
    let config = load_config()?;
    bootstrap::install_logging(config.log_level);

    let selection = std::env::var("IMPORT_FORM_SOURCE").ok();
    let selected = parse_selection(selection.as_deref())?;

    let doc = build_form(&config, selected);
    let outcome = bootstrap::run(doc, &config)?;

    match outcome.form() {
        Some(form) => {
            let visibility = form.sync()?;
            tracing::info!(
                selected = ?form.selected_source(),
                visible = ?visibility.visible_sources(),
                "Import form preview"
            );
        }
        None => tracing::warn!(missing = ?outcome.missing(), "Import form preview skipped"),
    }
    Ok(())
}
