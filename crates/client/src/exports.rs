//! JavaScript entry points
//!
//! ```js
//! initImportForm();
//! initImportFormWith({ hidden_class: "is-hidden" });
//! const problem = checkImportSource("file", input.files[0].name, input.files[0].size);
//! ```

use wasm_bindgen::prelude::*;

use crate::application::services::check_import_source as check_source;
use crate::config::TogglerConfig;
use crate::infrastructure::bootstrap;

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Run the toggler now with the default ids and hidden class
///
/// Resolves to `true` when the form was found and bound.
#[wasm_bindgen(js_name = initImportForm)]
pub fn init_import_form() -> Result<bool, JsValue> {
    bootstrap::run_in_page(&TogglerConfig::default()).map_err(to_js)
}

/// Run the toggler now with a config object (missing keys use defaults)
#[wasm_bindgen(js_name = initImportFormWith)]
pub fn init_import_form_with(config: JsValue) -> Result<bool, JsValue> {
    let config: TogglerConfig = serde_wasm_bindgen::from_value(config).map_err(to_js)?;
    bootstrap::install_logging(config.log_level);
    bootstrap::run_in_page(&config).map_err(to_js)
}

/// Pre-check an import source; returns `null` when acceptable, else the reason
#[wasm_bindgen(js_name = checkImportSource)]
pub fn check_import_source(kind: &str, value: &str, size: f64) -> Option<String> {
    check_source(kind, value, size)
}
