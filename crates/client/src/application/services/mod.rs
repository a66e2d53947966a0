//! Application services
//!
//! - `toggle_service`: binds the source radios to the field groups
//! - `source_check_service`: pre-checks a source before the form is posted

pub mod source_check_service;
pub mod toggle_service;

pub use source_check_service::check_import_source;
pub use toggle_service::{BoundForm, FieldToggler, ToggleOutcome};
