//! Import form domain
//!
//! Pure types behind the shop import form: which source the admin picked,
//! which elements the page must provide, and which field group is visible
//! for a given radio state. Nothing here touches the DOM.

pub mod elements;
pub mod error;
pub mod source;
pub mod source_check;
pub mod visibility;

pub use elements::{ElementIds, ElementRole};
pub use error::DomainError;
pub use source::SourceKind;
pub use source_check::{ImportSource, SourceCheckError, MAX_UPLOAD_BYTES};
pub use visibility::{FieldVisibility, SelectorState};
