//! Outbound ports - Interfaces for the hosting document
//!
//! These ports define the contracts that DOM adapters must implement,
//! so the toggler can run against a browser page or an in-memory fixture.

pub mod form_document;

pub use form_document::{ChangeHandler, DomError, FieldContainer, FormDocument, RadioControl};

#[cfg(any(test, feature = "testing"))]
pub use form_document::{MockFieldContainer, MockFormDocument, MockRadioControl};
