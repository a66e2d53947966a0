//! Form document ports - element lookup and mutation
//!
//! The toggler only needs three things from a document: find an element by
//! id, read a radio's checked state and subscribe to its `change` event, and
//! flip the hidden marker of a container. Adapters live in
//! `infrastructure::dom` (web-sys in the browser, in-memory elsewhere).

use std::rc::Rc;

use thiserror::Error;

/// Callback run when a radio fires `change`
pub type ChangeHandler = Rc<dyn Fn()>;

/// Failures reported by a document adapter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No global window/document (not running in a page)
    #[error("No document available")]
    NoDocument,

    /// A DOM call threw
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl DomError {
    pub fn js(msg: impl Into<String>) -> Self {
        Self::Js(msg.into())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// A source selector radio
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RadioControl {
    /// Current checked state
    fn is_checked(&self) -> bool;

    /// Run `handler` on every `change` event for the rest of the page lifetime
    fn on_change(&self, handler: ChangeHandler) -> Result<(), DomError>;
}

/// A field group container
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FieldContainer {
    /// Add (`true`) or remove (`false`) the hidden marker
    fn set_hidden(&self, hidden: bool) -> Result<(), DomError>;
}

/// Element lookup by id
///
/// Lookups are optional: an absent id yields `None`, never an error.
#[cfg_attr(
    any(test, feature = "testing"),
    mockall::automock(type Radio = MockRadioControl; type Container = MockFieldContainer;)
)]
pub trait FormDocument {
    type Radio: RadioControl + 'static;
    type Container: FieldContainer + 'static;

    fn radio(&self, id: &str) -> Option<Self::Radio>;

    fn container(&self, id: &str) -> Option<Self::Container>;
}
