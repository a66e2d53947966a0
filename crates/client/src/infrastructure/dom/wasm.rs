//! Browser document adapter using web-sys

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::ports::outbound::{ChangeHandler, DomError, FieldContainer, FormDocument, RadioControl};

/// The page's `document`, with the class used as hidden marker
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
    hidden_class: String,
}

impl WebDocument {
    pub fn new(document: Document, hidden_class: impl Into<String>) -> Self {
        Self {
            document,
            hidden_class: hidden_class.into(),
        }
    }

    /// Wrap the global `window.document`
    pub fn from_window(hidden_class: impl Into<String>) -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DomError::NoDocument)?;
        Ok(Self::new(document, hidden_class))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// A radio looked up by id
///
/// Any element is accepted; only `<input>` elements report a checked state.
pub struct WebRadio {
    element: Element,
}

impl RadioControl for WebRadio {
    fn is_checked(&self) -> bool {
        self.element
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn on_change(&self, handler: ChangeHandler) -> Result<(), DomError> {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        self.element
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(DomError::from_js)?;
        // The listener stays registered for the page lifetime.
        closure.forget();
        Ok(())
    }
}

/// A field group container looked up by id
pub struct WebContainer {
    element: Element,
    hidden_class: String,
}

impl FieldContainer for WebContainer {
    fn set_hidden(&self, hidden: bool) -> Result<(), DomError> {
        self.element
            .class_list()
            .toggle_with_force(&self.hidden_class, hidden)
            .map(|_| ())
            .map_err(DomError::from_js)
    }
}

impl FormDocument for WebDocument {
    type Radio = WebRadio;
    type Container = WebContainer;

    fn radio(&self, id: &str) -> Option<Self::Radio> {
        self.document
            .get_element_by_id(id)
            .map(|element| WebRadio { element })
    }

    fn container(&self, id: &str) -> Option<Self::Container> {
        self.document
            .get_element_by_id(id)
            .map(|element| WebContainer {
                element,
                hidden_class: self.hidden_class.clone(),
            })
    }
}
