//! In-memory document
//!
//! A tiny stand-in for the browser DOM used by the native preview binary and
//! by tests. Elements carry a checked flag, a class set, a radio group name
//! and `change` listeners. [`MemoryDocument::click`] behaves like a user
//! clicking a radio: the group is updated and `change` fires on the clicked
//! radio only.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::ports::outbound::{ChangeHandler, DomError, FieldContainer, FormDocument, RadioControl};

#[derive(Default)]
struct MemoryNode {
    group: Option<String>,
    checked: Cell<bool>,
    classes: RefCell<BTreeSet<String>>,
    listeners: RefCell<Vec<ChangeHandler>>,
}

/// Handle to an element of a [`MemoryDocument`]
#[derive(Clone)]
pub struct MemoryElement {
    node: Rc<MemoryNode>,
    hidden_class: Rc<str>,
}

impl RadioControl for MemoryElement {
    fn is_checked(&self) -> bool {
        self.node.checked.get()
    }

    fn on_change(&self, handler: ChangeHandler) -> Result<(), DomError> {
        self.node.listeners.borrow_mut().push(handler);
        Ok(())
    }
}

impl FieldContainer for MemoryElement {
    fn set_hidden(&self, hidden: bool) -> Result<(), DomError> {
        let mut classes = self.node.classes.borrow_mut();
        if hidden {
            classes.insert(self.hidden_class.to_string());
        } else {
            classes.remove(&*self.hidden_class);
        }
        Ok(())
    }
}

/// Shared, cloneable in-memory document
#[derive(Clone)]
pub struct MemoryDocument {
    elements: Rc<RefCell<HashMap<String, Rc<MemoryNode>>>>,
    hidden_class: Rc<str>,
}

impl MemoryDocument {
    /// Create an empty document using `hidden_class` as the hidden marker
    pub fn new(hidden_class: &str) -> Self {
        Self {
            elements: Rc::new(RefCell::new(HashMap::new())),
            hidden_class: Rc::from(hidden_class),
        }
    }

    pub fn add_radio(&self, id: &str, group: &str, checked: bool) {
        let node = MemoryNode {
            group: Some(group.to_string()),
            checked: Cell::new(checked),
            ..MemoryNode::default()
        };
        self.elements
            .borrow_mut()
            .insert(id.to_string(), Rc::new(node));
    }

    pub fn add_container(&self, id: &str, hidden: bool) {
        let node = MemoryNode::default();
        if hidden {
            node.classes.borrow_mut().insert(self.hidden_class.to_string());
        }
        self.elements
            .borrow_mut()
            .insert(id.to_string(), Rc::new(node));
    }

    pub fn remove(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    /// Simulate a user click on a radio
    ///
    /// Does nothing for unknown ids or an already checked radio, since the
    /// browser fires no `change` in that case.
    pub fn click(&self, id: &str) {
        let Some(node) = self.node(id) else {
            return;
        };
        if node.checked.get() {
            return;
        }
        if let Some(group) = &node.group {
            for other in self.elements.borrow().values() {
                if other.group.as_ref() == Some(group) {
                    other.checked.set(false);
                }
            }
        }
        node.checked.set(true);

        // Listeners may read the document; release all borrows first.
        let listeners: Vec<ChangeHandler> = node.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    /// Write the checked flag directly, without group exclusivity or events
    pub fn set_checked(&self, id: &str, checked: bool) {
        if let Some(node) = self.node(id) {
            node.checked.set(checked);
        }
    }

    /// Whether `id` carries the hidden marker, `None` if absent
    pub fn is_hidden(&self, id: &str) -> Option<bool> {
        self.node(id)
            .map(|node| node.classes.borrow().contains(&*self.hidden_class))
    }

    pub fn class_count(&self, id: &str) -> usize {
        self.node(id)
            .map(|node| node.classes.borrow().len())
            .unwrap_or(0)
    }

    pub fn listener_count(&self, id: &str) -> Option<usize> {
        self.node(id).map(|node| node.listeners.borrow().len())
    }

    fn node(&self, id: &str) -> Option<Rc<MemoryNode>> {
        self.elements.borrow().get(id).cloned()
    }

    fn element(&self, id: &str) -> Option<MemoryElement> {
        self.node(id).map(|node| MemoryElement {
            node,
            hidden_class: Rc::clone(&self.hidden_class),
        })
    }
}

impl FormDocument for MemoryDocument {
    type Radio = MemoryElement;
    type Container = MemoryElement;

    fn radio(&self, id: &str) -> Option<Self::Radio> {
        self.element(id)
    }

    fn container(&self, id: &str) -> Option<Self::Container> {
        self.element(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_updates_group_and_fires_change_once() {
        let doc = MemoryDocument::new("hidden");
        doc.add_radio("a", "g", true);
        doc.add_radio("b", "g", false);
        let fired = Rc::new(Cell::new(0));
        let radio = doc.radio("b").expect("radio");
        let counter = Rc::clone(&fired);
        radio
            .on_change(Rc::new(move || counter.set(counter.get() + 1)))
            .expect("listen");

        doc.click("b");
        doc.click("b");

        assert_eq!(fired.get(), 1);
        assert!(!doc.radio("a").expect("radio").is_checked());
        assert!(radio.is_checked());
    }

    #[test]
    fn set_hidden_toggles_marker_only() {
        let doc = MemoryDocument::new("hidden");
        doc.add_container("box", true);
        let field = doc.container("box").expect("container");

        field.set_hidden(false).expect("show");
        assert_eq!(doc.is_hidden("box"), Some(false));

        field.set_hidden(true).expect("hide");
        field.set_hidden(true).expect("hide again");
        assert_eq!(doc.is_hidden("box"), Some(true));
        assert_eq!(doc.class_count("box"), 1);
    }

    #[test]
    fn removed_elements_are_not_found() {
        let doc = MemoryDocument::new("hidden");
        doc.add_container("box", false);
        doc.remove("box");

        assert!(doc.container("box").is_none());
        assert_eq!(doc.is_hidden("box"), None);
        doc.click("box");
    }
}
