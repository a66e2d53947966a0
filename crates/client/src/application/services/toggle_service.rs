//! Field visibility toggler
//!
//! Looks up the two source radios and the two field containers once, binds
//! one sync handler to both radios' `change` event and runs it immediately.
//! A page missing any of the four elements is left untouched.

use std::cell::Cell;
use std::rc::Rc;

use importform_domain::{ElementIds, ElementRole, FieldVisibility, SelectorState, SourceKind};

use crate::ports::outbound::{
    ChangeHandler, DomError, FieldContainer, FormDocument, RadioControl,
};

/// The four elements of a form the toggler has bound to
pub struct BoundForm<R, C> {
    url_radio: R,
    file_radio: R,
    url_field: C,
    file_field: C,
    // Set once both listeners are registered and the first sync succeeded.
    armed: Cell<bool>,
}

impl<R: RadioControl, C: FieldContainer> BoundForm<R, C> {
    /// Checked state of both radios as of now
    pub fn selector_state(&self) -> SelectorState {
        SelectorState::new(self.url_radio.is_checked(), self.file_radio.is_checked())
    }

    /// Selected source, `None` unless exactly one radio is checked
    pub fn selected_source(&self) -> Option<SourceKind> {
        self.selector_state().selected()
    }

    /// Apply the radios' state to the field containers
    ///
    /// Each container follows its own radio; the two updates do not depend
    /// on each other.
    pub fn sync(&self) -> Result<FieldVisibility, DomError> {
        let visibility = FieldVisibility::from_selectors(self.selector_state());
        self.url_field.set_hidden(visibility.url_field_hidden)?;
        self.file_field.set_hidden(visibility.file_field_hidden)?;
        tracing::trace!(?visibility, "Import form fields synced");
        Ok(visibility)
    }
}

/// Result of [`FieldToggler::init`]
pub enum ToggleOutcome<R, C> {
    /// All elements found, handlers bound, initial state applied
    Bound {
        form: Rc<BoundForm<R, C>>,
        visibility: FieldVisibility,
    },
    /// At least one element missing; nothing was bound or toggled
    Skipped { missing: Vec<ElementRole> },
}

impl<R, C> ToggleOutcome<R, C> {
    pub fn is_bound(&self) -> bool {
        matches!(self, ToggleOutcome::Bound { .. })
    }

    pub fn form(&self) -> Option<&Rc<BoundForm<R, C>>> {
        match self {
            ToggleOutcome::Bound { form, .. } => Some(form),
            ToggleOutcome::Skipped { .. } => None,
        }
    }

    /// Roles that could not be found (empty when bound)
    pub fn missing(&self) -> &[ElementRole] {
        match self {
            ToggleOutcome::Bound { .. } => &[],
            ToggleOutcome::Skipped { missing } => missing,
        }
    }
}

/// Binds the import form's radios to its field containers
pub struct FieldToggler<D> {
    document: D,
    ids: ElementIds,
}

impl<D: FormDocument> FieldToggler<D> {
    pub fn new(document: D, ids: ElementIds) -> Self {
        Self { document, ids }
    }

    /// Look up the form elements and bind the sync handler
    ///
    /// Missing elements are reported through [`ToggleOutcome::Skipped`], not
    /// as an error. Errors only come from the document itself rejecting a
    /// listener or a marker update. A listener registered before such an
    /// error stays attached but is inert: the change handler only syncs once
    /// `init` has completed.
    pub fn init(&self) -> Result<ToggleOutcome<D::Radio, D::Container>, DomError> {
        let url_radio = self.document.radio(&self.ids.source_url);
        let file_radio = self.document.radio(&self.ids.source_file);
        let url_field = self.document.container(&self.ids.url_field);
        let file_field = self.document.container(&self.ids.file_field);

        let (url_radio, file_radio, url_field, file_field) =
            match (url_radio, file_radio, url_field, file_field) {
                (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
                (a, b, c, d) => {
                    let found = [a.is_some(), b.is_some(), c.is_some(), d.is_some()];
                    let missing: Vec<ElementRole> = ElementRole::all()
                        .iter()
                        .zip(found)
                        .filter(|(_, present)| !present)
                        .map(|(role, _)| *role)
                        .collect();
                    let ids: Vec<&str> = missing.iter().map(|r| self.ids.id_for(*r)).collect();
                    tracing::debug!(?ids, "Import form not on this page, toggler skipped");
                    return Ok(ToggleOutcome::Skipped { missing });
                }
            };

        let form = Rc::new(BoundForm {
            url_radio,
            file_radio,
            url_field,
            file_field,
            armed: Cell::new(false),
        });

        let handler: ChangeHandler = {
            let form = Rc::clone(&form);
            Rc::new(move || {
                if !form.armed.get() {
                    return;
                }
                if let Err(e) = form.sync() {
                    tracing::error!("Failed to sync import form fields: {}", e);
                }
            })
        };

        form.url_radio.on_change(Rc::clone(&handler))?;
        form.file_radio.on_change(handler)?;
        let visibility = form.sync()?;
        form.armed.set(true);

        tracing::info!(
            selected = ?form.selected_source(),
            "Import form toggler bound"
        );

        Ok(ToggleOutcome::Bound { form, visibility })
    }
}
