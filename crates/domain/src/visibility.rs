//! Field visibility derived from the source radios
//!
//! Each group's hidden flag follows its own radio. The two assignments are
//! independent: neither radio checked hides both groups, both checked shows
//! both. Exclusivity is left to the browser's radio group.

use crate::{ElementRole, SourceKind};

/// Checked state of the two source radios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub url_checked: bool,
    pub file_checked: bool,
}

impl SelectorState {
    pub fn new(url_checked: bool, file_checked: bool) -> Self {
        Self {
            url_checked,
            file_checked,
        }
    }

    /// State with exactly `kind` checked
    pub fn selecting(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Url => Self::new(true, false),
            SourceKind::File => Self::new(false, true),
        }
    }

    /// The selected source, if exactly one radio is checked
    pub fn selected(&self) -> Option<SourceKind> {
        match (self.url_checked, self.file_checked) {
            (true, false) => Some(SourceKind::Url),
            (false, true) => Some(SourceKind::File),
            _ => None,
        }
    }
}

/// Hidden flags of the two field groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub url_field_hidden: bool,
    pub file_field_hidden: bool,
}

impl FieldVisibility {
    pub fn from_selectors(state: SelectorState) -> Self {
        Self {
            url_field_hidden: !state.url_checked,
            file_field_hidden: !state.file_checked,
        }
    }

    /// Hidden flag for a field container role
    ///
    /// Selector roles are never hidden by the toggler and report `false`.
    pub fn is_hidden(&self, role: ElementRole) -> bool {
        match role {
            ElementRole::UrlField => self.url_field_hidden,
            ElementRole::FileField => self.file_field_hidden,
            ElementRole::UrlSelector | ElementRole::FileSelector => false,
        }
    }

    /// Sources whose field group is visible
    pub fn visible_sources(&self) -> Vec<SourceKind> {
        SourceKind::all()
            .iter()
            .copied()
            .filter(|kind| !self.is_hidden(ElementRole::field_for(*kind)))
            .collect()
    }
}
