//! Markup contract of the import form
//!
//! The page must provide two radio inputs and two field containers. Their
//! ids default to the ones rendered by the admin template and can be
//! overridden when the form is embedded elsewhere.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::{DomainError, SourceKind};

/// Role an element plays in the import form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    /// Radio selecting URL mode
    UrlSelector,
    /// Radio selecting file mode
    FileSelector,
    /// Container holding the URL input
    UrlField,
    /// Container holding the file input
    FileField,
}

impl ElementRole {
    /// All roles, in lookup order
    pub fn all() -> &'static [ElementRole] {
        &[
            ElementRole::UrlSelector,
            ElementRole::FileSelector,
            ElementRole::UrlField,
            ElementRole::FileField,
        ]
    }

    /// Radio role for a source kind
    pub fn selector_for(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Url => ElementRole::UrlSelector,
            SourceKind::File => ElementRole::FileSelector,
        }
    }

    /// Container role for a source kind
    pub fn field_for(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Url => ElementRole::UrlField,
            SourceKind::File => ElementRole::FileField,
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementRole::UrlSelector => "url selector",
            ElementRole::FileSelector => "file selector",
            ElementRole::UrlField => "url field group",
            ElementRole::FileField => "file field group",
        };
        f.write_str(name)
    }
}

/// Element ids the toggler looks up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub source_url: String,
    pub source_file: String,
    pub url_field: String,
    pub file_field: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            source_url: "source_url".to_string(),
            source_file: "source_file".to_string(),
            url_field: "url_field".to_string(),
            file_field: "file_field".to_string(),
        }
    }
}

impl ElementIds {
    /// Id of the element playing `role`
    pub fn id_for(&self, role: ElementRole) -> &str {
        match role {
            ElementRole::UrlSelector => &self.source_url,
            ElementRole::FileSelector => &self.source_file,
            ElementRole::UrlField => &self.url_field,
            ElementRole::FileField => &self.file_field,
        }
    }

    /// Reject empty or duplicated ids
    ///
    /// Two roles sharing one id would make a container double as a radio.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for role in ElementRole::all() {
            let id = self.id_for(*role).trim();
            if id.is_empty() {
                return Err(DomainError::validation(format!("{role} id is empty")));
            }
            if !seen.insert(id) {
                return Err(DomainError::validation(format!(
                    "id {id:?} is used by more than one element"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids_match_admin_template() {
        let ids = ElementIds::default();
        assert_eq!(ids.id_for(ElementRole::UrlSelector), "source_url");
        assert_eq!(ids.id_for(ElementRole::FileSelector), "source_file");
        assert_eq!(ids.id_for(ElementRole::UrlField), "url_field");
        assert_eq!(ids.id_for(ElementRole::FileField), "file_field");
        assert!(ids.validate().is_ok());
    }

    #[test]
    fn test_roles_for_each_source() {
        assert_eq!(ElementRole::selector_for(SourceKind::Url), ElementRole::UrlSelector);
        assert_eq!(ElementRole::selector_for(SourceKind::File), ElementRole::FileSelector);
        assert_eq!(ElementRole::field_for(SourceKind::Url), ElementRole::UrlField);
        assert_eq!(ElementRole::field_for(SourceKind::File), ElementRole::FileField);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let ids: ElementIds =
            serde_json::from_str(r#"{"url_field": "remote_box"}"#).expect("deserialize");
        assert_eq!(ids.url_field, "remote_box");
        assert_eq!(ids.source_url, "source_url");
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let ids = ElementIds {
            file_field: "  ".to_string(),
            ..ElementIds::default()
        };
        assert!(matches!(ids.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let ids = ElementIds {
            url_field: "source_url".to_string(),
            ..ElementIds::default()
        };
        assert!(ids.validate().is_err());
    }
}
