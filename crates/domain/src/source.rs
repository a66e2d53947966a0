//! Import source kind
//!
//! The admin form posts `source_type=url` or `source_type=file`; this enum is
//! the typed form of that field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Where the price list is imported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Remote YAML document fetched by the server
    Url,
    /// YAML file uploaded with the form
    File,
}

impl SourceKind {
    /// Get all source kinds, in form order
    pub fn all() -> &'static [SourceKind] {
        &[SourceKind::Url, SourceKind::File]
    }

    /// Value carried by the `source_type` radio
    pub fn form_value(&self) -> &'static str {
        match self {
            SourceKind::Url => "url",
            SourceKind::File => "file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

impl FromStr for SourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "url" => Ok(SourceKind::Url),
            "file" => Ok(SourceKind::File),
            other => Err(DomainError::parse(format!("unknown source type: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values() {
        assert_eq!(SourceKind::Url.form_value(), "url");
        assert_eq!(SourceKind::File.form_value(), "file");
        assert_eq!(SourceKind::File.to_string(), "file");
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_padding() {
        assert_eq!(" URL ".parse::<SourceKind>(), Ok(SourceKind::Url));
        assert_eq!("File".parse::<SourceKind>(), Ok(SourceKind::File));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "ftp".parse::<SourceKind>(),
            Err(DomainError::Parse(_))
        ));
        assert!("".parse::<SourceKind>().is_err());
    }

    #[test]
    fn test_serde_uses_form_value() {
        let json = serde_json::to_string(&SourceKind::Url).expect("serialize");
        assert_eq!(json, "\"url\"");
        let kind: SourceKind = serde_json::from_str("\"file\"").expect("deserialize");
        assert_eq!(kind, SourceKind::File);
    }
}
