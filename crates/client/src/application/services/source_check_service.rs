//! Source pre-check for the page
//!
//! Thin wrapper over [`ImportSource::check`] taking the loosely typed values
//! a page script has at hand (`source_type` string, JS number size).

use importform_domain::{ImportSource, SourceKind};

/// Check a source and return the rejection message, `None` when acceptable
///
/// Negative or non-finite sizes count as zero.
pub fn check_import_source(kind: &str, value: &str, size: f64) -> Option<String> {
    let kind: SourceKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return Some(e.to_string()),
    };
    let size = if size.is_finite() && size > 0.0 {
        size as u64
    } else {
        0
    };
    match ImportSource::check(kind, value, size) {
        Ok(source) => {
            tracing::debug!(kind = %source.kind(), "Import source accepted");
            None
        }
        Err(e) => Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use importform_domain::MAX_UPLOAD_BYTES;

    #[test]
    fn accepted_sources_yield_none() {
        assert_eq!(check_import_source("url", "https://shop.example/p.yaml", 0.0), None);
        assert_eq!(check_import_source("file", "price.yml", 2048.0), None);
    }

    #[test]
    fn rejected_sources_yield_message() {
        assert_eq!(
            check_import_source("file", "price.csv", 10.0).as_deref(),
            Some("File must be in YAML format")
        );
        assert_eq!(
            check_import_source("url", "", 0.0).as_deref(),
            Some("URL is empty")
        );
        let too_big = (MAX_UPLOAD_BYTES + 1) as f64;
        assert!(check_import_source("file", "price.yaml", too_big).is_some());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let message = check_import_source("ftp", "x", 0.0).expect("rejected");
        assert!(message.contains("unknown source type"));
    }

    #[test]
    fn bogus_sizes_count_as_zero() {
        assert_eq!(check_import_source("file", "price.yaml", -5.0), None);
        assert_eq!(check_import_source("file", "price.yaml", f64::NAN), None);
    }
}
