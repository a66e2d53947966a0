//! Pre-check of an import source before the form is posted
//!
//! Mirrors what the import endpoint accepts, so the page can warn early:
//! - URL sources must be absolute `http`, `https`, `ftp` or `ftps` URLs
//! - File sources must be YAML (`.yaml` / `.yml`) and at most 10 MiB

use thiserror::Error;
use url::Url;

use crate::SourceKind;

/// Largest accepted upload, in bytes
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

const YAML_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Reasons an import source is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceCheckError {
    #[error("URL is empty")]
    EmptyUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("No file selected")]
    NoFile,

    #[error("File must be in YAML format")]
    NotYaml,

    #[error("File is {size} bytes, the limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
}

/// An import source that passed the pre-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    Url(Url),
    File { name: String, size: u64 },
}

impl ImportSource {
    /// Check `value` as a source of the given kind
    ///
    /// For URL sources `value` is the typed address and `size` is ignored.
    /// For file sources `value` is the file name and `size` its length.
    pub fn check(kind: SourceKind, value: &str, size: u64) -> Result<Self, SourceCheckError> {
        match kind {
            SourceKind::Url => Self::check_url(value),
            SourceKind::File => Self::check_file(value, size),
        }
    }

    pub fn check_url(value: &str) -> Result<Self, SourceCheckError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(SourceCheckError::EmptyUrl);
        }
        let url = Url::parse(value).map_err(|e| SourceCheckError::InvalidUrl(e.to_string()))?;
        if !URL_SCHEMES.contains(&url.scheme()) {
            return Err(SourceCheckError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().is_none() {
            return Err(SourceCheckError::InvalidUrl("missing host".to_string()));
        }
        Ok(ImportSource::Url(url))
    }

    pub fn check_file(name: &str, size: u64) -> Result<Self, SourceCheckError> {
        if name.is_empty() {
            return Err(SourceCheckError::NoFile);
        }
        // Extension match is case-sensitive, as on the server.
        if !YAML_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            return Err(SourceCheckError::NotYaml);
        }
        if size > MAX_UPLOAD_BYTES {
            return Err(SourceCheckError::TooLarge {
                size,
                max: MAX_UPLOAD_BYTES,
            });
        }
        Ok(ImportSource::File {
            name: name.to_string(),
            size,
        })
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            ImportSource::Url(_) => SourceKind::Url,
            ImportSource::File { .. } => SourceKind::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        let source = ImportSource::check(SourceKind::Url, " https://shop.example/price.yaml ", 0)
            .expect("valid url");
        assert_eq!(source.kind(), SourceKind::Url);
        match source {
            ImportSource::Url(url) => assert_eq!(url.host_str(), Some("shop.example")),
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert_eq!(ImportSource::check_url("   "), Err(SourceCheckError::EmptyUrl));
        assert!(matches!(
            ImportSource::check_url("not a url"),
            Err(SourceCheckError::InvalidUrl(_))
        ));
        assert_eq!(
            ImportSource::check_url("mailto:prices@shop.example"),
            Err(SourceCheckError::UnsupportedScheme("mailto".to_string()))
        );
        assert_eq!(
            ImportSource::check_url("file:///srv/price.yaml"),
            Err(SourceCheckError::UnsupportedScheme("file".to_string()))
        );
    }

    #[test]
    fn test_accepts_ftp_urls_like_the_import_endpoint() {
        for url in [
            "ftp://shop.example/price.yaml",
            "ftps://shop.example/price.yml",
            "http://shop.example/price.yaml",
        ] {
            let source = ImportSource::check_url(url).expect(url);
            assert_eq!(source.kind(), SourceKind::Url);
        }
    }

    #[test]
    fn test_accepts_yaml_under_limit() {
        assert!(ImportSource::check_file("shop.yaml", 512).is_ok());
        assert!(ImportSource::check_file("shop.yml", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_non_yaml_and_oversized() {
        assert_eq!(ImportSource::check_file("", 1), Err(SourceCheckError::NoFile));
        assert_eq!(
            ImportSource::check_file("shop.json", 1),
            Err(SourceCheckError::NotYaml)
        );
        assert_eq!(
            ImportSource::check_file("shop.YAML", 1),
            Err(SourceCheckError::NotYaml)
        );
        assert_eq!(
            ImportSource::check(SourceKind::File, "shop.yaml", MAX_UPLOAD_BYTES + 1),
            Err(SourceCheckError::TooLarge {
                size: MAX_UPLOAD_BYTES + 1,
                max: MAX_UPLOAD_BYTES,
            })
        );
    }
}
