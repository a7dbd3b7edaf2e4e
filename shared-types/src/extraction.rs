use crate::Resume;
use std::path::Path;

/// Core trait that every platform extractor implements.
///
/// `can_handle` is the capability probe: it must be cheap, must not mutate
/// anything and never fails. Anything that goes wrong while probing simply
/// means "not mine". `extract` does the full parse and may fail; a failure is
/// always recoverable for the caller.
pub trait ResumeExtractor {
    /// Stable identifier used in logs, e.g. `lagou`
    fn name(&self) -> &'static str;

    /// Does this extractor recognise the document layout of `path`?
    fn can_handle(&self, path: &Path) -> bool;

    /// Parse `path` into a [`Resume`]
    fn extract(&self, path: &Path) -> Result<Resume, ExtractionError>;
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Layout mismatch: {0}")]
    LayoutMismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedOnly;

    impl ResumeExtractor for NamedOnly {
        fn name(&self) -> &'static str {
            "named-only"
        }

        fn can_handle(&self, _path: &Path) -> bool {
            false
        }

        fn extract(&self, path: &Path) -> Result<Resume, ExtractionError> {
            Err(ExtractionError::LayoutMismatch(path.display().to_string()))
        }
    }

    #[test]
    fn test_error_messages() {
        let err = NamedOnly.extract(Path::new("a.doc")).unwrap_err();
        assert_eq!(err.to_string(), "Layout mismatch: a.doc");

        let io = ExtractionError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(matches!(io, ExtractionError::Io(_)));
        assert_eq!(io.to_string(), "I/O error: gone");
    }
}
