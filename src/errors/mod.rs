use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for wiki operations.
pub type Result<T> = std::result::Result<T, WikiError>;

/// Custom error types for the wiki core
#[derive(Debug, Error)]
pub enum WikiError {
    /// The page file does not exist.
    #[error("page not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem failure on read, write, mkdir, remove or listing.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A metadata region was found but is not a JSON object.
    #[error("invalid page metadata: {source}")]
    MetadataParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode page metadata: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// Page name is not sanitized or has an empty segment.
    #[error("invalid page name: {name:?}")]
    InvalidPageName { name: String },

    #[error("invalid configuration: {source}")]
    Config {
        #[source]
        source: serde_json::Error,
    },
}

impl WikiError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WikiError::Io {
            path: path.into(),
            source,
        }
    }

    /// I/O failure on a page file. A file that vanished between the
    /// existence check and the operation is still `NotFound`.
    pub(crate) fn page_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            WikiError::NotFound { path: path.into() }
        } else {
            WikiError::io(path, source)
        }
    }

    /// True if the page file was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WikiError::NotFound { .. })
    }

    /// Kind of the underlying I/O failure, if this is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            WikiError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = WikiError::NotFound {
            path: PathBuf::from("data/main.txt"),
        };
        assert_eq!(err.to_string(), "page not found: data/main.txt");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_page_io_keeps_not_found_distinct() {
        let err = WikiError::page_io("data/gone.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.io_kind(), None);

        let err = WikiError::page_io(
            "data/locked.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_not_found());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = WikiError::io("data", io::Error::other("disk full"));
        assert!(!err.is_not_found());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::Other));
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("disk full"));
    }
}
