//! Error types for scanning operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a scan.
///
/// A scan is all-or-nothing: an access failure on any retained entry is
/// fatal, and no partial tree or totals survive it.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured root is itself on the ignore list.
    #[error("scan root is on the ignore list: {path}")]
    RootIgnored { path: PathBuf },

    /// The configured root is neither a file nor a directory.
    #[error("scan root is not a file or directory: {path}")]
    UnsupportedRoot { path: PathBuf },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Entry is neither a regular file nor a directory.
    UnsupportedKind,
    /// Symbolic link target does not exist.
    BrokenSymlink,
    /// Directory reached a second time through a link cycle.
    CycleDetected,
}

/// Non-fatal condition noted during a scan.
///
/// A warning marks an entry that was skipped without aborting the scan;
/// skipped entries appear neither in the tree nor in the totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create an unsupported-kind warning.
    pub fn unsupported_kind(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("not a file or directory: {}", path.display()),
            path,
            kind: WarningKind::UnsupportedKind,
        }
    }

    /// Create a broken symlink warning.
    pub fn broken_symlink(path: impl Into<PathBuf>, target: &str) -> Self {
        let path = path.into();
        Self {
            message: format!("broken symlink: {} -> {target}", path.display()),
            path,
            kind: WarningKind::BrokenSymlink,
        }
    }

    /// Create a cycle warning.
    pub fn cycle_detected(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("directory already visited: {}", path.display()),
            path,
            kind: WarningKind::CycleDetected,
        }
    }
}
