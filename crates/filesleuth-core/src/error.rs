/// Error types surfaced by the engine.
///
/// Per-file and per-directory I/O failures never appear here: they degrade
/// to a classification fallback or an empty subtree inside the scanner.
/// Only root-level failures and cancellation reach the caller.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Scan-level failure. Carries a human-readable message for the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("scan root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("cannot read scan root {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan cancelled")]
    Cancelled,
}

/// Failure while exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A category name that does not match any [`crate::model::Category`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);
