/// A single classified file produced by a scan.
///
/// Entries are created once per regular, non-empty file and never mutated
/// afterwards. A second scan produces an entirely new set.
use super::Category;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    /// Bare file name (no directory component).
    pub name: CompactString,

    /// Absolute path of the file.
    pub path: PathBuf,

    /// Logical file size in bytes.
    pub size: u64,

    /// Resolved semantic category.
    pub category: Category,

    /// Resolved MIME type. Always populated; unknown content falls back
    /// to `application/octet-stream`.
    pub mime: &'static str,

    /// Last-modified timestamp, if the platform reported one.
    pub modified: Option<DateTime<Utc>>,
}
