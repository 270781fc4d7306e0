/// Per-file classifier — content first, then extension, then unknown.
///
/// Classification never fails: an unreadable file simply has no content
/// signature and falls through to the extension table.
use super::{categorise_extension, extension_of, match_signature, mime_for_extension, FALLBACK_MIME};
use crate::model::{Category, ClassifiedFile};
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use std::fs::{self, File, Metadata};
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Number of leading bytes read for signature matching.
pub const PREFIX_LEN: usize = 12;

/// Read up to [`PREFIX_LEN`] leading bytes of `path`.
///
/// Any I/O failure yields an empty buffer, which matches no signature.
pub fn read_prefix(path: &Path) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PREFIX_LEN);
    let result = File::open(path).and_then(|f| f.take(PREFIX_LEN as u64).read_to_end(&mut buf));
    match result {
        Ok(_) => buf,
        Err(err) => {
            debug!("No content prefix for {}: {err}", path.display());
            Vec::new()
        }
    }
}

/// Classify a regular file whose metadata the caller already holds.
pub fn classify_file(path: &Path, metadata: &Metadata) -> ClassifiedFile {
    let ext = extension_of(path);
    let prefix = read_prefix(path);

    let (category, mime) = match match_signature(&prefix, &ext) {
        Some(hit) => (hit.category, hit.mime),
        None => match categorise_extension(&ext) {
            Some(cat) => (cat, mime_for_extension(&ext).unwrap_or(FALLBACK_MIME)),
            None => (Category::Unknown, FALLBACK_MIME),
        },
    };

    let name = path
        .file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_default();

    ClassifiedFile {
        name,
        path: path.to_path_buf(),
        size: metadata.len(),
        category,
        mime,
        modified: metadata.modified().ok().map(DateTime::<Utc>::from),
    }
}

/// Stat and classify `path` in one step.
///
/// Only the metadata lookup can fail; classification itself cannot.
pub fn classify_path(path: &Path) -> io::Result<ClassifiedFile> {
    let metadata = fs::metadata(path)?;
    Ok(classify_file(path, &metadata))
}
