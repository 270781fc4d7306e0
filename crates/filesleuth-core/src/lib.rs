/// FileSleuth Core — content-first file classification and category summaries.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Categories, classified file entries, and size formatting.
/// - [`detect`] — Magic-byte signatures, extension fallback, and the per-file classifier.
/// - [`scanner`] — Depth-first directory walk with progress reporting.
/// - [`analysis`] — Post-scan grouping, largest files, and report export.
/// - [`error`] — Error types surfaced to callers.
pub mod analysis;
pub mod detect;
pub mod error;
pub mod model;
pub mod scanner;

pub use analysis::{group_by_category, CategorySummary};
pub use error::ScanError;
pub use model::{Category, ClassifiedFile};
pub use scanner::{scan, scan_with_cancel};
