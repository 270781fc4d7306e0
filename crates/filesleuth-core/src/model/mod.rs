/// Data model for classified files.
///
/// Re-exports the category enumeration, the per-file scan entry, and the
/// size formatting helpers used by every frontend.
pub mod category;
pub mod classified_file;
pub mod size;

pub use category::Category;
pub use classified_file::ClassifiedFile;
pub use size::{format_count, format_size};
