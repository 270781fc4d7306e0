/// Scanner module — walks a directory tree and classifies every file.
///
/// [`scan`] is synchronous and blocking: it returns only after the whole
/// tree has been visited. Callers that need a responsive foreground should
/// use [`job::start_scan`], which runs the same walk on a background thread
/// and relays progress over a channel.
pub mod job;
pub mod progress;
pub mod walk;

pub use job::{start_scan, ScanHandle, PROGRESS_CHANNEL_CAPACITY};
pub use progress::ScanProgress;
pub use walk::{is_skipped_dir, scan, scan_with_cancel, SKIPPED_DIR_NAMES};
