/// Scan progress reporting — messages sent from the scan thread to the
/// frontend via a crossbeam channel.

use crate::model::ClassifiedFile;
use std::time::Duration;

/// Progress updates sent from the scan thread to the frontend.
///
/// Exactly one terminal message (`Complete`, `Failed` or `Cancelled`)
/// ends every scan.
#[derive(Debug)]
pub enum ScanProgress {
    /// Throttled update with the running count and the current file name.
    Update {
        files_found: u64,
        current_name: String,
    },
    /// Scanning completed; carries the full classified result.
    Complete {
        files: Vec<ClassifiedFile>,
        duration: Duration,
    },
    /// The scan root could not be scanned.
    Failed { message: String },
    /// Scan was cancelled by the user.
    Cancelled,
}

impl ScanProgress {
    /// `true` for the message that ends a scan.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Update { .. })
    }
}
