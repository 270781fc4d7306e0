/// Scan state management.
///
/// The scan thread communicates via a channel; state updates happen in
/// `process_scan_messages()`, which the frontend calls once per tick.
use crossbeam_channel::TryRecvError;
use filesleuth_core::scanner::{ScanHandle, ScanProgress};
use filesleuth_core::{group_by_category, CategorySummary, ClassifiedFile};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum number of scan-progress messages drained from the channel per tick.
///
/// Keeps one tick short even when a backlog has built up.
pub const MAX_MESSAGES_PER_TICK: usize = 300;

/// The current phase of a scan as seen by the frontend.
#[derive(Debug, Clone)]
pub enum ScanState {
    /// No scan started yet.
    Idle,
    /// Scan running; `count` is the last relayed file count.
    Scanning { count: u64, current_file: String },
    /// Scan finished; summaries are ready.
    Done {
        categories: Vec<CategorySummary>,
        total_files: usize,
    },
    /// Scan could not run, or was cancelled.
    Error { message: String },
}

/// All frontend state for one scan.
pub struct AppState {
    pub state: ScanState,
    pub scan_handle: Option<ScanHandle>,
    /// Flat scan result in visitation order (kept for export and top-N).
    pub files: Vec<ClassifiedFile>,
    pub scan_duration: Option<Duration>,
    progress_every: u64,
}

impl AppState {
    /// `progress_every` is forwarded to the scan job's relay throttle.
    pub fn new(progress_every: u64) -> Self {
        Self {
            state: ScanState::Idle,
            scan_handle: None,
            files: Vec::new(),
            scan_duration: None,
            progress_every,
        }
    }

    /// Start a scan of `path`, replacing any previous result.
    pub fn start_scan(&mut self, path: PathBuf) {
        self.cancel_scan();
        self.state = ScanState::Scanning {
            count: 0,
            current_file: "Starting...".to_owned(),
        };
        self.files.clear();
        self.scan_duration = None;
        self.scan_handle = Some(filesleuth_core::scanner::start_scan(
            path,
            self.progress_every,
        ));
    }

    /// Cancel any running scan.
    pub fn cancel_scan(&mut self) {
        if let Some(ref handle) = self.scan_handle {
            handle.cancel();
        }
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning { .. })
    }

    /// Process pending scan progress messages.
    ///
    /// Returns `true` if anything changed.
    pub fn process_scan_messages(&mut self) -> bool {
        let handle = match &self.scan_handle {
            Some(h) => h,
            None => return false,
        };

        let mut changed = false;
        let mut finished = false;
        let mut messages_this_tick = 0usize;
        while messages_this_tick < MAX_MESSAGES_PER_TICK {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // The scan thread exited without a terminal message.
                    warn!("Scan channel closed before the scan finished");
                    self.state = ScanState::Error {
                        message: "Scan ended unexpectedly".to_owned(),
                    };
                    changed = true;
                    finished = true;
                    break;
                }
            };
            messages_this_tick += 1;
            changed = true;
            match msg {
                ScanProgress::Update {
                    files_found,
                    current_name,
                } => {
                    self.state = ScanState::Scanning {
                        count: files_found,
                        current_file: current_name,
                    };
                }
                ScanProgress::Complete { files, duration } => {
                    debug!("Scan complete: {} files in {duration:?}", files.len());
                    let total_files = files.len();
                    let categories = group_by_category(files.clone());
                    self.files = files;
                    self.scan_duration = Some(duration);
                    self.state = ScanState::Done {
                        categories,
                        total_files,
                    };
                    finished = true;
                    break;
                }
                ScanProgress::Failed { message } => {
                    self.state = ScanState::Error { message };
                    finished = true;
                    break;
                }
                ScanProgress::Cancelled => {
                    self.state = ScanState::Error {
                        message: "Scan cancelled".to_owned(),
                    };
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.scan_handle = None;
        }
        changed
    }
}
