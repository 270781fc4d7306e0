/// Background scan job — runs [`super::scan_with_cancel`] on its own thread
/// and relays throttled progress to the frontend.
use super::progress::ScanProgress;
use super::walk::scan_with_cancel;
use crate::error::ScanError;
use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::info;

/// Maximum number of progress messages that may queue up in the channel.
///
/// If the frontend falls behind, the scanner blocks on `send` rather than
/// consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Wrap a progress channel fed by something other than [`start_scan`].
    /// The returned handle owns no thread; `cancel` only sets the flag.
    pub fn from_receiver(progress_rx: Receiver<ScanProgress>) -> Self {
        Self {
            progress_rx,
            cancel_flag: Arc::new(AtomicBool::new(false)),
            _thread: None,
        }
    }

    /// Request the scan to stop before the next file is classified.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Start a new scan on a background thread.
///
/// Only every `progress_every`-th file produces an `Update` message
/// (`0` is treated as `1`). The final message is always terminal.
pub fn start_scan(root_path: PathBuf, progress_every: u64) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();
    let every = progress_every.max(1);

    let thread = thread::Builder::new()
        .name("filesleuth-scanner".into())
        .spawn(move || run_scan(root_path, every, progress_tx, cancel_clone))
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    }
}

fn run_scan(
    root_path: PathBuf,
    every: u64,
    progress_tx: Sender<ScanProgress>,
    cancel_flag: Arc<AtomicBool>,
) {
    let start = Instant::now();

    let result = scan_with_cancel(
        &root_path,
        |count, name| {
            if count % every == 0 {
                let _ = progress_tx.send(ScanProgress::Update {
                    files_found: count,
                    current_name: name.to_owned(),
                });
            }
        },
        || cancel_flag.load(Ordering::Relaxed),
    );

    let terminal = match result {
        Ok(files) => ScanProgress::Complete {
            files,
            duration: start.elapsed(),
        },
        Err(ScanError::Cancelled) => ScanProgress::Cancelled,
        Err(err) => {
            info!("Scan of {} failed: {err}", root_path.display());
            ScanProgress::Failed {
                message: err.to_string(),
            }
        }
    };
    let _ = progress_tx.send(terminal);
}
