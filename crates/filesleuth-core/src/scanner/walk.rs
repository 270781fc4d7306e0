/// Depth-first directory walk using `jwalk` in serial mode.
///
/// `jwalk` yields entries in depth-first pre-order. With
/// `Parallelism::Serial` and sorting disabled, directory children arrive in
/// whatever order the OS listing returns them, and files are classified
/// strictly in that visitation order.
///
/// Skipped directories are pruned in `process_read_dir`, before `jwalk`
/// ever descends into them, so a skipped subtree costs one `readdir` entry.
use crate::detect::classify_file;
use crate::error::ScanError;
use crate::model::ClassifiedFile;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Directory names (compared lowercase) that are never traversed.
///
/// Pseudo-filesystem and system mount points on the target platform.
pub const SKIPPED_DIR_NAMES: [&str; 7] = ["proc", "sys", "dev", "acct", "config", "d", "vendor"];

/// `true` if a directory with this name must not be traversed: hidden
/// (leading `.`) or listed in [`SKIPPED_DIR_NAMES`].
pub fn is_skipped_dir(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    let lower = name.to_lowercase();
    SKIPPED_DIR_NAMES.contains(&lower.as_str())
}

/// Scan `root` and classify every regular, non-empty file beneath it.
///
/// `on_progress(count, name)` is invoked once per classified file with the
/// 1-based running count and the file's bare name.
pub fn scan(
    root: &Path,
    on_progress: impl FnMut(u64, &str),
) -> Result<Vec<ClassifiedFile>, ScanError> {
    scan_with_cancel(root, on_progress, || false)
}

/// Like [`scan`], but tests `should_stop` once per visited file and
/// returns [`ScanError::Cancelled`] as soon as it reports `true`.
pub fn scan_with_cancel(
    root: &Path,
    mut on_progress: impl FnMut(u64, &str),
    mut should_stop: impl FnMut() -> bool,
) -> Result<Vec<ClassifiedFile>, ScanError> {
    let start = Instant::now();
    let root = open_root(root)?;
    info!("Starting scan of {}", root.display());

    let walker = jwalk::WalkDir::new(&root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(|depth, _path, _read_dir_state, children| {
            // `None` is the read that yields the root itself; the skip
            // policy applies to its descendants only.
            if depth.is_none() {
                return;
            }
            children.retain(|entry_result| match entry_result {
                Ok(entry) => {
                    !(entry.file_type().is_dir() && is_skipped_dir(entry.file_name()))
                }
                Err(_) => true,
            });
        });

    let mut files: Vec<ClassifiedFile> = Vec::new();
    let mut count: u64 = 0;
    let mut unreadable: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically access-denied on a directory listing: the
                // subtree is treated as empty.
                unreadable += 1;
                debug!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        // The root itself is yielded first at depth 0. Symlinks are never
        // descended into, but a link to a regular file is classified.
        let file_type = entry.file_type();
        if entry.depth == 0 || !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }

        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                unreadable += 1;
                debug!("Skipping {}: {err}", path.display());
                continue;
            }
        };
        if !metadata.is_file() || metadata.len() == 0 {
            continue;
        }

        if should_stop() {
            info!("Scan of {} cancelled after {count} files", root.display());
            return Err(ScanError::Cancelled);
        }

        count += 1;
        on_progress(count, &entry.file_name().to_string_lossy());
        files.push(classify_file(&path, &metadata));
    }

    info!(
        "Scan of {} complete: {} files classified, {} unreadable entries, in {:?}",
        root.display(),
        files.len(),
        unreadable,
        start.elapsed()
    );
    Ok(files)
}

/// Validate the scan root and resolve it to an absolute path.
fn open_root(root: &Path) -> Result<PathBuf, ScanError> {
    let unreadable = |source: io::Error| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ScanError::RootNotFound(root.to_path_buf())
        } else {
            unreadable(err)
        }
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::RootNotDirectory(root.to_path_buf()));
    }

    // The root is the one listing whose failure is reported, not swallowed.
    fs::read_dir(root).map_err(unreadable)?;
    fs::canonicalize(root).map_err(unreadable)
}
