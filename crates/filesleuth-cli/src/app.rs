/// Frontend driver — runs one scan to completion, then prints the
/// requested views.
use crate::args::Args;
use crate::detail::{filter_files, sort_files};
use crate::render::{render_files, render_progress, render_summaries};
use crate::state::{AppState, ScanState};
use anyhow::{bail, Context, Result};
use filesleuth_core::analysis::{largest_files, summaries_to_json, write_csv};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Duration;
use tracing::info;

/// Interval between drains of the progress channel.
const TICK: Duration = Duration::from_millis(50);

pub fn run(args: Args) -> Result<()> {
    let mut state = AppState::new(args.progress_every);
    state.start_scan(args.root.clone());

    // stderr is locked per write only: the scan thread logs to it too.
    while state.is_scanning() {
        if state.process_scan_messages() {
            if let ScanState::Scanning {
                count,
                current_file,
            } = &state.state
            {
                render_progress(&mut io::stderr().lock(), *count, current_file)?;
            }
        }
        std::thread::sleep(TICK);
    }
    write!(io::stderr(), "\r\x1b[2K")?;

    let (categories, total_files) = match &state.state {
        ScanState::Done {
            categories,
            total_files,
        } => (categories, *total_files),
        ScanState::Error { message } => bail!("{message}"),
        ScanState::Idle | ScanState::Scanning { .. } => bail!("scan ended without a result"),
    };

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("cannot create CSV file {}", path.display()))?;
        write_csv(&state.files, BufWriter::new(file))
            .with_context(|| format!("cannot write CSV file {}", path.display()))?;
        info!("Exported {} files to {}", state.files.len(), path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let json = summaries_to_json(categories)?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    render_summaries(&mut out, categories, total_files, state.scan_duration)?;

    if let Some(category) = args.category {
        writeln!(out, "\n{} {}", category.glyph(), category.label())?;
        let files = categories
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.files.as_slice())
            .unwrap_or_default();
        let mut view = filter_files(files, args.filter.as_deref().unwrap_or(""));
        sort_files(&mut view, args.sort);
        render_files(&mut out, &view)?;
    }

    if let Some(n) = args.top {
        writeln!(out, "\nLargest {n} files")?;
        render_files(&mut out, &largest_files(&state.files, n))?;
    }

    Ok(())
}
