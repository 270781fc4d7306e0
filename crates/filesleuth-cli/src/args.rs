/// Command-line arguments.
use crate::detail::SortOrder;
use clap::Parser;
use filesleuth_core::Category;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "filesleuth")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan.
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Show the files of one category (image, video, audio, document,
    /// spreadsheet, presentation, archive, code, font, database, ebook, unknown).
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Case-insensitive substring filter on name and path (with --category).
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Ordering of the category listing.
    #[arg(short, long, value_enum, default_value_t = SortOrder::Size)]
    pub sort: SortOrder,

    /// List the N largest files across all categories.
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Print category summaries as JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Export every classified file to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Relay a progress update every N files.
    #[arg(long, default_value_t = 10)]
    pub progress_every: u64,

    /// Enable debug-level logging on stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
