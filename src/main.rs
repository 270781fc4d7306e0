//! FileSleuth — classify every file under a directory by content and
//! extension, then summarise by category.
//!
//! Thin binary entry point. All logic lives in the `filesleuth-core`
//! and `filesleuth-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = filesleuth_cli::Args::parse();

    // Initialise structured logging on stderr so reports on stdout stay clean.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FileSleuth starting");

    filesleuth_cli::run(args)
}
