/// Text rendering of scan results.
///
/// Every function writes to a caller-supplied `Write` so output can be
/// captured in tests.
use filesleuth_core::model::{format_count, format_size};
use filesleuth_core::{CategorySummary, ClassifiedFile};
use std::io::{self, Write};
use std::time::Duration;

/// Width of the label column; fits the longest label ("Code / Scripts").
const LABEL_WIDTH: usize = 16;

/// One line per category: glyph, label, file count, total size.
pub fn render_summaries<W: Write>(
    out: &mut W,
    summaries: &[CategorySummary],
    total_files: usize,
    duration: Option<Duration>,
) -> io::Result<()> {
    for summary in summaries {
        let count = summary.file_count() as u64;
        writeln!(
            out,
            "{}  {:<width$} {:>9} {:<5} {:>12}",
            summary.category.glyph(),
            summary.category.label(),
            format_count(count),
            if count == 1 { "file" } else { "files" },
            format_size(summary.total_size),
            width = LABEL_WIDTH,
        )?;
    }

    let total_size: u64 = summaries.iter().map(|s| s.total_size).sum();
    write!(
        out,
        "\n{} files, {} in {} categories",
        format_count(total_files as u64),
        format_size(total_size),
        summaries.len()
    )?;
    match duration {
        Some(d) => writeln!(out, " ({:.2}s)", d.as_secs_f64()),
        None => writeln!(out),
    }
}

/// Detail listing: size, modification date, and path per file.
pub fn render_files<W: Write>(out: &mut W, files: &[&ClassifiedFile]) -> io::Result<()> {
    if files.is_empty() {
        return writeln!(out, "(no files)");
    }
    for file in files {
        let modified = file
            .modified
            .map(|m| {
                m.with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|| "-".to_owned());
        writeln!(
            out,
            "{:>12}  {:<16}  {:<40}  {}",
            format_size(file.size),
            modified,
            file.mime,
            file.path.display()
        )?;
    }
    Ok(())
}

/// Single-line progress indicator, overwritten in place.
pub fn render_progress<W: Write>(out: &mut W, count: u64, current_file: &str) -> io::Result<()> {
    write!(
        out,
        "\r\x1b[2KScanning... {} files  {}",
        format_count(count),
        current_file
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filesleuth_core::{group_by_category, Category};
    use std::path::PathBuf;

    fn file(name: &str, size: u64, category: Category) -> ClassifiedFile {
        ClassifiedFile {
            name: name.into(),
            path: PathBuf::from("/data").join(name),
            size,
            category,
            mime: "application/octet-stream",
            modified: None,
        }
    }

    #[test]
    fn summaries_show_label_count_and_size() {
        let summaries = group_by_category(vec![
            file("a.png", 1_024, Category::Image),
            file("b.png", 1_024, Category::Image),
            file("c.rs", 10, Category::Code),
        ]);
        let mut out = Vec::new();
        render_summaries(&mut out, &summaries, 3, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Images"));
        assert!(lines[0].contains("2 files"));
        assert!(lines[0].contains("2.00 KB"));
        assert!(lines[1].contains("Code / Scripts"));
        assert!(lines[1].contains("1 file "));
        assert!(lines[1].contains("10 B"));
        assert_eq!(lines.last().copied(), Some("3 files, 2.01 KB in 2 categories"));
    }

    #[test]
    fn empty_listing_says_so() {
        let mut out = Vec::new();
        render_files(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(no files)\n");
    }

    #[test]
    fn listing_shows_path_and_size() {
        let f = file("movie.mkv", 1_048_576, Category::Video);
        let mut out = Vec::new();
        render_files(&mut out, &[&f]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1.00 MB"));
        assert!(text.contains("/data/movie.mkv"));
    }
}
