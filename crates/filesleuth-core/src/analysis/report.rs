/// Report export — flat CSV of classified files, JSON of category summaries.
use super::CategorySummary;
use crate::error::ReportError;
use crate::model::ClassifiedFile;
use std::io::Write;

const CSV_HEADER: [&str; 6] = ["name", "path", "size", "category", "mime", "modified"];

/// Write one CSV row per classified file, in the given order.
pub fn write_csv<W: Write>(entries: &[ClassifiedFile], writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for file in entries {
        let size = file.size.to_string();
        let path = file.path.to_string_lossy();
        let modified = file
            .modified
            .map(|m| m.to_rfc3339())
            .unwrap_or_default();
        wtr.write_record([
            file.name.as_str(),
            &*path,
            size.as_str(),
            file.category.name(),
            file.mime,
            modified.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render summaries as a pretty-printed JSON array.
pub fn summaries_to_json(summaries: &[CategorySummary]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::group_by_category;
    use crate::model::Category;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn file(name: &str, size: u64, category: Category, mime: &'static str) -> ClassifiedFile {
        ClassifiedFile {
            name: CompactString::new(name),
            path: PathBuf::from("/data").join(name),
            size,
            category,
            mime,
            modified: None,
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_file() {
        let entries = vec![
            file("a.png", 10, Category::Image, "image/png"),
            file("b, with comma.xyz", 3, Category::Unknown, "application/octet-stream"),
        ];
        let mut out = Vec::new();
        write_csv(&entries, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,path,size,category,mime,modified");
        assert_eq!(lines[1], "a.png,/data/a.png,10,image,image/png,");
        assert!(lines[2].starts_with("\"b, with comma.xyz\""), "must be quoted");
    }

    #[test]
    fn json_lists_summaries_with_lowercase_categories() {
        let summaries = group_by_category(vec![
            file("a.png", 10, Category::Image, "image/png"),
            file("b.png", 20, Category::Image, "image/png"),
        ]);
        let json = summaries_to_json(&summaries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["category"], "image");
        assert_eq!(value[0]["total_size"], 30);
        assert_eq!(value[0]["files"][0]["name"], "b.png");
        assert_eq!(value[0]["files"][0]["modified"], serde_json::Value::Null);
    }
}
