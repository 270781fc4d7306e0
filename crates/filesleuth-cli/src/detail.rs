/// Category detail view — search and re-sort one category's file list.
use clap::ValueEnum;
use filesleuth_core::ClassifiedFile;

/// Ordering for a category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Largest first.
    Size,
    /// Alphabetical, case-insensitive.
    Name,
}

/// Keep files whose name or path contains `query` (case-insensitive).
/// An empty query keeps everything.
pub fn filter_files<'a>(files: &'a [ClassifiedFile], query: &str) -> Vec<&'a ClassifiedFile> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return files.iter().collect();
    }
    files
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&query)
                || f.path.to_string_lossy().to_lowercase().contains(&query)
        })
        .collect()
}

/// Stable re-sort of an already filtered listing.
pub fn sort_files(files: &mut [&ClassifiedFile], order: SortOrder) {
    match order {
        SortOrder::Size => files.sort_by(|a, b| b.size.cmp(&a.size)),
        SortOrder::Name => files.sort_by_cached_key(|f| f.name.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filesleuth_core::Category;
    use std::path::PathBuf;

    fn file(dir: &str, name: &str, size: u64) -> ClassifiedFile {
        ClassifiedFile {
            name: name.into(),
            path: PathBuf::from(dir).join(name),
            size,
            category: Category::Document,
            mime: "text/plain",
            modified: None,
        }
    }

    fn names(files: &[&ClassifiedFile]) -> Vec<String> {
        files.iter().map(|f| f.name.to_string()).collect()
    }

    #[test]
    fn empty_query_keeps_all() {
        let files = vec![file("/a", "x.txt", 1), file("/a", "y.txt", 2)];
        assert_eq!(filter_files(&files, "").len(), 2);
        assert_eq!(filter_files(&files, "   ").len(), 2);
    }

    #[test]
    fn query_matches_name_or_path() {
        let files = vec![
            file("/home/Taxes", "2023.pdf", 1),
            file("/home/misc", "TAX-notes.txt", 2),
            file("/home/misc", "recipes.txt", 3),
        ];
        let hits = filter_files(&files, "tax");
        assert_eq!(names(&hits), vec!["2023.pdf", "TAX-notes.txt"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let files = vec![file("/", "banana", 1), file("/", "Apple", 2), file("/", "cherry", 3)];
        let mut view = filter_files(&files, "");
        sort_files(&mut view, SortOrder::Name);
        assert_eq!(names(&view), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn sort_by_size_descending() {
        let files = vec![file("/", "a", 5), file("/", "b", 50), file("/", "c", 10)];
        let mut view = filter_files(&files, "");
        sort_files(&mut view, SortOrder::Size);
        assert_eq!(names(&view), vec!["b", "c", "a"]);
    }
}
