/// Top-N largest files across every category.
use crate::model::ClassifiedFile;

/// Return the `n` largest entries, largest first.
///
/// Returns an empty vec immediately when `n == 0`, which also avoids the
/// `n - 1` underflow in `select_nth_unstable_by`.
pub fn largest_files(entries: &[ClassifiedFile], n: usize) -> Vec<&ClassifiedFile> {
    if n == 0 {
        return Vec::new();
    }

    let mut refs: Vec<&ClassifiedFile> = entries.iter().collect();

    // Partial sort: O(n) select + O(k log k) sort of top-k, vs O(n log n) full sort.
    if refs.len() > n {
        refs.select_nth_unstable_by(n - 1, |a, b| b.size.cmp(&a.size));
        refs.truncate(n);
    }
    refs.sort_by(|a, b| b.size.cmp(&a.size));
    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> ClassifiedFile {
        ClassifiedFile {
            name: CompactString::new(name),
            path: PathBuf::from(name),
            size,
            category: Category::Unknown,
            mime: "application/octet-stream",
            modified: None,
        }
    }

    #[test]
    fn returns_largest_first() {
        let entries: Vec<_> = (1..=5u64).map(|i| file(&format!("f{i}"), i * 100)).collect();
        let top = largest_files(&entries, 3);
        let sizes: Vec<u64> = top.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![500, 400, 300]);
    }

    #[test]
    fn n_larger_than_input_returns_all() {
        let entries = vec![file("a", 1), file("b", 2)];
        assert_eq!(largest_files(&entries, 10).len(), 2);
    }

    /// Regression: `n == 0` must not underflow.
    #[test]
    fn zero_n_does_not_panic() {
        let entries = vec![file("a", 1)];
        assert!(largest_files(&entries, 0).is_empty());
    }
}
