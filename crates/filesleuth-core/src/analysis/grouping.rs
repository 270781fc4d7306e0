/// Category grouping — partitions classified files into per-category
/// summaries.
///
/// Every input entry lands in exactly one summary. Categories with no
/// entries are omitted. Both sorts are stable, so ties keep input order
/// (files) and first-encountered order (categories).
use crate::model::{Category, ClassifiedFile};
use serde::Serialize;

/// All files of one category, largest first.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub files: Vec<ClassifiedFile>,
    pub total_size: u64,
}

impl CategorySummary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Group `entries` by category.
///
/// Summaries are ordered by descending file count; files within a summary
/// by descending size.
pub fn group_by_category(entries: Vec<ClassifiedFile>) -> Vec<CategorySummary> {
    // Slot per category, holding the summary's position in `groups` so
    // that `groups` keeps first-encountered order.
    let mut slots: [Option<usize>; Category::ALL.len()] = [None; Category::ALL.len()];
    let mut groups: Vec<CategorySummary> = Vec::new();

    for file in entries {
        let slot = &mut slots[file.category.index()];
        let idx = *slot.get_or_insert_with(|| {
            groups.push(CategorySummary {
                category: file.category,
                files: Vec::new(),
                total_size: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[idx];
        group.total_size += file.size;
        group.files.push(file);
    }

    for group in &mut groups {
        group.files.sort_by(|a, b| b.size.cmp(&a.size));
    }
    groups.sort_by(|a, b| b.files.len().cmp(&a.files.len()));
    groups
}
