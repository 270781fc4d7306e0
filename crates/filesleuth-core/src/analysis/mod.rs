/// Analysis modules — post-scan aggregation and export.

pub mod grouping;
pub mod report;
pub mod top_files;

pub use grouping::{group_by_category, CategorySummary};
pub use report::{summaries_to_json, write_csv};
pub use top_files::largest_files;
