//! Table options - column layout, visibility, ordering and sorting.
//!
//! The options editor lets the user hide columns and drag them into a new
//! order; headers switch the sort key. Pinned (non-modifiable) columns such as
//! checkboxes, drag handles and action buttons stay where they are.
//!
//! # Example
//!
//! ```
//! use panels::table::{TableName, SortDirection};
//!
//! let mut options = TableName::QueueTable.defaults();
//! options.set_sort("title", None);
//! options.set_sort("title", None);
//! assert_eq!(options.sort_direction, SortDirection::Descending);
//!
//! assert!(options.move_column(2, 4));
//! assert_eq!(options.columns[4].name, "status");
//! ```

mod column;
mod options;
mod sort;

pub use column::Column;
pub use options::{TableName, TableOptions, TableOptionsState};
pub use sort::{SortDirection, SortValue, Sortable, compare_values, sort_rows, sorted_rows};
