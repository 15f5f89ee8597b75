//! Pagetree Core Library
//!
//! Orders a flat collection of pages into a hierarchical list, computes each
//! row's indentation and removes whole subtrees from the ordered list.
//! No IO in the hierarchy operations; loading lives in `source`.
//!

mod config;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod page_list;
pub mod render;
pub mod source;
pub mod vfs;

pub use config::{DisplayConfig, LoadingConfig, LogLevel, LoggingConfig, PageTreeConfig};
pub use error::PageTreeError;
pub use hierarchy::{annotate, belongs_under, flatten_positions, HierarchyIndexes, HierarchyRecord};
pub use model::{Page, PageId, PageRow, PageStatus};
pub use page_list::PageList;
pub use render::render_rows;
pub use source::load_pages;
