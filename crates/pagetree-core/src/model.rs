use serde::{Deserialize, Serialize};

/// Remote identity of a page
pub type PageId = i64;

/// Publishing state of a page, as reported by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Scheduled,
    Trash,
}

/// Page record as loaded from a page file
///
/// Only `id`, `parent_id` and `visible_root` take part in ordering. When a
/// page file leaves `visible_root` out, it defaults to "has no parent", the
/// same as [`Page::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PageRecord")]
pub struct Page {
    /// Absent until the page has been persisted
    pub id: Option<PageId>,
    pub parent_id: Option<PageId>,
    pub title: Option<String>,
    pub status: PageStatus,
    /// Show this page at the top level even if it declares a parent
    pub visible_root: bool,
}

/// On-disk shape of a page, every field optional
#[derive(Deserialize)]
struct PageRecord {
    #[serde(default)]
    id: Option<PageId>,
    #[serde(default)]
    parent_id: Option<PageId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    status: PageStatus,
    #[serde(default)]
    visible_root: Option<bool>,
}

impl From<PageRecord> for Page {
    fn from(record: PageRecord) -> Self {
        Self {
            id: record.id,
            parent_id: record.parent_id,
            title: record.title,
            status: record.status,
            visible_root: record
                .visible_root
                .unwrap_or(record.parent_id.is_none()),
        }
    }
}

impl Page {
    /// Untitled page; a page without a parent starts as a visible root
    pub fn new(id: Option<PageId>, parent_id: Option<PageId>) -> Self {
        Self {
            id,
            parent_id,
            title: None,
            status: PageStatus::default(),
            visible_root: parent_id.is_none(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_visible_root(mut self, visible_root: bool) -> Self {
        self.visible_root = visible_root;
        self
    }
}

/// One line of the presented list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRow {
    pub id: Option<PageId>,
    pub parent_id: Option<PageId>,
    pub title: Option<String>,
    pub hierarchy_index: usize,
}
