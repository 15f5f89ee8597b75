use crate::model::{Page, PageId};

mod flatten;
mod index;

pub use flatten::flatten_positions;
pub use index::{annotate, HierarchyIndexes};

/// The part of a record the hierarchy operations look at
pub trait HierarchyRecord {
    fn id(&self) -> Option<PageId>;
    fn parent_id(&self) -> Option<PageId>;
    /// Whether the record is listed at the top level regardless of `parent_id`
    fn is_visible_root(&self) -> bool;
}

impl HierarchyRecord for Page {
    fn id(&self) -> Option<PageId> {
        self.id
    }

    fn parent_id(&self) -> Option<PageId> {
        self.parent_id
    }

    fn is_visible_root(&self) -> bool {
        self.visible_root
    }
}

/// Decide whether `candidate` sits directly under `parent`.
///
/// On the top-level pass only the visible-root flag counts. Otherwise visible
/// roots never match: a present parent claims the remaining candidates whose
/// `parent_id` equals its id, and a parent without an id claims nothing. With
/// no parent at all, candidates match when they have no `parent_id`.
pub fn belongs_under<P: HierarchyRecord>(
    candidate: &P,
    parent: Option<&P>,
    top_level: bool,
) -> bool {
    if top_level {
        return candidate.is_visible_root();
    }

    if candidate.is_visible_root() {
        return false;
    }

    match parent {
        Some(parent) => match (candidate.parent_id(), parent.id()) {
            (Some(parent_id), Some(id)) => parent_id == id,
            _ => false,
        },
        None => candidate.parent_id().is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_pass_uses_visible_root_flag() {
        let root = Page::new(Some(1), None);
        let lifted = Page::new(Some(2), Some(99)).with_visible_root(true);
        let child = Page::new(Some(3), Some(1));

        assert!(belongs_under(&root, None, true));
        assert!(belongs_under(&lifted, Some(&root), true));
        assert!(!belongs_under(&child, None, true));
    }

    #[test]
    fn test_child_matches_parent_id() {
        let parent = Page::new(Some(1), None);
        let child = Page::new(Some(2), Some(1));
        let other = Page::new(Some(3), Some(7));

        assert!(belongs_under(&child, Some(&parent), false));
        assert!(!belongs_under(&other, Some(&parent), false));
        assert!(!belongs_under(&parent, Some(&parent), false));
    }

    #[test]
    fn test_visible_root_is_never_claimed_by_its_parent() {
        let parent = Page::new(Some(1), None);
        let lifted = Page::new(Some(2), Some(1)).with_visible_root(true);

        assert!(!belongs_under(&lifted, Some(&parent), false));
    }

    #[test]
    fn test_parent_without_id_has_no_children() {
        let unsaved = Page::new(None, None);
        let orphan = Page::new(Some(2), None).with_visible_root(false);
        let dangling = Page::new(None, None);

        assert!(!belongs_under(&orphan, Some(&unsaved), false));
        assert!(!belongs_under(&dangling, Some(&unsaved), false));
    }

    #[test]
    fn test_absent_parent_matches_unclaimed_roots_only() {
        let claimed = Page::new(Some(1), None);
        let unclaimed = Page::new(Some(2), None).with_visible_root(false);
        let child = Page::new(Some(3), Some(1));

        assert!(!belongs_under(&claimed, None, false));
        assert!(belongs_under(&unclaimed, None, false));
        assert!(!belongs_under(&child, None, false));
    }
}
