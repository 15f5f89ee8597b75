use std::collections::HashSet;
use std::ops::{Deref, Range};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::hierarchy::{annotate, flatten_positions, HierarchyIndexes, HierarchyRecord};
use crate::model::{Page, PageId, PageRow};


/// Ordered list of records as shown in a page list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageList<P> {
    records: Vec<P>,
}

impl<P> PageList<P> {
    pub fn new(records: Vec<P>) -> Self {
        Self { records }
    }

    /// Always 0
    pub fn first_index(&self) -> usize {
        0
    }

    /// 0 for an empty list, otherwise `len - 1`
    pub fn last_index(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// Map where the closure also sees the whole list
    pub fn map_with_list<T, F>(&self, mut transform: F) -> Vec<T>
    where
        F: FnMut(&P, &[P]) -> T,
    {
        let mut result = Vec::with_capacity(self.records.len());
        for record in &self.records {
            result.push(transform(record, &self.records));
        }
        result
    }

    pub fn into_inner(self) -> Vec<P> {
        self.records
    }
}

impl<P: HierarchyRecord> PageList<P> {
    /// Whether a record with `id` is in the list; an absent id never is
    pub fn contains_page(&self, id: Option<PageId>) -> bool {
        let Some(id) = id else {
            return false;
        };
        self.records.iter().any(|record| record.id() == Some(id))
    }

    /// Reorder into hierarchical order, dropping unreachable records
    pub fn flatten(self) -> Self {
        let order = flatten_positions(&self.records, None, true);

        let mut slots: Vec<Option<P>> = self.records.into_iter().map(Some).collect();
        let records = order
            .into_iter()
            .filter_map(|position| slots[position].take())
            .collect();

        Self { records }
    }

    /// Hierarchy indexes for this list; it must already be flattened
    pub fn annotate(&self) -> HierarchyIndexes {
        annotate(&self.records)
    }

    /// Positions covered by the record at `at` and its descendants
    ///
    /// The block ends right before the next visible root. Returns `None` when
    /// `at` is out of range.
    pub fn subtree_range(&self, at: usize) -> Option<Range<usize>> {
        if self.records.is_empty() || at > self.last_index() {
            return None;
        }

        if at == self.last_index() {
            return Some(at..at + 1);
        }

        let end = self.records[at + 1..]
            .iter()
            .position(|record| record.is_visible_root())
            .map(|offset| at + 1 + offset)
            .unwrap_or(self.records.len());

        Some(at..end)
    }

    /// Remove the record at `at` together with its subtree.
    ///
    /// Out-of-range positions leave the list untouched. Returns the removed
    /// records in list order.
    pub fn remove_subtree(&mut self, at: usize) -> Vec<P> {
        let Some(range) = self.subtree_range(at) else {
            debug!(
                "remove_subtree: position {} outside 0..={} ({} records)",
                at,
                self.last_index(),
                self.records.len()
            );
            return Vec::new();
        };

        debug!("remove_subtree: removing positions {:?}", range);
        self.records.drain(range).collect()
    }

    /// Pair every record with its hierarchy index
    pub fn indexed<'a>(
        &'a self,
        indexes: &'a HierarchyIndexes,
    ) -> impl Iterator<Item = (&'a P, usize)> + 'a {
        self.records
            .iter()
            .enumerate()
            .map(move |(position, record)| (record, indexes.get(position).unwrap_or(0)))
    }
}

impl PageList<Page> {
    /// Recompute `visible_root` for every page from the list contents.
    ///
    /// A page is a visible root when it has no parent or when its parent is
    /// not part of this list.
    pub fn resolve_visible_roots(&mut self) {
        let present: HashSet<PageId> = self.records.iter().filter_map(|page| page.id).collect();

        for page in &mut self.records {
            page.visible_root = match page.parent_id {
                None => true,
                Some(parent_id) => !present.contains(&parent_id),
            };
        }
    }

    /// Presentation rows for a flattened and annotated list
    pub fn rows(&self, indexes: &HierarchyIndexes) -> Vec<PageRow> {
        self.indexed(indexes)
            .map(|(page, hierarchy_index)| PageRow {
                id: page.id,
                parent_id: page.parent_id,
                title: page.title.clone(),
                hierarchy_index,
            })
            .collect()
    }
}

impl<P> Default for PageList<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P> Deref for PageList<P> {
    type Target = [P];

    fn deref(&self) -> &[P] {
        &self.records
    }
}

impl<P> From<Vec<P>> for PageList<P> {
    fn from(records: Vec<P>) -> Self {
        Self::new(records)
    }
}

impl<P> FromIterator<P> for PageList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<P> IntoIterator for PageList<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
