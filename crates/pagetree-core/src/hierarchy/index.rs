use std::ops::Index;

use log::trace;

use super::HierarchyRecord;

/// Indentation side table, one entry per position of a flattened list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyIndexes(Vec<usize>);

impl HierarchyIndexes {
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Index<usize> for HierarchyIndexes {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.0[position]
    }
}

/// Set hierarchy indexes for a flattened list in one forward pass.
///
/// - the first record and every visible root get 0
/// - a record sharing `parent_id` with its predecessor gets the predecessor's
///   *position*
/// - any other record is a child of its predecessor and gets the
///   predecessor's index plus one
///
/// `records` must already be in the order produced by
/// [`flatten_positions`](super::flatten_positions); any other order yields
/// meaningless indexes. The order is not checked.
pub fn annotate<P: HierarchyRecord>(records: &[P]) -> HierarchyIndexes {
    let mut indexes = Vec::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        let index = if position == 0 || record.is_visible_root() {
            0
        } else {
            let previous_position = position - 1;
            let previous = &records[previous_position];
            if record.parent_id() == previous.parent_id() {
                previous_position
            } else {
                indexes[previous_position] + 1
            }
        };

        trace!("annotate: position {} -> index {}", position, index);
        indexes.push(index);
    }

    HierarchyIndexes(indexes)
}
