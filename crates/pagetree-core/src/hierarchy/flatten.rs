use log::{debug, trace};

use super::{belongs_under, HierarchyRecord};

/// DFS sort: positions of `records` in hierarchical (pre-order) order
///
/// Starts from the records that belong under `parent` and, for each of them,
/// recurses into its children. Selection keeps input order. Records whose
/// ancestor chain never reaches a visible root are left out, and every input
/// position is emitted at most once, so cycles and duplicate ids terminate.
pub fn flatten_positions<P: HierarchyRecord>(
    records: &[P],
    parent: Option<&P>,
    top_level: bool,
) -> Vec<usize> {
    let mut emitted = vec![false; records.len()];
    let mut order = Vec::with_capacity(records.len());
    visit(records, parent, top_level, &mut emitted, &mut order);

    let omitted = records.len() - order.len();
    if omitted > 0 {
        debug!(
            "flatten omitted {} of {} records without a visible ancestor",
            omitted,
            records.len()
        );
    }

    order
}

fn visit<P: HierarchyRecord>(
    records: &[P],
    parent: Option<&P>,
    top_level: bool,
    emitted: &mut [bool],
    order: &mut Vec<usize>,
) {
    let selected: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(position, record)| {
            !emitted[*position] && belongs_under(*record, parent, top_level)
        })
        .map(|(position, _)| position)
        .collect();

    for position in selected {
        // an earlier sibling's subtree may have claimed it already
        if emitted[position] {
            continue;
        }
        emitted[position] = true;
        order.push(position);

        let record = &records[position];
        trace!(
            "flatten: position {} (id {:?}, parent {:?})",
            position,
            record.id(),
            record.parent_id()
        );
        visit(records, Some(record), false, emitted, order);
    }
}
