use std::collections::{HashMap, HashSet};

use pagetree_core::{flatten_positions, Page, PageList};
use proptest::prelude::*;

fn arb_page() -> impl Strategy<Value = Page> {
    (
        proptest::option::weighted(0.9, 0i64..16),
        proptest::option::weighted(0.7, 0i64..16),
        any::<bool>(),
    )
        .prop_map(|(id, parent_id, visible_root)| {
            Page::new(id, parent_id).with_visible_root(visible_root)
        })
}

fn arb_pages() -> impl Strategy<Value = Vec<Page>> {
    prop::collection::vec(arb_page(), 0..24)
}

/// Pages with distinct ids `0..len`, so every parent link is unambiguous
fn arb_unique_pages() -> impl Strategy<Value = Vec<Page>> {
    prop::collection::vec(
        (proptest::option::weighted(0.8, 0i64..24), any::<bool>()),
        0..24,
    )
    .prop_map(|links| {
        links
            .into_iter()
            .enumerate()
            .map(|(id, (parent_id, visible_root))| {
                Page::new(Some(id as i64), parent_id).with_visible_root(visible_root)
            })
            .collect()
    })
}

/// Whether the record at `position` descends from the record at `ancestor`
fn descends_from(
    list: &[Page],
    positions: &HashMap<i64, usize>,
    mut position: usize,
    ancestor: usize,
) -> bool {
    loop {
        if position == ancestor {
            return true;
        }
        let page = &list[position];
        if page.visible_root {
            return false;
        }
        match page.parent_id.and_then(|id| positions.get(&id)) {
            Some(&parent) if parent < position => position = parent,
            _ => return false,
        }
    }
}

proptest! {
    #[test]
    fn flatten_emits_each_input_at_most_once(pages in arb_pages()) {
        let order = flatten_positions(&pages, None, true);

        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert!(order.iter().all(|&p| p < pages.len()));
    }

    #[test]
    fn flatten_keeps_every_visible_root(pages in arb_pages()) {
        let order: HashSet<usize> = flatten_positions(&pages, None, true).into_iter().collect();

        for (position, page) in pages.iter().enumerate() {
            if page.visible_root {
                prop_assert!(order.contains(&position));
            }
        }
    }

    #[test]
    fn flattened_children_follow_a_parent(pages in arb_pages()) {
        let list = PageList::new(pages).flatten();

        for (position, page) in list.iter().enumerate() {
            if page.visible_root {
                continue;
            }
            let parent_before = list[..position]
                .iter()
                .any(|other| other.id.is_some() && other.id == page.parent_id);
            prop_assert!(parent_before, "no parent before position {}", position);
        }
    }

    #[test]
    fn flattened_subtrees_are_contiguous(pages in arb_unique_pages()) {
        let list = PageList::new(pages).flatten();
        let positions: HashMap<i64, usize> = list
            .iter()
            .enumerate()
            .filter_map(|(position, page)| page.id.map(|id| (id, position)))
            .collect();

        for (position, page) in list.iter().enumerate() {
            if page.visible_root {
                continue;
            }
            let parent = page.parent_id.and_then(|id| positions.get(&id).copied());
            prop_assert!(
                matches!(parent, Some(q) if q < position),
                "parent of position {} is not listed before it",
                position
            );

            let parent = parent.unwrap_or_default();
            for between in parent + 1..position {
                prop_assert!(
                    descends_from(&list, &positions, between, parent),
                    "position {} interrupts the subtree of position {}",
                    between,
                    parent
                );
            }
        }
    }

    #[test]
    fn annotate_is_idempotent(pages in arb_pages()) {
        let list = PageList::new(pages).flatten();
        let first = list.annotate();
        let second = list.annotate();

        prop_assert_eq!(first.len(), list.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn remove_at_last_index_drops_only_the_last(pages in arb_pages()) {
        prop_assume!(!pages.is_empty());
        let mut list = PageList::new(pages.clone());
        list.remove_subtree(list.last_index());

        prop_assert_eq!(list.len(), pages.len() - 1);
        prop_assert_eq!(&list[..], &pages[..pages.len() - 1]);
    }

    #[test]
    fn remove_out_of_range_is_noop(pages in arb_pages(), extra in 0usize..8) {
        let mut list = PageList::new(pages.clone());
        let removed = list.remove_subtree(pages.len() + extra);

        prop_assert!(removed.is_empty());
        prop_assert_eq!(list.into_inner(), pages);
    }

    #[test]
    fn remove_stops_at_next_visible_root(pages in arb_pages(), at in 0usize..24) {
        prop_assume!(at < pages.len());
        let mut list = PageList::new(pages.clone());
        let removed = list.remove_subtree(at);

        prop_assert!(!removed.is_empty());
        prop_assert_eq!(&list[..at], &pages[..at]);

        let end = at + removed.len();
        prop_assert_eq!(&removed[..], &pages[at..end]);
        prop_assert!(removed[1..].iter().all(|page| !page.visible_root));
        if end < pages.len() {
            prop_assert!(pages[end].visible_root);
        }
    }
}
