use crate::config::DisplayConfig;
use crate::hierarchy::HierarchyIndexes;
use crate::model::Page;
use crate::page_list::PageList;

/// Indentation never grows past this many markers
pub const MAX_INDENT: usize = 256;

/// Text lines for a flattened list, indented by hierarchy index
pub fn render_rows(
    list: &PageList<Page>,
    indexes: &HierarchyIndexes,
    display: &DisplayConfig,
) -> Vec<String> {
    list.indexed(indexes)
        .map(|(page, hierarchy_index)| {
            let width = hierarchy_index
                .saturating_mul(display.indent_width)
                .min(MAX_INDENT);
            let indent = display.indent_marker.repeat(width);
            let title = page.title.as_deref().unwrap_or(&display.untitled_label);

            match (display.show_ids, page.id) {
                (true, Some(id)) => format!("{}{} #{}", indent, title, id),
                _ => format!("{}{}", indent, title),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_indents_by_index() {
        let list = PageList::new(vec![
            Page::new(Some(1), None).with_title("Home"),
            Page::new(Some(2), Some(1)).with_title("Team"),
            Page::new(None, None),
        ]);
        let indexes = list.annotate();
        let display = DisplayConfig {
            indent_marker: "-".to_string(),
            show_ids: true,
            ..DisplayConfig::default()
        };

        assert_eq!(
            render_rows(&list, &indexes, &display),
            vec!["Home #1", "--Team #2", "(no title)"]
        );
    }

    #[test]
    fn test_huge_indent_width_is_capped() {
        let list = PageList::new(vec![
            Page::new(Some(1), None),
            Page::new(Some(2), Some(1)).with_title("Deep"),
        ]);
        let indexes = list.annotate();
        let display = DisplayConfig {
            indent_width: usize::MAX,
            ..DisplayConfig::default()
        };

        let rows = render_rows(&list, &indexes, &display);
        assert_eq!(rows[1], format!("{}Deep", " ".repeat(MAX_INDENT)));
    }
}
