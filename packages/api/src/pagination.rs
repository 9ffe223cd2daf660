//! Page number lists for the pagination bar.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Pages to show for `current` out of `total`.
///
/// Empty for a single page. Otherwise the first and last page, the pages next
/// to `current`, and an ellipsis wherever numbers are skipped.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }
    let mut items = vec![PageItem::Page(1)];
    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);

    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_single_page_hidden() {
        assert!(page_items(1, 0).is_empty());
        assert!(page_items(1, 1).is_empty());
    }

    #[test]
    fn test_short_ranges() {
        assert_eq!(page_items(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_items(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_items(1, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_ellipses() {
        assert_eq!(page_items(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            page_items(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(page_items(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_eq!(page_items(3, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }
}
