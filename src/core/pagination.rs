//! Client-side pagination over the full fetched collection.
//!
//! The server knows nothing about pages; every derivation here is a pure
//! function of the current collection and a 1-indexed page number.

/// Items shown per page.
pub const PAGE_SIZE: usize = 6;

/// Number of pages for `count` items. Never less than 1, so an empty
/// collection still renders as "Page 1 of 1".
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a 1-indexed page into `[1, total_pages(count)]`.
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.max(1).min(total_pages(count))
}

/// The slice of `items` visible on `page`. The page is clamped first, so a
/// stale page number after a deletion still yields a valid (possibly shorter)
/// slice rather than panicking.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let page = clamp_page(page, items.len());
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start.min(items.len())..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_is_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
    }

    #[test]
    fn test_thirteen_items_make_three_pages() {
        assert_eq!(total_pages(13), 3);
        let items: Vec<u32> = (0..13).collect();
        assert_eq!(page_slice(&items, 1).len(), 6);
        assert_eq!(page_slice(&items, 2).len(), 6);
        assert_eq!(page_slice(&items, 3), &[12]);
    }

    #[test]
    fn test_out_of_bounds_pages_clamp() {
        let items: Vec<u32> = (0..13).collect();
        // Page 0 clamps to 1, page 4 clamps to 3. Never a panic.
        assert_eq!(page_slice(&items, 0), page_slice(&items, 1));
        assert_eq!(page_slice(&items, 4), page_slice(&items, 3));
        assert_eq!(clamp_page(0, 13), 1);
        assert_eq!(clamp_page(4, 13), 3);
        assert_eq!(clamp_page(2, 13), 2);
    }

    #[test]
    fn test_empty_collection_has_empty_first_page() {
        let items: Vec<u32> = vec![];
        assert_eq!(page_slice(&items, 1), &[] as &[u32]);
        assert_eq!(page_slice(&items, 5), &[] as &[u32]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(total_pages(12), 2);
        assert_eq!(page_slice(&items, 2).len(), 6);
    }
}
