use serde::Serialize;

/// Page size applied when the caller does not provide one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Upper bound on the page size a caller may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of items plus the page-number window rendered by the pager
/// widget. `None` entries mark gaps in the window.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_for_empty_result() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn small_page_count_has_no_gaps() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 2, 3);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn window_around_current_page_elides_middle() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20);
        let pages = paginated.pages;

        assert_eq!(pages[0], Some(1));
        assert_eq!(pages[1], Some(2));
        assert!(pages.contains(&None));
        assert!(pages.contains(&Some(10)));
        assert_eq!(pages.last(), Some(&Some(20)));
    }

    #[test]
    fn page_zero_is_treated_as_first_page() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 5);
        assert_eq!(paginated.page, 1);
    }
}
