use super::PaginationCalculator;
use crate::shared::{PageItem, PaginationResult};

impl PaginationCalculator {
    /// Compressed page sequence for a page selector.
    ///
    /// Always contains the first and last page plus a window of
    /// `max_visible` pages around `current_page`, with an [`PageItem::Ellipsis`]
    /// wherever the window does not reach page 2 or `total_pages - 1`.
    /// When everything fits, every page is returned without gaps.
    pub fn page_numbers(
        &self,
        current_page: u64,
        total_pages: u64,
        max_visible: u64,
    ) -> Vec<PageItem> {
        if total_pages <= max_visible {
            return (1..=total_pages).map(PageItem::Page).collect();
        }

        // Signed so the window bounds may cross each other for tiny inputs.
        let current = to_signed(current_page);
        let total = to_signed(total_pages);
        let max_visible = to_signed(max_visible);
        let half = max_visible / 2;

        let mut start = current.saturating_sub(half).max(2);
        let mut end = current.saturating_add(half).min(total - 1);

        // Near the start, then near the end. Both may apply, in this order.
        if start <= 2 {
            start = 2;
            end = max_visible.min(total - 1);
        }
        if end >= total - 1 {
            end = total - 1;
            start = (total - max_visible + 1).max(2);
        }

        let mut pages = vec![PageItem::Page(1)];
        if start > 2 {
            pages.push(PageItem::Ellipsis);
        }
        pages.extend((start..=end).map(|page| PageItem::Page(page as u64)));
        if end < total - 1 {
            pages.push(PageItem::Ellipsis);
        }
        if total > 1 {
            pages.push(PageItem::Page(total_pages));
        }
        pages
    }
}

impl PaginationResult {
    /// Page selector for this result.
    pub fn page_numbers(&self, max_visible: u64) -> Vec<PageItem> {
        super::page_numbers(self.current_page, self.total_pages, max_visible)
    }
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use crate::pagination::{calculate, page_numbers};
    use crate::shared::{PageItem, PaginationRequest};

    const E: PageItem = PageItem::Ellipsis;

    fn p(n: u64) -> PageItem {
        PageItem::Page(n)
    }

    #[test]
    fn below_threshold_lists_every_page() {
        assert_eq!(page_numbers(1, 3, 5), vec![p(1), p(2), p(3)]);
        assert_eq!(page_numbers(4, 5, 5), vec![p(1), p(2), p(3), p(4), p(5)]);
    }

    #[test]
    fn no_pages_is_empty() {
        assert!(page_numbers(1, 0, 5).is_empty());
    }

    #[test]
    fn window_in_the_middle_has_two_gaps() {
        assert_eq!(
            page_numbers(50, 100, 5),
            vec![p(1), E, p(48), p(49), p(50), p(51), p(52), E, p(100)]
        );
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(
            page_numbers(1, 20, 5),
            vec![p(1), p(2), p(3), p(4), p(5), E, p(20)]
        );
        assert_eq!(
            page_numbers(3, 20, 5),
            vec![p(1), p(2), p(3), p(4), p(5), E, p(20)]
        );
        assert_eq!(
            page_numbers(4, 20, 5),
            vec![p(1), p(2), p(3), p(4), p(5), E, p(20)]
        );
        assert_eq!(
            page_numbers(5, 20, 5),
            vec![p(1), E, p(3), p(4), p(5), p(6), p(7), E, p(20)]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            page_numbers(20, 20, 5),
            vec![p(1), E, p(16), p(17), p(18), p(19), p(20)]
        );
        assert_eq!(
            page_numbers(18, 20, 5),
            vec![p(1), E, p(16), p(17), p(18), p(19), p(20)]
        );
    }

    #[test]
    fn both_edge_corrections_apply_for_small_totals() {
        assert_eq!(
            page_numbers(3, 6, 5),
            vec![p(1), p(2), p(3), p(4), p(5), p(6)]
        );
        assert_eq!(
            page_numbers(4, 7, 5),
            vec![p(1), p(2), p(3), p(4), p(5), E, p(7)]
        );
    }

    #[test]
    fn even_window_width() {
        assert_eq!(
            page_numbers(10, 30, 4),
            vec![p(1), E, p(8), p(9), p(10), p(11), p(12), E, p(30)]
        );
    }

    #[test]
    fn current_page_past_the_end() {
        assert_eq!(
            page_numbers(200, 100, 5),
            vec![p(1), E, p(96), p(97), p(98), p(99), p(100)]
        );
    }

    #[test]
    fn zero_width_window_still_shows_first_and_last() {
        assert_eq!(page_numbers(1, 1, 0), vec![p(1)]);
        assert_eq!(page_numbers(5, 10, 0), vec![p(1), E, p(5), E, p(10)]);
    }

    #[test]
    fn first_and_last_always_present() {
        for total in 1..=30u64 {
            for current in 1..=total {
                let pages = page_numbers(current, total, 5);
                assert_eq!(pages.first(), Some(&p(1)));
                assert_eq!(pages.last(), Some(&p(total)));
                assert!(pages.contains(&p(current)));
            }
        }
    }

    #[test]
    fn result_helper_uses_current_and_total() {
        let result = calculate(&PaginationRequest::new(100).page(50).limit(1));
        assert_eq!(result.page_numbers(5), page_numbers(50, 100, 5));
    }
}
