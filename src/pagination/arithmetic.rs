use tracing::debug;

use super::PaginationCalculator;
use crate::shared::{
    clamp_total_items, validate_pagination, ItemRange, PaginationRequest, PaginationResult,
};

impl PaginationCalculator {
    /// Core page/offset arithmetic.
    ///
    /// Never fails: page, limit and total are clamped into range, and a page
    /// past the end is pulled back to the last page (or page 1 when there are
    /// no pages at all).
    pub fn calculate(&self, request: &PaginationRequest) -> PaginationResult {
        let (page, page_size) = validate_pagination(request.page, request.limit, &self.config);
        let total_items = clamp_total_items(request.total_items);

        let total_pages = total_items.div_ceil(page_size);
        let last_page = total_pages.max(1);
        if page > last_page {
            debug!(requested = page, last_page, "Page past the end, clamping");
        }
        let current_page = page.min(last_page);

        let offset = (current_page - 1) * page_size;
        let has_next_page = current_page < total_pages;
        let has_previous_page = current_page > 1;

        let item_range = if total_items == 0 {
            ItemRange::EMPTY
        } else {
            ItemRange {
                start: offset + 1,
                end: (offset + page_size).min(total_items),
            }
        };

        PaginationResult {
            current_page,
            total_pages,
            page_size,
            total_items,
            has_next_page,
            has_previous_page,
            next_page: has_next_page.then_some(current_page + 1),
            previous_page: has_previous_page.then_some(current_page - 1),
            offset,
            item_range,
        }
    }
}
