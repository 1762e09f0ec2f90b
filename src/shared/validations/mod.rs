//! Clamping helpers for untrusted pagination input.
//!
//! Nothing here rejects input. Values outside their range saturate to the
//! nearest bound, so callers cannot tell "bad input" from "input that hit a
//! bound".

use tracing::debug;

use crate::config::{PaginationConfig, MAX_PAGE_SIZE};

/// Clamp a raw page/limit pair: page to `>= 1`, limit to
/// `[1, max_page_size]` (never above [`MAX_PAGE_SIZE`]), falling back to 1
/// and `default_page_size`.
pub fn validate_pagination(
    page: Option<i64>,
    limit: Option<i64>,
    config: &PaginationConfig,
) -> (u64, u64) {
    (clamp_page(page), clamp_limit(limit, config))
}

pub fn clamp_page(page: Option<i64>) -> u64 {
    let page = page.unwrap_or(1);
    if page < 1 {
        debug!(requested = page, "Page below 1, using page 1");
    }
    page.max(1) as u64
}

pub fn clamp_limit(limit: Option<i64>, config: &PaginationConfig) -> u64 {
    let max = config.max_page_size.clamp(1, MAX_PAGE_SIZE);
    let default = config.default_page_size.clamp(1, max);
    let Some(limit) = limit else {
        return default;
    };
    if limit < 1 {
        debug!(requested = limit, "Limit below 1, using 1");
        return 1;
    }
    let limit = limit as u64;
    if limit > max {
        debug!(requested = limit, max, "Limit above maximum, capping");
        return max;
    }
    limit
}

pub fn clamp_total_items(total_items: i64) -> u64 {
    if total_items < 0 {
        debug!(requested = total_items, "Negative item count, using 0");
    }
    total_items.max(0) as u64
}
