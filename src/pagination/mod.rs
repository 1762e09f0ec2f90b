//! Pagination calculator
//!
//! Four pure operations:
//!
//! - [`PaginationCalculator::calculate`]: page/offset arithmetic
//! - [`PaginationCalculator::page_numbers`]: compressed page selector
//! - [`PaginationCalculator::parse_query_params`]: sanitize query input
//! - [`PaginationCalculator::meta_links`]: `prev`/`next` SEO links
//!
//! The calculator only holds immutable bounds, so one instance can be shared
//! freely. The free functions of the same names use the default bounds.

mod arithmetic;
mod links;
mod query;
mod selector;

pub use links::link_header;

use crate::config::PaginationConfig;
use crate::shared::{
    MetaLink, PageItem, PaginationParams, PaginationRequest, PaginationResult, PaginationSummary,
};

/// Stateless pagination service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationCalculator {
    config: PaginationConfig,
}

impl PaginationCalculator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Result, page selector and adjacent links in one value.
    pub fn summarize(&self, request: &PaginationRequest, base_url: &str) -> PaginationSummary {
        let pagination = self.calculate(request);
        PaginationSummary {
            page_numbers: self.page_numbers(
                pagination.current_page,
                pagination.total_pages,
                self.config.max_visible_pages,
            ),
            links: self.meta_links(base_url, &pagination),
            pagination,
        }
    }
}

/// [`PaginationCalculator::calculate`] with default bounds.
pub fn calculate(request: &PaginationRequest) -> PaginationResult {
    PaginationCalculator::default().calculate(request)
}

/// [`PaginationCalculator::page_numbers`] with default bounds.
pub fn page_numbers(current_page: u64, total_pages: u64, max_visible: u64) -> Vec<PageItem> {
    PaginationCalculator::default().page_numbers(current_page, total_pages, max_visible)
}

/// [`PaginationCalculator::parse_query_params`] with default bounds.
pub fn parse_query_params<I, K, V>(params: I) -> PaginationParams
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    PaginationCalculator::default().parse_query_params(params)
}

/// [`PaginationCalculator::meta_links`] with default bounds.
pub fn meta_links(base_url: &str, result: &PaginationResult) -> Vec<MetaLink> {
    PaginationCalculator::default().meta_links(base_url, result)
}
