use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

/// Raw pagination input, before clamping.
///
/// Every field accepts out-of-range values; [`calculate`](crate::calculate)
/// saturates them into range instead of rejecting them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationRequest {
    /// Requested page (1-based). Defaults to 1
    pub page: Option<i64>,
    /// Requested page size. Defaults to 10, capped at 100
    pub limit: Option<i64>,
    /// Total number of items across all pages
    pub total_items: i64,
}

impl PaginationRequest {
    pub fn new(total_items: i64) -> Self {
        Self {
            page: None,
            limit: None,
            total_items,
        }
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// 1-based inclusive range of the items shown on the current page.
///
/// `{0, 0}` when there are no items at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemRange {
    pub start: u64,
    pub end: u64,
}

impl ItemRange {
    pub const EMPTY: ItemRange = ItemRange { start: 0, end: 0 };

    /// Number of items covered by the range, 0 for an empty or inverted range.
    pub fn len(&self) -> u64 {
        if self.start == 0 || self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computed pagination metadata
///
/// Immutable value produced by [`calculate`](crate::calculate). All numbers
/// are already clamped into their valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationResult {
    /// Current page (1-based), never above `max(total_pages, 1)`
    pub current_page: u64,
    /// Total number of pages, 0 when there are no items
    pub total_pages: u64,
    /// Items per page (1–100)
    pub page_size: u64,
    /// Total number of items across all pages
    pub total_items: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// `null` unless `has_next_page`
    pub next_page: Option<u64>,
    /// `null` unless `has_previous_page`
    pub previous_page: Option<u64>,
    /// Zero-based index of the first item on the current page
    pub offset: u64,
    pub item_range: ItemRange,
}

impl PaginationResult {
    /// `true` when there is nothing to paginate.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// `true` when the current page is the last one (or there are no pages).
    pub fn is_last_page(&self) -> bool {
        !self.has_next_page
    }
}

/// One entry of a page selector: a page number or a gap marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

impl PageItem {
    pub const ELLIPSIS: &'static str = "...";

    pub fn page(&self) -> Option<u64> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => f.write_str(Self::ELLIPSIS),
        }
    }
}

// Pages serialize as bare numbers, gaps as the "..." string.
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n),
            PageItem::Ellipsis => serializer.serialize_str(Self::ELLIPSIS),
        }
    }
}

/// Link relation for adjacent-page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LinkRelation {
    Prev,
    Next,
}

impl LinkRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRelation::Prev => "prev",
            LinkRelation::Next => "next",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SEO link to an adjacent page (`<link rel="prev|next" href="...">`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetaLink {
    pub rel: LinkRelation,
    pub url: String,
}

impl MetaLink {
    /// Render as one element of an HTTP `Link` header: `<url>; rel="prev"`.
    pub fn to_header_value(&self) -> String {
        format!("<{}>; rel=\"{}\"", self.url, self.rel)
    }
}

/// Pagination query parameters after sanitizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationParams {
    /// Page number (≥ 1)
    pub page: u64,
    /// Items per page (1–100)
    pub limit: u64,
}

impl PaginationParams {
    /// Zero-based offset implied by `page` and `limit`, before the total is known.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Build a request for [`calculate`](crate::calculate) once the total is known.
    pub fn into_request(self, total_items: i64) -> PaginationRequest {
        PaginationRequest {
            page: Some(i64::try_from(self.page).unwrap_or(i64::MAX)),
            limit: Some(i64::try_from(self.limit).unwrap_or(i64::MAX)),
            total_items,
        }
    }
}

/// Untrusted pagination query, exactly as it arrives in the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RawPaginationQuery {
    /// Page number (starting from 1). Default: 1
    pub page: Option<String>,
    /// Items per page (1–100). Default: 10
    pub limit: Option<String>,
}

/// Everything a list view needs to render its pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    pub pagination: PaginationResult,
    pub page_numbers: Vec<PageItem>,
    pub links: Vec<MetaLink>,
}
