use super::PaginationCalculator;
use crate::shared::{LinkRelation, MetaLink, PaginationResult};

impl PaginationCalculator {
    /// `prev`/`next` links for the pages adjacent to `result`.
    ///
    /// `base_url` is used verbatim: `?page=N` is appended without escaping or
    /// merging an existing query string. `prev` comes first.
    pub fn meta_links(&self, base_url: &str, result: &PaginationResult) -> Vec<MetaLink> {
        let adjacent = [
            (LinkRelation::Prev, result.has_previous_page, result.previous_page),
            (LinkRelation::Next, result.has_next_page, result.next_page),
        ];

        adjacent
            .into_iter()
            .filter_map(|(rel, present, page)| match (present, page) {
                (true, Some(page)) => Some(MetaLink {
                    rel,
                    url: format!("{}?page={}", base_url, page),
                }),
                _ => None,
            })
            .collect()
    }
}

impl PaginationResult {
    /// Adjacent-page links for this result.
    pub fn meta_links(&self, base_url: &str) -> Vec<MetaLink> {
        super::meta_links(base_url, self)
    }
}

/// HTTP `Link` header value for `links`, `None` when there are none.
pub fn link_header(links: &[MetaLink]) -> Option<String> {
    if links.is_empty() {
        return None;
    }
    Some(
        links
            .iter()
            .map(MetaLink::to_header_value)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
