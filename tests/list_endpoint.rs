//! End-to-end flow of a list endpoint: raw query -> params -> result ->
//! page selector -> SEO links.

use std::collections::HashMap;

use pagekit::{
    calculate, link_header, meta_links, page_numbers, parse_query_params, AppConfig, ItemRange,
    LinkRelation, PageItem, PaginationCalculator, PaginationRequest, RawPaginationQuery,
};

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn query_to_links_round_trip() {
    let params = parse_query_params(&query(&[("page", "4"), ("limit", "25")]));
    assert_eq!(params.offset(), 75);

    let result = calculate(&params.into_request(230));
    assert_eq!(result.current_page, 4);
    assert_eq!(result.total_pages, 10);
    assert_eq!(result.item_range, ItemRange { start: 76, end: 100 });

    let pages = page_numbers(result.current_page, result.total_pages, 5);
    assert_eq!(
        pages,
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );

    let links = meta_links("https://shop.test/items", &result);
    assert_eq!(
        link_header(&links).as_deref(),
        Some(
            "<https://shop.test/items?page=3>; rel=\"prev\", \
             <https://shop.test/items?page=5>; rel=\"next\""
        )
    );
}

#[test]
fn garbage_query_still_yields_valid_first_page() {
    let params = parse_query_params(&query(&[("page", "abc"), ("limit", "-5")]));
    assert_eq!((params.page, params.limit), (1, 1));

    let result = calculate(&params.into_request(3));
    assert_eq!(result.page_size, 1);
    assert_eq!(result.total_pages, 3);
    assert_eq!(result.next_page, Some(2));
}

#[test]
fn stale_page_link_lands_on_last_page() {
    // List shrank after the link was generated.
    let raw = RawPaginationQuery {
        page: Some("5".to_string()),
        limit: Some("10".to_string()),
    };
    let result = calculate(&raw.sanitize().into_request(20));

    assert_eq!(result.current_page, 2);
    assert!(!result.has_next_page);
    assert_eq!(result.offset, 10);

    let links = result.meta_links("https://x/y");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].rel, LinkRelation::Prev);
    assert_eq!(links[0].url, "https://x/y?page=1");
}

#[test]
fn empty_list() {
    let result = calculate(&PaginationRequest::new(0));
    assert_eq!(result.item_range, ItemRange::EMPTY);
    assert!(result.page_numbers(5).is_empty());
    assert!(result.meta_links("/x").is_empty());
}

#[test]
fn configured_bounds_flow_through_every_operation() {
    let config = AppConfig::from_toml_str(
        r#"
        [pagination]
        default_page_size = 20
        max_page_size = 50
        max_visible_pages = 3
        "#,
    )
    .unwrap();
    let calculator = PaginationCalculator::new(config.pagination);

    let params = calculator.parse_query_params([("page", "6"), ("limit", "500")]);
    assert_eq!(params.limit, 50);

    let summary = calculator.summarize(&params.into_request(1000), "/feed");
    assert_eq!(summary.pagination.total_pages, 20);
    assert_eq!(summary.pagination.offset, 250);

    let rendered: Vec<String> = summary.page_numbers.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["1", "...", "5", "6", "7", "...", "20"]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["pagination"]["page_size"], 50);
    assert_eq!(json["page_numbers"][1], "...");
    assert_eq!(json["links"][0]["url"], "/feed?page=5");
}
