//! # pagekit
//!
//! Page/offset pagination metadata for list endpoints.
//!
//! - **pagination**: the stateless calculator (`calculate`, `page_numbers`,
//!   `parse_query_params`, `meta_links`)
//! - **shared**: request/result DTOs and clamping helpers
//! - **config**: TOML configuration (page size bounds, logging)
//! - **telemetry**: tracing subscriber setup
//!
//! ```
//! use pagekit::{calculate, page_numbers, PaginationRequest};
//!
//! let result = calculate(&PaginationRequest::new(20).page(5).limit(10));
//! assert_eq!(result.current_page, 2);
//! assert_eq!(result.offset, 10);
//!
//! let pages: Vec<String> = page_numbers(50, 100, 5).iter().map(|p| p.to_string()).collect();
//! assert_eq!(pages, ["1", "...", "48", "49", "50", "51", "52", "...", "100"]);
//! ```

pub mod config;
pub mod pagination;
pub mod shared;
pub mod telemetry;

pub use config::{default_config_path, AppConfig, LoggingConfig, PaginationConfig};

pub use pagination::{
    calculate, link_header, meta_links, page_numbers, parse_query_params, PaginationCalculator,
};

pub use shared::{
    ConfigError, ConfigResult, ItemRange, LinkRelation, MetaLink, PageItem, PaginationParams,
    PaginationRequest, PaginationResult, PaginationSummary, RawPaginationQuery,
};

pub use telemetry::init_tracing;
