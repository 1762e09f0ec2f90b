//! pagekit — pagination metadata from the command line
//!
//! ```sh
//! # Page 3 of a 250-item list, 20 per page
//! pagekit --total 250 --page 3 --limit 20
//!
//! # Sanitize a raw query string first
//! pagekit --total 250 --query "page=abc&limit=-5"
//!
//! # Include prev/next links
//! pagekit --total 250 --page 3 --base-url https://example.com/posts
//!
//! # Validate config without computing anything
//! pagekit --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use pagekit::{
    default_config_path, init_tracing, link_header, AppConfig, ConfigError, ConfigResult,
    MetaLink, PaginationCalculator, PaginationRequest,
};

/// Compute pagination metadata, page selector and SEO links as JSON.
#[derive(Parser, Debug)]
#[command(name = "pagekit", version, about)]
struct Cli {
    /// Total number of items in the list.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "check")]
    total: Option<i64>,

    /// Requested page (1-based).
    #[arg(long, allow_hyphen_values = true)]
    page: Option<i64>,

    /// Requested page size.
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,

    /// Raw query string, e.g. `page=2&limit=50`. Overrides --page/--limit.
    #[arg(short, long)]
    query: Option<String>,

    /// Width of the page-number window.
    #[arg(long)]
    max_visible: Option<u64>,

    /// Base URL for prev/next links.
    #[arg(long)]
    base_url: Option<String>,

    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PAGEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ──────────────────────────────────────
    let explicit_config = cli.config.is_some();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    let mut load_error = None;
    let mut config = if explicit_config || config_path.exists() {
        match AppConfig::load(&config_path) {
            Ok(cfg) => cfg,
            Err(e) if cli.check => return Err(e.into()),
            Err(e) => {
                load_error = Some(e);
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    };

    // ── Apply CLI overrides ─────────────────────────────────────
    apply_overrides(&cli, &mut config)?;

    init_tracing(&config.logging);
    match load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        None => info!("Configuration resolved from {}", config_path.display()),
    }

    // ── Config validation mode ──────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file       : {}", config_path.display());
        println!("   Default page size : {}", config.pagination.default_page_size);
        println!("   Max page size     : {}", config.pagination.max_page_size);
        println!("   Visible pages     : {}", config.pagination.max_visible_pages);
        println!("   Log level         : {}", config.logging.level);
        return Ok(());
    }

    run(&cli, config)
}

/// Overrides go through the same validation as the config file.
fn apply_overrides(cli: &Cli, config: &mut AppConfig) -> ConfigResult<()> {
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(max_visible) = cli.max_visible {
        config.pagination.max_visible_pages = max_visible;
    }
    config
        .pagination
        .validate_bounds()
        .map_err(ConfigError::from)
}

fn run(cli: &Cli, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let calculator = PaginationCalculator::new(config.pagination);
    let total = cli.total.unwrap_or(0);

    let request = match cli.query {
        Some(ref query) => {
            let params = calculator.parse_query_params(split_query(query));
            info!(page = params.page, limit = params.limit, "Parsed query");
            params.into_request(total)
        }
        None => PaginationRequest {
            page: cli.page,
            limit: cli.limit,
            total_items: total,
        },
    };

    let base_url = cli.base_url.as_deref();
    let summary = calculator.summarize(&request, base_url.unwrap_or_default());

    if let Some(header) = header_for_base_url(base_url, &summary.links) {
        info!(link = %header, "Link header");
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// `Link` header value, only when links were built against a real base URL.
fn header_for_base_url(base_url: Option<&str>, links: &[MetaLink]) -> Option<String> {
    base_url.and_then(|_| link_header(links))
}

/// `a=1&b=2` into pairs. No percent-decoding; pagination values are numeric.
fn split_query(query: &str) -> Vec<(&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}
