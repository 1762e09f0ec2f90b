use std::num::IntErrorKind;

use tracing::debug;

use super::PaginationCalculator;
use crate::shared::{clamp_limit, clamp_page, PaginationParams, RawPaginationQuery};

impl PaginationCalculator {
    /// Sanitize `page`/`limit` from raw query-string pairs.
    ///
    /// Missing, non-numeric and zero values all fall back to the defaults;
    /// numeric values are truncated toward zero and clamped. When a key
    /// repeats, its first value wins. Never fails.
    pub fn parse_query_params<I, K, V>(&self, params: I) -> PaginationParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut page = None;
        let mut limit = None;
        for (key, value) in params {
            match key.as_ref() {
                "page" if page.is_none() => page = Some(value.as_ref().to_owned()),
                "limit" if limit.is_none() => limit = Some(value.as_ref().to_owned()),
                _ => {}
            }
        }
        self.sanitize(page.as_deref(), limit.as_deref())
    }

    /// Same rules as [`parse_query_params`](Self::parse_query_params) for an
    /// already-deserialized query.
    pub fn parse_raw_query(&self, query: &RawPaginationQuery) -> PaginationParams {
        self.sanitize(query.page.as_deref(), query.limit.as_deref())
    }

    fn sanitize(&self, page: Option<&str>, limit: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: clamp_page(page.and_then(|raw| parse_numeric("page", raw))),
            limit: clamp_limit(limit.and_then(|raw| parse_numeric("limit", raw)), &self.config),
        }
    }
}

impl RawPaginationQuery {
    /// Sanitize with the default bounds.
    pub fn sanitize(&self) -> PaginationParams {
        PaginationCalculator::default().parse_raw_query(self)
    }
}

/// `None` for anything that should fall back to the default: unparseable,
/// NaN or zero. Accepts decimal/exponent notation, unsigned `0x`/`0o`/`0b`
/// literals and the exact spelling `Infinity`. Fractions are truncated
/// toward zero, huge values saturate.
fn parse_numeric(field: &'static str, raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let value = radix_literal(trimmed).or_else(|| decimal_literal(trimmed));
    match value {
        Some(value) if !value.is_nan() && value != 0.0 => Some(value.trunc() as i64),
        _ => {
            debug!(field, raw, "Unusable pagination value, using default");
            None
        }
    }
}

fn radix_literal(raw: &str) -> Option<f64> {
    let (radix, digits) = match raw.get(..2)? {
        "0x" | "0X" => (16, &raw[2..]),
        "0o" | "0O" => (8, &raw[2..]),
        "0b" | "0B" => (2, &raw[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    match u64::from_str_radix(digits, radix) {
        Ok(value) => Some(value as f64),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(f64::INFINITY),
        Err(_) => Some(f64::NAN),
    }
}

// `f64::from_str` also takes `inf`/`nan` in any case; only `Infinity` counts.
fn decimal_literal(raw: &str) -> Option<f64> {
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() {
        return Some(value);
    }
    let unsigned = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    (unsigned == "Infinity").then_some(value)
}
