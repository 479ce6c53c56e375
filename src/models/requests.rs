//! Request DTOs for the cache server API
//!
//! Defines the query parameters accepted by each endpoint.

use std::time::Duration;

use serde::Deserialize;

/// Query parameters for the SET operation (`/set?key=..&value=..&ttl=..`)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl`: Optional TTL, e.g. `30`, `500ms`, `1m30s` (uses default if absent or invalid)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetParams {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
    /// Raw TTL string
    #[serde(default)]
    pub ttl: Option<String>,
}

impl SetParams {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() || self.value.is_empty() {
            return Some("key and value are required".to_string());
        }
        None
    }
}

/// Query parameters for GET and DELETE (`/get?key=..`, `/delete?key=..`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyParams {
    /// The cache key
    #[serde(default)]
    pub key: String,
}

impl KeyParams {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("key is required".to_string());
        }
        None
    }
}

// == TTL Parsing ==
/// Parses a TTL string.
///
/// A bare integer is a number of seconds. Otherwise the input is one or more
/// `<number><unit>` pairs with units `ms`, `s`, `m` or `h`; numbers may carry a
/// fractional part (`1.5s`). Returns None for empty or malformed input.
pub fn parse_ttl(input: &str) -> Option<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(secs) = input.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        let amount: f64 = number.parse().ok()?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let unit_nanos = match unit {
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };

        let nanos = amount * unit_nanos;
        if !nanos.is_finite() || nanos >= u64::MAX as f64 {
            return None;
        }
        total = total.checked_add(Duration::from_nanos(nanos.round() as u64))?;
        rest = tail;
    }
    Some(total)
}
