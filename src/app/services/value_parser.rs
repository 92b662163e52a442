//! Numeric list decoding for parameter database columns.
//!
//! Parameter columns store either a single number or a comma-separated list
//! of numbers encoded as text. This module decodes that text into an ordered
//! `f64` sequence. Tokens that fail strict numeric conversion are skipped
//! with a logged warning so one bad token does not discard the rest of the
//! column; the shape checks in the schema readers are the real gatekeepers.

use tracing::warn;

/// Decode a comma-separated list of numeric literals into an ordered sequence
///
/// Empty input produces an empty sequence. Malformed tokens and values
/// outside the representable `f64` range are skipped with a warning; empty
/// tokens (as in `"1,,2"` or a trailing comma) are skipped silently.
pub fn parse_numeric_list(raw: &str) -> Vec<f64> {
    let mut values = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            Ok(_) => warn!("Out of range value in numeric list: {}", token),
            Err(_) => warn!("Invalid numeric token in list: {}", token),
        }
    }

    values
}
