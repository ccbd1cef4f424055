//! Parsing of user-entered numbers.
//!
//! Parsing is strict: a token either is a whole `i64` or it is rejected. Text
//! such as `"12abc"` or `"3.5"` never gets coerced into a number.

use crate::error::{LisError, Result};

/// Parse a single integer, ignoring surrounding whitespace.
pub fn parse_value(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| LisError::InvalidInput(trimmed.to_string()))
}

/// Parse a list of integers separated by commas and/or whitespace.
///
/// Any malformed token rejects the whole input. An empty or blank string
/// yields an empty sequence.
///
/// ```
/// use lis_trace::input::parse_sequence;
///
/// assert_eq!(parse_sequence("5, 2 8,-6").unwrap(), vec![5, 2, 8, -6]);
/// assert!(parse_sequence("1, x, 3").is_err());
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_value)
        .collect()
}
