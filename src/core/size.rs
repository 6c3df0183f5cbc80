//! Validation of user-entered grid sizes.
//!
//! The grid itself trusts whatever [`GridSize`] it is handed; everything that
//! can go wrong with raw input is caught here and turned into a message for
//! the status line.

use serde::Serialize;
use thiserror::Error;

pub const MIN_GRID_SIZE: u16 = 1;
pub const MAX_GRID_SIZE: u16 = 100;
pub const DEFAULT_GRID_SIZE: GridSize = GridSize(16);

/// Squares per side, always within `MIN_GRID_SIZE..=MAX_GRID_SIZE`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub struct GridSize(u16);

impl GridSize {
    pub fn new(n: u16) -> Option<Self> {
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn cell_count(self) -> usize {
        self.get() * self.get()
    }
}

impl Default for GridSize {
    fn default() -> Self {
        DEFAULT_GRID_SIZE
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("Please enter a positive number")]
    NotANumber,
    #[error("Please enter a positive number")]
    NotPositive,
}

/// Outcome of a size request that can be applied
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SizeRequest {
    Accepted(GridSize),
    /// Input was above the maximum and has been lowered to it
    Clamped(GridSize),
}

impl SizeRequest {
    pub fn size(self) -> GridSize {
        match self {
            SizeRequest::Accepted(size) | SizeRequest::Clamped(size) => size,
        }
    }
}

/// Reads a grid size the way a lenient integer prompt does: leading
/// whitespace and an optional sign, then as many digits as are present.
/// A `0x`/`0X` prefix switches to hexadecimal. Anything after the digits is
/// ignored, so "12px", "3.7" and "0x10" are read as 12, 3 and 16.
pub fn parse_grid_size(raw: &str) -> Result<SizeRequest, SizeError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<u64> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(u64::from)
        .collect();
    if digits.is_empty() {
        return Err(SizeError::NotANumber);
    }

    let magnitude = digits
        .iter()
        .fold(0u64, |acc, d| acc.saturating_mul(radix as u64).saturating_add(*d));

    if negative || magnitude == 0 {
        return Err(SizeError::NotPositive);
    }

    if magnitude > MAX_GRID_SIZE as u64 {
        return Ok(SizeRequest::Clamped(GridSize(MAX_GRID_SIZE)));
    }

    Ok(SizeRequest::Accepted(GridSize(magnitude as u16)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_bounds() {
        assert!(GridSize::new(0).is_none());
        assert!(GridSize::new(101).is_none());
        assert_eq!(GridSize::new(1).map(GridSize::get), Some(1));
        assert_eq!(GridSize::new(100).map(GridSize::cell_count), Some(10_000));
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(
            parse_grid_size("32"),
            Ok(SizeRequest::Accepted(GridSize(32)))
        );
        assert_eq!(
            parse_grid_size("  +8"),
            Ok(SizeRequest::Accepted(GridSize(8)))
        );
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_grid_size("12px").map(SizeRequest::size), Ok(GridSize(12)));
        assert_eq!(parse_grid_size("3.7").map(SizeRequest::size), Ok(GridSize(3)));
    }

    #[test]
    fn test_parse_reads_hex_prefix() {
        assert_eq!(parse_grid_size("0x10"), Ok(SizeRequest::Accepted(GridSize(16))));
        assert_eq!(parse_grid_size(" 0XaZ"), Ok(SizeRequest::Accepted(GridSize(10))));
        assert_eq!(parse_grid_size("0xff"), Ok(SizeRequest::Clamped(GridSize(100))));
        assert_eq!(parse_grid_size("-0x10"), Err(SizeError::NotPositive));
        assert_eq!(parse_grid_size("0x"), Err(SizeError::NotANumber));
        assert_eq!(parse_grid_size("0xg"), Err(SizeError::NotANumber));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_grid_size(""), Err(SizeError::NotANumber));
        assert_eq!(parse_grid_size("abc"), Err(SizeError::NotANumber));
        assert_eq!(parse_grid_size("-"), Err(SizeError::NotANumber));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_grid_size("0"), Err(SizeError::NotPositive));
        assert_eq!(parse_grid_size("-5"), Err(SizeError::NotPositive));
    }

    #[test]
    fn test_parse_clamps_above_maximum() {
        assert_eq!(
            parse_grid_size("101"),
            Ok(SizeRequest::Clamped(GridSize(100)))
        );
        assert_eq!(
            parse_grid_size("99999999999999999999999"),
            Ok(SizeRequest::Clamped(GridSize(100)))
        );
        assert_eq!(
            parse_grid_size("100"),
            Ok(SizeRequest::Accepted(GridSize(100)))
        );
    }
}
