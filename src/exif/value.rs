//! Loosely-typed EXIF values.

use std::fmt;

/// Placeholder written for any field whose tag is absent.
pub const NOT_FOUND: &str = "Not Found";

/// A single EXIF tag value, as much of its type as the report needs.
///
/// `Missing` is the sentinel for an absent tag and renders as
/// [`NOT_FOUND`]. It is distinct from a present-but-empty `Text`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExifValue {
    Number(f64),
    Rational(i64, i64),
    Text(String),
    Missing,
}

impl ExifValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, ExifValue::Missing)
    }

    /// Numeric value, if this is a number or a rational with a non-zero
    /// denominator.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ExifValue::Number(n) => Some(n),
            ExifValue::Rational(_, 0) => None,
            ExifValue::Rational(num, den) => Some(num as f64 / den as f64),
            ExifValue::Text(_) | ExifValue::Missing => None,
        }
    }

    /// Interprets a report cell written by [`fmt::Display`].
    ///
    /// Rationals are rendered as decimals, so they come back as `Number`.
    pub fn parse_cell(cell: &str) -> ExifValue {
        if cell == NOT_FOUND {
            return ExifValue::Missing;
        }
        match cell.parse::<f64>() {
            Ok(n) if n.is_finite() => ExifValue::Number(n),
            _ => ExifValue::Text(cell.to_string()),
        }
    }
}

impl fmt::Display for ExifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifValue::Number(n) => write!(f, "{}", n),
            ExifValue::Rational(num, 0) => write!(f, "{}/0", num),
            ExifValue::Rational(num, den) => write!(f, "{}", *num as f64 / *den as f64),
            ExifValue::Text(s) => f.write_str(s),
            ExifValue::Missing => f.write_str(NOT_FOUND),
        }
    }
}
