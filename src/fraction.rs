//! Fraction formatting for exposure times.
//!
//! Cameras store exposure time as a rational (1/2000) but decoders and
//! spreadsheets hand it around as a float (0.0005). This module finds the
//! closest fraction whose denominator stays within a bound, using the
//! continued-fraction convergents of the exact value, and renders it as
//! `p/q` (or `p` when `q` is 1).
//!
//! # Example
//!
//! ```
//! use photoinfo::fraction::to_fraction;
//!
//! assert_eq!(to_fraction(0.0005, 5000)?, "1/2000");
//! assert_eq!(to_fraction(1.0, 5000)?, "1");
//! # Ok::<(), photoinfo::PhotoInfoError>(())
//! ```

use std::fmt;

use crate::error::PhotoInfoError;
use crate::exif::{ExifValue, NOT_FOUND};

/// Denominator bound used when none is configured.
pub const DEFAULT_MAX_DENOMINATOR: u32 = 5000;

// Below this magnitude the best approximation for any u32 bound is 0.
const NEGLIGIBLE: f64 = 1.0 / (1u64 << 40) as f64;

/// A non-negative ratio with a separate sign, always in lowest terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    negative: bool,
    numer: u128,
    denom: u128,
}

impl Fraction {
    fn new(negative: bool, numer: u128, denom: u128) -> Self {
        let g = gcd(numer, denom);
        Self {
            negative: negative && numer != 0,
            numer: numer / g,
            denom: denom / g,
        }
    }

    /// Exact value of `num / den`.
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, PhotoInfoError> {
        if den == 0 {
            return Err(PhotoInfoError::InvalidFractionInput {
                value: format!("{}/{}", num, den),
            });
        }
        Ok(Self::new(
            (num < 0) != (den < 0),
            u128::from(num.unsigned_abs()),
            u128::from(den.unsigned_abs()),
        ))
    }

    /// Exact value of a finite, non-integral float with magnitude of at
    /// least 2^-40.
    ///
    /// Every such float is `m * 2^e` with `m < 2^53` and `-93 <= e < 0`, so
    /// both parts fit comfortably in `u128`.
    fn from_f64(value: f64) -> Result<Self, PhotoInfoError> {
        if !value.is_finite() || value.fract() == 0.0 || value.abs() < NEGLIGIBLE {
            return Err(PhotoInfoError::InvalidFractionInput {
                value: value.to_string(),
            });
        }

        let bits = value.abs().to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let stored = bits & ((1u64 << 52) - 1);
        let (mantissa, exponent) = if biased == 0 {
            (stored, -1074)
        } else {
            (stored | (1u64 << 52), biased - 1075)
        };

        Ok(Self::new(
            value < 0.0,
            u128::from(mantissa),
            1u128 << (-exponent) as u32,
        ))
    }

    /// Closest fraction with a denominator of at most `max_denominator`.
    ///
    /// When the two final candidates are equally close, the one with the
    /// smaller denominator wins.
    pub fn limit_denominator(self, max_denominator: u32) -> Result<Self, PhotoInfoError> {
        if max_denominator == 0 {
            return Err(PhotoInfoError::InvalidMaxDenominator(0));
        }
        let max = u128::from(max_denominator);
        if self.denom <= max {
            return Ok(self);
        }

        let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
        let (mut n, mut d) = (self.numer, self.denom);
        loop {
            let a = n / d;
            let q2 = q0 + a * q1;
            if q2 > max {
                break;
            }
            (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
            (n, d) = (d, n - a * d);
        }

        // Candidates: the last convergent p1/q1 and the semiconvergent
        // bound. p1/q1 is d/(q1*denom) away from the value, and the two
        // candidates are 1/(q1*qb) apart.
        let k = (max - q0) / q1;
        let (pb, qb) = (p0 + k * p1, q0 + k * q1);
        let lhs = (2 * d).checked_mul(qb);
        let convergent = Self::new(self.negative, p1, q1);
        let bound = Self::new(self.negative, pb, qb);

        Ok(match lhs {
            Some(lhs) if lhs < self.denom => convergent,
            Some(lhs) if lhs == self.denom => {
                if q1 <= qb {
                    convergent
                } else {
                    bound
                }
            }
            _ => bound,
        })
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Formats `value` as the closest fraction with denominator at most
/// `max_denominator`.
///
/// # Errors
/// Returns [`PhotoInfoError::InvalidFractionInput`] for NaN or infinite
/// input and [`PhotoInfoError::InvalidMaxDenominator`] for a zero bound.
pub fn to_fraction(value: f64, max_denominator: u32) -> Result<String, PhotoInfoError> {
    if !value.is_finite() {
        return Err(PhotoInfoError::InvalidFractionInput {
            value: value.to_string(),
        });
    }
    if max_denominator == 0 {
        return Err(PhotoInfoError::InvalidMaxDenominator(0));
    }
    if value.abs() < NEGLIGIBLE {
        return Ok("0".to_string());
    }
    if value.fract() == 0.0 {
        // Integral floats can exceed u128; print them directly.
        return Ok(format!("{:.0}", value));
    }

    Ok(Fraction::from_f64(value)?
        .limit_denominator(max_denominator)?
        .to_string())
}

/// Like [`to_fraction`] but starting from an exact ratio, as stored in
/// EXIF RATIONAL fields.
pub fn ratio_to_fraction(
    num: i64,
    den: i64,
    max_denominator: u32,
) -> Result<String, PhotoInfoError> {
    Ok(Fraction::from_ratio(num, den)?
        .limit_denominator(max_denominator)?
        .to_string())
}

/// Exposure-time cell of a report row.
///
/// Any value that cannot be turned into a fraction becomes the
/// "Not Found" sentinel; this never fails.
pub fn exposure_fraction(value: &ExifValue, max_denominator: u32) -> String {
    let result = match value {
        ExifValue::Number(n) => to_fraction(*n, max_denominator),
        ExifValue::Rational(num, den) => ratio_to_fraction(*num, *den, max_denominator),
        ExifValue::Text(text) => text_to_fraction(text, max_denominator),
        ExifValue::Missing => return NOT_FOUND.to_string(),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "exposure time left unformatted");
        NOT_FOUND.to_string()
    })
}

/// Accepts decimal text ("0.004") or ratio text ("1/250").
fn text_to_fraction(text: &str, max_denominator: u32) -> Result<String, PhotoInfoError> {
    let text = text.trim();
    let invalid = || PhotoInfoError::InvalidFractionInput {
        value: text.to_string(),
    };

    if let Some((num, den)) = text.split_once('/') {
        let num = num.trim().parse::<i64>().map_err(|_| invalid())?;
        let den = den.trim().parse::<i64>().map_err(|_| invalid())?;
        return ratio_to_fraction(num, den, max_denominator);
    }

    let value = text.parse::<f64>().map_err(|_| invalid())?;
    to_fraction(value, max_denominator)
}
