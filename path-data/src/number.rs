//! Parsing floating point numbers.
//!
//! Numbers are accumulated into an integer mantissa and a decimal exponent
//! which are then combined by [`build_float`]. This keeps parsing independent
//! of the platform's string to float conversion and avoids allocating per
//! token.

use std::sync::LazyLock;

use crate::{cursor::Cursor, ParseError};

/// Number of significant digits accumulated in the mantissa.
///
/// Further digits are dropped (integer digits still shift the exponent) so
/// that the mantissa always fits in an `i32`. This bounds precision to about
/// nine significant digits.
const MAX_MANTISSA_DIGITS: u32 = 9;

/// Number of significant exponent digits; the rest are ignored.
const MAX_EXPONENT_DIGITS: u32 = 3;

/// Exponents below this produce zero.
const MIN_EXPONENT: i32 = -125;

/// Exponents at or above this produce infinity.
const MAX_EXPONENT: i32 = 128;

/// Mantissas at or above this magnitude lose low order bits when converted
/// and are rounded up by one beforehand.
const ROUNDING_THRESHOLD: i32 = 1 << 26;

/// Powers of ten for exponents `0..128`.
static POWERS_OF_TEN: LazyLock<[f64; MAX_EXPONENT as usize]> =
    LazyLock::new(|| std::array::from_fn(|i| 10f64.powi(i as i32)));

/// Builds a float from an integer mantissa and a decimal exponent.
///
/// Computes `mantissa * 10^exponent`, with these special cases:
///
/// * zero if the mantissa is zero or the exponent is below -125
/// * positive or negative infinity (depending on the sign of the mantissa)
///   if the exponent is 128 or greater
///
/// Mantissas of `2^26` or greater are incremented by one before scaling to
/// compensate for low order bits that the conversion drops. The adjustment
/// applies to positive mantissas only; negative mantissas of the same
/// magnitude are scaled as is.
pub fn build_float(mantissa: i32, exponent: i32) -> f32 {
    if exponent < MIN_EXPONENT || mantissa == 0 {
        return 0.0;
    }
    if exponent >= MAX_EXPONENT {
        return if mantissa > 0 {
            f32::INFINITY
        } else {
            f32::NEG_INFINITY
        };
    }
    if exponent == 0 {
        return mantissa as f32;
    }
    let mut mantissa = mantissa;
    if mantissa >= ROUNDING_THRESHOLD {
        mantissa += 1;
    }
    let scale = POWERS_OF_TEN[exponent.unsigned_abs() as usize];
    let value = if exponent > 0 {
        mantissa as f64 * scale
    } else {
        mantissa as f64 / scale
    };
    value as f32
}

/// Parses a single number that makes up the entire string.
///
/// Leading and trailing whitespace is permitted.
///
/// ```
/// assert_eq!(path_data::parse_number(" 1.5e1 "), Ok(15.0));
/// assert!(path_data::parse_number("1.5 2").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f32, ParseError> {
    let mut cursor = Cursor::new(text);
    cursor.skip_spaces();
    let value = parse_float(&mut cursor)?;
    cursor.skip_spaces();
    if cursor.is_at_end() {
        Ok(value)
    } else {
        Err(cursor.unexpected())
    }
}

/// Parses a number starting at the current position of the cursor.
///
/// Grammar: `sign? (digits ('.' digits?)? | '.' digits) (('e' | 'E') sign? digits)?`
///
/// On success, the cursor is left on the first character following the
/// number.
pub(crate) fn parse_float(cursor: &mut Cursor) -> Result<f32, ParseError> {
    let mut mantissa = 0i32;
    let mut mantissa_digits = 0u32;
    let mut mantissa_read = false;
    let mut exponent_adjust = 0i32;
    let mut positive = true;
    match cursor.current() {
        Some('-') => {
            positive = false;
            cursor.advance();
        }
        Some('+') => cursor.advance(),
        _ => {}
    }
    // Integer part
    match cursor.current() {
        Some('.') => {}
        Some('0'..='9') => {
            mantissa_read = true;
            while cursor.current() == Some('0') {
                cursor.advance();
            }
            while let Some(digit) = cursor.digit() {
                if mantissa_digits < MAX_MANTISSA_DIGITS {
                    mantissa_digits += 1;
                    mantissa = mantissa * 10 + digit;
                } else {
                    exponent_adjust = exponent_adjust.saturating_add(1);
                }
                cursor.advance();
            }
        }
        _ => return Err(cursor.unexpected()),
    }
    // Fractional part
    if cursor.current() == Some('.') {
        cursor.advance();
        if cursor.digit().is_none() {
            if !mantissa_read {
                return Err(cursor.unexpected());
            }
        } else {
            mantissa_read = true;
            if mantissa_digits == 0 {
                // Leading zeros only shift the decimal point
                while cursor.current() == Some('0') {
                    exponent_adjust = exponent_adjust.saturating_sub(1);
                    cursor.advance();
                }
            }
            while let Some(digit) = cursor.digit() {
                if mantissa_digits < MAX_MANTISSA_DIGITS {
                    mantissa_digits += 1;
                    mantissa = mantissa * 10 + digit;
                    exponent_adjust = exponent_adjust.saturating_sub(1);
                }
                cursor.advance();
            }
        }
    }
    debug_assert!(mantissa_read);
    // Exponent
    let mut exponent = 0i32;
    if matches!(cursor.current(), Some('e' | 'E')) {
        cursor.advance();
        let mut exponent_positive = true;
        match cursor.current() {
            Some('-') => {
                exponent_positive = false;
                cursor.advance();
            }
            Some('+') => cursor.advance(),
            _ => {}
        }
        if cursor.digit().is_none() {
            return Err(cursor.unexpected());
        }
        while cursor.current() == Some('0') {
            cursor.advance();
        }
        let mut exponent_digits = 0;
        while let Some(digit) = cursor.digit() {
            if exponent_digits < MAX_EXPONENT_DIGITS {
                exponent_digits += 1;
                exponent = exponent * 10 + digit;
            }
            cursor.advance();
        }
        if !exponent_positive {
            exponent = -exponent;
        }
    }
    if !positive {
        mantissa = -mantissa;
    }
    Ok(build_float(mantissa, exponent.saturating_add(exponent_adjust)))
}
