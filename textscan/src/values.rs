// SPDX-License-Identifier: Apache-2.0

//! Numeric literal parsing on top of the cursor engine.
//!
//! All parsers skip leading whitespace and stop at the first byte that does not
//! fit. Overflow is not detected: integer accumulation wraps, and float parsing
//! inherits whatever the float arithmetic produces.

use crate::classify::{hex_value, is_numeric};
use crate::cursor::scan_for_non_whitespace;

/// Consumes an optional `+` or `-` at `pos`, returning the new cursor and
/// whether the value is negated.
fn take_sign(bytes: &[u8], pos: usize) -> (usize, bool) {
    match bytes.get(pos) {
        Some(b'+') => (pos + 1, false),
        Some(b'-') => (pos + 1, true),
        _ => (pos, false),
    }
}

/// Decimal integer with optional sign.
pub(crate) fn get_i32(bytes: &[u8], pos: usize) -> (usize, i32) {
    let start = scan_for_non_whitespace(bytes, pos);
    let (mut cur, negative) = take_sign(bytes, start);

    let mut value: i32 = 0;
    while let Some(&b) = bytes.get(cur) {
        if !is_numeric(b) {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(i32::from(b - b'0'));
        cur += 1;
    }

    if negative {
        value = value.wrapping_neg();
    }
    (cur, value)
}

/// [`get_i32`] truncated to 16 bits.
pub(crate) fn get_i16(bytes: &[u8], pos: usize) -> (usize, i16) {
    let (cur, value) = get_i32(bytes, pos);
    (cur, value as i16)
}

/// Unsigned decimal integer. A sign is not accepted.
pub(crate) fn get_u32(bytes: &[u8], pos: usize) -> (usize, u32) {
    let mut cur = scan_for_non_whitespace(bytes, pos);

    let mut value: u32 = 0;
    while let Some(&b) = bytes.get(cur) {
        if !is_numeric(b) {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(u32::from(b - b'0'));
        cur += 1;
    }
    (cur, value)
}

/// Hexadecimal digits in either case, without a `0x` prefix.
pub(crate) fn get_hex(bytes: &[u8], pos: usize) -> (usize, u32) {
    let mut cur = scan_for_non_whitespace(bytes, pos);

    let mut value: u32 = 0;
    while let Some(digit) = bytes.get(cur).and_then(|&b| hex_value(b)) {
        value = value.wrapping_mul(16).wrapping_add(digit);
        cur += 1;
    }
    (cur, value)
}

/// Creates a decimal float parser for a specific float type.
///
/// The integer part goes through [`get_i32`], so it wraps like any other
/// integer and may carry a sign of its own. Fraction digits are added with a
/// scale that shrinks by a factor of ten per digit, and an `e`/`E` exponent
/// multiplies by the matching power of ten.
#[cfg(feature = "float")]
macro_rules! define_float_parser {
    ($fn_name:ident, $float_ty:ty, $tenth:expr, $scale_by_pow10:ident) => {
        pub(crate) fn $fn_name(bytes: &[u8], pos: usize) -> (usize, $float_ty) {
            let start = scan_for_non_whitespace(bytes, pos);
            let (cur, negative) = take_sign(bytes, start);

            let (mut cur, int_part) = get_i32(bytes, cur);
            let mut value = int_part as $float_ty;

            if bytes.get(cur) == Some(&b'.') {
                cur += 1;
                let mut scale: $float_ty = $tenth;
                while let Some(&b) = bytes.get(cur) {
                    if !is_numeric(b) {
                        break;
                    }
                    value += <$float_ty>::from(b - b'0') * scale;
                    scale *= $tenth;
                    cur += 1;
                }
            }

            if matches!(bytes.get(cur), Some(b'e' | b'E')) {
                let (next, exponent) = get_i32(bytes, cur + 1);
                cur = next;
                value = $scale_by_pow10(value, exponent);
            }

            if negative {
                value = -value;
            }
            (cur, value)
        }
    };
}

#[cfg(feature = "float")]
fn scale_f32(value: f32, exponent: i32) -> f32 {
    value * crate::pow10::pow10(exponent) as f32
}

#[cfg(feature = "float")]
fn scale_f64(value: f64, exponent: i32) -> f64 {
    value * crate::pow10::pow10(exponent)
}

#[cfg(feature = "float")]
define_float_parser!(get_f32, f32, 0.1f32, scale_f32);
#[cfg(feature = "float")]
define_float_parser!(get_f64, f64, 0.1f64, scale_f64);
