// SPDX-License-Identifier: Apache-2.0

//! Compact `f32` to decimal text conversion.
//!
//! Values with a magnitude in `[0.001, 999999]` are written in fixed-point with
//! up to 7 significant digits. Everything else is written as a mantissa with up
//! to 6 significant digits followed by `e` and a decimal exponent. Rounding is
//! half-up at the last digit, achieved by adding a magnitude-dependent half unit
//! before the bit pattern is decomposed.

use log::trace;

use crate::ascii_buffer::AsciiBuffer;
use crate::itoa;
use crate::pow10::{pow10, truncated_log10};
use crate::FormatError;

/// Capacity every `ftoa` output buffer must provide, terminator included.
pub const FTOA_BUFFER_SIZE: usize = 32;

const FIXED_PRECISION: i32 = 7;
const SCIENTIFIC_PRECISION: i32 = 6;

const LOWER_FIXED_LIMIT: f32 = 0.001;
const UPPER_FIXED_LIMIT: f32 = 999_999.0;

const POSITIVE_INFINITY_BITS: u32 = 0x7F80_0000;
const NEGATIVE_INFINITY_BITS: u32 = 0xFF80_0000;

const SIGN_MASK: u32 = 0x8000_0000;
const FRACTION_MASK: u32 = 0x00FF_FFFF;
const IMPLICIT_BIT: u32 = 0x0080_0000;
const FRACTION_BITS: u32 = 24;

/// Upper bounds of the decimal magnitude buckets, `< 1e-5` up to `< 1e6`.
const DECADE_BOUNDS: [f64; 12] = [
    1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6,
];

/// Half a unit in the last place, indexed by bucket and precision.
const ROUNDING_SUMMANDS: [f32; 12] = [
    0.5e-11, 0.5e-10, 0.5e-9, 0.5e-8, 0.5e-7, 0.5e-6, 0.5e-5, 0.5e-4, 0.5e-3, 0.5e-2, 0.5e-1,
    0.5e0,
];

/// Formats `value` into `buffer` and NUL-terminates it.
///
/// Returns the number of bytes written, excluding the terminator.
///
/// # Errors
/// [`FormatError::BufferTooSmall`] if `buffer` is shorter than
/// [`FTOA_BUFFER_SIZE`]. The other variants are never produced for a
/// full-size buffer.
///
/// # Examples
/// ```
/// let mut buf = [0u8; textscan::FTOA_BUFFER_SIZE];
/// let n = textscan::ftoa(3.14159, &mut buf).unwrap();
/// assert_eq!(&buf[..n], b"3.14159");
/// assert_eq!(buf[n], 0);
/// ```
pub fn ftoa(value: f32, buffer: &mut [u8]) -> Result<usize, FormatError> {
    if buffer.len() < FTOA_BUFFER_SIZE {
        return Err(FormatError::BufferTooSmall {
            required: FTOA_BUFFER_SIZE,
            provided: buffer.len(),
        });
    }
    let mut out = AsciiBuffer::new(buffer, FTOA_BUFFER_SIZE);
    let bits = value.to_bits();

    if value == 0.0 {
        out.push(b'0')?;
    } else if value.is_nan() {
        out.extend(b"NaN")?;
    } else if bits == POSITIVE_INFINITY_BITS {
        out.extend(b"INF")?;
    } else if bits == NEGATIVE_INFINITY_BITS {
        out.extend(b"-INF")?;
    } else if needs_exponent(value) {
        write_scientific(value, &mut out)?;
    } else {
        write_fixed(value, &mut out, FIXED_PRECISION)?;
    }

    out.finish()
}

fn needs_exponent(value: f32) -> bool {
    (value > 0.0 && (value > UPPER_FIXED_LIMIT || value < LOWER_FIXED_LIMIT))
        || (value < 0.0 && (value > -LOWER_FIXED_LIMIT || value < -UPPER_FIXED_LIMIT))
}

fn magnitude(value: f32) -> f32 {
    f32::from_bits(value.to_bits() & !SIGN_MASK)
}

fn write_scientific(value: f32, out: &mut AsciiBuffer<'_>) -> Result<(), FormatError> {
    let mut exp10 = truncated_log10(f64::from(magnitude(value)));
    if exp10 < 0 {
        exp10 -= 1;
    }
    // Scale in f64 so subnormal inputs do not overflow the factor
    let mantissa = (f64::from(value) * pow10(-exp10)) as f32;
    trace!("ftoa: {value:e} -> mantissa {mantissa} exponent {exp10}");

    write_fixed(mantissa, out, SCIENTIFIC_PRECISION)?;
    out.push(b'e')?;
    itoa::write_i32(out, exp10)?;
    Ok(())
}

/// Picks the rounding half unit for `value` at `precision` significant digits.
///
/// Returns the signed summand and the decimal position of the leading digit
/// (`-6` for anything below 1e-5, `0` for values at or above 1e6).
fn rounding_summand(value: f32, precision: i32) -> (f32, i32) {
    let abs = f64::from(magnitude(value));
    let decimal_pos = DECADE_BOUNDS
        .iter()
        .position(|&bound| abs < bound)
        .map_or(0, |bucket| bucket as i32 - 6);

    let index = (decimal_pos + 12 - precision).clamp(0, ROUNDING_SUMMANDS.len() as i32 - 1);
    let summand = ROUNDING_SUMMANDS[index as usize];
    (if value > 0.0 { summand } else { -summand }, decimal_pos)
}

/// Writes `value` without an exponent, rounded to `precision` significant digits.
fn write_fixed(
    value: f32,
    out: &mut AsciiBuffer<'_>,
    precision: i32,
) -> Result<(), FormatError> {
    let (summand, decimal_pos) = rounding_summand(value, precision);
    let mut max_length = precision;
    if decimal_pos < 0 {
        // Leading zeros after the point do not count as significant
        max_length -= decimal_pos;
    }

    let bits = (value + summand).to_bits();
    let exp2 = ((bits >> 23) & 0xFF) as i32 - 127;
    let mantissa = (bits & FRACTION_MASK) | IMPLICIT_BIT;

    // Split into integer part and a 24-bit fixed-point fraction
    let (int_part, mut frac_part): (u128, u32) = if exp2 >= 23 {
        if exp2 > 127 {
            return Err(FormatError::ValueOutOfRange);
        }
        (u128::from(mantissa) << (exp2 - 23), 0)
    } else if exp2 >= 0 {
        (
            u128::from(mantissa >> (23 - exp2)),
            (mantissa << (exp2 + 1)) & FRACTION_MASK,
        )
    } else {
        let shift = (-(exp2 + 1)) as u32;
        (
            0,
            (mantissa & FRACTION_MASK).checked_shr(shift).unwrap_or(0),
        )
    };

    if bits & SIGN_MASK != 0 {
        out.push(b'-')?;
        max_length += 1;
    }

    if int_part == 0 {
        out.push(b'0')?;
    } else {
        itoa::write_u128(out, int_part)?;
    }

    let int_len = out.len() as i32;
    if frac_part != 0 && max_length > int_len {
        out.push(b'.')?;
        let dot = out.len() - 1;
        let room = out.capacity() as i32 - out.len() as i32 - 1;
        let max = room.min(max_length);
        for _ in int_len..max {
            frac_part *= 10;
            out.push(b'0' + (frac_part >> FRACTION_BITS) as u8)?;
            frac_part &= FRACTION_MASK;
        }
        out.trim_fraction(dot);
    }
    Ok(())
}

/// Displays an `f32` through [`ftoa`].
///
/// ```
/// use textscan::CompactFloat;
/// assert_eq!(format!("{}", CompactFloat(1234567.0)), "1.23457e6");
/// assert_eq!(format!("{}", CompactFloat(-0.5)), "-0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactFloat(pub f32);

impl core::fmt::Display for CompactFloat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buf = [0u8; FTOA_BUFFER_SIZE];
        let len = ftoa(self.0, &mut buf)?;
        // ftoa only emits ASCII
        let text = buf
            .get(..len)
            .and_then(|b| core::str::from_utf8(b).ok())
            .ok_or(core::fmt::Error)?;
        f.pad(text)
    }
}
