// SPDX-License-Identifier: Apache-2.0

//! Base-10 integer to ASCII conversion into an [`AsciiBuffer`].

use crate::ascii_buffer::AsciiBuffer;
use crate::FormatError;

// u128::MAX has 39 decimal digits
const MAX_DIGITS: usize = 39;

/// Writes the decimal digits of `value`, returning how many were written.
pub(crate) fn write_u128(out: &mut AsciiBuffer<'_>, value: u128) -> Result<usize, FormatError> {
    let mut digits = [0u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;
    let mut rest = value;
    loop {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    out.extend(&digits[start..])?;
    Ok(MAX_DIGITS - start)
}

/// Writes `value` with a leading `-` when negative.
pub(crate) fn write_i32(out: &mut AsciiBuffer<'_>, value: i32) -> Result<usize, FormatError> {
    let mut written = 0;
    if value < 0 {
        out.push(b'-')?;
        written += 1;
    }
    Ok(written + write_u128(out, u128::from(value.unsigned_abs()))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_i32(value: i32) -> std::string::String {
        let mut storage = [0u8; 16];
        let mut out = AsciiBuffer::new(&mut storage, 16);
        let n = write_i32(&mut out, value).unwrap();
        assert_eq!(out.len(), n);
        std::string::String::from_utf8(storage[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_write_i32() {
        assert_eq!(render_i32(0), "0");
        assert_eq!(render_i32(7), "7");
        assert_eq!(render_i32(-45), "-45");
        assert_eq!(render_i32(i32::MAX), "2147483647");
        assert_eq!(render_i32(i32::MIN), "-2147483648");
    }

    #[test]
    fn test_write_u128_extremes() {
        let mut storage = [0u8; 48];
        let mut out = AsciiBuffer::new(&mut storage, 48);
        assert_eq!(write_u128(&mut out, u128::MAX), Ok(39));
        assert_eq!(
            &storage[..39],
            b"340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_write_overflow_reports_full() {
        let mut storage = [0u8; 4];
        let mut out = AsciiBuffer::new(&mut storage, 4);
        assert_eq!(write_u128(&mut out, 12345), Err(FormatError::BufferFull));
    }
}
