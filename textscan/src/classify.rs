// SPDX-License-Identifier: Apache-2.0

//! Single-byte character classes used by the scanner.
//!
//! These are plain ASCII predicates. Bytes above 0x7F never match any class
//! other than [`is_in`].

/// Tab, space, carriage return or line feed.
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b' ' | b'\r' | b'\n')
}

/// Carriage return or line feed.
pub const fn is_end_of_line(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

/// Decimal digit `0`-`9`.
pub const fn is_numeric(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// ASCII letter.
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Returns true if `byte` appears anywhere in `set`.
pub fn is_in(set: &[u8], byte: u8) -> bool {
    set.contains(&byte)
}

/// Hex digit value, or `None` for anything outside `0-9a-fA-F`.
pub(crate) const fn hex_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        _ => None,
    }
}
