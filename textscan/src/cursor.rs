// SPDX-License-Identifier: Apache-2.0

//! Cursor engine.
//!
//! Every function takes the whole buffer plus a cursor offset and returns a new
//! offset. The end bound is always `bytes.len()`, and no function returns an
//! offset past it. Misses are reported through sentinel positions: the end of
//! the buffer for forward scans, the unchanged cursor for [`expect`], `None` for
//! backward scans.

use log::trace;

use crate::classify::{is_alpha, is_end_of_line, is_in, is_numeric, is_whitespace};

/// Bytes accepted in namespaced identifiers besides letters, digits and the
/// namespace separator.
const NAMESPACE_EXTRA: &[u8] = b"$^_";

/// Location of an extracted token within the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn empty(at: usize) -> Self {
        Span { start: at, len: 0 }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Contract check shared by every engine function: a cursor past the end of
/// its buffer is a caller bug and panics.
#[track_caller]
#[inline]
pub(crate) fn check_cursor(bytes: &[u8], pos: usize) {
    assert!(
        pos <= bytes.len(),
        "cursor {pos} is outside of a {}-byte range",
        bytes.len()
    );
}

/// Returns the bytes from `pos` to the end of the buffer.
#[track_caller]
#[inline]
pub(crate) fn remainder(bytes: &[u8], pos: usize) -> &[u8] {
    check_cursor(bytes, pos);
    bytes.get(pos..).unwrap_or_default()
}

/// First occurrence of `delim` at or after `pos`, else the end.
pub(crate) fn scan_for_character(bytes: &[u8], pos: usize, delim: u8) -> usize {
    remainder(bytes, pos)
        .iter()
        .position(|&b| b == delim)
        .map_or(bytes.len(), |i| pos + i)
}

/// Index of the last `delim` in `start..=pos`, searching backwards from `pos`.
#[track_caller]
pub(crate) fn scan_backwards_for_character(
    bytes: &[u8],
    pos: usize,
    start: usize,
    delim: u8,
) -> Option<usize> {
    backwards_window(bytes, pos, start)
        .iter()
        .rposition(|&b| b == delim)
        .map(|i| start + i)
}

/// Index of the last whitespace byte in `start..=pos`, searching backwards.
#[track_caller]
pub(crate) fn scan_backwards_for_whitespace(bytes: &[u8], pos: usize, start: usize) -> Option<usize> {
    backwards_window(bytes, pos, start)
        .iter()
        .rposition(|&b| is_whitespace(b))
        .map(|i| start + i)
}

#[track_caller]
fn backwards_window(bytes: &[u8], pos: usize, start: usize) -> &[u8] {
    assert!(start <= pos, "backward scan bound {start} is past cursor {pos}");
    match bytes.get(start..=pos) {
        Some(window) => window,
        None => panic!(
            "backward scan cursor {pos} does not index a {}-byte range",
            bytes.len()
        ),
    }
}

/// One past the first whitespace byte at or after `pos`.
///
/// Long-standing behavior callers depend on: the returned cursor already sits
/// after the whitespace that stopped the scan. With no whitespace in range the
/// result is the end of the buffer.
pub(crate) fn scan_for_whitespace(bytes: &[u8], pos: usize) -> usize {
    let rest = remainder(bytes, pos);
    let stop = pos + rest.iter().position(|&b| is_whitespace(b)).unwrap_or(rest.len());
    (stop + 1).min(bytes.len())
}

/// First non-whitespace byte at or after `pos`, else the end.
pub(crate) fn scan_for_non_whitespace(bytes: &[u8], pos: usize) -> usize {
    remainder(bytes, pos)
        .iter()
        .position(|&b| !is_whitespace(b))
        .map_or(bytes.len(), |i| pos + i)
}

/// Exclusive end of `pos..` once trailing whitespace is dropped.
pub(crate) fn scan_for_trailing_non_whitespace(bytes: &[u8], pos: usize) -> usize {
    remainder(bytes, pos)
        .iter()
        .rposition(|&b| !is_whitespace(b))
        .map_or(pos, |i| pos + i + 1)
}

/// Next `delim` at or after `pos`. With `escapes`, a backslash skips the byte
/// after it whatever that byte is.
pub(crate) fn scan_for_quote(bytes: &[u8], pos: usize, delim: u8, escapes: bool) -> usize {
    check_cursor(bytes, pos);
    let mut cur = pos;
    while let Some(&b) = bytes.get(cur) {
        if b == b'\\' && escapes {
            cur += 1;
        } else if b == delim {
            break;
        }
        cur += 1;
    }
    cur.min(bytes.len())
}

/// Position just after the first occurrence of `needle` at or after `pos`,
/// else the end. An empty needle matches at `pos`.
pub(crate) fn scan_past_string(bytes: &[u8], pos: usize, needle: &[u8]) -> usize {
    let rest = remainder(bytes, pos);
    if needle.is_empty() {
        return pos;
    }
    rest.windows(needle.len())
        .position(|window| window == needle)
        .map_or(bytes.len(), |i| pos + i + needle.len())
}

/// Position after the next line terminator. `\r`, `\n`, `\r\n` and `\n\r`
/// each count as a single terminator.
pub(crate) fn scan_for_end_of_line(bytes: &[u8], pos: usize) -> usize {
    check_cursor(bytes, pos);
    let mut cur = pos;
    while let Some(&b) = bytes.get(cur) {
        cur += 1;
        if is_end_of_line(b) {
            let pair = if b == b'\r' { b'\n' } else { b'\r' };
            if bytes.get(cur) == Some(&pair) {
                cur += 1;
            }
            break;
        }
    }
    cur
}

/// Index of the byte followed by a line terminator, a NUL, or the end of the
/// buffer. An empty range returns `pos`.
pub(crate) fn scan_for_last_character_on_line(bytes: &[u8], pos: usize) -> usize {
    check_cursor(bytes, pos);
    let mut cur = pos;
    while cur < bytes.len() {
        match bytes.get(cur + 1) {
            None | Some(b'\r' | b'\n' | 0) => break,
            Some(_) => cur += 1,
        }
    }
    cur
}

pub(crate) fn scan_for_beginning_of_next_line(bytes: &[u8], pos: usize) -> usize {
    let next = scan_for_end_of_line(bytes, pos);
    scan_for_non_whitespace(bytes, next)
}

/// Skips one `//` or `/* */` comment starting exactly at `pos`.
///
/// Line comments end after their terminator. An unterminated block comment
/// runs to the end of the buffer. Anything else leaves the cursor unchanged.
pub(crate) fn scan_past_comment(bytes: &[u8], pos: usize) -> usize {
    match remainder(bytes, pos) {
        [b'/', b'/', ..] => scan_for_end_of_line(bytes, pos),
        [b'/', b'*', ..] => scan_past_string(bytes, pos + 2, b"*/"),
        _ => pos,
    }
}

pub(crate) fn skip_comments_and_whitespace(bytes: &[u8], pos: usize) -> usize {
    let mut cur = pos;
    loop {
        cur = scan_for_non_whitespace(bytes, cur);
        let past = scan_past_comment(bytes, cur);
        if past == cur {
            break;
        }
        trace!("skipped comment {}..{}", cur, past);
        cur = past;
    }
    scan_for_non_whitespace(bytes, cur)
}

/// Skips leading whitespace and takes everything up to `delim`. The cursor is
/// left on the delimiter.
pub(crate) fn get_token(bytes: &[u8], pos: usize, delim: u8) -> (usize, Span) {
    let start = scan_for_non_whitespace(bytes, pos);
    let stop = scan_for_character(bytes, start, delim);
    (stop, Span { start, len: stop - start })
}

/// Skips leading whitespace and takes everything up to the next whitespace.
///
/// The token excludes the whitespace, while the cursor comes from
/// [`scan_for_whitespace`] and so sits after it.
pub(crate) fn get_token_whitespace_delimited(bytes: &[u8], pos: usize) -> (usize, Span) {
    let start = scan_for_non_whitespace(bytes, pos);
    let next = scan_for_whitespace(bytes, start);
    let stop = match next.checked_sub(1).and_then(|i| bytes.get(i)) {
        Some(&b) if next > start && is_whitespace(b) => next - 1,
        _ => next,
    };
    (next, Span { start, len: stop - start })
}

fn take_accepted(bytes: &[u8], pos: usize, accept: impl Fn(u8) -> bool) -> (usize, Span) {
    let start = scan_for_non_whitespace(bytes, pos);
    let len = remainder(bytes, start)
        .iter()
        .take_while(|&&b| !is_whitespace(b) && accept(b))
        .count();
    (start + len, Span { start, len })
}

/// Letters, digits and `_`.
pub(crate) fn get_token_alphanumeric(bytes: &[u8], pos: usize) -> (usize, Span) {
    take_accepted(bytes, pos, |b| b == b'_' || is_numeric(b) || is_alpha(b))
}

/// Letters, digits and any byte of `ext`.
pub(crate) fn get_token_alphanumeric_ext(bytes: &[u8], pos: usize, ext: &[u8]) -> (usize, Span) {
    take_accepted(bytes, pos, |b| is_numeric(b) || is_alpha(b) || is_in(ext, b))
}

/// Only bytes of `ext`.
pub(crate) fn get_token_ext(bytes: &[u8], pos: usize, ext: &[u8]) -> (usize, Span) {
    take_accepted(bytes, pos, |b| is_in(ext, b))
}

/// Letters, digits, `namespace` and `$`, `^`, `_`.
pub(crate) fn get_namespaced_token_alphanumeric(
    bytes: &[u8],
    pos: usize,
    namespace: u8,
) -> (usize, Span) {
    take_accepted(bytes, pos, |b| {
        b == namespace || is_in(NAMESPACE_EXTRA, b) || is_numeric(b) || is_alpha(b)
    })
}

/// Extracts the content between the next pair of `delim` quotes.
///
/// The cursor lands after the closing quote. Without an opening quote the
/// token is empty and the cursor is the end of the buffer; without a closing
/// quote the token runs to the end.
pub(crate) fn get_string_quoted(
    bytes: &[u8],
    pos: usize,
    delim: u8,
    escapes: bool,
) -> (usize, Span) {
    let end = bytes.len();
    let open = scan_for_quote(bytes, pos, delim, escapes);
    if open >= end {
        return (end, Span::empty(end));
    }
    let start = open + 1;
    let close = scan_for_quote(bytes, start, delim, escapes);
    if close >= end {
        trace!("unterminated string opened at {}", open);
    }
    ((close + 1).min(end), Span { start, len: close - start })
}

/// `pos` advanced past `literal` if the input starts with it, else `pos`.
pub(crate) fn expect(bytes: &[u8], pos: usize, literal: &[u8]) -> usize {
    if remainder(bytes, pos).starts_with(literal) {
        pos + literal.len()
    } else {
        pos
    }
}
