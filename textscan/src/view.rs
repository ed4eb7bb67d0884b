// SPDX-License-Identifier: Apache-2.0

use crate::cursor::{self, Span};
use crate::values;

/// A borrowed view into a byte buffer.
///
/// All scanning is done through methods on this type. Each method returns the
/// view that remains after the scan, so calls chain naturally, and token
/// extraction additionally returns the token as another `TextView` borrowing
/// the same buffer. Nothing is copied or allocated.
///
/// # Examples
/// ```
/// use textscan::TextView;
///
/// let input = TextView::from("  width = 640 // pixels");
/// let (rest, key) = input.get_token_alphanumeric();
/// let rest = rest.skip_comments_and_whitespace().expect("=");
/// let (rest, width) = rest.get_i32();
///
/// assert_eq!(key, "width");
/// assert_eq!(width, 640);
/// assert!(rest.skip_comments_and_whitespace().is_empty());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextView<'a> {
    bytes: &'a [u8],
}

impl<'a> TextView<'a> {
    /// Creates a view over `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the view as `&str` if it holds valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, core::str::Utf8Error> {
        core::str::from_utf8(self.bytes)
    }

    /// The view starting at offset `pos`.
    fn advance(&self, pos: usize) -> TextView<'a> {
        cursor::check_cursor(self.bytes, pos);
        TextView::new(self.bytes.get(pos..).unwrap_or_default())
    }

    fn span(&self, span: Span) -> TextView<'a> {
        TextView::new(self.bytes.get(span.start..span.end()).unwrap_or_default())
    }

    fn with_token(&self, (next, span): (usize, Span)) -> (TextView<'a>, TextView<'a>) {
        (self.advance(next), self.span(span))
    }

    // --- Scanning ---

    /// Advances to the first `delim`, or to the end if there is none.
    pub fn scan_for_character(self, delim: u8) -> TextView<'a> {
        self.advance(cursor::scan_for_character(self.bytes, 0, delim))
    }

    /// Searches backwards from the last byte for `delim` and returns the view
    /// starting there.
    pub fn scan_backwards_for_character(self, delim: u8) -> Option<TextView<'a>> {
        let last = self.bytes.len().checked_sub(1)?;
        cursor::scan_backwards_for_character(self.bytes, last, 0, delim).map(|i| self.advance(i))
    }

    /// Advances one byte past the first whitespace byte.
    ///
    /// Note the extra byte: the result does not start with the whitespace that
    /// stopped the scan but with whatever follows it. Without whitespace the
    /// result is empty.
    pub fn scan_for_whitespace(self) -> TextView<'a> {
        self.advance(cursor::scan_for_whitespace(self.bytes, 0))
    }

    /// Searches backwards from the last byte for whitespace and returns the
    /// view starting there.
    pub fn scan_backwards_for_whitespace(self) -> Option<TextView<'a>> {
        let last = self.bytes.len().checked_sub(1)?;
        cursor::scan_backwards_for_whitespace(self.bytes, last, 0).map(|i| self.advance(i))
    }

    /// Skips leading whitespace.
    pub fn scan_for_non_whitespace(self) -> TextView<'a> {
        self.advance(cursor::scan_for_non_whitespace(self.bytes, 0))
    }

    /// Drops trailing whitespace.
    pub fn scan_for_trailing_non_whitespace(self) -> TextView<'a> {
        let end = cursor::scan_for_trailing_non_whitespace(self.bytes, 0);
        TextView::new(self.bytes.get(..end).unwrap_or_default())
    }

    /// Advances to the next `delim` not preceded by a backslash when
    /// `recognize_escapes` is set.
    pub fn scan_for_quote(self, delim: u8, recognize_escapes: bool) -> TextView<'a> {
        self.advance(cursor::scan_for_quote(self.bytes, 0, delim, recognize_escapes))
    }

    /// Advances past the first occurrence of `needle`, or to the end.
    pub fn scan_past_string(self, needle: impl AsRef<[u8]>) -> TextView<'a> {
        self.advance(cursor::scan_past_string(self.bytes, 0, needle.as_ref()))
    }

    /// Advances past the next line terminator.
    pub fn scan_for_end_of_line(self) -> TextView<'a> {
        self.advance(cursor::scan_for_end_of_line(self.bytes, 0))
    }

    /// Like [`TextView::scan_for_end_of_line`], also returning the skipped
    /// line with its terminator.
    pub fn scan_for_end_of_line_with_skipped(self) -> (TextView<'a>, TextView<'a>) {
        let next = cursor::scan_for_end_of_line(self.bytes, 0);
        (self.advance(next), self.span(Span { start: 0, len: next }))
    }

    /// Advances to the last byte before a line terminator or NUL.
    pub fn scan_for_last_character_on_line(self) -> TextView<'a> {
        self.advance(cursor::scan_for_last_character_on_line(self.bytes, 0))
    }

    /// Advances to the first non-whitespace byte after the next line terminator.
    pub fn scan_for_beginning_of_next_line(self) -> TextView<'a> {
        self.advance(cursor::scan_for_beginning_of_next_line(self.bytes, 0))
    }

    /// Skips a `//` or `/* */` comment at the start of the view.
    pub fn scan_past_comment(self) -> TextView<'a> {
        self.advance(cursor::scan_past_comment(self.bytes, 0))
    }

    pub fn skip_comments_and_whitespace(self) -> TextView<'a> {
        self.advance(cursor::skip_comments_and_whitespace(self.bytes, 0))
    }

    /// Advances past `literal` if the view starts with it, otherwise returns
    /// the view unchanged.
    pub fn expect(self, literal: impl AsRef<[u8]>) -> TextView<'a> {
        self.advance(cursor::expect(self.bytes, 0, literal.as_ref()))
    }

    // --- Tokens ---

    /// Skips whitespace and takes everything up to `delim`. The remaining
    /// view starts at the delimiter.
    pub fn get_token(self, delim: u8) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_token(self.bytes, 0, delim))
    }

    /// Skips whitespace and takes everything up to the next whitespace. The
    /// remaining view starts after that whitespace byte.
    pub fn get_token_whitespace_delimited(self) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_token_whitespace_delimited(self.bytes, 0))
    }

    /// Letters, digits and `_`.
    pub fn get_token_alphanumeric(self) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_token_alphanumeric(self.bytes, 0))
    }

    /// Letters, digits and any byte of `ext`.
    pub fn get_token_alphanumeric_ext(self, ext: impl AsRef<[u8]>) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_token_alphanumeric_ext(self.bytes, 0, ext.as_ref()))
    }

    /// Only bytes of `ext`.
    pub fn get_token_ext(self, ext: impl AsRef<[u8]>) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_token_ext(self.bytes, 0, ext.as_ref()))
    }

    /// Letters, digits, `namespace` and `$`, `^`, `_`.
    pub fn get_namespaced_token_alphanumeric(self, namespace: u8) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_namespaced_token_alphanumeric(self.bytes, 0, namespace))
    }

    /// Content of the next `"`-quoted string.
    pub fn get_string(self, recognize_escapes: bool) -> (TextView<'a>, TextView<'a>) {
        self.get_string_quoted(b'"', recognize_escapes)
    }

    /// Content of the next string quoted with `delim`.
    ///
    /// Without an opening quote the token is empty and the remaining view is
    /// empty too. Escape sequences are left as they are in the token.
    pub fn get_string_quoted(self, delim: u8, recognize_escapes: bool) -> (TextView<'a>, TextView<'a>) {
        self.with_token(cursor::get_string_quoted(self.bytes, 0, delim, recognize_escapes))
    }

    // --- Values ---

    /// Signed decimal integer; overflow wraps.
    pub fn get_i32(self) -> (TextView<'a>, i32) {
        let (next, value) = values::get_i32(self.bytes, 0);
        (self.advance(next), value)
    }

    /// Signed decimal integer, parsed as `i32` and truncated.
    pub fn get_i16(self) -> (TextView<'a>, i16) {
        let (next, value) = values::get_i16(self.bytes, 0);
        (self.advance(next), value)
    }

    /// Unsigned decimal integer; overflow wraps.
    pub fn get_u32(self) -> (TextView<'a>, u32) {
        let (next, value) = values::get_u32(self.bytes, 0);
        (self.advance(next), value)
    }

    /// Hexadecimal integer without prefix; overflow wraps.
    pub fn get_hex(self) -> (TextView<'a>, u32) {
        let (next, value) = values::get_hex(self.bytes, 0);
        (self.advance(next), value)
    }

    #[cfg(feature = "float")]
    pub fn get_f32(self) -> (TextView<'a>, f32) {
        let (next, value) = values::get_f32(self.bytes, 0);
        (self.advance(next), value)
    }

    #[cfg(feature = "float")]
    pub fn get_f64(self) -> (TextView<'a>, f64) {
        let (next, value) = values::get_f64(self.bytes, 0);
        (self.advance(next), value)
    }

    // --- Whole-view helpers ---

    /// Drops whitespace from both ends.
    pub fn strip(self) -> TextView<'a> {
        self.scan_for_non_whitespace().scan_for_trailing_non_whitespace()
    }

    /// Splits on every `splitter` byte.
    ///
    /// Empty segments between splitters are kept, but an empty segment after
    /// the last splitter is dropped.
    ///
    /// ```
    /// use textscan::TextView;
    ///
    /// let parts: Vec<_> = TextView::from("a,,b,").split(b',').collect();
    /// assert_eq!(parts, ["a", "", "b"]);
    /// ```
    pub fn split(self, splitter: u8) -> Split<'a> {
        Split {
            rest: self.bytes,
            splitter,
        }
    }
}

impl<'a> From<&'a [u8]> for TextView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        TextView::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for TextView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        TextView::new(bytes)
    }
}

impl<'a> From<&'a str> for TextView<'a> {
    fn from(text: &'a str) -> Self {
        TextView::new(text.as_bytes())
    }
}

impl AsRef<[u8]> for TextView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq<str> for TextView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for TextView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for TextView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for TextView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl core::fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("TextView(\"")?;
        for &b in self.bytes {
            write!(f, "{}", core::ascii::escape_default(b))?;
        }
        f.write_str("\")")
    }
}

/// Iterator returned by [`TextView::split`].
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: &'a [u8],
    splitter: u8,
}

impl<'a> Iterator for Split<'a> {
    type Item = TextView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.iter().position(|&b| b == self.splitter) {
            Some(at) => {
                let (segment, tail) = self.rest.split_at(at);
                self.rest = tail.get(1..).unwrap_or_default();
                Some(TextView::new(segment))
            }
            None => {
                let segment = core::mem::take(&mut self.rest);
                Some(TextView::new(segment))
            }
        }
    }
}

impl core::iter::FusedIterator for Split<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_chain() {
        let view = TextView::from("  key: value  ");
        let (rest, key) = view.get_token(b':');
        assert_eq!(key, "key");
        assert_eq!(rest, ": value  ");
        let rest = rest.expect(":");
        assert_eq!(rest.strip(), "value");
    }

    #[test]
    fn test_expect_mismatch_keeps_view() {
        let view = TextView::from("abc");
        assert_eq!(view.expect("abd"), view);
        assert_eq!(view.expect("abcd"), view);
        assert_eq!(view.expect("ab"), "c");
    }

    #[test]
    fn test_backward_scans_on_empty_view() {
        let view = TextView::default();
        assert_eq!(view.scan_backwards_for_character(b','), None);
        assert_eq!(view.scan_backwards_for_whitespace(), None);
    }

    #[test]
    fn test_backward_scans() {
        let view = TextView::from("path/to/file name");
        assert_eq!(view.scan_backwards_for_character(b'/'), Some(TextView::from("/file name")));
        assert_eq!(view.scan_backwards_for_whitespace(), Some(TextView::from(" name")));
        assert_eq!(view.scan_backwards_for_character(b'#'), None);
    }

    #[test]
    fn test_end_of_line_with_skipped() {
        let (rest, line) = TextView::from("first\r\nsecond").scan_for_end_of_line_with_skipped();
        assert_eq!(line, "first\r\n");
        assert_eq!(rest, "second");
    }

    #[test]
    fn test_strip() {
        assert_eq!(TextView::from(" \t padded \r\n").strip(), "padded");
        assert_eq!(TextView::from("   ").strip(), "");
        assert_eq!(TextView::from("").strip(), "");
    }

    #[test]
    fn test_split_segments() {
        let parts: Vec<_> = TextView::from("a,,b,").split(b',').collect();
        assert_eq!(parts, ["a", "", "b"]);

        let parts: Vec<_> = TextView::from(",a").split(b',').collect();
        assert_eq!(parts, ["", "a"]);

        let parts: Vec<_> = TextView::from(",").split(b',').collect();
        assert_eq!(parts, [""]);

        assert_eq!(TextView::from("").split(b',').count(), 0);
        assert_eq!(TextView::from("abc").split(b',').count(), 1);
    }

    #[test]
    fn test_debug_escapes_bytes() {
        let view = TextView::from(&b"a\"\n\xff"[..]);
        assert_eq!(format!("{view:?}"), r#"TextView("a\"\n\xff")"#);
    }

    #[test]
    fn test_comparisons() {
        let apple = TextView::from("apple");
        assert_eq!(apple, "apple");
        assert_eq!(apple, b"apple"[..]);
        assert!(apple < TextView::from("apples"));
        assert!(TextView::from("Zebra") < apple);
        assert!(TextView::default() < apple);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(TextView::from("ok").as_str(), Ok("ok"));
        assert!(TextView::from(&b"\xc3"[..]).as_str().is_err());
    }
}
