// SPDX-License-Identifier: Apache-2.0

use crate::FormatError;

/// A bounded writer over a caller-provided byte buffer.
///
/// Every write is checked against `limit`, which is at most the length of the
/// underlying slice. One byte is always held back for the NUL terminator
/// written by [`AsciiBuffer::finish`].
#[derive(Debug)]
pub(crate) struct AsciiBuffer<'a> {
    buf: &'a mut [u8],
    len: usize,
    limit: usize,
}

impl<'a> AsciiBuffer<'a> {
    /// Wraps `buf`, never writing past `limit` bytes of it.
    pub fn new(buf: &'a mut [u8], limit: usize) -> Self {
        let limit = limit.min(buf.len());
        Self { buf, len: 0, limit }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Usable capacity, terminator included.
    pub fn capacity(&self) -> usize {
        self.limit
    }

    pub fn last(&self) -> Option<u8> {
        self.len
            .checked_sub(1)
            .and_then(|i| self.buf.get(i))
            .copied()
    }

    /// Appends a single byte, leaving room for the terminator.
    pub fn push(&mut self, byte: u8) -> Result<(), FormatError> {
        if self.len + 1 >= self.limit {
            return Err(FormatError::BufferFull);
        }
        let slot = self.buf.get_mut(self.len).ok_or(FormatError::BufferFull)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }

    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), FormatError> {
        for &b in bytes {
            self.push(b)?;
        }
        Ok(())
    }

    /// Drops trailing `0` digits after the decimal point at `dot`, and the
    /// point itself if no digits remain.
    pub fn trim_fraction(&mut self, dot: usize) {
        while self.len > dot + 1 && self.last() == Some(b'0') {
            self.len -= 1;
        }
        if self.len == dot + 1 {
            self.len = dot;
        }
    }

    /// Writes the NUL terminator and returns the length excluding it.
    pub fn finish(self) -> Result<usize, FormatError> {
        if self.len >= self.limit {
            return Err(FormatError::BufferFull);
        }
        let slot = self.buf.get_mut(self.len).ok_or(FormatError::BufferFull)?;
        *slot = 0;
        Ok(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_limit() {
        let mut storage = [0xFFu8; 8];
        let mut out = AsciiBuffer::new(&mut storage, 4);
        assert_eq!(out.capacity(), 4);
        assert_eq!(out.extend(b"abc"), Ok(()));
        // Fourth byte is reserved for the terminator
        assert_eq!(out.push(b'd'), Err(FormatError::BufferFull));
        assert_eq!(out.finish(), Ok(3));
        assert_eq!(&storage[..5], b"abc\0\xFF");
    }

    #[test]
    fn test_limit_clamped_to_slice() {
        let mut storage = [0u8; 2];
        let mut out = AsciiBuffer::new(&mut storage, 32);
        assert_eq!(out.capacity(), 2);
        assert_eq!(out.push(b'x'), Ok(()));
        assert_eq!(out.push(b'y'), Err(FormatError::BufferFull));
    }

    #[test]
    fn test_trim_fraction() {
        let mut storage = [0u8; 16];
        let mut out = AsciiBuffer::new(&mut storage, 16);
        out.extend(b"12.500").unwrap();
        out.trim_fraction(2);
        assert_eq!(out.len(), 4);
        assert_eq!(out.last(), Some(b'5'));

        let mut storage = [0u8; 16];
        let mut out = AsciiBuffer::new(&mut storage, 16);
        out.extend(b"10.000").unwrap();
        out.trim_fraction(2);
        assert_eq!(out.finish(), Ok(2));
        assert_eq!(&storage[..3], b"10\0");
    }
}
