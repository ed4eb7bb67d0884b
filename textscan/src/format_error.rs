// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while formatting a float into a caller buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The caller buffer is shorter than [`crate::FTOA_BUFFER_SIZE`].
    BufferTooSmall { required: usize, provided: usize },
    /// A write would have gone past the usable capacity of the buffer.
    BufferFull,
    /// The integer part of the value does not fit the digit generator.
    ValueOutOfRange,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::BufferTooSmall { required, provided } => write!(
                f,
                "output buffer too small: {provided} bytes provided, {required} required"
            ),
            _ => write!(f, "{self:?}"),
        }
    }
}

impl From<FormatError> for core::fmt::Error {
    fn from(_: FormatError) -> Self {
        core::fmt::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FormatError::BufferTooSmall {
            required: 32,
            provided: 4,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too small: 4 bytes provided, 32 required"
        );
        assert_eq!(FormatError::BufferFull.to_string(), "BufferFull");
    }

    #[test]
    fn test_into_fmt_error() {
        let err: core::fmt::Error = FormatError::ValueOutOfRange.into();
        assert_eq!(err, core::fmt::Error);
    }
}
