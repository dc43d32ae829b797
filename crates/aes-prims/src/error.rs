//! Error type shared by the conversion helpers.

/// Failures raised by the fallible conversions and grid operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The two grids passed to an element-wise operation differ in shape.
    #[error("ShapeMismatch: {detail}")]
    ShapeMismatch {
        /// Which dimension disagreed.
        detail: String,
    },
    /// A flat sequence cannot be split into groups of `width`.
    #[error("Misaligned: length {len} is not a multiple of {width}")]
    Misaligned {
        /// Length of the offending input.
        len: usize,
        /// Group width the input had to divide into.
        width: usize,
    },
    /// The input was not valid hexadecimal.
    #[error("InvalidHex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// A bit sequence held something other than 0 or 1.
    #[error("InvalidBit: value {value} at index {index}")]
    InvalidBit {
        /// Position in the bit sequence.
        index: usize,
        /// The value found there.
        value: u8,
    },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn shape(detail: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            detail: detail.into(),
        }
    }
}
