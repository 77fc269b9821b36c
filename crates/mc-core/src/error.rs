use thiserror::Error;

/// Errors originating from the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Normalized input is shorter than the fixed 11-character layout.
    #[error("invalid model number: {len} characters after normalization, need at least {min}")]
    TooShort {
        /// Character count of the normalized input.
        len: usize,
        /// Minimum character count the layout requires.
        min: usize,
    },
}
