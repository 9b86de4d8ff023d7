// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the packed swap path codec.

/// Errors that can occur when decoding or encoding a packed swap path.
///
/// # Examples
///
/// ```rust
/// use routescan::{PathError, SwapPath};
///
/// // A single token is not a swap
/// let err = SwapPath::decode(&[0x11; 20]).unwrap_err();
/// assert!(matches!(err, PathError::TooFewTokens { found: 1 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path decoded to fewer than two tokens.
    #[error("Swap path needs at least 2 tokens, found {found}")]
    TooFewTokens {
        /// Number of tokens found
        found: usize,
    },

    /// The buffer ended in the middle of a token or fee segment.
    ///
    /// Also raised when a path ends with a fee that has no following token.
    #[error(
        "Swap path truncated at byte {offset}: expected {expected} more bytes, {remaining} remain"
    )]
    Truncated {
        /// Byte offset where the incomplete segment starts
        offset: usize,
        /// Size of the segment that was expected
        expected: usize,
        /// Bytes actually left in the buffer
        remaining: usize,
    },

    /// Token and fee counts don't describe a chain of hops.
    #[error(
        "Swap path with {tokens} tokens needs {expected} fees, got {fees}",
        expected = .tokens.saturating_sub(1)
    )]
    FeeCountMismatch {
        /// Number of tokens supplied
        tokens: usize,
        /// Number of fees supplied
        fees: usize,
    },

    /// A fee value does not fit in the 3-byte fee slot.
    #[error("Fee {0} does not fit in 24 bits")]
    FeeOutOfRange(u32),
}

impl PathError {
    /// Create a `Truncated` error for a segment starting at `offset`.
    pub fn truncated(offset: usize, expected: usize, remaining: usize) -> Self {
        PathError::Truncated {
            offset,
            expected,
            remaining,
        }
    }
}
