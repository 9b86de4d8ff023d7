// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Non-fatal decode diagnostics
//!
//! Every recoverable failure while decoding a transaction is recorded here
//! instead of being returned as an error. Callers may count, log or ignore them.
//!
//! ```rust
//! use routescan::{DecodeDiagnostics, Diagnostic};
//!
//! let mut diagnostics = DecodeDiagnostics::default();
//! diagnostics.push(Diagnostic::UnknownCommand { depth: 0, index: 2, byte: 0x3e });
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics.unknown_commands(), 1);
//! assert_eq!(diagnostics.failed_commands(), 0);
//! ```

use crate::errors::{CalldataError, CommandDecodeError};

/// One recoverable problem found while decoding a transaction
#[derive(Debug, thiserror::Error)]
pub enum Diagnostic {
    /// The top-level call is not a router `execute` call
    #[error("Invalid router calldata: {0}")]
    InvalidCalldata(#[source] CalldataError),

    /// A command's parameters failed to decode; its action was omitted
    #[error("Command {index} at depth {depth} failed: {error}")]
    CommandFailed {
        /// Nesting depth of the command stream, 0 for the top level
        depth: usize,
        /// Position of the command in its stream
        index: usize,
        /// Underlying decode error
        #[source]
        error: CommandDecodeError,
    },

    /// A command byte outside the command table was skipped
    #[error("Unknown command 0x{byte:02x} at index {index}, depth {depth}")]
    UnknownCommand {
        /// Nesting depth of the command stream
        depth: usize,
        /// Position of the command in its stream
        index: usize,
        /// Raw command byte, flags included
        byte: u8,
    },

    /// `commands` and `inputs` differ in length
    #[error("Stream at depth {depth} has {commands} commands but {inputs} inputs")]
    LengthMismatch {
        /// Nesting depth of the command stream
        depth: usize,
        /// Number of command bytes
        commands: usize,
        /// Number of input blobs
        inputs: usize,
    },

    /// Inputs ran out before the commands did; the remaining commands were not decoded
    #[error("Inputs exhausted at command {index} of {commands}, depth {depth}")]
    InputsExhausted {
        /// Nesting depth of the command stream
        depth: usize,
        /// First command left undecoded
        index: usize,
        /// Number of command bytes in the stream
        commands: usize,
    },
}

/// Diagnostics collected while decoding one transaction
#[derive(Debug, Default)]
pub struct DecodeDiagnostics {
    entries: Vec<Diagnostic>,
}

impl DecodeDiagnostics {
    /// Record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether decoding was clean
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded diagnostics in the order they occurred
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Number of commands whose action was omitted because decoding failed
    pub fn failed_commands(&self) -> usize {
        self.count(|d| matches!(d, Diagnostic::CommandFailed { .. }))
    }

    /// Number of unrecognized command bytes skipped
    pub fn unknown_commands(&self) -> usize {
        self.count(|d| matches!(d, Diagnostic::UnknownCommand { .. }))
    }

    /// Whether any command stream was cut short
    pub fn truncated(&self) -> bool {
        self.entries
            .iter()
            .any(|d| matches!(d, Diagnostic::InputsExhausted { .. }))
    }

    fn count(&self, predicate: impl Fn(&Diagnostic) -> bool) -> usize {
        self.entries.iter().filter(|d| predicate(d)).count()
    }
}

impl IntoIterator for DecodeDiagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeDiagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
