// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding individual router commands.
//!
//! A `CommandDecodeError` is always local to one command: the dispatcher records
//! it, omits that hop's action and keeps decoding the rest of the stream.

use super::PathError;
use crate::router::Command;

/// Errors that can occur while decoding one command's parameter blob.
#[derive(Debug, thiserror::Error)]
pub enum CommandDecodeError {
    /// The parameter blob does not match the command's ABI schema.
    ///
    /// This preserves the original `alloy_sol_types::Error` without type erasure.
    #[error("Failed to decode {command} parameters")]
    Abi {
        /// The command whose blob failed to decode
        command: Command,
        /// Underlying ABI error
        #[source]
        source: alloy_sol_types::Error,
    },

    /// The blob decoded but its packed swap path is malformed.
    #[error("Invalid swap path in {command} parameters")]
    Path {
        /// The command whose path failed to decode
        command: Command,
        /// Underlying path error
        #[source]
        source: PathError,
    },

    /// A nested sub-plan would exceed the configured recursion bound.
    #[error("Sub-plan nesting depth {depth} exceeds limit {max}")]
    DepthExceeded {
        /// Depth the sub-plan would run at
        depth: usize,
        /// Configured maximum depth
        max: usize,
    },
}

impl CommandDecodeError {
    /// Create an `Abi` error for a specific command.
    pub fn abi(command: Command, source: alloy_sol_types::Error) -> Self {
        CommandDecodeError::Abi { command, source }
    }

    /// Create a `Path` error for a specific command.
    pub fn path(command: Command, source: PathError) -> Self {
        CommandDecodeError::Path { command, source }
    }

    /// The command this error belongs to, if any.
    pub fn command(&self) -> Option<Command> {
        match self {
            CommandDecodeError::Abi { command, .. } | CommandDecodeError::Path { command, .. } => {
                Some(*command)
            }
            CommandDecodeError::DepthExceeded { .. } => Some(Command::ExecuteSubPlan),
        }
    }
}
