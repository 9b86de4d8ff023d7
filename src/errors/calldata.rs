// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding the top-level router call.

/// Errors that can occur when decoding a transaction's calldata as a router `execute` call.
///
/// These mark a transaction as not applicable. They are reported as diagnostics,
/// never returned from [`parse_transaction`](crate::UniversalRouterParser::parse_transaction).
#[derive(Debug, thiserror::Error)]
pub enum CalldataError {
    /// Calldata is shorter than a 4-byte selector.
    #[error("Calldata too short for a selector: {len} bytes")]
    TooShort {
        /// Calldata length in bytes
        len: usize,
    },

    /// The selector is not one of the router's `execute` overloads.
    #[error("Unknown router selector 0x{}", alloy_primitives::hex::encode(.0))]
    UnknownSelector([u8; 4]),

    /// The selector matched but the arguments failed to decode.
    #[error("Failed to decode router call arguments")]
    Abi(#[source] alloy_sol_types::Error),
}

impl From<alloy_sol_types::Error> for CalldataError {
    fn from(error: alloy_sol_types::Error) -> Self {
        CalldataError::Abi(error)
    }
}
