// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the routescan library.
//!
//! This module provides strongly-typed errors for every decoding stage.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling (`PathError`,
//!   `CommandDecodeError`, `CalldataError`)
//! - **Unified error type** (`RouteScanError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! None of these errors escape
//! [`UniversalRouterParser::parse_transaction`](crate::UniversalRouterParser::parse_transaction).
//! They are recorded as [`Diagnostic`](crate::Diagnostic) entries instead, so a
//! single anomalous transaction never halts a batch.
//!
//! # Examples
//!
//! ```rust
//! use routescan::{PathError, RouteScanError, SwapPath};
//!
//! fn first_token(raw: &[u8]) -> Result<String, RouteScanError> {
//!     let path = SwapPath::decode(raw)?;
//!     Ok(path.token_in().to_string())
//! }
//!
//! match first_token(&[0u8; 10]) {
//!     Err(RouteScanError::Path(PathError::Truncated { .. })) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod calldata;
mod command;
mod path;

pub use calldata::CalldataError;
pub use command::CommandDecodeError;
pub use path::PathError;

/// Unified error type for all routescan operations.
///
/// All module-specific error types automatically convert to `RouteScanError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum RouteScanError {
    /// Error from the packed multi-hop path codec.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// Error from decoding a single router command.
    #[error("Command decode error: {0}")]
    Command(#[from] CommandDecodeError),

    /// Error from decoding the top-level router call.
    #[error("Calldata error: {0}")]
    Calldata(#[from] CalldataError),
}
