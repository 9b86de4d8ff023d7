// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Protocol parser abstraction
//!
//! Implement [`ProtocolParser`] to reduce another protocol's calldata to
//! [`Action`]s. The trait is object-safe, so parsers for unrelated protocols can
//! be held together as `Box<dyn ProtocolParser>`; choosing which one applies to
//! a transaction is left to the caller.
//!
//! ```rust
//! use routescan::{ProtocolParser, UniversalRouterParser};
//!
//! let parsers: Vec<Box<dyn ProtocolParser>> = vec![Box::new(UniversalRouterParser::new())];
//! assert_eq!(parsers[0].protocol_identifier(), "universal_router");
//! ```

use alloy_primitives::Address;

use crate::types::action::Action;
use crate::types::transaction::Transaction;

/// Decodes one protocol's transactions into protocol-agnostic actions
///
/// # Design Philosophy
///
/// - **Synchronous**: decoding is pure computation over calldata
/// - **Infallible**: a transaction the parser cannot handle yields no actions
pub trait ProtocolParser: Send + Sync {
    /// Stable identifier for the protocol, e.g. `"universal_router"`
    fn protocol_identifier(&self) -> &'static str;

    /// Contract addresses this parser recognizes, across all chains
    fn contract_addresses(&self) -> Vec<Address>;

    /// Decode a transaction
    ///
    /// Returns an empty list when the transaction is not addressed to this
    /// protocol or cannot be decoded.
    fn parse_transaction(&self, tx: &Transaction) -> Vec<Action>;
}
