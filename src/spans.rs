// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for routescan operations.
//!
//! Telemetry is kept out of the decoding logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_primitives::TxHash;
use tracing::{Level, Span};

/// Create span for parsing one transaction.
///
/// Parent: None (root span for this operation)
/// Children: dispatch_commands span
#[inline]
pub(crate) fn parse_transaction(chain_id: u64, tx_hash: TxHash) -> Span {
    tracing::span!(
        Level::DEBUG,
        "routescan.parse_transaction",
        chain_id = chain_id,
        tx_hash = %tx_hash,
    )
}

/// Create span for walking one command stream.
///
/// Parent: parse_transaction span, or the dispatch_commands span of the enclosing plan
/// Children: dispatch_commands spans for nested sub-plans
#[inline]
pub(crate) fn dispatch_commands(depth: usize, commands: usize, inputs: usize) -> Span {
    tracing::trace_span!(
        "routescan.dispatch_commands",
        depth = depth,
        commands = commands,
        inputs = inputs,
    )
}

/// Create span for combining decoded hops.
///
/// Parent: parse_transaction span
#[inline]
pub(crate) fn combine_hops(actions: usize) -> Span {
    tracing::trace_span!("routescan.combine_hops", actions = actions)
}
