// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Caller-supplied transaction record
//!
//! Fetching transactions from a node or indexer is outside this crate; callers
//! build a [`Transaction`] from whatever source they use and hand it to a parser.

use alloy_chains::NamedChain;
use alloy_primitives::{Address, Bytes, Log, TxHash, U256};
use serde::{Deserialize, Serialize};

/// An on-chain transaction as seen by the protocol parsers
///
/// Immutable input: parsers only read it.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{address, Bytes};
/// use routescan::Transaction;
///
/// let tx = Transaction::new(
///     42161,
///     address!("08c9aa39f1febb81d43d8e70b3a0706da76812ab"),
///     Some(address!("3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad")),
///     Bytes::from_static(&[0x35, 0x93, 0x56, 0x4c]),
/// );
/// assert!(tx.has_calldata());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// EIP-155 chain id
    pub chain_id: u64,
    /// Transaction hash
    #[serde(default)]
    pub hash: TxHash,
    /// Signer of the transaction
    pub from: Address,
    /// Invoked contract, `None` for contract creation
    pub to: Option<Address>,
    /// Native value attached to the call
    #[serde(default)]
    pub value: U256,
    /// Block timestamp in seconds
    #[serde(default)]
    pub timestamp: u64,
    /// Calldata
    #[serde(default)]
    pub input: Bytes,
    /// Logs emitted by the transaction, in order
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl Transaction {
    /// Create a transaction with no value, logs, or hash
    pub fn new(chain_id: u64, from: Address, to: Option<Address>, input: Bytes) -> Self {
        Self {
            chain_id,
            hash: TxHash::ZERO,
            from,
            to,
            value: U256::ZERO,
            timestamp: 0,
            input,
            logs: Vec::new(),
        }
    }

    /// Set the transaction hash
    pub fn with_hash(mut self, hash: TxHash) -> Self {
        self.hash = hash;
        self
    }

    /// Set the native value
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Set the block timestamp
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the emitted logs
    pub fn with_logs(mut self, logs: Vec<Log>) -> Self {
        self.logs = logs;
        self
    }

    /// Named chain for this transaction's chain id, if known
    pub fn named_chain(&self) -> Option<NamedChain> {
        NamedChain::try_from(self.chain_id).ok()
    }

    /// Whether the transaction carries any calldata
    pub fn has_calldata(&self) -> bool {
        !self.input.is_empty()
    }
}
