// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Protocol-agnostic descriptions of value movement
//!
//! Every protocol parser reduces its own calldata format to these records so that
//! consumers never need to understand a protocol's binary encoding.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;

/// A single value movement recognized in a transaction
///
/// Serialized as an internally tagged object:
///
/// ```
/// use alloy_primitives::Address;
/// use routescan::{Action, SingleSwapAction, TokenAmount};
///
/// let action = Action::SingleSwap(SingleSwapAction {
///     from_token: Address::ZERO,
///     to_token: Address::ZERO,
///     from_amount: TokenAmount::from(100u64),
///     to_amount: TokenAmount::ZERO,
///     recipient: Address::ZERO,
///     sender: Address::ZERO,
/// });
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json["type"], "SINGLE_SWAP");
/// assert_eq!(json["toAmount"], "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// One token exchanged for another in a single hop
    SingleSwap(SingleSwapAction),
    /// A chained trade through several pools
    MultiSwap(MultiSwapAction),
    /// Funds arriving from another chain
    BridgeIn(BridgeInAction),
    /// Funds leaving for another chain
    BridgeOut(BridgeOutAction),
}

impl Action {
    /// Borrow the single-swap payload, if this is one
    pub fn as_single_swap(&self) -> Option<&SingleSwapAction> {
        match self {
            Action::SingleSwap(swap) => Some(swap),
            _ => None,
        }
    }

    /// Borrow the multi-swap payload, if this is one
    pub fn as_multi_swap(&self) -> Option<&MultiSwapAction> {
        match self {
            Action::MultiSwap(swap) => Some(swap),
            _ => None,
        }
    }

    /// Short tag, matching the serialized `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SingleSwap(_) => "SINGLE_SWAP",
            Action::MultiSwap(_) => "MULTI_SWAP",
            Action::BridgeIn(_) => "BRIDGE_IN",
            Action::BridgeOut(_) => "BRIDGE_OUT",
        }
    }
}

impl From<SingleSwapAction> for Action {
    fn from(swap: SingleSwapAction) -> Self {
        Action::SingleSwap(swap)
    }
}

impl From<MultiSwapAction> for Action {
    fn from(swap: MultiSwapAction) -> Self {
        Action::MultiSwap(swap)
    }
}

/// A single-hop swap
///
/// `from_amount` and `to_amount` are reported by economic role. For exact-input
/// swaps `to_amount` is the declared minimum output; for exact-output swaps
/// `from_amount` is the declared maximum input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleSwapAction {
    /// Token sold
    pub from_token: Address,
    /// Token bought
    pub to_token: Address,
    /// Input amount or maximum-in bound
    pub from_amount: TokenAmount,
    /// Output amount or minimum-out bound
    pub to_amount: TokenAmount,
    /// Receiver of the output
    pub recipient: Address,
    /// Payer of this hop, distinct from the transaction signer
    pub sender: Address,
}

/// A chained trade across several pools
///
/// The full token route is `from_tokens` followed by `to_tokens`. `to_tokens`,
/// `from_amounts`, `to_amounts` and `recipients` run in parallel, one entry per
/// hop. Amounts not observable in calldata are [`TokenAmount::ZERO`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSwapAction {
    /// Head of the route
    pub from_tokens: Vec<Address>,
    /// Output token of each hop
    pub to_tokens: Vec<Address>,
    /// Input amount of each hop
    pub from_amounts: Vec<TokenAmount>,
    /// Output amount of each hop
    pub to_amounts: Vec<TokenAmount>,
    /// Receiver of each hop
    pub recipients: Vec<Address>,
    /// Payer of the route
    pub sender: Address,
}

impl MultiSwapAction {
    /// Start a route from its first hop
    pub fn from_hop(hop: &SingleSwapAction) -> Self {
        Self {
            from_tokens: vec![hop.from_token],
            to_tokens: vec![hop.to_token],
            from_amounts: vec![hop.from_amount],
            to_amounts: vec![hop.to_amount],
            recipients: vec![hop.recipient],
            sender: hop.sender,
        }
    }

    /// Append a hop to the end of the route
    ///
    /// The caller is responsible for checking [`continues_with`](Self::continues_with).
    pub fn push_hop(&mut self, hop: &SingleSwapAction) {
        self.to_tokens.push(hop.to_token);
        self.from_amounts.push(hop.from_amount);
        self.to_amounts.push(hop.to_amount);
        self.recipients.push(hop.recipient);
    }

    /// Whether `hop` starts where this route currently ends
    pub fn continues_with(&self, hop: &SingleSwapAction) -> bool {
        self.last_token() == Some(hop.from_token)
    }

    /// Output token of the last hop
    pub fn last_token(&self) -> Option<Address> {
        self.to_tokens.last().copied()
    }

    /// Number of hops in the route
    pub fn hop_count(&self) -> usize {
        self.to_tokens.len()
    }

    /// Full token route, head first
    pub fn token_path(&self) -> Vec<Address> {
        self.from_tokens
            .iter()
            .chain(self.to_tokens.iter())
            .copied()
            .collect()
    }
}

/// Funds bridged into the transaction's chain
///
/// Only the destination side is visible on this chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeInAction {
    /// Source chain id, if known
    pub from_chain: Option<u64>,
    /// Destination chain id
    pub to_chain: u64,
    /// Token sent on the source chain, if known
    pub from_token: Option<Address>,
    /// Token received
    pub to_token: Address,
    /// Amount sent on the source chain, if known
    pub from_amount: Option<TokenAmount>,
    /// Amount received
    pub to_amount: TokenAmount,
    /// Sender on the source chain, if known
    pub sender: Option<Address>,
    /// Receiver on this chain
    pub recipient: Address,
}

/// Funds bridged out of the transaction's chain
///
/// Only the source side is visible on this chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeOutAction {
    /// Source chain id
    pub from_chain: u64,
    /// Destination chain id, if known
    pub to_chain: Option<u64>,
    /// Token sent
    pub from_token: Address,
    /// Token received on the destination chain, if known
    pub to_token: Option<Address>,
    /// Amount sent
    pub from_amount: TokenAmount,
    /// Amount received on the destination chain, if known
    pub to_amount: Option<TokenAmount>,
    /// Sender on this chain
    pub sender: Address,
    /// Receiver on the destination chain, if known
    pub recipient: Option<Address>,
}
