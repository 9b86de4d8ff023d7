// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command parameter decoders
//!
//! Each decoder turns one command's ABI-encoded blob into a normalized action.
//! Amounts are reported by economic role (what goes in, what comes out), not by
//! position in the schema. A decoder either yields its action or an error; it
//! never touches actions decoded for other commands.

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;

use super::abi::{
    executeSubPlanCall, multiHopExactInCall, multiHopExactOutCall, multiHopPathCall,
    v2SwapSingleHopCall, v3SwapSingleHopCall,
};
use super::commands::Command;
use super::path::SwapPath;
use crate::config::constants::path::MIN_MULTI_HOP_PATH_LEN;
use crate::errors::CommandDecodeError;
use crate::types::action::{Action, MultiSwapAction, SingleSwapAction};
use crate::types::amount::TokenAmount;

/// Which side of a trade the caller committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Input amount fixed, output bounded below
    ExactIn,
    /// Output amount fixed, input bounded above
    ExactOut,
}

impl SwapDirection {
    /// Map `(amount, amountLimit)` to `(from_amount, to_amount)`
    fn by_role(self, amount: TokenAmount, limit: TokenAmount) -> (TokenAmount, TokenAmount) {
        match self {
            SwapDirection::ExactIn => (amount, limit),
            SwapDirection::ExactOut => (limit, amount),
        }
    }
}

/// Whether a swap blob carries a packed multi-hop path
///
/// The same command id is used for single-hop and multi-hop encodings. A blob is
/// multi-hop when it decodes as a leading `bytes` value long enough for two
/// tokens and one fee.
pub fn is_multi_hop(input: &[u8]) -> bool {
    multiHopPathCall::abi_decode_raw(input)
        .map(|call| call.path.len() >= MIN_MULTI_HOP_PATH_LEN)
        .unwrap_or(false)
}

/// Decode a single-hop concentrated-liquidity swap
pub fn decode_v3_single_hop(
    command: Command,
    direction: SwapDirection,
    input: &[u8],
) -> Result<Action, CommandDecodeError> {
    let params = v3SwapSingleHopCall::abi_decode_raw(input)
        .map_err(|e| CommandDecodeError::abi(command, e))?;

    tracing::trace!(
        %command,
        token_in = %params.tokenIn,
        token_out = %params.tokenOut,
        fee = %params.fee,
        "Decoded single-hop swap"
    );

    let (from_amount, to_amount) =
        direction.by_role(params.amount.into(), params.amountLimit.into());
    Ok(Action::SingleSwap(SingleSwapAction {
        from_token: params.tokenIn,
        to_token: params.tokenOut,
        from_amount,
        to_amount,
        recipient: params.recipient,
        sender: params.sender,
    }))
}

/// Decode a single-hop constant-product swap
pub fn decode_v2_single_hop(
    command: Command,
    direction: SwapDirection,
    input: &[u8],
) -> Result<Action, CommandDecodeError> {
    let params = v2SwapSingleHopCall::abi_decode_raw(input)
        .map_err(|e| CommandDecodeError::abi(command, e))?;

    let (from_amount, to_amount) =
        direction.by_role(params.amount.into(), params.amountLimit.into());
    Ok(Action::SingleSwap(SingleSwapAction {
        from_token: params.tokenIn,
        to_token: params.tokenOut,
        from_amount,
        to_amount,
        recipient: params.recipient,
        sender: params.sender,
    }))
}

/// Decode a multi-hop swap committing the input amount
///
/// Only the initial input is known; every leg's output is reported as zero.
/// Multi-hop blobs carry no recipient or sender, so both are the zero address.
pub fn decode_multi_hop_exact_in(
    command: Command,
    input: &[u8],
) -> Result<Action, CommandDecodeError> {
    let params = multiHopExactInCall::abi_decode_raw(input)
        .map_err(|e| CommandDecodeError::abi(command, e))?;
    let path = SwapPath::decode(&params.path)
        .map_err(|e| CommandDecodeError::path(command, e))?;

    let hops = path.hop_count();
    let mut from_amounts = vec![TokenAmount::ZERO; hops];
    from_amounts[0] = params.amountIn.into();

    Ok(Action::MultiSwap(MultiSwapAction {
        from_tokens: vec![path.token_in()],
        to_tokens: path.tokens()[1..].to_vec(),
        from_amounts,
        to_amounts: vec![TokenAmount::ZERO; hops],
        recipients: vec![Address::ZERO; hops],
        sender: Address::ZERO,
    }))
}

/// Decode a multi-hop swap committing the output amount
///
/// The stored path is output-first and is reversed into execution order. Only
/// the first leg's input bound and the last leg's output are known.
pub fn decode_multi_hop_exact_out(
    command: Command,
    input: &[u8],
) -> Result<Action, CommandDecodeError> {
    let params = multiHopExactOutCall::abi_decode_raw(input)
        .map_err(|e| CommandDecodeError::abi(command, e))?;
    let path = SwapPath::decode_exact_output(&params.path)
        .map_err(|e| CommandDecodeError::path(command, e))?;

    let hops = path.hop_count();
    let mut from_amounts = vec![TokenAmount::ZERO; hops];
    from_amounts[0] = params.amountInMaximum.into();
    let mut to_amounts = vec![TokenAmount::ZERO; hops];
    to_amounts[hops - 1] = params.amountOut.into();

    Ok(Action::MultiSwap(MultiSwapAction {
        from_tokens: vec![path.token_in()],
        to_tokens: path.tokens()[1..].to_vec(),
        from_amounts,
        to_amounts,
        recipients: vec![Address::ZERO; hops],
        sender: Address::ZERO,
    }))
}

/// Decode a nested `(commands, inputs)` plan
pub fn decode_sub_plan(input: &[u8]) -> Result<(Bytes, Vec<Bytes>), CommandDecodeError> {
    let plan = executeSubPlanCall::abi_decode_raw(input)
        .map_err(|e| CommandDecodeError::abi(Command::ExecuteSubPlan, e))?;
    Ok((plan.commands, plan.inputs))
}
