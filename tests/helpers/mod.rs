// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for routescan integration tests
//!
//! Builders for router calldata, so tests can describe a transaction as a list
//! of commands instead of hand-assembling ABI bytes.

#![allow(dead_code)]

use alloy_primitives::{address, aliases::U24, Address, Bytes, U256};
use alloy_sol_types::SolCall;
use routescan::abi::{
    encode_params, executeSubPlanCall, multiHopExactInCall, multiHopExactOutCall,
    v2SwapSingleHopCall, v3SwapSingleHopCall, IUniversalRouter,
};
use routescan::constants::routers::UNIVERSAL_ROUTER;
use routescan::{FeeTier, SwapPath, Transaction};

pub const TOKEN_A: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const TOKEN_B: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
pub const TOKEN_C: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
pub const TOKEN_D: Address = address!("2260fac5e5542a773aa44fbcfedf7c193bc2c599");
pub const RECIPIENT: Address = address!("08c9aa39f1febb81d43d8e70b3a0706da76812ab");
pub const SENDER: Address = address!("b098779473c782808f3e3db3dbecdb4e8ece0b1f");
pub const SIGNER: Address = address!("4838b106fce9647bdf1e7877bf73ce8b0bad5f97");

/// Command bytes used across tests
pub mod cmd {
    pub const V3_SWAP_EXACT_IN: u8 = 0x00;
    pub const V3_SWAP_EXACT_OUT: u8 = 0x01;
    pub const SWEEP: u8 = 0x04;
    pub const V2_SWAP_EXACT_IN: u8 = 0x08;
    pub const V2_SWAP_EXACT_OUT: u8 = 0x09;
    pub const WRAP_NATIVE: u8 = 0x0b;
    pub const UNWRAP_NATIVE: u8 = 0x0c;
    pub const EXECUTE_SUB_PLAN: u8 = 0x21;

    /// Every pass-through command type
    pub const PASS_THROUGH: [u8; 17] = [
        0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12,
        0x13, 0x14,
    ];
}

/// Install a test subscriber honoring `RUST_LOG`; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Single-hop V3 parameters
pub fn v3_single(token_in: Address, token_out: Address, amount: u64, amount_limit: u64) -> Bytes {
    encode_params(&v3SwapSingleHopCall {
        recipient: RECIPIENT,
        tokenIn: token_in,
        tokenOut: token_out,
        fee: U24::from(3000u32),
        amount: U256::from(amount),
        amountLimit: U256::from(amount_limit),
        sender: SENDER,
    })
}

/// Single-hop V2 parameters
pub fn v2_single(token_in: Address, token_out: Address, amount: u64, amount_limit: u64) -> Bytes {
    encode_params(&v2SwapSingleHopCall {
        recipient: RECIPIENT,
        tokenIn: token_in,
        tokenOut: token_out,
        amount: U256::from(amount),
        amountLimit: U256::from(amount_limit),
        sender: SENDER,
    })
}

/// Pack `tokens` with a medium fee between each pair
pub fn packed_path(tokens: &[Address]) -> Bytes {
    let fees = vec![FeeTier::MEDIUM; tokens.len().saturating_sub(1)];
    SwapPath::new(tokens.to_vec(), fees)
        .expect("test path needs at least two tokens")
        .encode()
}

/// Multi-hop exact-input parameters; `tokens` in execution order
pub fn multi_hop_exact_in(tokens: &[Address], amount_in: u64) -> Bytes {
    encode_params(&multiHopExactInCall {
        path: packed_path(tokens),
        amountIn: U256::from(amount_in),
    })
}

/// Multi-hop exact-output parameters; `tokens` in execution order, stored reversed
pub fn multi_hop_exact_out(tokens: &[Address], amount_out: u64, amount_in_maximum: u64) -> Bytes {
    let stored: Vec<Address> = tokens.iter().rev().copied().collect();
    encode_params(&multiHopExactOutCall {
        path: packed_path(&stored),
        amountOut: U256::from(amount_out),
        amountInMaximum: U256::from(amount_in_maximum),
    })
}

/// Nested sub-plan parameters
pub fn sub_plan(commands: Vec<u8>, inputs: Vec<Bytes>) -> Bytes {
    encode_params(&executeSubPlanCall {
        commands: commands.into(),
        inputs,
    })
}

/// Router `execute` calldata, with a deadline
pub fn execute_calldata(commands: Vec<u8>, inputs: Vec<Bytes>) -> Bytes {
    IUniversalRouter::execute_0Call {
        commands: commands.into(),
        inputs,
        deadline: U256::from(1_700_000_000u64),
    }
    .abi_encode()
    .into()
}

/// Mainnet transaction to the router carrying `calldata`
pub fn router_tx(calldata: Bytes) -> Transaction {
    Transaction::new(1, SIGNER, Some(UNIVERSAL_ROUTER), calldata)
}

/// Mainnet router transaction built from commands and inputs
pub fn router_call(commands: Vec<u8>, inputs: Vec<Bytes>) -> Transaction {
    router_tx(execute_calldata(commands, inputs))
}
