// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decode multi-command DEX router calldata into protocol-agnostic actions
//!
//! `routescan` recognizes transactions sent to a known router deployment and
//! turns the router's packed command stream into [`Action`]s: single-hop swaps,
//! and multi-hop routes reconstructed from chained hops.
//!
//! Decoding is synchronous and never fails. A transaction that is not a router
//! call yields no actions, and a command that fails to decode is skipped while
//! the rest of the stream is still decoded. Use
//! [`UniversalRouterParser::parse_transaction_with_diagnostics`] to see what was
//! skipped and why.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{address, aliases::U24, Address, Bytes, U256};
//! use alloy_sol_types::SolCall;
//! use routescan::abi::{encode_params, v3SwapSingleHopCall, IUniversalRouter};
//! use routescan::constants::routers::UNIVERSAL_ROUTER;
//! use routescan::{ProtocolParser, Transaction, UniversalRouterParser};
//!
//! let weth = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
//! let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
//!
//! let swap = v3SwapSingleHopCall {
//!     recipient: Address::ZERO,
//!     tokenIn: weth,
//!     tokenOut: usdc,
//!     fee: U24::from(500u32),
//!     amount: U256::from(10u64).pow(U256::from(18u64)),
//!     amountLimit: U256::from(3_000_000_000u64),
//!     sender: Address::ZERO,
//! };
//! let calldata = IUniversalRouter::execute_1Call {
//!     commands: vec![0x00].into(),
//!     inputs: vec![encode_params(&swap)],
//! }
//! .abi_encode();
//!
//! let tx = Transaction::new(1, Address::ZERO, Some(UNIVERSAL_ROUTER), Bytes::from(calldata));
//! let actions = UniversalRouterParser::new().parse_transaction(&tx);
//!
//! assert_eq!(actions.len(), 1);
//! assert_eq!(actions[0].as_multi_swap().unwrap().token_path(), vec![weth, usdc]);
//! ```
//!
//! # Modules
//!
//! - [`router`]: path codec, parameter decoders, command dispatcher, hop combiner
//! - [`config`]: router deployments and decoding limits
//! - [`errors`]: typed errors for each decoding stage
//! - [`types`]: transactions, actions and value newtypes

#![warn(missing_docs)]

pub mod config;
mod diagnostics;
pub mod errors;
mod protocol;
pub mod router;
mod spans;
pub mod types;

pub use config::constants;
pub use config::{RouterParserConfig, RouterParserConfigBuilder};
pub use diagnostics::{DecodeDiagnostics, Diagnostic};
pub use errors::{CalldataError, CommandDecodeError, PathError, RouteScanError};
pub use protocol::ProtocolParser;
pub use router::{
    abi, combine_hops, Command, CommandDispatcher, CommandKind, ExecuteCall, ParseOutcome,
    SwapPath, UniversalRouterParser,
};
pub use types::action::{Action, BridgeInAction, BridgeOutAction, MultiSwapAction, SingleSwapAction};
pub use types::amount::TokenAmount;
pub use types::config::MaxRouteDepth;
pub use types::fee::FeeTier;
pub use types::transaction::Transaction;
