// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-command router calldata decoding
//!
//! The router's `execute` entry point takes a packed byte string of commands and
//! a parallel list of ABI-encoded inputs. Decoding runs in three stages:
//!
//! 1. [`UniversalRouterParser::decode_execute`] unpacks the top-level call
//! 2. [`CommandDispatcher`] decodes each command, recursing into sub-plans
//! 3. [`combine_hops`] stitches chained single-hop swaps into routes
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{Address, Bytes};
//! use routescan::{constants::routers::UNIVERSAL_ROUTER, Transaction, UniversalRouterParser};
//!
//! let parser = UniversalRouterParser::new();
//!
//! // Not a router call: no actions, no error
//! let calldata = Bytes::from(vec![0xde, 0xad]);
//! let tx = Transaction::new(1, Address::ZERO, Some(UNIVERSAL_ROUTER), calldata);
//! let outcome = parser.parse_transaction_with_diagnostics(&tx);
//! assert!(outcome.actions.is_empty());
//! assert_eq!(outcome.diagnostics.len(), 1);
//! ```

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolInterface};
use tracing::{debug, warn};

use crate::config::RouterParserConfig;
use crate::diagnostics::{DecodeDiagnostics, Diagnostic};
use crate::errors::CalldataError;
use crate::protocol::ProtocolParser;
use crate::spans;
use crate::types::action::Action;
use crate::types::transaction::Transaction;

pub mod abi;
mod combiner;
mod commands;
mod dispatcher;
pub mod params;
mod path;

pub use combiner::combine_hops;
pub use commands::{Command, CommandKind};
pub use dispatcher::CommandDispatcher;
pub use path::SwapPath;

use abi::IUniversalRouter::{execute_0Call, execute_1Call, IUniversalRouterCalls};

/// A decoded router `execute` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteCall {
    /// Packed command bytes
    pub commands: Bytes,
    /// One ABI-encoded parameter blob per command
    pub inputs: Vec<Bytes>,
    /// Execution deadline, when the overload carries one
    pub deadline: Option<U256>,
}

/// Actions decoded from a transaction, with everything that went wrong along the way
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Decoded actions, in execution order
    pub actions: Vec<Action>,
    /// Recoverable problems met while decoding
    pub diagnostics: DecodeDiagnostics,
}

/// Parser for multi-command router transactions
#[derive(Debug, Clone, Default)]
pub struct UniversalRouterParser {
    config: RouterParserConfig,
    dispatcher: CommandDispatcher,
}

impl UniversalRouterParser {
    /// Create a parser for the built-in router deployments
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: RouterParserConfig) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(config.max_route_depth),
            config,
        }
    }

    /// Get the parser configuration
    pub fn config(&self) -> &RouterParserConfig {
        &self.config
    }

    /// Whether `tx` carries calldata and is addressed to this chain's router
    pub fn is_applicable(&self, tx: &Transaction) -> bool {
        match tx.to {
            Some(to) => tx.has_calldata() && self.config.is_router(tx.chain_id, to),
            None => false,
        }
    }

    /// Decode the top-level `execute` call
    ///
    /// Both overloads are accepted; the deadline is `None` for the one without it.
    pub fn decode_execute(calldata: &[u8]) -> Result<ExecuteCall, CalldataError> {
        let Some(selector) = calldata.get(..4) else {
            return Err(CalldataError::TooShort { len: calldata.len() });
        };
        let selector = [selector[0], selector[1], selector[2], selector[3]];
        if selector != execute_0Call::SELECTOR && selector != execute_1Call::SELECTOR {
            return Err(CalldataError::UnknownSelector(selector));
        }

        let call = match IUniversalRouterCalls::abi_decode(calldata)? {
            IUniversalRouterCalls::execute_0(call) => ExecuteCall {
                commands: call.commands,
                inputs: call.inputs,
                deadline: Some(call.deadline),
            },
            IUniversalRouterCalls::execute_1(call) => ExecuteCall {
                commands: call.commands,
                inputs: call.inputs,
                deadline: None,
            },
        };
        Ok(call)
    }

    /// Decode a transaction, reporting every recoverable problem
    pub fn parse_transaction_with_diagnostics(&self, tx: &Transaction) -> ParseOutcome {
        let span = spans::parse_transaction(tx.chain_id, tx.hash);
        let _guard = span.enter();

        if !self.is_applicable(tx) {
            debug!(to = ?tx.to, "Transaction is not a router call");
            return ParseOutcome::default();
        }

        let mut diagnostics = DecodeDiagnostics::default();
        let call = match Self::decode_execute(&tx.input) {
            Ok(call) => call,
            Err(error) => {
                debug!(error = %error, "Router calldata did not decode");
                diagnostics.push(Diagnostic::InvalidCalldata(error));
                return ParseOutcome {
                    actions: Vec::new(),
                    diagnostics,
                };
            }
        };

        let actions = self
            .dispatcher
            .dispatch(&call.commands, &call.inputs, &mut diagnostics);
        let actions = if self.config.combine_hops {
            combine_hops(actions)
        } else {
            actions
        };

        if !diagnostics.is_empty() {
            warn!(
                actions = actions.len(),
                diagnostics = diagnostics.len(),
                "Router call decoded partially"
            );
        }
        ParseOutcome { actions, diagnostics }
    }
}

impl ProtocolParser for UniversalRouterParser {
    fn protocol_identifier(&self) -> &'static str {
        "universal_router"
    }

    fn contract_addresses(&self) -> Vec<Address> {
        self.config.all_routers()
    }

    fn parse_transaction(&self, tx: &Transaction) -> Vec<Action> {
        self.parse_transaction_with_diagnostics(tx).actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::routers::UNIVERSAL_ROUTER;
    use crate::config::RouterParserConfigBuilder;
    use alloy_chains::NamedChain;
    use alloy_primitives::address;

    fn execute(commands: Vec<u8>, inputs: Vec<Bytes>, deadline: Option<u64>) -> Bytes {
        let raw = match deadline {
            Some(deadline) => execute_0Call {
                commands: commands.into(),
                inputs,
                deadline: U256::from(deadline),
            }
            .abi_encode(),
            None => execute_1Call {
                commands: commands.into(),
                inputs,
            }
            .abi_encode(),
        };
        raw.into()
    }

    fn mainnet_tx(to: Option<Address>, calldata: Bytes) -> Transaction {
        Transaction::new(1, Address::ZERO, to, calldata)
    }

    #[test]
    fn test_selectors() {
        assert_eq!(execute_0Call::SELECTOR, [0x35, 0x93, 0x56, 0x4c]);
        assert_eq!(execute_1Call::SELECTOR, [0x24, 0x85, 0x6b, 0xc3]);
    }

    #[test]
    fn test_decode_execute_overloads() {
        let calldata = execute(vec![0x0b], vec![Bytes::new()], Some(99));
        let with_deadline = UniversalRouterParser::decode_execute(&calldata).unwrap();
        assert_eq!(with_deadline.commands.as_ref(), &[0x0b]);
        assert_eq!(with_deadline.deadline, Some(U256::from(99u64)));

        let calldata = execute(vec![], vec![], None);
        let without = UniversalRouterParser::decode_execute(&calldata).unwrap();
        assert!(without.commands.is_empty());
        assert_eq!(without.deadline, None);
    }

    #[test]
    fn test_decode_execute_rejects_other_calls() {
        assert!(matches!(
            UniversalRouterParser::decode_execute(&[0x35, 0x93]),
            Err(CalldataError::TooShort { len: 2 })
        ));
        assert!(matches!(
            UniversalRouterParser::decode_execute(&[0xa9, 0x05, 0x9c, 0xbb, 0x00]),
            Err(CalldataError::UnknownSelector([0xa9, 0x05, 0x9c, 0xbb]))
        ));
        assert!(matches!(
            UniversalRouterParser::decode_execute(&[0x35, 0x93, 0x56, 0x4c, 0x01]),
            Err(CalldataError::Abi(_))
        ));
    }

    #[test]
    fn test_applicability() {
        let parser = UniversalRouterParser::new();
        let calldata = execute(vec![], vec![], None);

        let router = Some(UNIVERSAL_ROUTER);
        let other = Some(address!("9999999999999999999999999999999999999999"));

        assert!(parser.is_applicable(&mainnet_tx(router, calldata.clone())));
        assert!(!parser.is_applicable(&mainnet_tx(None, calldata.clone())));
        assert!(!parser.is_applicable(&mainnet_tx(router, Bytes::new())));
        // Known chain, wrong contract
        assert!(!parser.is_applicable(&mainnet_tx(other, calldata.clone())));
        // Unknown chain
        let unknown_chain = Transaction::new(999_999_999, Address::ZERO, router, calldata);
        assert!(!parser.is_applicable(&unknown_chain));
    }

    #[test]
    fn test_config_flows_into_parser() {
        let custom = address!("9999999999999999999999999999999999999999");
        let config = RouterParserConfigBuilder::new()
            .router(NamedChain::Mainnet, custom)
            .max_route_depth(1)
            .build();
        let parser = UniversalRouterParser::with_config(config);

        assert_eq!(parser.contract_addresses(), vec![custom]);
        assert_eq!(parser.dispatcher.max_depth().as_usize(), 1);
        let calldata = execute(vec![], vec![], None);
        assert!(!parser.is_applicable(&mainnet_tx(Some(UNIVERSAL_ROUTER), calldata)));
    }
}
