// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for UniversalRouterParser
//!
//! Each test builds real router calldata and checks the actions a transaction
//! decodes to, including how malformed streams degrade.

mod helpers;

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address, Bytes};
use helpers::*;
use routescan::constants::routers::UNIVERSAL_ROUTER_BSC_AVALANCHE;
use routescan::{
    Action, Diagnostic, ProtocolParser, RouterParserConfigBuilder, TokenAmount, Transaction,
    UniversalRouterParser,
};

#[test]
fn test_chained_single_hops_become_one_route() {
    init_tracing();
    let tx = router_call(
        vec![cmd::V3_SWAP_EXACT_IN, cmd::V3_SWAP_EXACT_IN],
        vec![
            v3_single(TOKEN_A, TOKEN_B, 100, 0),
            v3_single(TOKEN_B, TOKEN_C, 0, 50),
        ],
    );

    let actions = UniversalRouterParser::new().parse_transaction(&tx);

    assert_eq!(actions.len(), 1);
    let route = actions[0].as_multi_swap().expect("expected a multi-hop route");
    assert_eq!(route.from_tokens, vec![TOKEN_A]);
    assert_eq!(route.to_tokens, vec![TOKEN_B, TOKEN_C]);
    assert_eq!(
        route.from_amounts,
        vec![TokenAmount::from(100u64), TokenAmount::ZERO]
    );
    assert_eq!(
        route.to_amounts,
        vec![TokenAmount::ZERO, TokenAmount::from(50u64)]
    );
    assert_eq!(route.recipients.len(), 2);
    assert_eq!(route.sender, SENDER);
}

#[test]
fn test_packed_multi_hop_exact_in() {
    let tx = router_call(
        vec![cmd::WRAP_NATIVE, cmd::V3_SWAP_EXACT_IN],
        vec![
            Bytes::new(),
            multi_hop_exact_in(&[TOKEN_A, TOKEN_B, TOKEN_C], 1_000),
        ],
    );

    let outcome = UniversalRouterParser::new().parse_transaction_with_diagnostics(&tx);

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.actions.len(), 1);
    let route = outcome.actions[0].as_multi_swap().unwrap();
    assert_eq!(route.token_path(), vec![TOKEN_A, TOKEN_B, TOKEN_C]);
    assert_eq!(
        route.from_amounts,
        vec![TokenAmount::from(1_000u64), TokenAmount::ZERO]
    );
    assert_eq!(route.to_amounts, vec![TokenAmount::ZERO, TokenAmount::ZERO]);
    assert_eq!(route.recipients, vec![Address::ZERO, Address::ZERO]);
}

#[test]
fn test_packed_multi_hop_exact_out_is_in_execution_order() {
    let tx = router_call(
        vec![cmd::V3_SWAP_EXACT_OUT, cmd::UNWRAP_NATIVE],
        vec![
            multi_hop_exact_out(&[TOKEN_A, TOKEN_B, TOKEN_C], 75, 200),
            Bytes::new(),
        ],
    );

    let actions = UniversalRouterParser::new().parse_transaction(&tx);

    assert_eq!(actions.len(), 1);
    let route = actions[0].as_multi_swap().unwrap();
    assert_eq!(route.token_path(), vec![TOKEN_A, TOKEN_B, TOKEN_C]);
    assert_eq!(route.from_amounts[0], TokenAmount::from(200u64));
    assert_eq!(route.to_amounts[1], TokenAmount::from(75u64));
}

#[test]
fn test_v3_single_hop_exact_out_reports_amounts_by_role() {
    let config = RouterParserConfigBuilder::with_defaults()
        .combine_hops(false)
        .build();
    let parser = UniversalRouterParser::with_config(config);
    let tx = router_call(
        vec![cmd::V3_SWAP_EXACT_OUT],
        vec![v3_single(TOKEN_A, TOKEN_B, 50, 120)],
    );

    let outcome = parser.parse_transaction_with_diagnostics(&tx);

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.actions.len(), 1);
    let swap = outcome.actions[0]
        .as_single_swap()
        .expect("combining is disabled");
    assert_eq!(swap.from_token, TOKEN_A);
    assert_eq!(swap.to_token, TOKEN_B);
    // amount is the exact output, amountLimit the maximum input
    assert_eq!(swap.from_amount, TokenAmount::from(120u64));
    assert_eq!(swap.to_amount, TokenAmount::from(50u64));
    assert_eq!(swap.recipient, RECIPIENT);
    assert_eq!(swap.sender, SENDER);
}

#[test]
fn test_v2_exact_out_reports_amounts_by_role() {
    let config = RouterParserConfigBuilder::with_defaults()
        .combine_hops(false)
        .build();
    let parser = UniversalRouterParser::with_config(config);
    let tx = router_call(
        vec![cmd::V2_SWAP_EXACT_OUT],
        vec![v2_single(TOKEN_C, TOKEN_D, 40, 90)],
    );

    let actions = parser.parse_transaction(&tx);

    let swap = actions[0].as_single_swap().expect("combining is disabled");
    assert_eq!(swap.from_token, TOKEN_C);
    assert_eq!(swap.from_amount, TokenAmount::from(90u64));
    assert_eq!(swap.to_amount, TokenAmount::from(40u64));
    assert_eq!(swap.recipient, RECIPIENT);
}

#[test]
fn test_malformed_command_is_isolated() {
    let tx = router_call(
        vec![
            cmd::V3_SWAP_EXACT_IN,
            cmd::V3_SWAP_EXACT_IN,
            cmd::V3_SWAP_EXACT_IN,
        ],
        vec![
            v3_single(TOKEN_A, TOKEN_B, 100, 90),
            Bytes::from(vec![0xab; 31]),
            v3_single(TOKEN_C, TOKEN_D, 10, 9),
        ],
    );

    let outcome = UniversalRouterParser::new().parse_transaction_with_diagnostics(&tx);

    assert_eq!(outcome.actions.len(), 2);
    assert_eq!(outcome.diagnostics.failed_commands(), 1);
    assert!(matches!(
        outcome.diagnostics.iter().next(),
        Some(Diagnostic::CommandFailed { depth: 0, index: 1, .. })
    ));
}

#[test]
fn test_nested_sub_plan_joins_the_route() {
    let nested = sub_plan(
        vec![cmd::V3_SWAP_EXACT_IN, cmd::V2_SWAP_EXACT_IN],
        vec![
            v3_single(TOKEN_A, TOKEN_B, 100, 0),
            v2_single(TOKEN_B, TOKEN_C, 0, 50),
        ],
    );
    let tx = router_call(
        vec![cmd::WRAP_NATIVE, cmd::EXECUTE_SUB_PLAN, cmd::SWEEP],
        vec![Bytes::new(), nested, Bytes::new()],
    );

    let actions = UniversalRouterParser::new().parse_transaction(&tx);

    assert_eq!(actions.len(), 1);
    assert_eq!(
        actions[0].as_multi_swap().unwrap().token_path(),
        vec![TOKEN_A, TOKEN_B, TOKEN_C]
    );
}

#[test]
fn test_packed_multi_hop_inside_sub_plan() {
    let nested = sub_plan(
        vec![cmd::V3_SWAP_EXACT_IN],
        vec![multi_hop_exact_in(&[TOKEN_A, TOKEN_B, TOKEN_C], 1_000)],
    );
    let tx = router_call(
        vec![cmd::WRAP_NATIVE, cmd::EXECUTE_SUB_PLAN],
        vec![Bytes::new(), nested],
    );

    let outcome = UniversalRouterParser::new().parse_transaction_with_diagnostics(&tx);

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.actions.len(), 1);
    let route = outcome.actions[0].as_multi_swap().unwrap();
    assert_eq!(route.token_path(), vec![TOKEN_A, TOKEN_B, TOKEN_C]);
    assert_eq!(
        route.from_amounts,
        vec![TokenAmount::from(1_000u64), TokenAmount::ZERO]
    );
    assert_eq!(route.to_amounts, vec![TokenAmount::ZERO, TokenAmount::ZERO]);
}

#[test]
fn test_sub_plan_beyond_depth_bound_is_skipped() {
    let inner = sub_plan(
        vec![cmd::V3_SWAP_EXACT_IN],
        vec![v3_single(TOKEN_A, TOKEN_B, 1, 1)],
    );
    let outer = sub_plan(vec![cmd::EXECUTE_SUB_PLAN], vec![inner]);
    let tx = router_call(
        vec![cmd::EXECUTE_SUB_PLAN, cmd::V3_SWAP_EXACT_IN],
        vec![outer, v3_single(TOKEN_C, TOKEN_D, 1, 1)],
    );

    let config = RouterParserConfigBuilder::with_defaults()
        .max_route_depth(1)
        .build();
    let shallow = UniversalRouterParser::with_config(config);
    let outcome = shallow.parse_transaction_with_diagnostics(&tx);
    assert_eq!(outcome.actions.len(), 1);
    assert_eq!(outcome.diagnostics.failed_commands(), 1);

    let actions = UniversalRouterParser::new().parse_transaction(&tx);
    assert_eq!(actions.len(), 2);
}

#[test]
fn test_allow_revert_flag_does_not_change_decoding() {
    let tx = router_call(
        vec![0x80 | cmd::V3_SWAP_EXACT_IN],
        vec![v3_single(TOKEN_A, TOKEN_B, 5, 4)],
    );
    let actions = UniversalRouterParser::new().parse_transaction(&tx);
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_more_commands_than_inputs_returns_partial_result() {
    let tx = router_call(
        vec![cmd::V3_SWAP_EXACT_IN, cmd::V3_SWAP_EXACT_IN],
        vec![v3_single(TOKEN_A, TOKEN_B, 5, 4)],
    );

    let outcome = UniversalRouterParser::new().parse_transaction_with_diagnostics(&tx);

    assert_eq!(outcome.actions.len(), 1);
    assert!(outcome.diagnostics.truncated());
}

#[test]
fn test_empty_command_stream() {
    let tx = router_call(vec![], vec![]);
    let outcome = UniversalRouterParser::new().parse_transaction_with_diagnostics(&tx);
    assert!(outcome.actions.is_empty());
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_non_applicable_transactions_yield_nothing() {
    let parser = UniversalRouterParser::new();
    let calldata = execute_calldata(
        vec![cmd::V3_SWAP_EXACT_IN],
        vec![v3_single(TOKEN_A, TOKEN_B, 5, 4)],
    );
    let other_contract = address!("9999999999999999999999999999999999999999");

    let cases = [
        Transaction::new(1, SIGNER, Some(other_contract), calldata.clone()),
        Transaction::new(1, SIGNER, None, calldata.clone()),
        router_tx(Bytes::new()),
        // ERC-20 transfer selector
        router_tx(Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb, 0, 0, 0, 0])),
    ];
    for tx in &cases {
        assert!(parser.parse_transaction(tx).is_empty());
    }

    // Routers on other chains are recognized
    let bsc = Transaction::new(
        NamedChain::BinanceSmartChain as u64,
        SIGNER,
        Some(UNIVERSAL_ROUTER_BSC_AVALANCHE),
        calldata,
    );
    assert_eq!(parser.parse_transaction(&bsc).len(), 1);
}

#[test]
fn test_router_registered_on_unnamed_chain() {
    let chain_id = 999_999_999;
    let router = address!("7777777777777777777777777777777777777777");
    let config = RouterParserConfigBuilder::new()
        .router_for_chain_id(chain_id, router)
        .build();
    let parser = UniversalRouterParser::with_config(config);
    let calldata = execute_calldata(
        vec![cmd::V3_SWAP_EXACT_IN],
        vec![v3_single(TOKEN_A, TOKEN_B, 5, 4)],
    );

    let tx = Transaction::new(chain_id, SIGNER, Some(router), calldata.clone());
    assert_eq!(parser.parse_transaction(&tx).len(), 1);

    // Only the registered chain recognizes the address
    let mainnet = Transaction::new(1, SIGNER, Some(router), calldata);
    assert!(parser.parse_transaction(&mainnet).is_empty());
}

#[test]
fn test_parser_behind_trait_object() -> anyhow::Result<()> {
    let parsers: Vec<Box<dyn ProtocolParser>> = vec![Box::new(UniversalRouterParser::new())];
    let tx = router_call(
        vec![cmd::V3_SWAP_EXACT_IN],
        vec![v3_single(TOKEN_A, TOKEN_B, 5, 4)],
    );

    let actions: Vec<Action> = parsers.iter().flat_map(|p| p.parse_transaction(&tx)).collect();
    let json = serde_json::to_value(&actions)?;

    assert_eq!(json[0]["type"], "MULTI_SWAP");
    assert_eq!(json[0]["fromAmounts"][0], "5");
    assert_eq!(json[0]["toAmounts"][0], "4");
    let sender: Address = serde_json::from_value(json[0]["sender"].clone())?;
    assert_eq!(sender, SENDER);
    Ok(())
}
