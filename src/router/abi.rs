// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ABI definitions for the router entry point and command parameters
//!
//! The `sol!` macro generates a `*Call` struct per function. Command parameter
//! blobs carry no selector, so they are decoded with
//! [`SolCall::abi_decode_raw`] and built with [`encode_params`]:
//!
//! ```rust
//! use alloy_primitives::{address, U256};
//! use alloy_sol_types::SolCall;
//! use routescan::abi::{encode_params, v2SwapSingleHopCall};
//!
//! let params = v2SwapSingleHopCall {
//!     recipient: address!("08c9aa39f1febb81d43d8e70b3a0706da76812ab"),
//!     tokenIn: address!("ddd6ebd74684318fa912084a41a01f11b6c277f7"),
//!     tokenOut: address!("fd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9"),
//!     amount: U256::from(13_581u64),
//!     amountLimit: U256::from(894_501u64),
//!     sender: address!("08c9aa39f1febb81d43d8e70b3a0706da76812ab"),
//! };
//! let blob = encode_params(&params);
//! let decoded = v2SwapSingleHopCall::abi_decode_raw(&blob).unwrap();
//! assert_eq!(decoded.amountLimit, U256::from(894_501u64));
//! ```

#![allow(missing_docs)]

use alloy_primitives::Bytes;
use alloy_sol_types::{sol, SolCall};

sol! {
    /// Router entry point. Overloads are suffixed `_0` (with deadline) and `_1`.
    interface IUniversalRouter {
        function execute(
            bytes calldata commands,
            bytes[] calldata inputs,
            uint256 deadline
        ) external payable;
        function execute(bytes calldata commands, bytes[] calldata inputs) external payable;
    }
}

sol! {
    /// Single-hop concentrated-liquidity swap parameters
    ///
    /// `amount` is the committed side of the trade, `amountLimit` the bound on the other side.
    function v3SwapSingleHop(
        address recipient,
        address tokenIn,
        address tokenOut,
        uint24 fee,
        uint256 amount,
        uint256 amountLimit,
        address sender
    );

    /// Single-hop constant-product swap parameters
    function v2SwapSingleHop(
        address recipient,
        address tokenIn,
        address tokenOut,
        uint256 amount,
        uint256 amountLimit,
        address sender
    );

    /// Multi-hop swap committing the input amount
    function multiHopExactIn(bytes path, uint256 amountIn);

    /// Multi-hop swap committing the output amount; `path` is stored output-first
    function multiHopExactOut(bytes path, uint256 amountOut, uint256 amountInMaximum);

    /// Leading `bytes` argument shared by every multi-hop parameter blob
    function multiHopPath(bytes path);

    /// Nested command stream
    function executeSubPlan(bytes commands, bytes[] inputs);
}

/// ABI-encode a call's arguments without the 4-byte selector, the layout of a
/// command parameter blob
pub fn encode_params<C: SolCall>(call: &C) -> Bytes {
    let mut out = Vec::new();
    call.abi_encode_raw(&mut out);
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    #[test]
    fn test_encode_params_omits_selector() {
        let call = multiHopExactInCall {
            path: Bytes::from(vec![0x11u8; 43]),
            amountIn: U256::from(7u64),
        };
        let blob = encode_params(&call);

        assert_eq!(blob.as_ref(), &call.abi_encode()[4..]);
        let decoded = multiHopExactInCall::abi_decode_raw(&blob).unwrap();
        assert_eq!(decoded.amountIn, U256::from(7u64));
    }
}
