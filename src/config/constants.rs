// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! This module centralizes router deployments and magic constants used
//! throughout the routescan crate.

use alloy_primitives::{address, Address};

/// Universal Router deployments per chain
pub mod routers {
    use super::*;
    use alloy_chains::NamedChain;

    /// Universal Router shared by Ethereum, Optimism, Polygon, Arbitrum and Base
    ///
    /// Contract: 0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD
    pub const UNIVERSAL_ROUTER: Address = address!("3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad");

    /// Universal Router on BNB Smart Chain and Avalanche
    ///
    /// Contract: 0x4Dae2f939ACf50408e13d58534Ff8c2776d45265
    pub const UNIVERSAL_ROUTER_BSC_AVALANCHE: Address =
        address!("4dae2f939acf50408e13d58534ff8c2776d45265");

    /// Chains with a built-in router deployment
    pub const SUPPORTED_CHAINS: &[NamedChain] = &[
        NamedChain::Mainnet,
        NamedChain::Optimism,
        NamedChain::Polygon,
        NamedChain::Arbitrum,
        NamedChain::Base,
        NamedChain::BinanceSmartChain,
        NamedChain::Avalanche,
    ];

    /// Built-in router deployment for `chain`
    pub fn universal_router(chain: NamedChain) -> Option<Address> {
        match chain {
            NamedChain::Mainnet
            | NamedChain::Optimism
            | NamedChain::Polygon
            | NamedChain::Arbitrum
            | NamedChain::Base => Some(UNIVERSAL_ROUTER),
            NamedChain::BinanceSmartChain | NamedChain::Avalanche => {
                Some(UNIVERSAL_ROUTER_BSC_AVALANCHE)
            }
            _ => None,
        }
    }
}

/// Packed swap path layout
pub mod path {
    /// Bytes per token address
    pub const ADDR_SIZE: usize = 20;

    /// Bytes per fee tier
    pub const FEE_SIZE: usize = 3;

    /// Offset from one token to the next
    pub const NEXT_OFFSET: usize = ADDR_SIZE + FEE_SIZE;

    /// Shortest encoding of a path with two tokens
    pub const MIN_MULTI_HOP_PATH_LEN: usize = NEXT_OFFSET + ADDR_SIZE;
}

/// Router command byte layout
pub mod commands {
    /// Bits holding the command type
    pub const COMMAND_TYPE_MASK: u8 = 0x3f;

    /// Bit marking a command whose failure must not revert the plan
    pub const FLAG_ALLOW_REVERT: u8 = 0x80;
}
