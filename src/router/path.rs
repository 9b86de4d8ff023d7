// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Packed multi-hop swap path codec
//!
//! Layout: `token(20) [fee(3) token(20)]*`. Fees are big-endian.
//!
//! Exact-output trades encode their path in reverse execution order (output
//! token first). [`SwapPath::decode_exact_output`] undoes that so index 0 is
//! always the token actually sold.

use alloy_primitives::{Address, Bytes};

use crate::config::constants::path::{ADDR_SIZE, FEE_SIZE};
use crate::errors::PathError;
use crate::types::fee::FeeTier;

/// A decoded multi-hop route: `tokens.len() >= 2` and `fees.len() == tokens.len() - 1`
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use routescan::{FeeTier, SwapPath};
///
/// let weth = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
/// let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
///
/// let path = SwapPath::new(vec![weth, usdc], vec![FeeTier::LOW]).unwrap();
/// let encoded = path.encode();
/// assert_eq!(encoded.len(), 43);
/// assert_eq!(SwapPath::decode(&encoded).unwrap(), path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapPath {
    tokens: Vec<Address>,
    fees: Vec<FeeTier>,
}

impl SwapPath {
    /// Build a path, checking that tokens and fees describe a chain of hops
    pub fn new(tokens: Vec<Address>, fees: Vec<FeeTier>) -> Result<Self, PathError> {
        if tokens.len() < 2 {
            return Err(PathError::TooFewTokens {
                found: tokens.len(),
            });
        }
        if fees.len() + 1 != tokens.len() {
            return Err(PathError::FeeCountMismatch {
                tokens: tokens.len(),
                fees: fees.len(),
            });
        }
        Ok(Self { tokens, fees })
    }

    /// Decode a path stored in execution order
    pub fn decode(raw: &[u8]) -> Result<Self, PathError> {
        let mut tokens = Vec::with_capacity(raw.len() / ADDR_SIZE + 1);
        let mut fees = Vec::with_capacity(raw.len() / ADDR_SIZE);
        let mut offset = 0;

        while offset < raw.len() {
            let token = raw
                .get(offset..offset + ADDR_SIZE)
                .ok_or_else(|| PathError::truncated(offset, ADDR_SIZE, raw.len() - offset))?;
            tokens.push(Address::from_slice(token));
            offset += ADDR_SIZE;

            if offset < raw.len() {
                let fee = raw
                    .get(offset..offset + FEE_SIZE)
                    .ok_or_else(|| PathError::truncated(offset, FEE_SIZE, raw.len() - offset))?;
                fees.push(FeeTier::from_be_bytes([fee[0], fee[1], fee[2]]));
                offset += FEE_SIZE;

                // A fee must always be followed by a token
                if offset == raw.len() {
                    return Err(PathError::truncated(offset, ADDR_SIZE, 0));
                }
            }
        }

        Self::new(tokens, fees)
    }

    /// Decode a path stored in reverse order, as exact-output trades store it
    ///
    /// The result is in execution order: `token_in()` is the token sold.
    pub fn decode_exact_output(raw: &[u8]) -> Result<Self, PathError> {
        Self::decode(raw).map(Self::reversed)
    }

    /// Pack the path in its stored order, without any reversal
    pub fn encode(&self) -> Bytes {
        let len = self.tokens.len() * ADDR_SIZE + self.fees.len() * FEE_SIZE;
        let mut out = Vec::with_capacity(len);
        for (token, fee) in self.tokens.iter().zip(self.fees.iter()) {
            out.extend_from_slice(token.as_slice());
            out.extend_from_slice(&fee.to_be_bytes());
        }
        if let Some(last) = self.tokens.last() {
            out.extend_from_slice(last.as_slice());
        }
        Bytes::from(out)
    }

    /// The same route walked backwards
    pub fn reversed(mut self) -> Self {
        self.tokens.reverse();
        self.fees.reverse();
        self
    }

    /// All tokens, in order
    pub fn tokens(&self) -> &[Address] {
        &self.tokens
    }

    /// Fee tier between each pair of adjacent tokens
    pub fn fees(&self) -> &[FeeTier] {
        &self.fees
    }

    /// First token of the route
    pub fn token_in(&self) -> Address {
        self.tokens[0]
    }

    /// Last token of the route
    pub fn token_out(&self) -> Address {
        self.tokens[self.tokens.len() - 1]
    }

    /// Number of pools traversed
    pub fn hop_count(&self) -> usize {
        self.fees.len()
    }

    /// Iterate hops as `(token_in, fee, token_out)`
    pub fn hops(&self) -> impl Iterator<Item = (Address, FeeTier, Address)> + '_ {
        self.tokens
            .windows(2)
            .zip(self.fees.iter())
            .map(|(pair, fee)| (pair[0], *fee, pair[1]))
    }
}
