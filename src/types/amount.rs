// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw token amount (not normalized for decimals)
///
/// This represents the raw token amount as declared in calldata, in the token's
/// smallest unit. Depending on the command it is either an executed value or a
/// declared bound (minimum-out or maximum-in).
///
/// Amounts that calldata cannot reveal, such as intermediate legs of a
/// multi-hop trade, are reported as [`TokenAmount::ZERO`] rather than omitted.
/// Serialized form is a decimal string, so a zero is always `"0"`.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use routescan::TokenAmount;
///
/// let amount = TokenAmount::new(U256::from(1_500_000u64));
/// assert_eq!(amount.to_string(), "1500000");
/// assert!(TokenAmount::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str_radix(&raw, 10)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
