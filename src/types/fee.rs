// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pool fee tier type

use serde::{Deserialize, Serialize};

use crate::errors::PathError;

/// Fee tier of a concentrated-liquidity pool, in hundredths of a basis point
///
/// Packed swap paths store fees in 3 bytes, so a tier is limited to 24 bits.
///
/// # Examples
///
/// ```
/// use routescan::FeeTier;
///
/// assert_eq!(FeeTier::MEDIUM.as_u32(), 3000);
/// assert!(FeeTier::try_new(0x0100_0000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(u32);

impl FeeTier {
    /// Largest value that fits the 3-byte fee slot
    pub const MAX_VALUE: u32 = 0x00FF_FFFF;

    /// 0.01% pools
    pub const LOWEST: Self = Self(100);

    /// 0.05% pools
    pub const LOW: Self = Self(500);

    /// 0.3% pools
    pub const MEDIUM: Self = Self(3000);

    /// 1% pools
    pub const HIGH: Self = Self(10_000);

    /// Create a fee tier, rejecting values wider than 24 bits
    pub fn try_new(fee: u32) -> Result<Self, PathError> {
        if fee > Self::MAX_VALUE {
            return Err(PathError::FeeOutOfRange(fee));
        }
        Ok(Self(fee))
    }

    /// Build a fee tier from its 3-byte big-endian encoding
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// 3-byte big-endian encoding
    pub const fn to_be_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Get the inner value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = PathError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl std::fmt::Display for FeeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
