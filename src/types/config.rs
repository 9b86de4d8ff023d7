// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for configuration values

use serde::{Deserialize, Serialize};

/// Maximum nesting depth for sub-plan commands
///
/// Depth 0 is the top-level command stream; each nested sub-plan adds one.
/// A sub-plan that would run deeper than this bound is skipped and reported.
///
/// # Examples
///
/// ```
/// use routescan::MaxRouteDepth;
///
/// let depth = MaxRouteDepth::new(4);
/// assert!(depth.allows(4));
/// assert!(!depth.allows(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxRouteDepth(usize);

impl MaxRouteDepth {
    /// Default bound, deep enough for every router plan seen in practice
    pub const DEFAULT: Self = Self(4);

    /// Create a new depth bound
    pub const fn new(depth: usize) -> Self {
        Self(depth)
    }

    /// Get the inner value
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Whether a command stream at `depth` may be decoded
    pub const fn allows(&self, depth: usize) -> bool {
        depth <= self.0
    }
}

impl Default for MaxRouteDepth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for MaxRouteDepth {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MaxRouteDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
