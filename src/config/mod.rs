// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for routescan parsers
//!
//! This module controls which router deployment is recognized on each chain,
//! how deep nested sub-plans may recurse, and whether adjacent hops are combined.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use routescan::RouterParserConfig;
//!
//! // Built-in deployments, depth bound of 4, hop combining on
//! let config = RouterParserConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use routescan::RouterParserConfigBuilder;
//! use alloy_chains::NamedChain;
//! use alloy_primitives::address;
//!
//! let config = RouterParserConfigBuilder::with_defaults()
//!     .max_route_depth(2)
//!     .router(NamedChain::Sepolia, address!("3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad"))
//!     .build();
//! ```

use std::collections::HashMap;

use alloy_chains::NamedChain;
use alloy_primitives::Address;

use crate::types::config::MaxRouteDepth;

pub mod constants;

/// Configuration for [`UniversalRouterParser`](crate::UniversalRouterParser)
///
/// Use [`RouterParserConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct RouterParserConfig {
    /// Maximum nesting depth for sub-plan commands
    /// Default: 4
    pub max_route_depth: MaxRouteDepth,

    /// Run the hop combiner over dispatcher output
    /// Default: true
    pub combine_hops: bool,

    /// Use the built-in deployment table for chains without an override
    /// Default: true
    pub use_builtin_routers: bool,

    /// Router deployments keyed by chain id, taking precedence over the built-in table
    ///
    /// Keyed by raw id so chains unknown to [`NamedChain`] can be registered too.
    pub router_overrides: HashMap<u64, Address>,
}

impl Default for RouterParserConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl RouterParserConfig {
    /// Create config with the built-in router deployments
    pub fn with_common_defaults() -> Self {
        Self {
            max_route_depth: MaxRouteDepth::DEFAULT,
            combine_hops: true,
            use_builtin_routers: true,
            router_overrides: HashMap::new(),
        }
    }

    /// Create config that only recognizes explicitly registered routers
    ///
    /// # Example
    ///
    /// ```rust
    /// use routescan::RouterParserConfig;
    ///
    /// let config = RouterParserConfig::minimal();
    /// assert_eq!(config.router_for_chain(1), None);
    /// ```
    pub fn minimal() -> Self {
        Self {
            use_builtin_routers: false,
            ..Self::with_common_defaults()
        }
    }

    /// Get the router deployment for a chain id
    ///
    /// Returns the chain-specific override if set, otherwise the built-in deployment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routescan::RouterParserConfig;
    /// use routescan::constants::routers::UNIVERSAL_ROUTER;
    ///
    /// let config = RouterParserConfig::default();
    /// assert_eq!(config.router_for_chain(42161), Some(UNIVERSAL_ROUTER));
    /// assert_eq!(config.router_for_chain(999_999_999), None);
    /// ```
    pub fn router_for_chain(&self, chain_id: u64) -> Option<Address> {
        self.router_overrides.get(&chain_id).copied().or_else(|| {
            if !self.use_builtin_routers {
                return None;
            }
            NamedChain::try_from(chain_id)
                .ok()
                .and_then(constants::routers::universal_router)
        })
    }

    /// Whether `address` is the router deployment on `chain_id`
    pub fn is_router(&self, chain_id: u64, address: Address) -> bool {
        self.router_for_chain(chain_id) == Some(address)
    }

    /// All router addresses this config recognizes, deduplicated
    pub fn all_routers(&self) -> Vec<Address> {
        let builtin = self
            .use_builtin_routers
            .then_some(constants::routers::SUPPORTED_CHAINS)
            .unwrap_or_default()
            .iter()
            .filter_map(|chain| self.router_for_chain(*chain as u64));

        let mut routers: Vec<Address> = self
            .router_overrides
            .values()
            .copied()
            .chain(builtin)
            .collect();
        routers.sort();
        routers.dedup();
        routers
    }

    /// Register a router deployment for a chain
    pub fn set_router(&mut self, chain: NamedChain, router: Address) {
        self.set_router_for_chain_id(chain as u64, router);
    }

    /// Register a router deployment by raw chain id
    ///
    /// # Example
    ///
    /// ```rust
    /// use routescan::RouterParserConfig;
    /// use alloy_primitives::address;
    ///
    /// let router = address!("3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad");
    /// let mut config = RouterParserConfig::minimal();
    /// config.set_router_for_chain_id(777_777, router);
    /// assert!(config.is_router(777_777, router));
    /// ```
    pub fn set_router_for_chain_id(&mut self, chain_id: u64, router: Address) {
        self.router_overrides.insert(chain_id, router);
    }
}

/// Builder for [`RouterParserConfig`]
///
/// # Example
///
/// ```rust
/// use routescan::RouterParserConfigBuilder;
///
/// let config = RouterParserConfigBuilder::new()
///     .max_route_depth(8)
///     .combine_hops(false)
///     .build();
/// assert!(!config.combine_hops);
/// ```
pub struct RouterParserConfigBuilder {
    config: RouterParserConfig,
}

impl Default for RouterParserConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterParserConfigBuilder {
    /// Create a new builder with no built-in routers
    pub fn new() -> Self {
        Self {
            config: RouterParserConfig::minimal(),
        }
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with the same defaults as
    /// [`RouterParserConfig::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            config: RouterParserConfig::with_common_defaults(),
        }
    }

    /// Set the sub-plan recursion bound
    pub fn max_route_depth(mut self, depth: usize) -> Self {
        self.config.max_route_depth = MaxRouteDepth::new(depth);
        self
    }

    /// Enable or disable hop combining
    pub fn combine_hops(mut self, enabled: bool) -> Self {
        self.config.combine_hops = enabled;
        self
    }

    /// Register a router deployment for a chain
    pub fn router(mut self, chain: NamedChain, router: Address) -> Self {
        self.config.set_router(chain, router);
        self
    }

    /// Register a router deployment by raw chain id
    pub fn router_for_chain_id(mut self, chain_id: u64, router: Address) -> Self {
        self.config.set_router_for_chain_id(chain_id, router);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> RouterParserConfig {
        self.config
    }
}
