// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across routescan.
//!
//! This module provides newtype wrappers and records for the domain:
//! - Raw token amounts and fee tiers
//! - Configuration values (sub-plan recursion depth)
//! - Caller-supplied transactions
//! - Protocol-agnostic actions produced by the parsers

pub mod action;
pub mod amount;
pub mod config;
pub mod fee;
pub mod transaction;

// Note: Public types are re-exported from lib.rs, not here
