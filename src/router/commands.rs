// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Router command identifiers
//!
//! Each byte of a router's `commands` argument names one operation. Bit 7 is the
//! allow-revert flag and bits 0..5 hold the command type; the numbering is fixed
//! by the deployed router and must not change.

use crate::config::constants::commands::{COMMAND_TYPE_MASK, FLAG_ALLOW_REVERT};

/// A router command, classified from its command byte
///
/// # Examples
///
/// ```
/// use routescan::{Command, CommandKind};
///
/// assert_eq!(Command::from_byte(0x00), Command::V3SwapExactIn);
/// // The allow-revert flag does not change the command type
/// assert_eq!(Command::from_byte(0x80 | 0x08), Command::V2SwapExactIn);
/// assert_eq!(Command::from_byte(0x3e).kind(), CommandKind::Unrecognized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// 0x00: concentrated-liquidity swap, exact input
    V3SwapExactIn,
    /// 0x01: concentrated-liquidity swap, exact output
    V3SwapExactOut,
    /// 0x02
    Permit2TransferFrom,
    /// 0x03
    Permit2PermitBatch,
    /// 0x04: sweep router balance to a recipient
    Sweep,
    /// 0x05
    Transfer,
    /// 0x06: pay a share of the router balance
    PayPortion,
    /// 0x07
    NoOp,
    /// 0x08: constant-product swap, exact input
    V2SwapExactIn,
    /// 0x09: constant-product swap, exact output
    V2SwapExactOut,
    /// 0x0a
    Permit2Permit,
    /// 0x0b
    WrapNative,
    /// 0x0c
    UnwrapNative,
    /// 0x0d
    Permit2TransferFromBatch,
    /// 0x0e
    BalanceCheckErc20,
    /// 0x0f: deadline check against the block timestamp
    Timestamp,
    /// 0x10
    V4Swap,
    /// 0x11
    V3PositionManagerPermit,
    /// 0x12: mint, collect or burn a liquidity position
    V3PositionManagerCall,
    /// 0x13
    V4InitializePool,
    /// 0x14: mint, collect or burn a liquidity position
    V4PositionManagerCall,
    /// 0x21: nested `(commands, inputs)` plan
    ExecuteSubPlan,
    /// Any other command type, with the raw byte
    Unknown(u8),
}

/// How the dispatcher treats a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Single-hop or multi-hop swap committing the input amount
    SingleHopExactIn,
    /// Single-hop or multi-hop swap committing the output amount
    SingleHopExactOut,
    /// Constant-product swap committing the input amount
    V2ExactIn,
    /// Constant-product swap committing the output amount
    V2ExactOut,
    /// Self-similar command stream decoded recursively
    NestedRoute,
    /// Consumes an input slot, produces no action
    PassThrough,
    /// Not in the command table; consumes an input slot and is reported
    Unrecognized,
}

impl Command {
    /// Classify a raw command byte
    pub const fn from_byte(byte: u8) -> Self {
        match byte & COMMAND_TYPE_MASK {
            0x00 => Command::V3SwapExactIn,
            0x01 => Command::V3SwapExactOut,
            0x02 => Command::Permit2TransferFrom,
            0x03 => Command::Permit2PermitBatch,
            0x04 => Command::Sweep,
            0x05 => Command::Transfer,
            0x06 => Command::PayPortion,
            0x07 => Command::NoOp,
            0x08 => Command::V2SwapExactIn,
            0x09 => Command::V2SwapExactOut,
            0x0a => Command::Permit2Permit,
            0x0b => Command::WrapNative,
            0x0c => Command::UnwrapNative,
            0x0d => Command::Permit2TransferFromBatch,
            0x0e => Command::BalanceCheckErc20,
            0x0f => Command::Timestamp,
            0x10 => Command::V4Swap,
            0x11 => Command::V3PositionManagerPermit,
            0x12 => Command::V3PositionManagerCall,
            0x13 => Command::V4InitializePool,
            0x14 => Command::V4PositionManagerCall,
            0x21 => Command::ExecuteSubPlan,
            _ => Command::Unknown(byte),
        }
    }

    /// Command type byte, without flags
    pub const fn id(&self) -> u8 {
        match self {
            Command::V3SwapExactIn => 0x00,
            Command::V3SwapExactOut => 0x01,
            Command::Permit2TransferFrom => 0x02,
            Command::Permit2PermitBatch => 0x03,
            Command::Sweep => 0x04,
            Command::Transfer => 0x05,
            Command::PayPortion => 0x06,
            Command::NoOp => 0x07,
            Command::V2SwapExactIn => 0x08,
            Command::V2SwapExactOut => 0x09,
            Command::Permit2Permit => 0x0a,
            Command::WrapNative => 0x0b,
            Command::UnwrapNative => 0x0c,
            Command::Permit2TransferFromBatch => 0x0d,
            Command::BalanceCheckErc20 => 0x0e,
            Command::Timestamp => 0x0f,
            Command::V4Swap => 0x10,
            Command::V3PositionManagerPermit => 0x11,
            Command::V3PositionManagerCall => 0x12,
            Command::V4InitializePool => 0x13,
            Command::V4PositionManagerCall => 0x14,
            Command::ExecuteSubPlan => 0x21,
            Command::Unknown(byte) => *byte & COMMAND_TYPE_MASK,
        }
    }

    /// Dispatcher treatment for this command
    pub const fn kind(&self) -> CommandKind {
        match self {
            Command::V3SwapExactIn => CommandKind::SingleHopExactIn,
            Command::V3SwapExactOut => CommandKind::SingleHopExactOut,
            Command::V2SwapExactIn => CommandKind::V2ExactIn,
            Command::V2SwapExactOut => CommandKind::V2ExactOut,
            Command::ExecuteSubPlan => CommandKind::NestedRoute,
            Command::Unknown(_) => CommandKind::Unrecognized,
            Command::Permit2TransferFrom
            | Command::Permit2PermitBatch
            | Command::Sweep
            | Command::Transfer
            | Command::PayPortion
            | Command::NoOp
            | Command::Permit2Permit
            | Command::WrapNative
            | Command::UnwrapNative
            | Command::Permit2TransferFromBatch
            | Command::BalanceCheckErc20
            | Command::Timestamp
            | Command::V4Swap
            | Command::V3PositionManagerPermit
            | Command::V3PositionManagerCall
            | Command::V4InitializePool
            | Command::V4PositionManagerCall => CommandKind::PassThrough,
        }
    }

    /// Whether the raw byte set the allow-revert flag
    pub const fn allows_revert(byte: u8) -> bool {
        byte & FLAG_ALLOW_REVERT != 0
    }

    /// Upper-case name used in logs and diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Command::V3SwapExactIn => "V3_SWAP_EXACT_IN",
            Command::V3SwapExactOut => "V3_SWAP_EXACT_OUT",
            Command::Permit2TransferFrom => "PERMIT2_TRANSFER_FROM",
            Command::Permit2PermitBatch => "PERMIT2_PERMIT_BATCH",
            Command::Sweep => "SWEEP",
            Command::Transfer => "TRANSFER",
            Command::PayPortion => "PAY_PORTION",
            Command::NoOp => "NOOP",
            Command::V2SwapExactIn => "V2_SWAP_EXACT_IN",
            Command::V2SwapExactOut => "V2_SWAP_EXACT_OUT",
            Command::Permit2Permit => "PERMIT2_PERMIT",
            Command::WrapNative => "WRAP_NATIVE",
            Command::UnwrapNative => "UNWRAP_NATIVE",
            Command::Permit2TransferFromBatch => "PERMIT2_TRANSFER_FROM_BATCH",
            Command::BalanceCheckErc20 => "BALANCE_CHECK_ERC20",
            Command::Timestamp => "TIMESTAMP",
            Command::V4Swap => "V4_SWAP",
            Command::V3PositionManagerPermit => "V3_POSITION_MANAGER_PERMIT",
            Command::V3PositionManagerCall => "V3_POSITION_MANAGER_CALL",
            Command::V4InitializePool => "V4_INITIALIZE_POOL",
            Command::V4PositionManagerCall => "V4_POSITION_MANAGER_CALL",
            Command::ExecuteSubPlan => "EXECUTE_SUB_PLAN",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}

impl From<u8> for Command {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Unknown(byte) => write!(f, "UNKNOWN(0x{byte:02x})"),
            known => f.write_str(known.name()),
        }
    }
}
