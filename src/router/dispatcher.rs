// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command stream dispatcher
//!
//! Walks a `(commands, inputs)` pair, routing each command to its parameter
//! decoder. The input cursor advances exactly once per command, including
//! commands that produce no action, so command `i` is always paired with
//! input `i`.

use alloy_primitives::Bytes;
use tracing::{trace, warn};

use super::commands::{Command, CommandKind};
use super::params::{self, SwapDirection};
use crate::diagnostics::{DecodeDiagnostics, Diagnostic};
use crate::errors::CommandDecodeError;
use crate::spans;
use crate::types::action::Action;
use crate::types::config::MaxRouteDepth;

/// Decodes command streams into actions, recursing into nested sub-plans
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandDispatcher {
    max_depth: MaxRouteDepth,
}

impl CommandDispatcher {
    /// Create a dispatcher with the given sub-plan recursion bound
    pub fn new(max_depth: MaxRouteDepth) -> Self {
        Self { max_depth }
    }

    /// Recursion bound for nested sub-plans
    pub fn max_depth(&self) -> MaxRouteDepth {
        self.max_depth
    }

    /// Decode a top-level command stream
    ///
    /// Never fails: per-command failures, unknown commands and a short input
    /// list are recorded in `diagnostics` and decoding continues or stops with
    /// the actions produced so far.
    pub fn dispatch(
        &self,
        commands: &[u8],
        inputs: &[Bytes],
        diagnostics: &mut DecodeDiagnostics,
    ) -> Vec<Action> {
        self.dispatch_at(0, commands, inputs, diagnostics)
    }

    fn dispatch_at(
        &self,
        depth: usize,
        commands: &[u8],
        inputs: &[Bytes],
        diagnostics: &mut DecodeDiagnostics,
    ) -> Vec<Action> {
        let span = spans::dispatch_commands(depth, commands.len(), inputs.len());
        let _guard = span.enter();

        if commands.len() != inputs.len() {
            warn!(
                depth,
                commands = commands.len(),
                inputs = inputs.len(),
                "Command and input counts differ"
            );
            diagnostics.push(Diagnostic::LengthMismatch {
                depth,
                commands: commands.len(),
                inputs: inputs.len(),
            });
        }

        let mut actions = Vec::with_capacity(commands.len());
        for (index, &byte) in commands.iter().enumerate() {
            let Some(input) = inputs.get(index) else {
                warn!(depth, index, "Inputs exhausted, truncating command stream");
                diagnostics.push(Diagnostic::InputsExhausted {
                    depth,
                    index,
                    commands: commands.len(),
                });
                break;
            };

            let command = Command::from_byte(byte);
            match self.decode_command(depth, index, byte, command, input, diagnostics) {
                Ok(decoded) => actions.extend(decoded),
                Err(error) => {
                    warn!(
                        depth,
                        index,
                        %command,
                        error = %error,
                        "Skipping command that failed to decode"
                    );
                    diagnostics.push(Diagnostic::CommandFailed {
                        depth,
                        index,
                        error,
                    });
                }
            }
        }
        actions
    }

    fn decode_command(
        &self,
        depth: usize,
        index: usize,
        byte: u8,
        command: Command,
        input: &[u8],
        diagnostics: &mut DecodeDiagnostics,
    ) -> Result<Vec<Action>, CommandDecodeError> {
        let action = match command.kind() {
            CommandKind::SingleHopExactIn if params::is_multi_hop(input) => {
                params::decode_multi_hop_exact_in(command, input)?
            }
            CommandKind::SingleHopExactIn => {
                params::decode_v3_single_hop(command, SwapDirection::ExactIn, input)?
            }
            CommandKind::SingleHopExactOut if params::is_multi_hop(input) => {
                params::decode_multi_hop_exact_out(command, input)?
            }
            CommandKind::SingleHopExactOut => {
                params::decode_v3_single_hop(command, SwapDirection::ExactOut, input)?
            }
            CommandKind::V2ExactIn => {
                params::decode_v2_single_hop(command, SwapDirection::ExactIn, input)?
            }
            CommandKind::V2ExactOut => {
                params::decode_v2_single_hop(command, SwapDirection::ExactOut, input)?
            }
            CommandKind::NestedRoute => {
                let nested = depth + 1;
                if !self.max_depth.allows(nested) {
                    return Err(CommandDecodeError::DepthExceeded {
                        depth: nested,
                        max: self.max_depth.as_usize(),
                    });
                }
                let (commands, inputs) = params::decode_sub_plan(input)?;
                return Ok(self.dispatch_at(nested, &commands, &inputs, diagnostics));
            }
            CommandKind::PassThrough => {
                trace!(depth, index, %command, "Pass-through command");
                return Ok(Vec::new());
            }
            CommandKind::Unrecognized => {
                warn!(depth, index, %command, "Unknown command, skipping");
                diagnostics.push(Diagnostic::UnknownCommand { depth, index, byte });
                return Ok(Vec::new());
            }
        };
        Ok(vec![action])
    }
}
