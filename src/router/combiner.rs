// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hop combiner
//!
//! Routers execute a multi-pool trade as consecutive single-hop commands. This
//! pass stitches consecutive [`Action::SingleSwap`]s into one
//! [`Action::MultiSwap`] whenever a hop sells the token the previous hop bought.
//!
//! The policy is greedy: a single forward pass, no lookahead. Two unrelated
//! swaps that happen to share a boundary token are merged.

use crate::spans;
use crate::types::action::{Action, MultiSwapAction};

/// Collapse chained single-hop swaps into multi-hop routes
///
/// Every run of single-hop swaps is emitted as a [`MultiSwapAction`], even a
/// run of one. Any other action closes the open run and is emitted unchanged.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{address, Address};
/// use routescan::{combine_hops, Action, SingleSwapAction, TokenAmount};
///
/// let a = address!("1111111111111111111111111111111111111111");
/// let b = address!("2222222222222222222222222222222222222222");
/// let c = address!("3333333333333333333333333333333333333333");
/// let hop = |from, to| Action::SingleSwap(SingleSwapAction {
///     from_token: from,
///     to_token: to,
///     from_amount: TokenAmount::ZERO,
///     to_amount: TokenAmount::ZERO,
///     recipient: Address::ZERO,
///     sender: Address::ZERO,
/// });
///
/// let combined = combine_hops(vec![hop(a, b), hop(b, c)]);
/// assert_eq!(combined.len(), 1);
/// assert_eq!(combined[0].as_multi_swap().unwrap().token_path(), vec![a, b, c]);
/// ```
pub fn combine_hops(actions: Vec<Action>) -> Vec<Action> {
    let span = spans::combine_hops(actions.len());
    let _guard = span.enter();

    let capacity = actions.len();
    let (mut combined, open) = actions.into_iter().fold(
        (Vec::with_capacity(capacity), None::<MultiSwapAction>),
        |(mut out, open), action| match action {
            Action::SingleSwap(hop) => match open {
                Some(mut route) if route.continues_with(&hop) => {
                    route.push_hop(&hop);
                    (out, Some(route))
                }
                Some(route) => {
                    out.push(Action::MultiSwap(route));
                    (out, Some(MultiSwapAction::from_hop(&hop)))
                }
                None => (out, Some(MultiSwapAction::from_hop(&hop))),
            },
            other => {
                out.extend(open.map(Action::MultiSwap));
                out.push(other);
                (out, None)
            }
        },
    );
    combined.extend(open.map(Action::MultiSwap));

    tracing::trace!(combined = combined.len(), "Combined hops");
    combined
}
