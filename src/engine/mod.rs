// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive statement-chain evaluator.
//!
//! This module decides, for one candidate pair, whether every statement in a
//! round chain holds. It is the mathematical core of the crate.
//!
//! # Semantics
//!
//! Round r is evaluated against the set of feasible pairs sharing the
//! candidate's partition value (its product or its sum):
//!
//! - An **ambiguity** round holds iff at least two feasible pairs share the
//!   value and every sharer satisfies statements 1..r-1. The scan stops at
//!   the first sharer the earlier statements rule out (a counterexample).
//! - A **resolution** round holds iff exactly one feasible pair sharing the
//!   value satisfies statements 1..r-1. The scan stops as soon as a second
//!   survivor appears.
//!
//! Checking "satisfies statements 1..r-1" re-runs this evaluator on the
//! alternative pair with the shorter prefix chain, which is what makes the
//! search recursive: statement truth for one pair depends on statement truth
//! for every pair it could be confused with. Recursion is bounded because
//! each nested evaluation uses a strictly shorter chain.
//!
//! Evaluation is pure: the same (pair, chain, bounds) always produces the
//! same answer. The context is only written through its statistics counters
//! and trace sink, neither of which feeds back into control flow. Depth is
//! threaded explicitly and reaches only the sink, as indentation.

pub mod rules;

pub use rules::{classic_chain, dual_chain, PartitionKey, Quantifier, RoundRule, MAX_CHAIN_LENGTH};

use crate::context::SearchContext;
use crate::pairs::{pairs_with_product, pairs_with_sum, Pair, NO_LIMIT};
use crate::state::Counters;

/// Decide whether every round in `chain` holds for `pair`.
///
/// Rounds are evaluated in order with a short-circuit at the first failure;
/// later rounds are strictly more expensive, so the order is also the cheap
/// pruning order.
pub fn holds_chain(ctx: &mut SearchContext, pair: Pair, chain: &[RoundRule]) -> bool {
    // Depth 0 belongs to the outer enumeration; statement evaluation for a
    // candidate starts one level in.
    holds_chain_at(ctx, pair, chain, 1)
}

fn holds_chain_at(ctx: &mut SearchContext, pair: Pair, chain: &[RoundRule], depth: usize) -> bool {
    (0..chain.len()).all(|index| holds_round(ctx, pair, chain, index, depth))
}

/// Evaluate round `index` of `chain` for `pair`. The rounds before `index`
/// form the prior chain that alternatives must be re-tested against.
fn holds_round(
    ctx: &mut SearchContext,
    pair: Pair,
    chain: &[RoundRule],
    index: usize,
    depth: usize,
) -> bool {
    let rule = chain[index];
    let priors = &chain[..index];
    match rule.quantifier {
        Quantifier::Ambiguity => holds_ambiguity(ctx, pair, rule, priors, index, depth),
        Quantifier::Resolution => holds_resolution(ctx, pair, rule, priors, index, depth),
    }
}

/// Scan the partition sharing `pair`'s value under `rule.partition`.
fn partition_members(
    ctx: &mut SearchContext,
    pair: Pair,
    rule: RoundRule,
    limit: usize,
) -> Vec<Pair> {
    let value = rule.partition.value_of(pair);
    match rule.partition {
        PartitionKey::Product => {
            ctx.statistics.increment(Counters::ProductScans);
            pairs_with_product(value, &ctx.bounds, limit)
        }
        PartitionKey::Sum => {
            ctx.statistics.increment(Counters::SumScans);
            pairs_with_sum(value, &ctx.bounds, limit)
        }
    }
}

fn holds_ambiguity(
    ctx: &mut SearchContext,
    pair: Pair,
    rule: RoundRule,
    priors: &[RoundRule],
    index: usize,
    depth: usize,
) -> bool {
    let label = rule.partition.label();
    let value = rule.partition.value_of(pair);

    if priors.is_empty() {
        // With no earlier statements to re-test, ambiguity is just the
        // existence of a second sharer; two members settle it.
        let members = partition_members(ctx, pair, rule, 2);
        if members.len() < 2 {
            ctx.trace(
                depth,
                &format!(
                    "{} fails statement {}: {} {} admits no second pair",
                    pair,
                    index + 1,
                    label,
                    value
                ),
            );
            return false;
        }
        ctx.trace(
            depth,
            &format!(
                "{} satisfies statement {}: {} and {} share {} {}",
                pair,
                index + 1,
                members[0],
                members[1],
                label,
                value
            ),
        );
        return true;
    }

    let members = partition_members(ctx, pair, rule, NO_LIMIT);
    for alt in &members {
        if !holds_chain_at(ctx, *alt, priors, depth + 1) {
            ctx.trace(
                depth,
                &format!(
                    "{} fails statement {}: {} shares {} {} but fails the earlier statements",
                    pair,
                    index + 1,
                    alt,
                    label,
                    value
                ),
            );
            return false;
        }
    }
    if members.len() < 2 {
        ctx.trace(
            depth,
            &format!(
                "{} fails statement {}: {} {} admits no second pair",
                pair,
                index + 1,
                label,
                value
            ),
        );
        return false;
    }
    ctx.trace(
        depth,
        &format!(
            "{} satisfies statement {}: all {} pairs sharing {} {} satisfy the earlier statements",
            pair,
            index + 1,
            members.len(),
            label,
            value
        ),
    );
    true
}

fn holds_resolution(
    ctx: &mut SearchContext,
    pair: Pair,
    rule: RoundRule,
    priors: &[RoundRule],
    index: usize,
    depth: usize,
) -> bool {
    let label = rule.partition.label();
    let value = rule.partition.value_of(pair);

    let members = partition_members(ctx, pair, rule, NO_LIMIT);
    let mut survivor: Option<Pair> = None;
    for alt in &members {
        if holds_chain_at(ctx, *alt, priors, depth + 1) {
            if let Some(first) = survivor {
                ctx.trace(
                    depth,
                    &format!(
                        "{} fails statement {}: {} and {} both share {} {} and \
                         satisfy the earlier statements",
                        pair,
                        index + 1,
                        first,
                        alt,
                        label,
                        value
                    ),
                );
                return false;
            }
            survivor = Some(*alt);
        }
    }
    match survivor {
        Some(_) => {
            ctx.trace(
                depth,
                &format!(
                    "{} satisfies statement {}: it is the only pair sharing {} {} that \
                     satisfies the earlier statements",
                    pair,
                    index + 1,
                    label,
                    value
                ),
            );
            true
        }
        None => {
            ctx.trace(
                depth,
                &format!(
                    "{} fails statement {}: no pair sharing {} {} satisfies the \
                     earlier statements",
                    pair,
                    index + 1,
                    label,
                    value
                ),
            );
            false
        }
    }
}
