// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for integer pairs solving the sum-and-product epistemic puzzle.
//!
//! Given bounds (a minimum value and a maximum sum), the crate enumerates
//! every ordered pair (x, y) with x < y and keeps the pairs for which a
//! chain of epistemic statements holds - the classic dialogue between a
//! person told only the product and a person told only the sum:
//!
//! 1. The product-teller cannot determine the pair.
//! 2. The sum-teller, knowing statement 1, cannot determine the pair.
//! 3. The product-teller, knowing statements 1-2, can now determine it.
//! 4. The sum-teller, knowing statements 1-3, can now determine it too.
//!
//! See <https://en.wikipedia.org/wiki/Sum_and_Product_Puzzle> for background.
//!
//! # Architecture
//!
//! Two components, in dependency order:
//!
//! ## Pair space (`pairs`)
//!
//! The leaf component: the [`pairs::Bounds`] feasibility predicate (the one
//! ground truth every search filters through), and bounded enumerations of
//! pairs sharing a product or a sum.
//!
//! ## Statement chain (`engine`)
//!
//! The core: rounds described as data ([`engine::RoundRule`], a quantifier
//! plus a partition key) and a recursive evaluator deciding whether every
//! round of a chain holds for a candidate. A round's truth for one pair
//! depends on re-running the earlier rounds against every pair sharing its
//! product or sum, so the evaluator is a bounded recursive search, not a
//! filter chain. The chain length K (1..=4) selects the puzzle variant.
//!
//! The remaining modules are glue: [`context::SearchContext`] bundles bounds
//! with run statistics and an injected [`trace::TraceSink`]; [`search`] runs
//! the outer enumeration; [`config`] validates a run before it starts.
//!
//! # Parallelization
//!
//! Evaluation is pure and contexts share nothing, so the outer enumeration
//! is embarrassingly parallel over x if a port ever needs it. The reference
//! behavior is single-threaded; at the default bounds the whole space is
//! small.

pub mod config;
pub mod context;
pub mod engine;
pub mod pairs;
pub mod search;
pub mod state;
pub mod trace;

// Re-export commonly used types
pub use config::{ConfigError, RunConfig, RunPlan};
pub use context::SearchContext;
pub use engine::{classic_chain, dual_chain, holds_chain, RoundRule, MAX_CHAIN_LENGTH};
pub use pairs::{Bounds, Pair};
pub use search::compute_answers;
