// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate pair space.
//!
//! This module owns the value types of the search - [`Pair`] and [`Bounds`] -
//! and the bounded enumerations over them: the partition scans
//! ([`pairs_with_product`], [`pairs_with_sum`]) used by the statement
//! evaluator, and the [`FeasiblePairs`] iterator that drives the outer
//! enumeration. It depends on nothing else in the crate.

pub mod bounds;
pub mod pair;
pub mod space;

pub use bounds::Bounds;
pub use pair::Pair;
pub use space::{pairs_with_product, pairs_with_sum, FeasiblePairs, NO_LIMIT};
