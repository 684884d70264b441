// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded enumeration of candidate pairs.
//!
//! Two partition scans - by product and by sum - plus the iterator that
//! drives the outer enumeration. The scans return pairs in strictly
//! increasing x order and stop early once `limit` pairs have been found:
//! the evaluator only ever needs to distinguish "zero, one, or at least two"
//! members, never the full list.

use crate::pairs::{Bounds, Pair};

/// Limit value meaning "collect every member of the partition".
pub const NO_LIMIT: usize = usize::MAX;

/// All feasible pairs (x, y) with x * y == `product`, in increasing x order,
/// stopping after `limit` pairs.
///
/// Candidate x values that do not evenly divide `product` are skipped; that
/// is an arithmetic edge case, not a failure. An empty result means no
/// feasible pair produces this product.
pub fn pairs_with_product(product: u64, bounds: &Bounds, limit: usize) -> Vec<Pair> {
    let mut found = Vec::new();
    if limit == 0 {
        return found;
    }

    let max_x = bounds.max_first_component().min(product);
    for x in bounds.min_value..=max_x {
        if product % x != 0 {
            continue;
        }
        let y = product / x;
        if bounds.is_feasible(x, y) {
            found.push(Pair::new(x, y));
            if found.len() >= limit {
                break;
            }
        }
    }
    found
}

/// All feasible pairs (x, y) with x + y == `sum`, in increasing x order,
/// stopping after `limit` pairs.
///
/// Candidates are not feasible by construction: y = sum - x can fall below
/// `min_value` or below x, so every candidate is re-validated through
/// [`Bounds::is_feasible`].
pub fn pairs_with_sum(sum: u64, bounds: &Bounds, limit: usize) -> Vec<Pair> {
    let mut found = Vec::new();
    if limit == 0 {
        return found;
    }

    for x in bounds.min_value..sum {
        let y = sum - x;
        if y <= x {
            // y only decreases from here; no later candidate is ordered.
            break;
        }
        if bounds.is_feasible(x, y) {
            found.push(Pair::new(x, y));
            if found.len() >= limit {
                break;
            }
        }
    }
    found
}

/// Iterator over every feasible pair under the given bounds, in
/// lexicographic (x, y) order. Drives the outer enumeration.
#[derive(Debug, Clone)]
pub struct FeasiblePairs {
    bounds: Bounds,
    x: u64,
    y: u64,
}

impl FeasiblePairs {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            x: bounds.min_value,
            y: bounds.min_value + 1,
        }
    }
}

impl Iterator for FeasiblePairs {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        let max_x = self.bounds.max_first_component();
        loop {
            if self.x > max_x {
                return None;
            }
            if self.x + self.y <= self.bounds.max_sum {
                let pair = Pair::new(self.x, self.y);
                self.y += 1;
                return Some(pair);
            }
            self.x += 1;
            self.y = self.x + 1;
        }
    }
}
