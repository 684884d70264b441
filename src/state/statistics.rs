// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the outer
//! enumeration and the evaluator as they work. They have no influence on
//! control flow; they exist for the end-of-run summary.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Counters tracked over one run.
#[derive(EnumCountMacro, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Feasible pairs examined by the outer enumeration.
    PairsTested,
    /// Pairs for which the whole statement chain held.
    Answers,
    /// Product-partition scans performed by the evaluator.
    ProductScans,
    /// Sum-partition scans performed by the evaluator.
    SumScans,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::PairsTested), 0);
        assert_eq!(stats.get(Counters::Answers), 0);
    }

    #[test]
    fn test_increment_is_independent_per_counter() {
        let mut stats = Statistics::new();
        stats.increment(Counters::PairsTested);
        stats.increment(Counters::PairsTested);
        stats.increment(Counters::ProductScans);
        assert_eq!(stats.get(Counters::PairsTested), 2);
        assert_eq!(stats.get(Counters::ProductScans), 1);
        assert_eq!(stats.get(Counters::SumScans), 0);
    }
}
