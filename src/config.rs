// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration and startup validation.
//!
//! A run is fully described by its bounds, the chain length (the puzzle
//! variant), and a verbosity level. Everything is validated once, before any
//! search starts: the run either proceeds over the full declared space or
//! does not start at all. Nothing here is consulted again mid-search.

use thiserror::Error;

use crate::engine::{classic_chain, RoundRule, MAX_CHAIN_LENGTH};
use crate::pairs::Bounds;
use crate::trace::Verbosity;

/// Configuration rejected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "invalid verbosity level {level}; valid levels are 0 (default), \
         1 (silent), 2 (summary), 3-9 (detailed)"
    )]
    InvalidVerbosity { level: u8 },

    #[error("chain length {len} is out of range; defined statements are 1 through {max}", max = MAX_CHAIN_LENGTH)]
    ChainLengthOutOfRange { len: usize },

    #[error("min value must be at least 1")]
    MinValueZero,

    #[error(
        "bounds admit no pairs: max sum {max_sum} must exceed twice the min value {min_value}"
    )]
    EmptySearchSpace { min_value: u64, max_sum: u64 },
}

/// Raw run parameters as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Smallest admissible x (default 2).
    pub min_value: u64,
    /// Largest admissible x + y (default 100).
    pub max_sum: u64,
    /// Number of statements required to hold, 1..=[`MAX_CHAIN_LENGTH`].
    pub chain_length: usize,
    /// Numeric verbosity level; 0 means the default (summary).
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            min_value: 2,
            max_sum: 100,
            chain_length: MAX_CHAIN_LENGTH,
            verbosity: 0,
        }
    }
}

/// A validated run: bounds known non-empty, chain built, verbosity parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub bounds: Bounds,
    pub chain: Vec<RoundRule>,
    pub verbosity: Verbosity,
}

impl RunConfig {
    /// Validate the configuration and build the run plan.
    ///
    /// The smallest pair under the bounds is (min_value, min_value + 1), so
    /// any `max_sum` at or below 2 * min_value leaves the space empty and is
    /// rejected here rather than producing a silent zero-answer run.
    pub fn validate(&self) -> Result<RunPlan, ConfigError> {
        if self.min_value == 0 {
            return Err(ConfigError::MinValueZero);
        }
        if self.max_sum < 2 * self.min_value + 1 {
            return Err(ConfigError::EmptySearchSpace {
                min_value: self.min_value,
                max_sum: self.max_sum,
            });
        }
        if self.chain_length == 0 || self.chain_length > MAX_CHAIN_LENGTH {
            return Err(ConfigError::ChainLengthOutOfRange {
                len: self.chain_length,
            });
        }
        let verbosity = Verbosity::from_level(self.verbosity).ok_or(
            ConfigError::InvalidVerbosity {
                level: self.verbosity,
            },
        )?;

        Ok(RunPlan {
            bounds: Bounds::new(self.min_value, self.max_sum),
            chain: classic_chain(self.chain_length),
            verbosity,
        })
    }
}
