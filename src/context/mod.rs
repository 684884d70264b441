// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining immutable bounds and mutable run state.
//!
//! The SearchContext is the data structure passed through the search:
//! - Immutable tier: the [`Bounds`], fixed at configuration time and read by
//!   every partition scan.
//! - Mutable tier: run [`Statistics`] and the injected [`TraceSink`].
//!
//! Candidate evaluations share no other state, so independent SearchContext
//! instances over the same bounds can run independent searches (the outer
//! enumeration is embarrassingly parallel over x if that is ever wanted).

use crate::pairs::Bounds;
use crate::state::Statistics;
use crate::trace::{NullSink, TraceSink};

/// Context threaded through the outer enumeration and the evaluator.
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable bounds of the run.
    pub bounds: Bounds,
    /// Run counters.
    pub statistics: Statistics,
    /// Trace receiver; decides on its own what to print.
    pub tracer: Box<dyn TraceSink>,
}

impl SearchContext {
    /// Create a context that traces nowhere.
    pub fn new(bounds: Bounds) -> Self {
        Self::with_sink(bounds, Box::new(NullSink))
    }

    /// Create a context with an injected trace sink.
    pub fn with_sink(bounds: Bounds, tracer: Box<dyn TraceSink>) -> Self {
        Self {
            bounds,
            statistics: Statistics::new(),
            tracer,
        }
    }

    /// Report a decision point to the trace sink.
    pub fn trace(&mut self, depth: usize, text: &str) {
        self.tracer.emit(depth, text);
    }
}
