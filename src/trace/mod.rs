// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trace sink for observing the search.
//!
//! The evaluator and the outer enumeration report decision points as text
//! lines tagged with the current recursion depth. Whether a line is printed,
//! and with what indentation, is decided entirely here - no control-flow
//! decision anywhere in the crate depends on the sink, and the evaluator
//! itself contains no verbosity branching.

use std::fmt::Debug;
use std::io;
use std::io::Write;

/// How much of the trace to show.
///
/// Parsed once from the numeric verbosity level at configuration time:
/// 0 is the default and means [`Verbosity::Summary`], 1 is silent, 2 is
/// summary (depth-0 lines only), and 3..=9 show detail down to recursion
/// depth `level - 2`. Levels above 9 are rejected by configuration
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Print nothing.
    Silent,
    /// Print only depth-0 lines: headers, answers, and the run summary.
    Summary,
    /// Print lines down to `max_depth`, indented three spaces per depth.
    Detailed { max_depth: usize },
}

impl Verbosity {
    /// Map a numeric verbosity level to a [`Verbosity`], or None if the
    /// level is out of range.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 | 2 => Some(Verbosity::Summary),
            1 => Some(Verbosity::Silent),
            3..=9 => Some(Verbosity::Detailed {
                max_depth: (level - 2) as usize,
            }),
            _ => None,
        }
    }

    /// Whether a line at the given depth should be emitted.
    pub fn allows(&self, depth: usize) -> bool {
        match *self {
            Verbosity::Silent => false,
            Verbosity::Summary => depth == 0,
            Verbosity::Detailed { max_depth } => depth <= max_depth,
        }
    }
}

/// Receiver for trace lines.
///
/// Implementations decide whether to emit each line; callers never check
/// first. The depth is the recursion depth of the evaluation that produced
/// the line and is used for indentation only.
pub trait TraceSink: Debug {
    fn emit(&mut self, depth: usize, text: &str);
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&mut self, _depth: usize, _text: &str) {}
}

/// Sink writing to any [`io::Write`], filtering by verbosity and indenting
/// three spaces per depth level.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    verbosity: Verbosity,
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(verbosity: Verbosity, writer: W) -> Self {
        Self { verbosity, writer }
    }

    /// Consume the sink and hand back the writer (used by tests to inspect
    /// captured output).
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    /// A sink printing to standard output.
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(verbosity, io::stdout())
    }
}

impl<W: Write + Debug> TraceSink for WriterSink<W> {
    fn emit(&mut self, depth: usize, text: &str) {
        if !self.verbosity.allows(depth) {
            return;
        }
        // The trace is a side channel; a failed write must not abort a search.
        let _ = writeln!(self.writer, "{}{}", "   ".repeat(depth), text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(Verbosity::from_level(0), Some(Verbosity::Summary));
        assert_eq!(Verbosity::from_level(1), Some(Verbosity::Silent));
        assert_eq!(Verbosity::from_level(2), Some(Verbosity::Summary));
        assert_eq!(
            Verbosity::from_level(3),
            Some(Verbosity::Detailed { max_depth: 1 })
        );
        assert_eq!(
            Verbosity::from_level(9),
            Some(Verbosity::Detailed { max_depth: 7 })
        );
        assert_eq!(Verbosity::from_level(10), None);
    }

    #[test]
    fn test_allows() {
        assert!(!Verbosity::Silent.allows(0));
        assert!(Verbosity::Summary.allows(0));
        assert!(!Verbosity::Summary.allows(1));
        let detailed = Verbosity::Detailed { max_depth: 2 };
        assert!(detailed.allows(0));
        assert!(detailed.allows(2));
        assert!(!detailed.allows(3));
    }

    #[test]
    fn test_writer_sink_indents() {
        let mut sink = WriterSink::new(Verbosity::Detailed { max_depth: 9 }, Vec::new());
        sink.emit(0, "top");
        sink.emit(2, "nested");
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "top\n      nested\n");
    }

    #[test]
    fn test_writer_sink_filters_by_depth() {
        let mut sink = WriterSink::new(Verbosity::Summary, Vec::new());
        sink.emit(0, "kept");
        sink.emit(1, "dropped");
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "kept\n");
    }

    #[test]
    fn test_null_sink_discards() {
        // Just exercises the impl; nothing observable to assert.
        NullSink.emit(0, "anything");
    }
}
