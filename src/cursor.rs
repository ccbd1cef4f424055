//! Bounded navigation over a built trace.
//!
//! The cursor owns the trace it walks, so installing a new trace and resetting
//! the position happen in one call and a position can never outlive the trace
//! it indexes.

use crate::engine::Trace;
use crate::step::Step;

/// Position within a [`Trace`], clamped to `0..=trace.last_index()`.
///
/// ```
/// use lis_trace::{build, StepCursor};
///
/// let mut cursor = StepCursor::new(build(&[3, 1, 2]));
/// assert!(cursor.at_start());
/// cursor.advance();
/// assert_eq!(cursor.current().comparison(), Some((2, 1)));
/// cursor.advance();
/// assert!(cursor.at_end());
/// assert!(!cursor.advance());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCursor {
    trace: Trace,
    position: usize,
}

impl StepCursor {
    pub fn new(trace: Trace) -> Self {
        Self { trace, position: 0 }
    }

    /// Replace the trace and go back to the first step.
    pub fn initialize(&mut self, trace: Trace) {
        self.trace = trace;
        self.position = 0;
    }

    /// Step forward. Returns false (and stays put) on the last step.
    pub fn advance(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Step back. Returns false (and stays put) on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to `index`, clamped to the last step. Returns the new position.
    pub fn seek(&mut self, index: usize) -> usize {
        self.position = index.min(self.trace.last_index());
        self.position
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn fast_forward(&mut self) {
        self.position = self.trace.last_index();
    }

    /// The step under the cursor.
    pub fn current(&self) -> &Step {
        &self.trace.steps()[self.position]
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of steps in the underlying trace.
    #[inline]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    #[inline]
    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.position == self.trace.last_index()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

impl From<Trace> for StepCursor {
    fn from(trace: Trace) -> Self {
        Self::new(trace)
    }
}
