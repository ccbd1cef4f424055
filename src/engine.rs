//! Step-recording O(n²) LIS engine.
//!
//! The engine runs the textbook quadratic recurrence
//!
//! ```text
//! d[i] = 1 + max { d[j] : j < i, seq[j] < seq[i] }   (or 1 if no such j)
//! ```
//!
//! over every pair in a fixed order (outer `i` ascending, inner `j`
//! ascending) and records a [`Step`] each time a strict improvement of `d[i]`
//! happens. Back-pointers are kept alongside `d` and walked once at the end to
//! reconstruct the subsequence.
//!
//! Tie-breaking is part of the observable output:
//! - a later predecessor with the same achievable length never displaces an
//!   earlier one (`d[j] + 1 > d[i]`, strictly);
//! - reconstruction starts at the *lowest* index holding `max(d)`.

use serde::Serialize;

use crate::error::{LisError, Result};
use crate::step::Step;
use crate::utils::is_strictly_increasing;

/// Builds [`Trace`]s.
///
/// The builder is stateless apart from its configuration; each call to
/// [`build`](Self::build) starts from scratch.
///
/// ```
/// use lis_trace::TraceBuilder;
///
/// let trace = TraceBuilder::new().build(&[5, 2, 8, 6, 3, 6, 9, 7]);
/// assert_eq!(trace.lis(), &[2, 3, 6, 9]);
/// assert_eq!(trace.len(), 13);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceBuilder {
    max_len: Option<usize>,
}

impl TraceBuilder {
    /// Builder without a length limit.
    pub fn new() -> Self {
        Self { max_len: None }
    }

    /// Builder whose [`checked_build`](Self::checked_build) rejects sequences
    /// longer than `max_len`.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Like [`build`](Self::build), but enforces the configured length limit.
    pub fn checked_build(&self, sequence: &[i64]) -> Result<Trace> {
        match self.max_len {
            Some(max) if sequence.len() > max => Err(LisError::SequenceTooLong {
                len: sequence.len(),
                max,
            }),
            _ => Ok(self.build(sequence)),
        }
    }

    /// Run the DP over `sequence` and return the full trace.
    ///
    /// Total over all inputs; the length limit is not consulted here.
    pub fn build(&self, sequence: &[i64]) -> Trace {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("build_trace", n = sequence.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let n = sequence.len();
        let mut d = vec![1usize; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];

        let mut steps = Vec::with_capacity(n + 2);
        steps.push(Step::init(0, sequence, &d));

        for i in 0..n {
            for j in 0..i {
                if sequence[j] < sequence[i] && d[j] + 1 > d[i] {
                    d[i] = d[j] + 1;
                    prev[i] = Some(j);
                    #[cfg(feature = "tracing")]
                    tracing::trace!(i, j, length = d[i], "length improved");
                    steps.push(Step::improve(steps.len(), sequence, &d, i, j));
                }
            }
        }

        let lis = reconstruct(sequence, &d, &prev);
        debug_assert!(is_strictly_increasing(&lis));
        debug_assert_eq!(lis.len(), d.iter().copied().max().unwrap_or(0));

        steps.push(Step::finish(steps.len(), sequence, &lis));

        #[cfg(feature = "tracing")]
        tracing::debug!(steps = steps.len(), lis_len = lis.len(), "trace built");

        Trace { steps, lis }
    }
}

/// Shorthand for `TraceBuilder::new().build(sequence)`.
pub fn build(sequence: &[i64]) -> Trace {
    TraceBuilder::new().build(sequence)
}

/// Walk back-pointers from the first position holding the maximum length.
fn reconstruct(sequence: &[i64], d: &[usize], prev: &[Option<usize>]) -> Vec<i64> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("reconstruct", n = d.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let Some(mut pos) = first_max_index(d) else {
        return Vec::new();
    };

    let mut rev = Vec::with_capacity(d[pos]);
    loop {
        rev.push(sequence[pos]);
        match prev[pos] {
            Some(p) => pos = p,
            None => break,
        }
    }
    rev.reverse();
    rev
}

/// Index of the first occurrence of the maximum, `None` for an empty table.
fn first_max_index(d: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (k, &len) in d.iter().enumerate() {
        if best.map_or(true, |b| len > d[b]) {
            best = Some(k);
        }
    }
    best
}

/// A complete, immutable recording of one run of the engine.
///
/// Always holds at least two steps: the initial snapshot and the final
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    steps: Vec<Step>,
    lis: Vec<i64>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The reconstructed longest increasing subsequence.
    pub fn lis(&self) -> &[i64] {
        &self.lis
    }

    /// Number of steps (never less than 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the final step.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Number of recorded strict improvements.
    pub fn improvements(&self) -> usize {
        self.steps.len().saturating_sub(2)
    }

    /// The input sequence this trace was built from.
    pub fn sequence(&self) -> &[i64] {
        self.steps
            .first()
            .map(|s| s.array.as_slice())
            .unwrap_or(&[])
    }

    /// Length table after the last comparison.
    pub fn final_lengths(&self) -> &[usize] {
        self.steps
            .iter()
            .rev()
            .find_map(Step::lengths)
            .unwrap_or(&[])
    }

    pub fn into_parts(self) -> (Vec<Step>, Vec<i64>) {
        (self.steps, self.lis)
    }
}
