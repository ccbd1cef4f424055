//! Step records that make up a trace.
//!
//! Each `Step` is a self-contained snapshot: it owns copies of the input
//! sequence and, for non-final steps, of the length table at the moment the
//! step was emitted. Later updates to the working table never reach a step
//! that has already been recorded.

use std::fmt;

use serde::Serialize;

/// Description of the first step of every trace.
pub const INIT_DESCRIPTION: &str = "Initial sequence";

/// Description of the last step of every trace.
pub const FINAL_DESCRIPTION: &str = "Final Longest Increasing Subsequence";

/// Description of an improvement of `d[i]` via predecessor `j`.
pub fn improve_description(sequence: &[i64], current: usize, against: usize) -> String {
    format!(
        "Comparing elements at positions {against} and {current}: {} < {}",
        sequence[against], sequence[current]
    )
}

/// The three phases a step can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepKind {
    Init,
    Improve,
    Final,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::Improve => "improve",
            StepKind::Final => "final",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific payload of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDetail {
    /// All lengths are 1, nothing compared yet.
    Init { lengths: Vec<usize> },
    /// `d[current]` was raised to `d[against] + 1`.
    Improve {
        lengths: Vec<usize>,
        current: usize,
        against: usize,
    },
    /// The reconstructed subsequence.
    Final { result: Vec<i64> },
}

/// One recorded instant of the algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Position of this step inside its trace.
    pub index: usize,
    pub description: String,
    /// Copy of the input sequence.
    pub array: Vec<i64>,
    #[serde(flatten)]
    pub detail: StepDetail,
}

impl Step {
    pub(crate) fn init(index: usize, array: &[i64], lengths: &[usize]) -> Self {
        Self {
            index,
            description: INIT_DESCRIPTION.to_string(),
            array: array.to_vec(),
            detail: StepDetail::Init {
                lengths: lengths.to_vec(),
            },
        }
    }

    pub(crate) fn improve(
        index: usize,
        array: &[i64],
        lengths: &[usize],
        current: usize,
        against: usize,
    ) -> Self {
        Self {
            index,
            description: improve_description(array, current, against),
            array: array.to_vec(),
            detail: StepDetail::Improve {
                lengths: lengths.to_vec(),
                current,
                against,
            },
        }
    }

    pub(crate) fn finish(index: usize, array: &[i64], result: &[i64]) -> Self {
        Self {
            index,
            description: FINAL_DESCRIPTION.to_string(),
            array: array.to_vec(),
            detail: StepDetail::Final {
                result: result.to_vec(),
            },
        }
    }

    #[inline]
    pub fn kind(&self) -> StepKind {
        match self.detail {
            StepDetail::Init { .. } => StepKind::Init,
            StepDetail::Improve { .. } => StepKind::Improve,
            StepDetail::Final { .. } => StepKind::Final,
        }
    }

    /// Length table snapshot; `None` on the final step.
    pub fn lengths(&self) -> Option<&[usize]> {
        match &self.detail {
            StepDetail::Init { lengths } | StepDetail::Improve { lengths, .. } => {
                Some(lengths.as_slice())
            }
            StepDetail::Final { .. } => None,
        }
    }

    /// `(current, against)` = `(i, j)` for improvement steps.
    pub fn comparison(&self) -> Option<(usize, usize)> {
        match self.detail {
            StepDetail::Improve {
                current, against, ..
            } => Some((current, against)),
            _ => None,
        }
    }

    /// The reconstructed LIS; only present on the final step.
    pub fn result(&self) -> Option<&[i64]> {
        match &self.detail {
            StepDetail::Final { result } => Some(result.as_slice()),
            _ => None,
        }
    }
}
