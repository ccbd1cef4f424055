//! Longest Increasing Subsequence with a replayable trace.
//!
//! This crate runs the classic O(n²) LIS dynamic program and records every
//! strict improvement of the length table as a [`Step`], so a front-end can
//! walk the computation forwards and backwards.
//!
//! ## Core idea
//! 1. [`TraceBuilder`] turns a sequence into a [`Trace`]: an `Init` snapshot,
//!    one `Improve` step per strict update of `d[i]`, and a `Final` step
//!    holding the reconstructed subsequence.
//! 2. [`StepCursor`] owns a trace and a clamped position into it.
//! 3. [`Session`] ties a sequence, its trace and a cursor together so that
//!    changing the sequence always rebuilds the trace and rewinds the cursor.
//!
//! The quadratic algorithm is used on purpose: every pairwise comparison that
//! changes the table shows up in the trace.
//!
//! ## Quick start
//! ```
//! use lis_trace::{build, StepCursor, StepKind};
//!
//! let trace = build(&[5, 2, 8, 6, 3, 6, 9, 7]);
//! assert_eq!(trace.lis(), &[2, 3, 6, 9]);
//!
//! let mut cursor = StepCursor::new(trace);
//! assert_eq!(cursor.current().kind(), StepKind::Init);
//! cursor.advance();
//! assert_eq!(
//!     cursor.current().description,
//!     "Comparing elements at positions 0 and 2: 5 < 8"
//! );
//! ```
//!
//! ## Around the core
//! - [`input`] parses user-entered integers strictly.
//! - [`presets`] holds named example sequences (built-ins plus user presets).
//! - The `lis-trace` binary prints traces as a table, CSV or JSON, or steps
//!   through them interactively.
//!
//! Enable the `tracing` feature for spans around trace construction.

pub mod builder;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod input;
pub mod presets;
pub mod session;
pub mod step;
pub mod utils;

pub use crate::builder::SessionBuilder;
pub use crate::cursor::StepCursor;
pub use crate::engine::{build, Trace, TraceBuilder};
pub use crate::error::{LisError, Result};
pub use crate::presets::{ExampleStore, Preset};
pub use crate::session::Session;
pub use crate::step::{Step, StepDetail, StepKind};
