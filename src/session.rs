//! The unit a front-end drives: current sequence, its trace, and a cursor.
//!
//! Every change to the sequence goes through [`Session::set_sequence`], which
//! builds the new trace first and only then swaps it in with the cursor reset
//! to the first step. A rejected change leaves the session exactly as it was.

use crate::builder::SessionBuilder;
use crate::cursor::StepCursor;
use crate::engine::{Trace, TraceBuilder};
use crate::error::{LisError, Result};
use crate::input::parse_value;
use crate::presets::{ExampleStore, Preset, DEFAULT_PRESET};
use crate::step::Step;
use crate::utils::DEFAULT_MAX_LEN;

/// Interactive LIS session.
///
/// ```
/// use lis_trace::Session;
///
/// let mut session = Session::new();
/// session.load_example("Simple Ascending").unwrap();
/// session.push_text("6").unwrap();
/// assert_eq!(session.lis(), &[1, 2, 3, 4, 5, 6]);
/// assert!(session.at_start());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    builder: TraceBuilder,
    store: ExampleStore,
    cursor: StepCursor,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session on the default preset with the built-in store and the default
    /// length limit.
    pub fn new() -> Self {
        let store = ExampleStore::new();
        let sequence = store
            .get(DEFAULT_PRESET)
            .map(|p| p.values.clone())
            .unwrap_or_default();
        let builder = TraceBuilder::with_max_len(DEFAULT_MAX_LEN);
        Self {
            cursor: StepCursor::new(builder.build(&sequence)),
            builder,
            store,
        }
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn from_parts(
        builder: TraceBuilder,
        store: ExampleStore,
        sequence: &[i64],
    ) -> Result<Self> {
        let trace = builder.checked_build(sequence)?;
        Ok(Self {
            builder,
            store,
            cursor: StepCursor::new(trace),
        })
    }

    /// Replace the sequence, rebuild the trace and rewind the cursor.
    pub fn set_sequence(&mut self, sequence: Vec<i64>) -> Result<()> {
        let trace = self.builder.checked_build(&sequence)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            n = sequence.len(),
            steps = trace.len(),
            "session sequence replaced"
        );
        self.cursor.initialize(trace);
        Ok(())
    }

    /// Append a value.
    pub fn push(&mut self, value: i64) -> Result<()> {
        let mut next = self.sequence().to_vec();
        next.push(value);
        self.set_sequence(next)
    }

    /// Parse and append a value. Malformed text leaves the sequence untouched.
    pub fn push_text(&mut self, text: &str) -> Result<i64> {
        let value = parse_value(text)?;
        self.push(value)?;
        Ok(value)
    }

    /// Remove the value at `index`, returning it.
    pub fn remove(&mut self, index: usize) -> Result<i64> {
        let len = self.sequence().len();
        if index >= len {
            return Err(LisError::PositionOutOfRange { index, len });
        }
        let mut next = self.sequence().to_vec();
        let removed = next.remove(index);
        self.set_sequence(next)?;
        Ok(removed)
    }

    /// Switch to a named preset.
    pub fn load_example(&mut self, name: &str) -> Result<()> {
        let values = self.store.load(name)?;
        self.set_sequence(values)
    }

    /// Save the current sequence under `name`.
    pub fn save_example(&mut self, name: &str) -> Result<()> {
        let values = self.sequence().to_vec();
        self.store.save(name, &values)
    }

    pub fn delete_example(&mut self, name: &str) -> Result<Preset> {
        self.store.delete(name)
    }

    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.cursor.retreat()
    }

    pub fn seek(&mut self, index: usize) -> usize {
        self.cursor.seek(index)
    }

    pub fn rewind(&mut self) {
        self.cursor.rewind()
    }

    pub fn fast_forward(&mut self) {
        self.cursor.fast_forward()
    }

    pub fn current(&self) -> &Step {
        self.cursor.current()
    }

    pub fn at_start(&self) -> bool {
        self.cursor.at_start()
    }

    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    pub fn cursor(&self) -> &StepCursor {
        &self.cursor
    }

    pub fn trace(&self) -> &Trace {
        self.cursor.trace()
    }

    pub fn sequence(&self) -> &[i64] {
        self.cursor.trace().sequence()
    }

    pub fn lis(&self) -> &[i64] {
        self.cursor.trace().lis()
    }

    pub fn store(&self) -> &ExampleStore {
        &self.store
    }

    pub fn max_len(&self) -> Option<usize> {
        self.builder.max_len()
    }
}
