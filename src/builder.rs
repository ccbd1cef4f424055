use crate::engine::TraceBuilder;
use crate::error::Result;
use crate::presets::{ExampleStore, DEFAULT_PRESET};
use crate::utils::DEFAULT_MAX_LEN;
use crate::Session;

pub struct SessionBuilder {
    max_len: Option<usize>,
    sequence: Option<Vec<i64>>,
    store: Option<ExampleStore>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            max_len: Some(DEFAULT_MAX_LEN),
            sequence: None,
            store: None,
        }
    }
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
    pub fn without_limit(mut self) -> Self {
        self.max_len = None;
        self
    }
    pub fn with_sequence(mut self, sequence: Vec<i64>) -> Self {
        self.sequence = Some(sequence);
        self
    }
    pub fn with_store(mut self, store: ExampleStore) -> Self {
        self.store = Some(store);
        self
    }
    /// Fails if the starting sequence exceeds the length limit.
    pub fn build(self) -> Result<Session> {
        let store = self.store.unwrap_or_default();
        let sequence = match self.sequence {
            Some(s) => s,
            None => store.load(DEFAULT_PRESET).unwrap_or_default(),
        };
        let builder = match self.max_len {
            Some(max) => TraceBuilder::with_max_len(max),
            None => TraceBuilder::new(),
        };
        Session::from_parts(builder, store, &sequence)
    }
}
