//! In-memory state sink.

use hashbrown::HashMap;

use super::{PersistResult, StateSink, STATE_KEY};

/// [`StateSink`] backed by a plain map. Useful in tests and for sessions
/// that do not need durability.
#[derive(Debug, Default)]
pub struct MemoryStateSink {
    entries: HashMap<String, String>,
}

impl MemoryStateSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink preloaded with a state document, as if a previous
    /// session had saved it.
    pub fn with_state(payload: impl Into<String>) -> Self {
        let mut sink = Self::new();
        sink.entries.insert(STATE_KEY.to_string(), payload.into());
        sink
    }
}

impl StateSink for MemoryStateSink {
    fn load_state(&self) -> PersistResult<Option<String>> {
        Ok(self.entries.get(STATE_KEY).cloned())
    }

    fn save_state(&mut self, payload: &str) -> PersistResult<()> {
        self.entries.insert(STATE_KEY.to_string(), payload.to_string());
        Ok(())
    }
}
