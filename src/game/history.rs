use std::collections::HashMap;

/// Occurrence counts of canonical state strings.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<String, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, state: &str) -> u32 {
        self.counts.get(state).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, state: &str) -> u32 {
        let count = self.counts.entry(state.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Forget every recorded state
    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }
}
