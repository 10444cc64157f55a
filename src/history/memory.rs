//! In-memory history.

use crate::history::History;

/// Keeps the current path in memory; links are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    current: String,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            current: initial_path.to_string(),
        }
    }
}

impl History for MemoryHistory {
    fn set(&mut self, path: &str) {
        self.current = path.to_string();
    }

    fn prefix(&self, path: &str) -> String {
        path.to_string()
    }

    fn current(&self) -> &str {
        &self.current
    }
}
