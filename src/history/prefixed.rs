//! History with a fixed base, e.g. `#` for hash routing or `/app/`.

use crate::history::History;

/// Prepends `base` to generated links and strips it from incoming paths.
#[derive(Debug, Clone)]
pub struct PrefixedHistory {
    base: String,
    current: String,
}

impl PrefixedHistory {
    pub fn new(base: &str, initial_path: &str) -> Self {
        let mut history = Self {
            base: base.to_string(),
            current: String::new(),
        };
        history.set(initial_path);
        history
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl History for PrefixedHistory {
    /// Accepts the path with or without the base.
    fn set(&mut self, path: &str) {
        let path = path.strip_prefix(self.base.as_str()).unwrap_or(path);
        self.current = path.to_string();
    }

    fn prefix(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn current(&self) -> &str {
        &self.current
    }
}
