//! History collaborators.
//!
//! # Data Flow
//! ```text
//! Router::set_path(path)
//!     → History::set(path)      (history stores its own view of the path)
//!     → History::current()      (router re-reads it)
//!     → matcher recomputes the match state
//!
//! Router::link(outlet)
//!     → link generator builds the path
//!     → History::prefix(path)   (environment-specific prefix)
//! ```
//!
//! # Design Decisions
//! - The router owns its history; `set` never calls back into the router
//! - `prefix` is a pure transform
//! - Anything beyond in-memory storage (browser history, server requests)
//!   implements the trait outside this crate

pub mod memory;
pub mod prefixed;

pub use memory::MemoryHistory;
pub use prefixed::PrefixedHistory;

use crate::config::{HistoryConfig, HistoryKind};

/// Storage for the current path.
pub trait History: Send + std::fmt::Debug {
    /// Request navigation to `path`.
    fn set(&mut self, path: &str);

    /// Apply the environment-specific prefix to a generated link.
    fn prefix(&self, path: &str) -> String;

    /// The current path, as the router should match it.
    fn current(&self) -> &str;
}

/// Build the history described by `config`.
pub fn from_config(config: &HistoryConfig) -> Box<dyn History> {
    match config.kind {
        HistoryKind::Memory => Box::new(MemoryHistory::new(&config.initial_path)),
        HistoryKind::Prefixed => {
            Box::new(PrefixedHistory::new(&config.base, &config.initial_path))
        }
    }
}
