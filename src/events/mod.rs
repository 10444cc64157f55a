//! Synchronous publish/subscribe.
//!
//! # Data Flow
//! ```text
//! Router::set_path
//!     → Evented::emit(RouterEvent::NavStart)
//!     → every handler registered for NavStart, in registration order
//!     → match state recomputed
//! ```
//!
//! # Design Decisions
//! - Handlers run inline on the emitting call; there is no queue
//! - Handlers are keyed by event kind, so one emitter serves every event type
//! - The owner is a single long-lived router, so handlers are owned boxes

pub mod emitter;

pub use emitter::{Event, Evented};

/// Kinds of router event a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterEventKind {
    NavStart,
}

/// Events emitted by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// A navigation is about to replace the match state.
    NavStart,
}

impl Event for RouterEvent {
    type Kind = RouterEventKind;

    fn kind(&self) -> RouterEventKind {
        match self {
            RouterEvent::NavStart => RouterEventKind::NavStart,
        }
    }
}
