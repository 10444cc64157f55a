//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (tree compiled, navigation, link redirects,
//!       configuration issues)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Per-candidate matching decisions at trace level only

pub mod logging;

pub use logging::init_logging;
