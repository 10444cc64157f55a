//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at construction):
//!     RouteConfig[]
//!     → builder.rs (segments, parameter names, full paths)
//!     → RouteTree (arena + flat outlet map), immutable
//!
//! Navigation:
//!     raw path
//!     → matcher.rs (segments + query, first-match walk)
//!     → MatchState (outlet → exact/partial/error, accumulated params)
//!
//! Link generation:
//!     outlet + params
//!     → link.rs (defaults < current params < overrides)
//!     → History::prefix
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable at runtime
//! - Deterministic: same tree and path always give the same state
//! - First match wins (declaration order)

use std::collections::BTreeMap;

pub mod builder;
pub mod link;
pub mod matcher;
pub mod query;
pub mod router;
pub mod segment;

pub use builder::{NodeId, RouteNode, RouteTree};
pub use link::{GeneratedLink, LinkError};
pub use matcher::{match_path, MatchState, MatchType, OutletContext, ERROR_OUTLET};
pub use router::Router;
pub use segment::Segment;

/// Parameter name → value.
pub type Params = BTreeMap<String, String>;
