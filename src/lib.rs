//! Outlet router library.
//!
//! Resolves slash-delimited paths against a declared tree of named outlets,
//! reporting for every visited outlet whether it matched exactly, partially
//! (as an ancestor of a deeper match) or in error, and generates paths back
//! from outlet names and parameters.
//!
//! ```
//! use outlet_router::{MatchType, MemoryHistory, Params, RouteConfig, Router};
//!
//! let routes = vec![RouteConfig::new("/users/{id}", "user")
//!     .with_children(vec![RouteConfig::new("/posts/{post}", "post")])];
//!
//! let mut router = Router::new(MemoryHistory::default(), &routes);
//! router.set_path("/users/7/posts/42");
//!
//! assert_eq!(router.outlet("user").unwrap().match_type, MatchType::Partial);
//! assert_eq!(router.outlet("post").unwrap().match_type, MatchType::Exact);
//!
//! let mut params = Params::new();
//! params.insert("post".into(), "43".into());
//! assert_eq!(router.link("post", &params).as_deref(), Some("users/7/posts/43"));
//! ```

pub mod config;
pub mod events;
pub mod history;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use config::RouteConfig;
pub use events::{RouterEvent, RouterEventKind};
pub use history::{History, MemoryHistory, PrefixedHistory};
pub use routing::{MatchState, MatchType, OutletContext, Params, Router, ERROR_OUTLET};
