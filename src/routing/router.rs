//! The router: public query surface over tree, matcher and link generator.
//!
//! # Responsibilities
//! - Own the compiled tree, the history and the event emitter
//! - Run one full match per navigation and swap the result in wholesale
//! - Redirect to the default outlet when the initial path matches nothing
//! - Generate links using the current params as defaults
//!
//! # Design Decisions
//! - Navigation takes `&mut self`; one navigation finishes before the next
//! - State is an `Arc<MatchState>` so readers can keep a consistent snapshot
//! - `NavStart` is emitted before any state changes

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::validation::validate_routes;
use crate::config::{RouteConfig, RouterConfig};
use crate::events::{Evented, RouterEvent, RouterEventKind};
use crate::history::{self, History};
use crate::routing::builder::RouteTree;
use crate::routing::link::{generate, GeneratedLink, LinkError};
use crate::routing::matcher::{match_path, MatchState, OutletContext};
use crate::routing::Params;

/// Outlet router.
#[derive(Debug)]
pub struct Router {
    tree: RouteTree,
    history: Box<dyn History>,
    events: Evented<RouterEvent>,
    state: Arc<MatchState>,
}

impl Router {
    /// Compile `routes`, match the history's current path and, if that
    /// matches nothing, navigate to the default outlet when it can be linked.
    pub fn new(history: impl History + 'static, routes: &[RouteConfig]) -> Self {
        Self::with_boxed_history(Box::new(history), routes)
    }

    /// Build the history and routes described by a loaded configuration.
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::with_boxed_history(history::from_config(&config.history), &config.routes)
    }

    fn with_boxed_history(history: Box<dyn History>, routes: &[RouteConfig]) -> Self {
        for error in validate_routes(routes) {
            warn!(%error, "Route configuration issue");
        }

        let tree = RouteTree::build(routes);
        info!(
            nodes = tree.len(),
            outlets = tree.outlet_count(),
            default_outlet = tree.default_outlet().unwrap_or("-"),
            "Route tree compiled"
        );

        let mut router = Self {
            tree,
            history,
            events: Evented::new(),
            state: Arc::new(MatchState::default()),
        };
        router.refresh();

        if router.state.is_unmatched() {
            if let Some(default_outlet) = router.tree.default_outlet().map(str::to_string) {
                match router.link(&default_outlet, &Params::new()) {
                    Some(path) => {
                        debug!(outlet = %default_outlet, path = %path, "Redirecting to default route");
                        router.set_path(&path);
                    }
                    None => {
                        debug!(outlet = %default_outlet, "Default route cannot be linked, staying unmatched");
                    }
                }
            }
        }

        router
    }

    /// Navigate to `path`.
    pub fn set_path(&mut self, path: &str) {
        self.history.set(path);
        self.refresh();
    }

    /// Rematch the history's current path, e.g. after the history changed
    /// outside the router.
    pub fn refresh(&mut self) {
        self.events.emit(&RouterEvent::NavStart);
        let state = match_path(&self.tree, self.history.current());
        self.state = Arc::new(state);
    }

    /// Subscribe to router events.
    pub fn on<F>(&mut self, kind: RouterEventKind, handler: F)
    where
        F: FnMut(&RouterEvent) + Send + 'static,
    {
        self.events.on(kind, handler);
    }

    /// Match result for `outlet` from the last navigation.
    pub fn outlet(&self, outlet: &str) -> Option<&OutletContext> {
        self.state.outlet(outlet)
    }

    /// Parameters accumulated along the last matched chain.
    pub fn current_params(&self) -> &Params {
        &self.state.params
    }

    /// The full state of the last navigation.
    pub fn snapshot(&self) -> Arc<MatchState> {
        Arc::clone(&self.state)
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    pub fn default_outlet(&self) -> Option<&str> {
        self.tree.default_outlet()
    }

    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    /// Link to `outlet`, or `None` if the outlet is unknown or any parameter
    /// cannot be resolved.
    pub fn link(&self, outlet: &str, params: &Params) -> Option<String> {
        self.resolve_link(outlet, params).ok()
    }

    /// Link to `outlet`; unresolved parameters stay as literal `{name}`
    /// placeholders. `None` only if the outlet is unknown.
    pub fn link_lenient(&self, outlet: &str, params: &Params) -> Option<String> {
        self.generate(outlet, params)
            .map(|link| self.history.prefix(&link.path))
    }

    /// Like [`Router::link`], keeping the reason for a failure.
    pub fn resolve_link(&self, outlet: &str, params: &Params) -> Result<String, LinkError> {
        let link = self
            .generate(outlet, params)
            .ok_or_else(|| LinkError::UnknownOutlet(outlet.to_string()))?;

        if !link.is_complete() {
            return Err(LinkError::MissingParams {
                outlet: outlet.to_string(),
                missing: link.unresolved,
                partial: link.path,
            });
        }
        Ok(self.history.prefix(&link.path))
    }

    fn generate(&self, outlet: &str, params: &Params) -> Option<GeneratedLink> {
        let node = self.tree.find(outlet)?;
        Some(generate(node, &self.state.params, params))
    }
}
