//! Path matching.
//!
//! # Responsibilities
//! - Split a raw path into segments and a query map
//! - Walk the route tree, first match wins at every level
//! - Bind parameters per scope and accumulate them down the matched chain
//! - Classify each visited outlet as exact, partial or error
//!
//! # Design Decisions
//! - Depth-first, no reconsideration: once a sibling matches, its later
//!   siblings are never tried
//! - A skipped candidate (not enough input left) is not a failure
//! - The parameter index is reset only when a scope closes, not between
//!   sibling attempts; a sibling tried after a failed one reads names from a
//!   shifted position
//! - Pure function of (tree, path); the router owns the resulting state

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::routing::builder::{NodeId, RouteTree};
use crate::routing::query::parse_query;
use crate::routing::segment::{strip_leading_slash, Segment};
use crate::routing::Params;

/// Outlet name reported when nothing matched at the root level.
pub const ERROR_OUTLET: &str = "errorOutlet";

/// How an outlet matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Every remaining segment was consumed by this outlet.
    Exact,
    /// This outlet matched and input remained for its descendants.
    Partial,
    /// A descendant failed to match, or nothing matched at all.
    Error,
}

/// Match result for one outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutletContext {
    #[serde(rename = "type")]
    pub match_type: MatchType,
    /// Parameters bound in this outlet's scope.
    pub params: Params,
    /// Query parameters, one instance shared by every outlet of a navigation.
    pub query_params: Arc<Params>,
}

/// Everything one navigation produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub outlets: BTreeMap<String, OutletContext>,
    /// Parameters accumulated along the matched chain.
    pub params: Params,
}

impl MatchState {
    pub fn outlet(&self, name: &str) -> Option<&OutletContext> {
        self.outlets.get(name)
    }

    /// True when the reserved error outlet was installed.
    pub fn is_unmatched(&self) -> bool {
        self.outlets.contains_key(ERROR_OUTLET)
    }
}

/// Match `raw_path` against `tree`.
pub fn match_path(tree: &RouteTree, raw_path: &str) -> MatchState {
    let raw_path = strip_leading_slash(raw_path);
    let mut parts = raw_path.split('?');
    let path = parts.next().unwrap_or_default();
    let query = Arc::new(parse_query(parts.next().unwrap_or_default()));

    let segments: Vec<&str> = path.split('/').collect();
    let mut position = 0;

    let mut state = MatchState::default();
    let mut candidates: Vec<NodeId> = tree.roots().to_vec();
    let mut next_candidate = 0;

    let mut scope = Params::new();
    let mut param_index = 0;
    let mut previous: Option<&str> = None;
    let mut scope_failed = false;
    let mut matched_any = false;

    while position < segments.len() {
        let Some(&id) = candidates.get(next_candidate) else {
            break;
        };
        next_candidate += 1;

        let node = tree.node(id);
        let remaining = &segments[position..];

        if remaining.len() < node.segments.len() {
            trace!(outlet = %node.outlet, remaining = remaining.len(), "Skipping candidate, not enough segments");
            continue;
        }

        let mut matched = true;
        for (segment, input) in node.segments.iter().zip(remaining) {
            match segment {
                Segment::Param => {
                    if let Some(name) = node.param_names.get(param_index) {
                        scope.insert(name.clone(), (*input).to_string());
                    }
                    param_index += 1;
                }
                Segment::Literal(literal) => {
                    if literal.as_str() != *input {
                        matched = false;
                        break;
                    }
                }
            }
        }

        if !matched {
            trace!(outlet = %node.outlet, "Candidate rejected");
            scope_failed = true;
            continue;
        }

        position += node.segments.len();
        let match_type = if position == segments.len() {
            MatchType::Exact
        } else {
            MatchType::Partial
        };
        trace!(outlet = %node.outlet, ?match_type, "Candidate matched");

        state.outlets.insert(
            node.outlet.clone(),
            OutletContext {
                match_type,
                params: scope.clone(),
                query_params: Arc::clone(&query),
            },
        );
        state
            .params
            .extend(scope.iter().map(|(k, v)| (k.clone(), v.clone())));

        if node.has_children() {
            scope.clear();
            param_index = 0;
        }

        candidates.clone_from(&node.children);
        next_candidate = 0;
        previous = Some(&node.outlet);
        scope_failed = false;
        matched_any = true;
    }

    if scope_failed {
        if let Some(context) = previous.and_then(|outlet| state.outlets.get_mut(outlet)) {
            context.match_type = MatchType::Error;
        }
    }

    if !matched_any {
        state.outlets.insert(
            ERROR_OUTLET.to_string(),
            OutletContext {
                match_type: MatchType::Error,
                params: Params::new(),
                query_params: Arc::clone(&query),
            },
        );
    }

    debug!(
        path = %raw_path,
        outlets = state.outlets.len(),
        unmatched = !matched_any,
        "Path matched"
    );

    state
}
