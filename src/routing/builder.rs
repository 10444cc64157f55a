//! Route tree construction.
//!
//! # Responsibilities
//! - Compile nested `RouteConfig`s into an arena of `RouteNode`s
//! - Detect parameter segments and accumulate parameter names down the tree
//! - Build the flat outlet → node lookup
//! - Record the default outlet
//!
//! # Design Decisions
//! - Built once, immutable afterwards
//! - Children are stored by id; there are no parent back-references
//! - Children register before their parent, so on duplicate outlet names the
//!   last registration wins
//! - No validation here (see `config::validation`)

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::segment::{parse_template, strip_leading_slash, Segment};
use crate::routing::Params;

/// Index of a node inside a `RouteTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A compiled route.
#[derive(Debug, Clone)]
pub struct RouteNode {
    /// Own path fragment, leading slash stripped.
    pub path: String,
    pub outlet: String,
    /// Own segments; parameters are `Segment::Param`.
    pub segments: Vec<Segment>,
    /// Own parameter names, left to right.
    pub param_names: Vec<String>,
    /// Ancestors' parameter names followed by this node's.
    pub full_param_names: Vec<String>,
    /// Template used for link generation, e.g. `foo/{foo}/bar/{bar}`.
    pub full_path: String,
    pub default_params: Params,
    pub children: Vec<NodeId>,
}

impl RouteNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The compiled route tree.
#[derive(Debug, Clone, Default)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
    roots: Vec<NodeId>,
    outlets: HashMap<String, NodeId>,
    default_outlet: Option<String>,
}

impl RouteTree {
    /// Compile a route configuration.
    pub fn build(configs: &[RouteConfig]) -> Self {
        let mut tree = Self::default();
        let roots = tree.register(configs, None);
        tree.roots = roots;
        tree
    }

    fn register(&mut self, configs: &[RouteConfig], parent: Option<NodeId>) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(configs.len());

        for config in configs {
            let path = strip_leading_slash(&config.path).to_string();
            let (segments, param_names) = parse_template(&path);

            let (full_path, full_param_names) = match parent {
                Some(parent) => {
                    let parent = &self.nodes[parent.0];
                    let mut names = parent.full_param_names.clone();
                    names.extend(param_names.iter().cloned());
                    (format!("{}/{}", parent.full_path, path), names)
                }
                None => (path.clone(), param_names.clone()),
            };

            if config.default_route {
                self.default_outlet = Some(config.outlet.clone());
            }

            let id = NodeId(self.nodes.len());
            self.nodes.push(RouteNode {
                path,
                outlet: config.outlet.clone(),
                segments,
                param_names,
                full_param_names,
                full_path,
                default_params: config.default_params.clone(),
                children: Vec::new(),
            });

            if !config.children.is_empty() {
                let children = self.register(&config.children, Some(id));
                self.nodes[id.0].children = children;
            }

            self.outlets.insert(config.outlet.clone(), id);
            ids.push(id);
        }

        ids
    }

    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.nodes[id.0]
    }

    /// Top-level nodes in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by outlet name.
    pub fn find(&self, outlet: &str) -> Option<&RouteNode> {
        self.outlets.get(outlet).map(|id| self.node(*id))
    }

    pub fn default_outlet(&self) -> Option<&str> {
        self.default_outlet.as_deref()
    }

    /// All nodes in registration (pre-order) order.
    pub fn nodes(&self) -> impl Iterator<Item = &RouteNode> {
        self.nodes.iter()
    }

    /// Number of distinct outlet names.
    pub fn outlet_count(&self) -> usize {
        self.outlets.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
