//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::Params;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, in matching order.
    pub routes: Vec<RouteConfig>,

    /// History collaborator settings.
    pub history: HistoryConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Validation settings.
    pub validation: ValidationConfig,
}

/// A single route declaration, possibly with nested children.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path template relative to the parent, e.g. `/users/{id}`.
    pub path: String,

    /// Outlet name used for lookups and link generation.
    pub outlet: String,

    /// Nested routes, tried in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteConfig>,

    /// Fallback parameter values used when generating links.
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub default_params: Params,

    /// Navigate here when the initial path matches nothing.
    #[serde(default)]
    pub default_route: bool,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, outlet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outlet: outlet.into(),
            children: Vec::new(),
            default_params: Params::new(),
            default_route: false,
        }
    }

    pub fn with_children(mut self, children: Vec<RouteConfig>) -> Self {
        self.children = children;
        self
    }

    pub fn with_default_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_params.insert(name.into(), value.into());
        self
    }

    pub fn as_default_route(mut self) -> Self {
        self.default_route = true;
        self
    }
}

/// Which history implementation the router is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    #[default]
    Memory,
    Prefixed,
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// History implementation.
    pub kind: HistoryKind,

    /// Base prepended to generated links (prefixed history only), e.g. `#`.
    pub base: String,

    /// Path the history starts at.
    pub initial_path: String,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Validation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject configurations with duplicate outlets, several default routes
    /// or malformed placeholders instead of only logging them.
    pub strict: bool,
}
