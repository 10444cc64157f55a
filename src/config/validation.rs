//! Configuration validation.
//!
//! # Responsibilities
//! - Detect duplicate outlet names
//! - Detect more than one default route
//! - Detect malformed placeholders (braces that are not exactly `{name}`)
//! - Detect empty outlet names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function and never changes how routes are built;
//!   the builder's last-registration-wins policy applies either way
//! - Callers decide whether findings are fatal (`ValidationConfig::strict`)

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::segment::{placeholder_name, strip_leading_slash};

/// A single semantic problem in a route configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Duplicate outlet '{0}' (the last registration wins)")]
    DuplicateOutlet(String),

    #[error("Outlet '{outlet}' is marked as default route but '{previous}' already is")]
    MultipleDefaultRoutes { previous: String, outlet: String },

    #[error("Outlet '{outlet}' has malformed placeholder '{segment}'")]
    MalformedPlaceholder { outlet: String, segment: String },

    #[error("Route '{0}' has an empty outlet name")]
    EmptyOutlet(String),
}

/// Validate a full router configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let errors = validate_routes(&config.routes);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collect every problem in `routes`, in pre-order.
pub fn validate_routes(routes: &[RouteConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut default_outlet: Option<&str> = None;
    walk(routes, &mut seen, &mut default_outlet, &mut errors);
    errors
}

fn walk<'a>(
    routes: &'a [RouteConfig],
    seen: &mut HashSet<&'a str>,
    default_outlet: &mut Option<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    for route in routes {
        if route.outlet.is_empty() {
            errors.push(ValidationError::EmptyOutlet(route.path.clone()));
        } else if !seen.insert(route.outlet.as_str()) {
            errors.push(ValidationError::DuplicateOutlet(route.outlet.clone()));
        }

        if route.default_route {
            if let Some(previous) = default_outlet {
                errors.push(ValidationError::MultipleDefaultRoutes {
                    previous: previous.to_string(),
                    outlet: route.outlet.clone(),
                });
            }
            *default_outlet = Some(route.outlet.as_str());
        }

        for segment in strip_leading_slash(&route.path).split('/') {
            if segment.contains(['{', '}']) && placeholder_name(segment).is_none() {
                errors.push(ValidationError::MalformedPlaceholder {
                    outlet: route.outlet.clone(),
                    segment: segment.to_string(),
                });
            }
        }

        walk(&route.children, seen, default_outlet, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let routes = vec![RouteConfig::new("/foo/{id}", "foo")
            .as_default_route()
            .with_children(vec![RouteConfig::new("bar", "bar")])];
        assert!(validate_routes(&routes).is_empty());
    }

    #[test]
    fn test_reports_all_errors() {
        let routes = vec![
            RouteConfig::new("/a/{id", "a").as_default_route(),
            RouteConfig::new("/b", "b")
                .as_default_route()
                .with_children(vec![RouteConfig::new("{}", "a")]),
            RouteConfig::new("/c", ""),
        ];

        let errors = validate_routes(&routes);
        assert_eq!(
            errors,
            vec![
                ValidationError::MalformedPlaceholder {
                    outlet: "a".into(),
                    segment: "{id".into()
                },
                ValidationError::MultipleDefaultRoutes {
                    previous: "a".into(),
                    outlet: "b".into()
                },
                ValidationError::DuplicateOutlet("a".into()),
                ValidationError::MalformedPlaceholder {
                    outlet: "a".into(),
                    segment: "{}".into()
                },
                ValidationError::EmptyOutlet("/c".into()),
            ]
        );
    }

    #[test]
    fn test_validate_config_wraps_routes() {
        let mut config = RouterConfig::default();
        assert!(validate_config(&config).is_ok());

        config.routes.push(RouteConfig::new("x", "dup"));
        config.routes.push(RouteConfig::new("y", "dup"));
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicateOutlet("dup".into())]);
    }
}
