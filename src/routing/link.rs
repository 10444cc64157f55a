//! Link generation, the inverse of matching.

use thiserror::Error;

use crate::routing::builder::RouteNode;
use crate::routing::Params;

/// Path produced from a node's template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    /// The template with every resolvable placeholder substituted.
    pub path: String,
    /// Parameter names left as literal `{name}` placeholders in `path`.
    pub unresolved: Vec<String>,
}

impl GeneratedLink {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Errors from strict link generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("Unknown outlet: {0}")]
    UnknownOutlet(String),

    #[error("Outlet {outlet} is missing parameters: {}", .missing.join(", "))]
    MissingParams {
        outlet: String,
        missing: Vec<String>,
        /// The path with the missing placeholders left in place.
        partial: String,
    },
}

/// Substitute parameters into `node.full_path`.
///
/// Values are looked up in `overrides`, then `current`, then the node's
/// default params; the first map holding the name decides, and an empty value
/// counts as unresolved. Only the first occurrence of each placeholder is
/// replaced, in `full_param_names` order.
pub fn generate(node: &RouteNode, current: &Params, overrides: &Params) -> GeneratedLink {
    let mut path = node.full_path.clone();
    let mut unresolved = Vec::new();

    for name in &node.full_param_names {
        let value = overrides
            .get(name)
            .or_else(|| current.get(name))
            .or_else(|| node.default_params.get(name));

        match value {
            Some(value) if !value.is_empty() => {
                path = path.replacen(&format!("{{{name}}}"), value, 1);
            }
            _ => unresolved.push(name.clone()),
        }
    }

    GeneratedLink { path, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;
    use crate::routing::builder::RouteTree;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn tree() -> RouteTree {
        RouteTree::build(&[RouteConfig::new("/foo/{foo}", "foo")
            .with_default_param("foo", "dfoo")
            .with_children(vec![RouteConfig::new("/bar/{bar}", "bar")])])
    }

    #[test]
    fn test_layering_priority() {
        let tree = tree();
        let bar = tree.find("bar").unwrap();

        // `bar` carries no defaults of its own.
        let link = generate(bar, &params(&[("foo", "cf"), ("bar", "cb")]), &Params::new());
        assert_eq!(link.path, "foo/cf/bar/cb");

        let link = generate(bar, &params(&[("foo", "cf"), ("bar", "cb")]), &params(&[("bar", "ob")]));
        assert_eq!(link.path, "foo/cf/bar/ob");
        assert!(link.is_complete());

        let foo = tree.find("foo").unwrap();
        let link = generate(foo, &Params::new(), &Params::new());
        assert_eq!(link.path, "foo/dfoo");

        let link = generate(foo, &params(&[("foo", "cf")]), &Params::new());
        assert_eq!(link.path, "foo/cf");
    }

    #[test]
    fn test_missing_values_stay_literal() {
        let tree = tree();
        let bar = tree.find("bar").unwrap();
        let link = generate(bar, &Params::new(), &Params::new());
        assert_eq!(link.path, "foo/{foo}/bar/{bar}");
        assert_eq!(link.unresolved, vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_override_is_unresolved() {
        let tree = tree();
        let foo = tree.find("foo").unwrap();
        let link = generate(foo, &params(&[("foo", "cf")]), &params(&[("foo", "")]));
        assert_eq!(link.path, "foo/{foo}");
        assert_eq!(link.unresolved, vec!["foo"]);
    }

    #[test]
    fn test_repeated_name_fills_each_occurrence() {
        let tree = RouteTree::build(&[RouteConfig::new("org/{id}", "org")
            .with_children(vec![RouteConfig::new("user/{id}", "user")])]);
        let user = tree.find("user").unwrap();
        let link = generate(user, &params(&[("id", "7")]), &Params::new());
        assert_eq!(link.path, "org/7/user/7");
    }

    #[test]
    fn test_link_error_display() {
        let err = LinkError::MissingParams {
            outlet: "bar".into(),
            missing: vec!["foo".into(), "bar".into()],
            partial: "foo/{foo}/bar/{bar}".into(),
        };
        assert_eq!(err.to_string(), "Outlet bar is missing parameters: foo, bar");
        assert_eq!(LinkError::UnknownOutlet("x".into()).to_string(), "Unknown outlet: x");
    }
}
