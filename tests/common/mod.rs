//! Shared route fixtures for integration tests.

#![allow(dead_code)]

use outlet_router::{Params, RouteConfig};

/// `home` at the root, `foo` with a literal and a parameterized child.
pub fn basic_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "home"),
        RouteConfig::new("/foo", "foo").with_children(vec![
            RouteConfig::new("/bar", "bar"),
            RouteConfig::new("/{baz}/baz", "baz"),
        ]),
    ]
}

pub fn no_root_routes() -> Vec<RouteConfig> {
    vec![RouteConfig::new("/foo", "foo")]
}

pub fn default_route() -> Vec<RouteConfig> {
    vec![RouteConfig::new("/foo/{bar}", "foo")
        .as_default_route()
        .with_default_param("bar", "defaultBar")]
}

pub fn default_route_without_params() -> Vec<RouteConfig> {
    vec![RouteConfig::new("/foo/{bar}", "foo").as_default_route()]
}

/// `foo → bar → baz`, one parameter each.
pub fn nested_params() -> Vec<RouteConfig> {
    vec![RouteConfig::new("/foo/{foo}", "foo").with_children(vec![
        RouteConfig::new("/bar/{bar}", "bar")
            .with_children(vec![RouteConfig::new("/baz/{baz}", "baz")]),
    ])]
}

pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
