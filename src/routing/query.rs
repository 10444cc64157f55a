//! Query string parsing.

use crate::routing::Params;

/// Parse `a=1&b=2` into a flat map.
///
/// No percent-decoding is applied. A pair without `=` maps to an empty value,
/// anything after a second `=` is dropped, and a repeated key keeps its last
/// value.
pub fn parse_query(query: &str) -> Params {
    let mut params = Params::new();
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut parts = pair.split('=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        params.insert(key.to_string(), value.to_string());
    }
    params
}
