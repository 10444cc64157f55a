//! Path segment tokens.

/// One `/`-delimited piece of a route's own path fragment.
///
/// Parameters are a separate variant so a placeholder can never compare equal
/// to a literal segment taken from an incoming path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the input segment exactly.
    Literal(String),
    /// Consumes any input segment and binds it to the next parameter name.
    Param,
}

impl Segment {
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param)
    }
}

/// Returns the parameter name if `raw` has the exact form `{name}`.
pub fn placeholder_name(raw: &str) -> Option<&str> {
    let name = raw.strip_prefix('{')?.strip_suffix('}')?;
    if name.is_empty() || name.contains(['{', '}']) {
        return None;
    }
    Some(name)
}

/// Strips one leading `/`.
pub fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Splits a path template into segments and the ordered parameter names.
pub fn parse_template(path: &str) -> (Vec<Segment>, Vec<String>) {
    let mut params = Vec::new();
    let segments = path
        .split('/')
        .map(|raw| match placeholder_name(raw) {
            Some(name) => {
                params.push(name.to_string());
                Segment::Param
            }
            None => Segment::Literal(raw.to_string()),
        })
        .collect();
    (segments, params)
}
