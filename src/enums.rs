use serde::{Deserialize, Serialize};

/// Trailing slash policy applied by path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    #[default]
    Never,
    Always,
    Preserve,
}

/// How a [`RouteMatch`](crate::RouteMatch) was obtained.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Every path part was consumed by literal, param or optional segments.
    Exact = 0,
    /// A wildcard segment captured the remainder of the path.
    Wildcard = 1,
    /// Nearest ancestor that owns a route; the unconsumed remainder is in `*`.
    Fuzzy = 2,
}
