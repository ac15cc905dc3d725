pub mod cache;
pub mod enums;
mod matcher;
pub mod path;
pub mod pattern;
pub mod router;
pub mod tree;
pub mod types;

pub use enums::{MatchKind, TrailingSlash};
pub use path::{InterpolatedPath, interpolate_path, resolve_path};
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterReadOnly,
    RouterResult,
};
pub use tree::{RouteTree, TreeError, TreeResult, build_tree};
pub use types::{RouteDefinition, RouteMatch, RouteParams, SPLAT_ALIAS_KEY, SPLAT_KEY};
