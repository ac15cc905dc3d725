mod frame;
mod params;
mod resolver;

pub use frame::SKIP_MASK_BITS;
pub(crate) use params::extract_params;

use resolver::{SplitPath, normalize_path, search};

use crate::enums::MatchKind;
use crate::path::decode_component;
use crate::tree::RouteTree;
use crate::types::{RouteMatch, SPLAT_ALIAS_KEY, SPLAT_KEY};

/// Uncached match of `path` against `tree`.
pub(crate) fn find_match(tree: &RouteTree, path: &str, fuzzy: bool) -> Option<RouteMatch> {
    let path = normalize_path(path);
    let split = SplitPath::new(&path);
    let resolved = search(tree, &split, fuzzy)?;

    let slot = tree.node(resolved.frame.node).route?;
    let record = tree.route_record(slot)?;
    let mut params = extract_params(tree, &record.template, &split, &resolved.frame);

    if resolved.kind == MatchKind::Fuzzy {
        let remainder = decode_component(split.rest(resolved.frame.index));
        params.insert(SPLAT_KEY.to_string(), remainder.clone());
        params.insert(SPLAT_ALIAS_KEY.to_string(), remainder);
    }

    tracing::event!(
        tracing::Level::TRACE,
        operation = "match",
        route = %record.id,
        kind = ?resolved.kind
    );

    Some(RouteMatch {
        route_id: record.id.clone(),
        template: record.template.clone(),
        params,
        kind: resolved.kind,
    })
}
