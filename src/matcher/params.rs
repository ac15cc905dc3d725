use super::frame::{Frame, skip_bit};
use super::resolver::SplitPath;
use crate::path::decode_component;
use crate::pattern::{SegmentKind, SegmentRange, parse_segment};
use crate::tree::RouteTree;
use crate::types::{RouteParams, SPLAT_ALIAS_KEY, SPLAT_KEY};

/// Walks the winning branch in lockstep with the path parts and collects
/// decoded param values. Names come from `template`, the route that owns
/// the leaf.
pub(crate) fn extract_params(
    tree: &RouteTree,
    template: &str,
    path: &SplitPath<'_>,
    frame: &Frame,
) -> RouteParams {
    let mut params = RouteParams::new();
    let mut scratch = SegmentRange::default();
    let mut cursor = 1usize;
    let mut part_index = 1usize;

    for id in tree.branch(frame.node).into_iter().skip(1) {
        let node = tree.node(id);
        if node.kind == SegmentKind::Index || cursor >= template.len() {
            break;
        }

        let range = *parse_segment(template, cursor, &mut scratch);
        cursor = range.end + 1;

        match node.kind {
            SegmentKind::Pathname | SegmentKind::Index => {
                part_index += 1;
            }
            SegmentKind::Param | SegmentKind::OptionalParam => {
                if node.kind == SegmentKind::OptionalParam
                    && frame.skipped & skip_bit(node.depth) != 0
                {
                    continue;
                }
                let part = path.parts.get(part_index).copied().unwrap_or("");
                part_index += 1;

                let value = strip_affix(
                    part,
                    range.prefix(template).len(),
                    range.suffix(template).len(),
                );
                if node.kind == SegmentKind::OptionalParam && value.is_empty() {
                    continue;
                }
                params.insert(
                    range.value(template).to_string(),
                    decode_component(value),
                );
            }
            SegmentKind::Wildcard => {
                let start = path.offset(part_index) + range.prefix(template).len();
                let end = path
                    .raw
                    .len()
                    .saturating_sub(range.suffix(template).len());
                let value = path.raw.get(start..end).unwrap_or("");
                let decoded = decode_component(value);
                params.insert(SPLAT_KEY.to_string(), decoded.clone());
                params.insert(SPLAT_ALIAS_KEY.to_string(), decoded);
                break;
            }
        }
    }

    params
}

#[inline]
fn strip_affix(part: &str, prefix: usize, suffix: usize) -> &str {
    part.len()
        .checked_sub(suffix)
        .and_then(|end| part.get(prefix..end))
        .unwrap_or("")
}
