use smallvec::SmallVec;

use super::codec::collapse_duplicate_slashes;
use crate::enums::TrailingSlash;
use crate::pattern::{SegmentKind, SegmentRange, parse_segment};

/// Resolves `to` against `base`.
///
/// A leading `/` in `to` replaces the base. Otherwise `.` is skipped, `..`
/// drops one base segment (never the root), and anything else is appended.
/// Param, optional and wildcard segments come back in canonical template form.
#[tracing::instrument(level = "trace", skip_all, fields(base = %base, to = %to, trailing = ?trailing_slash))]
pub fn resolve_path(base: &str, to: &str, trailing_slash: TrailingSlash) -> String {
    let mut segments: SmallVec<[&str; 16]> = base.split('/').collect();
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }

    let steps: SmallVec<[&str; 16]> = to.split('/').collect();
    let last = steps.len().saturating_sub(1);
    for (i, step) in steps.iter().copied().enumerate() {
        match step {
            "" if i == 0 => {
                segments.clear();
                segments.push("");
            }
            "" if i == last => segments.push(""),
            "" | "." => {}
            ".." => {
                if segments.len() > 1 || segments.first().is_some_and(|first| !first.is_empty()) {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }

    if segments.len() > 1 {
        match (segments.last() == Some(&""), trailing_slash) {
            (true, TrailingSlash::Never) => {
                segments.pop();
            }
            (false, TrailingSlash::Always) => segments.push(""),
            _ => {}
        }
    }

    let mut joined = String::with_capacity(base.len() + to.len());
    let mut scratch = SegmentRange::default();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push('/');
        }
        if !segment.is_empty() {
            render_canonical(&mut joined, segment, &mut scratch);
        }
    }

    let resolved = collapse_duplicate_slashes(&joined);
    if resolved.is_empty() {
        "/".to_string()
    } else {
        resolved
    }
}

fn render_canonical(out: &mut String, segment: &str, scratch: &mut SegmentRange) {
    let range = *parse_segment(segment, 0, scratch);
    let prefix = range.prefix(segment);
    let suffix = range.suffix(segment);
    let bare = prefix.is_empty() && suffix.is_empty();

    match range.kind {
        SegmentKind::Pathname | SegmentKind::Index => out.push_str(segment),
        SegmentKind::Param if bare => {
            out.push('$');
            out.push_str(range.value(segment));
        }
        SegmentKind::Param => {
            out.push_str(&format!("{prefix}{{${}}}{suffix}", range.value(segment)));
        }
        SegmentKind::Wildcard if bare => out.push('$'),
        SegmentKind::Wildcard => out.push_str(&format!("{prefix}{{$}}{suffix}")),
        SegmentKind::OptionalParam => {
            out.push_str(&format!("{prefix}{{-${}}}{suffix}", range.value(segment)));
        }
    }
}
