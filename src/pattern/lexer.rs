use memchr::memchr;
use regex::Regex;
use smallvec::SmallVec;
use std::sync::LazyLock;

use super::{Segment, SegmentKind, SegmentRange};

static PARAM_WITH_BRACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^{]*)\{\$([a-zA-Z_$][a-zA-Z0-9_$]*)\}([^}]*)$")
        .expect("braced param pattern should compile")
});

static OPTIONAL_PARAM_WITH_BRACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^{]*)\{-\$([a-zA-Z_$][a-zA-Z0-9_$]*)\}([^}]*)$")
        .expect("braced optional param pattern should compile")
});

static WILDCARD_WITH_BRACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^{]*)\{\$\}([^}]*)$").expect("braced wildcard pattern should compile")
});

/// Parses the segment of `template` beginning at `start` into `out`.
///
/// `out.end` is the offset of the next `/` (or the template length). Text that
/// contains `$` but fits none of the known forms is read as a literal.
pub fn parse_segment<'s>(
    template: &str,
    start: usize,
    out: &'s mut SegmentRange,
) -> &'s SegmentRange {
    let total = template.len();
    let start = start.min(total);
    let end = memchr(b'/', &template.as_bytes()[start..]).map_or(total, |pos| start + pos);
    let part = &template[start..end];

    if memchr(b'$', part.as_bytes()).is_none() {
        return write_literal(out, start, end);
    }

    if part == "$" {
        *out = SegmentRange {
            kind: SegmentKind::Wildcard,
            start,
            prefix_end: start,
            value_start: start,
            value_end: start + 1,
            suffix_start: total,
            end: total,
        };
        return out;
    }

    if part.starts_with('$') {
        *out = SegmentRange {
            kind: SegmentKind::Param,
            start,
            prefix_end: start,
            value_start: start + 1,
            value_end: end,
            suffix_start: end,
            end,
        };
        return out;
    }

    if let Some(caps) = PARAM_WITH_BRACES.captures(part) {
        let prefix_len = caps.get(1).map_or(0, |m| m.len());
        let name_len = caps.get(2).map_or(0, |m| m.len());
        let value_start = start + prefix_len + 2;
        *out = SegmentRange {
            kind: SegmentKind::Param,
            start,
            prefix_end: start + prefix_len,
            value_start,
            value_end: value_start + name_len,
            suffix_start: value_start + name_len + 1,
            end,
        };
        return out;
    }

    if let Some(caps) = OPTIONAL_PARAM_WITH_BRACES.captures(part) {
        let prefix_len = caps.get(1).map_or(0, |m| m.len());
        let name_len = caps.get(2).map_or(0, |m| m.len());
        let value_start = start + prefix_len + 3;
        *out = SegmentRange {
            kind: SegmentKind::OptionalParam,
            start,
            prefix_end: start + prefix_len,
            value_start,
            value_end: value_start + name_len,
            suffix_start: value_start + name_len + 1,
            end,
        };
        return out;
    }

    if let Some(caps) = WILDCARD_WITH_BRACES.captures(part) {
        let prefix_len = caps.get(1).map_or(0, |m| m.len());
        let brace = start + prefix_len;
        *out = SegmentRange {
            kind: SegmentKind::Wildcard,
            start,
            prefix_end: brace,
            value_start: brace + 1,
            value_end: brace + 2,
            suffix_start: brace + 3,
            end: total,
        };
        return out;
    }

    tracing::event!(tracing::Level::TRACE, segment = %part, "unrecognized param syntax; reading as literal");
    write_literal(out, start, end)
}

fn write_literal(out: &mut SegmentRange, start: usize, end: usize) -> &SegmentRange {
    *out = SegmentRange {
        kind: SegmentKind::Pathname,
        start,
        prefix_end: start,
        value_start: start,
        value_end: end,
        suffix_start: end,
        end,
    };
    out
}

/// Splits a whole template into segments, appending [`Segment::Index`] when
/// the template ends with `/`.
pub fn parse_template(template: &str) -> SmallVec<[Segment<'_>; 8]> {
    let mut segments = SmallVec::new();
    let mut scratch = SegmentRange::default();
    let mut cursor = usize::from(template.starts_with('/'));

    while cursor < template.len() {
        let range = *parse_segment(template, cursor, &mut scratch);
        cursor = range.end + 1;
        segments.push(range.segment(template));
        if range.kind == SegmentKind::Wildcard {
            return segments;
        }
    }

    if template.ends_with('/') {
        segments.push(Segment::Index);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_at(template: &str, start: usize) -> SegmentRange {
        let mut scratch = SegmentRange::default();
        *parse_segment(template, start, &mut scratch)
    }

    #[test]
    fn literal_segment_ends_at_next_slash() {
        let range = parse_at("/posts/list", 1);
        assert_eq!(range.kind, SegmentKind::Pathname);
        assert_eq!(range.value("/posts/list"), "posts");
        assert_eq!(range.end, 6);
    }

    #[test]
    fn bare_dollar_wildcard_swallows_rest_of_template() {
        let template = "/files/$/ignored";
        let range = parse_at(template, 7);
        assert_eq!(range.kind, SegmentKind::Wildcard);
        assert_eq!(range.end, template.len());
        assert_eq!(range.prefix(template), "");
        assert_eq!(range.suffix(template), "");
    }

    #[test]
    fn braced_param_captures_prefix_name_and_suffix() {
        let template = "/post-{$id}.json";
        let range = parse_at(template, 1);
        assert_eq!(range.kind, SegmentKind::Param);
        assert_eq!(range.prefix(template), "post-");
        assert_eq!(range.value(template), "id");
        assert_eq!(range.suffix(template), ".json");
    }

    #[test]
    fn braced_optional_param_is_recognized() {
        let template = "/posts/{-$category}";
        let range = parse_at(template, 7);
        assert_eq!(range.kind, SegmentKind::OptionalParam);
        assert_eq!(range.value(template), "category");
        assert_eq!(range.prefix(template), "");
    }

    #[test]
    fn braced_wildcard_suffix_reaches_template_end() {
        let template = "/a/x{$}.txt";
        let range = parse_at(template, 3);
        assert_eq!(range.kind, SegmentKind::Wildcard);
        assert_eq!(range.prefix(template), "x");
        assert_eq!(range.suffix(template), ".txt");
        assert_eq!(range.end, template.len());
    }

    #[test]
    fn malformed_braces_degrade_to_literal() {
        let template = "/pre{$1bad}";
        let range = parse_at(template, 1);
        assert_eq!(range.kind, SegmentKind::Pathname);
        assert_eq!(range.value(template), "pre{$1bad}");
    }

    #[test]
    fn parse_template_appends_index_for_trailing_slash() {
        let segments = parse_template("/posts/$postId/");
        assert_eq!(
            segments.as_slice(),
            &[
                Segment::Literal("posts"),
                Segment::Param {
                    name: "postId",
                    prefix: "",
                    suffix: ""
                },
                Segment::Index,
            ]
        );
    }

    #[test]
    fn parse_template_of_root_is_single_index() {
        assert_eq!(parse_template("/").as_slice(), &[Segment::Index]);
    }
}
