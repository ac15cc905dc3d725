use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SegmentKind {
    #[default]
    Pathname = 0,
    Param = 1,
    Wildcard = 2,
    OptionalParam = 3,
    Index = 4,
}

/// Byte offsets of one parsed segment inside its template.
///
/// Layout: `start..prefix_end` is the prefix, `value_start..value_end` the
/// literal text or param name, `suffix_start..end` the suffix. For wildcards
/// `end` is the template length since the wildcard swallows the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentRange {
    pub kind: SegmentKind,
    pub start: usize,
    pub prefix_end: usize,
    pub value_start: usize,
    pub value_end: usize,
    pub suffix_start: usize,
    pub end: usize,
}

impl SegmentRange {
    pub fn prefix<'a>(&self, template: &'a str) -> &'a str {
        &template[self.start..self.prefix_end]
    }

    pub fn value<'a>(&self, template: &'a str) -> &'a str {
        &template[self.value_start..self.value_end]
    }

    pub fn suffix<'a>(&self, template: &'a str) -> &'a str {
        &template[self.suffix_start..self.end]
    }

    pub fn segment<'a>(&self, template: &'a str) -> Segment<'a> {
        let prefix = self.prefix(template);
        let suffix = self.suffix(template);
        match self.kind {
            SegmentKind::Pathname => Segment::Literal(self.value(template)),
            SegmentKind::Param => Segment::Param {
                name: self.value(template),
                prefix,
                suffix,
            },
            SegmentKind::OptionalParam => Segment::OptionalParam {
                name: self.value(template),
                prefix,
                suffix,
            },
            SegmentKind::Wildcard => Segment::Wildcard { prefix, suffix },
            SegmentKind::Index => Segment::Index,
        }
    }
}

/// Borrowed view of one template segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param {
        name: &'a str,
        prefix: &'a str,
        suffix: &'a str,
    },
    OptionalParam {
        name: &'a str,
        prefix: &'a str,
        suffix: &'a str,
    },
    Wildcard {
        prefix: &'a str,
        suffix: &'a str,
    },
    Index,
}

impl Segment<'_> {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Literal(_) => SegmentKind::Pathname,
            Segment::Param { .. } => SegmentKind::Param,
            Segment::OptionalParam { .. } => SegmentKind::OptionalParam,
            Segment::Wildcard { .. } => SegmentKind::Wildcard,
            Segment::Index => SegmentKind::Index,
        }
    }
}
