use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::pattern::SegmentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Indices past `u32::MAX` clamp; an arena that large cannot be allocated.
    #[inline(always)]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok());
        NodeId(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

pub(crate) type RouteSlot = usize;
pub(crate) type ChildList = SmallVec<[NodeId; 4]>;
pub(super) type StaticMap = FastHashMap<Box<str>, NodeId>;

/// Literal text wrapped around a param, optional param or wildcard.
///
/// Stored lower-cased when `case_sensitive` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affix {
    pub(crate) prefix: Option<Box<str>>,
    pub(crate) suffix: Option<Box<str>>,
    pub(crate) case_sensitive: bool,
}

impl Affix {
    pub(crate) fn new(
        prefix: &str,
        suffix: &str,
        case_sensitive: bool,
        affix_case_sensitive: bool,
    ) -> Self {
        let has_affix = !prefix.is_empty() || !suffix.is_empty();
        let case_sensitive = case_sensitive || (has_affix && affix_case_sensitive);
        let keep = |text: &str| -> Option<Box<str>> {
            if text.is_empty() {
                None
            } else if case_sensitive {
                Some(text.into())
            } else {
                Some(text.to_lowercase().into_boxed_str())
            }
        };

        Self {
            prefix: keep(prefix),
            suffix: keep(suffix),
            case_sensitive,
        }
    }

    pub(crate) fn literal(case_sensitive: bool) -> Self {
        Self {
            prefix: None,
            suffix: None,
            case_sensitive,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none()
    }

    /// Whether `text` (already case-folded by the caller if needed) starts
    /// with the prefix and ends with the suffix without the two overlapping.
    #[inline]
    pub(crate) fn fits(&self, text: &str) -> bool {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        text.len() >= prefix.len() + suffix.len()
            && text.starts_with(prefix)
            && text.ends_with(suffix)
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) kind: SegmentKind,
    pub(crate) depth: u16,
    pub(crate) parent: Option<NodeId>,
    pub(crate) affix: Affix,
    pub(crate) static_exact: StaticMap,
    pub(crate) static_insensitive: StaticMap,
    pub(crate) dynamic: ChildList,
    pub(crate) optional: ChildList,
    pub(crate) wildcard: ChildList,
    pub(crate) index: Option<NodeId>,
    pub(crate) route: Option<RouteSlot>,
}

impl TreeNode {
    pub(crate) fn new(kind: SegmentKind, depth: u16, parent: Option<NodeId>, affix: Affix) -> Self {
        Self {
            kind,
            depth,
            parent,
            affix,
            static_exact: StaticMap::new(),
            static_insensitive: StaticMap::new(),
            dynamic: ChildList::new(),
            optional: ChildList::new(),
            wildcard: ChildList::new(),
            index: None,
            route: None,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(SegmentKind::Pathname, 0, None, Affix::literal(true))
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn affix(&self) -> &Affix {
        &self.affix
    }

    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    /// Ordered children of one dynamic kind; empty for literal kinds.
    pub fn children(&self, kind: SegmentKind) -> &[NodeId] {
        match kind {
            SegmentKind::Param => &self.dynamic,
            SegmentKind::OptionalParam => &self.optional,
            SegmentKind::Wildcard => &self.wildcard,
            SegmentKind::Pathname | SegmentKind::Index => &[],
        }
    }

    pub(crate) fn children_mut(&mut self, kind: SegmentKind) -> Option<&mut ChildList> {
        match kind {
            SegmentKind::Param => Some(&mut self.dynamic),
            SegmentKind::OptionalParam => Some(&mut self.optional),
            SegmentKind::Wildcard => Some(&mut self.wildcard),
            SegmentKind::Pathname | SegmentKind::Index => None,
        }
    }

    pub fn static_child(&self, literal: &str) -> Option<NodeId> {
        self.static_exact
            .get(literal)
            .or_else(|| self.static_insensitive.get(literal.to_lowercase().as_str()))
            .copied()
    }

    pub fn index_child(&self) -> Option<NodeId> {
        self.index
    }
}
