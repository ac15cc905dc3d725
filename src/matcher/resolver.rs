use memchr::memchr_iter;
use smallvec::{SmallVec, smallvec};
use std::borrow::Cow;

use super::frame::{Frame, skip_bit};
use crate::enums::MatchKind;
use crate::tree::{Affix, NodeId, RouteTree};

/// A pathname split on `/`, keeping the byte offset of every part so
/// wildcard captures can be sliced from the raw text.
#[derive(Debug)]
pub(crate) struct SplitPath<'p> {
    pub raw: &'p str,
    pub parts: SmallVec<[&'p str; 16]>,
    offsets: SmallVec<[usize; 16]>,
}

impl<'p> SplitPath<'p> {
    pub fn new(raw: &'p str) -> Self {
        let mut parts = SmallVec::new();
        let mut offsets = SmallVec::new();
        let mut start = 0usize;
        for slash in memchr_iter(b'/', raw.as_bytes()) {
            parts.push(&raw[start..slash]);
            offsets.push(start);
            start = slash + 1;
        }
        parts.push(&raw[start..]);
        offsets.push(start);

        Self {
            raw,
            parts,
            offsets,
        }
    }

    /// Byte offset where part `index` begins; the path length past the end.
    #[inline]
    pub fn offset(&self, index: usize) -> usize {
        self.offsets.get(index).copied().unwrap_or(self.raw.len())
    }

    /// Raw text from part `index` to the end of the path.
    #[inline]
    pub fn rest(&self, index: usize) -> &'p str {
        &self.raw[self.offset(index)..]
    }

    /// Number of parts that must be consumed, not counting the empty part
    /// after a trailing slash.
    pub fn parts_len(&self) -> usize {
        self.parts.len() - usize::from(self.raw.ends_with('/'))
    }
}

/// Current path part with a lower-cased copy made on first use.
struct PartText<'p> {
    raw: &'p str,
    lower: Option<String>,
}

impl<'p> PartText<'p> {
    fn new(raw: &'p str) -> Self {
        Self { raw, lower: None }
    }

    fn cased(&mut self, case_sensitive: bool) -> &str {
        if case_sensitive {
            self.raw
        } else {
            self.lower
                .get_or_insert_with(|| self.raw.to_lowercase())
                .as_str()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved {
    pub frame: Frame,
    pub kind: MatchKind,
}

/// Depth-first search over `tree` for the most specific terminal.
pub(crate) fn search(tree: &RouteTree, path: &SplitPath<'_>, fuzzy: bool) -> Option<Resolved> {
    let parts_len = path.parts_len();
    let mut stack: SmallVec<[Frame; 32]> = smallvec![Frame::root()];
    let mut best: Option<Frame> = None;
    let mut wildcard: Option<Frame> = None;
    let mut nearest: Option<Frame> = None;

    while let Some(frame) = stack.pop() {
        let node = tree.node(frame.node);
        let beyond = frame.index >= parts_len;

        if fuzzy && !beyond {
            let candidate = if node.route.is_some() {
                Some(frame)
            } else {
                node.index
                    .filter(|id| tree.node(*id).route.is_some())
                    .map(|id| index_frame(tree, &frame, id))
            };
            if let Some(candidate) = candidate
                && candidate.outranks(nearest.as_ref())
            {
                nearest = Some(candidate);
            }
        }

        if beyond {
            if node.route.is_some() && frame.outranks(best.as_ref()) {
                best = Some(frame);
            }

            if let Some(id) = node.index
                && tree.node(id).route.is_some()
            {
                let candidate = index_frame(tree, &frame, id);
                if candidate.statics as usize == parts_len
                    && candidate.dynamics == 0
                    && candidate.optionals == 0
                    && candidate.skipped == 0
                {
                    return Some(Resolved {
                        frame: candidate,
                        kind: MatchKind::Exact,
                    });
                }
                if candidate.outranks(best.as_ref()) {
                    best = Some(candidate);
                }
            }

            if node.optional.is_empty() && node.wildcard.is_empty() {
                continue;
            }
        }

        // A full non-wildcard match always beats a wildcard.
        if !node.wildcard.is_empty() && best.is_none() && frame.outranks(wildcard.as_ref()) {
            let rest = path.rest(frame.index);
            let mut rest_lower: Option<String> = None;
            for &id in &node.wildcard {
                let child = tree.node(id);
                if child.route.is_none() {
                    continue;
                }
                let affix = &child.affix;
                if !affix.is_empty() {
                    if beyond {
                        continue;
                    }
                    let text = if affix.is_case_sensitive() {
                        rest
                    } else {
                        rest_lower.get_or_insert_with(|| rest.to_lowercase()).as_str()
                    };
                    if !affix.fits(text) {
                        continue;
                    }
                }
                wildcard = Some(Frame {
                    node: id,
                    index: parts_len,
                    depth: child.depth,
                    ..frame
                });
                break;
            }
        }

        if !node.optional.is_empty() {
            for &id in node.optional.iter().rev() {
                let depth = tree.node(id).depth;
                stack.push(Frame {
                    node: id,
                    skipped: frame.skipped | skip_bit(depth),
                    depth,
                    ..frame
                });
            }
        }

        if beyond {
            continue;
        }

        let mut part = PartText::new(path.parts[frame.index]);

        for &id in node.optional.iter().rev() {
            let child = tree.node(id);
            if !affix_fits(&child.affix, &mut part) {
                continue;
            }
            stack.push(Frame {
                node: id,
                index: frame.index + 1,
                depth: child.depth,
                optionals: frame.optionals + 1,
                ..frame
            });
        }

        if !part.raw.is_empty() {
            for &id in node.dynamic.iter().rev() {
                let child = tree.node(id);
                if !affix_fits(&child.affix, &mut part) {
                    continue;
                }
                stack.push(Frame {
                    node: id,
                    index: frame.index + 1,
                    depth: child.depth,
                    dynamics: frame.dynamics + 1,
                    ..frame
                });
            }
        }

        if !node.static_insensitive.is_empty()
            && let Some(&id) = node.static_insensitive.get(part.cased(false))
        {
            stack.push(static_frame(tree, &frame, id));
        }

        if let Some(&id) = node.static_exact.get(part.raw) {
            stack.push(static_frame(tree, &frame, id));
        }
    }

    match (best, wildcard) {
        (Some(best), _) => Some(Resolved {
            frame: best,
            kind: MatchKind::Exact,
        }),
        (None, Some(wildcard)) => Some(Resolved {
            frame: wildcard,
            kind: MatchKind::Wildcard,
        }),
        (None, None) => nearest.map(|frame| Resolved {
            frame,
            kind: MatchKind::Fuzzy,
        }),
    }
}

#[inline]
fn affix_fits(affix: &Affix, part: &mut PartText<'_>) -> bool {
    affix.is_empty() || affix.fits(part.cased(affix.is_case_sensitive()))
}

#[inline]
fn static_frame(tree: &RouteTree, frame: &Frame, id: NodeId) -> Frame {
    Frame {
        node: id,
        index: frame.index + 1,
        depth: tree.node(id).depth,
        statics: frame.statics + 1,
        ..*frame
    }
}

#[inline]
fn index_frame(tree: &RouteTree, frame: &Frame, id: NodeId) -> Frame {
    Frame {
        node: id,
        depth: tree.node(id).depth,
        is_index: true,
        ..*frame
    }
}

/// Matching always starts from a leading `/`; the empty path is the root.
pub(crate) fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.is_empty() {
        Cow::Borrowed("/")
    } else if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}
