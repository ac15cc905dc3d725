use smallvec::SmallVec;
use std::cmp::Ordering;

use super::node::{Affix, NodeId, TreeNode};

/// Orders sibling dynamic segments so the most specific literal anchor is
/// tried first.
pub(crate) fn compare_affix(a: &Affix, b: &Affix) -> Ordering {
    if let (Some(pa), Some(pb)) = (a.prefix(), b.prefix())
        && pa != pb
    {
        if pa.starts_with(pb) {
            return Ordering::Less;
        }
        if pb.starts_with(pa) {
            return Ordering::Greater;
        }
    }

    if let (Some(sa), Some(sb)) = (a.suffix(), b.suffix())
        && sa != sb
    {
        if sa.ends_with(sb) {
            return Ordering::Less;
        }
        if sb.ends_with(sa) {
            return Ordering::Greater;
        }
    }

    match (a.prefix().is_some(), b.prefix().is_some()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    match (a.suffix().is_some(), b.suffix().is_some()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    b.is_case_sensitive().cmp(&a.is_case_sensitive())
}

/// Stable ordering pass: each node goes before the first already placed
/// sibling it beats. `compare_affix` is not transitive across unrelated
/// prefixes, which `slice::sort_by` may reject.
pub(crate) fn sort_by_specificity(list: &mut [NodeId], nodes: &[TreeNode]) {
    if list.len() < 2 {
        return;
    }

    let affix = |id: NodeId| &nodes[id.index()].affix;
    let mut sorted: SmallVec<[NodeId; 8]> = SmallVec::with_capacity(list.len());
    for &id in list.iter() {
        let pos = sorted
            .iter()
            .position(|&placed| compare_affix(affix(id), affix(placed)) == Ordering::Less)
            .unwrap_or(sorted.len());
        sorted.insert(pos, id);
    }
    list.copy_from_slice(&sorted);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affix(prefix: &str, suffix: &str, case_sensitive: bool) -> Affix {
        Affix::new(prefix, suffix, case_sensitive, false)
    }

    #[test]
    fn longer_prefix_extending_shorter_one_sorts_first() {
        let long = affix("post-", "", true);
        let short = affix("post", "", true);
        assert_eq!(compare_affix(&long, &short), Ordering::Less);
        assert_eq!(compare_affix(&short, &long), Ordering::Greater);
    }

    #[test]
    fn longer_suffix_extending_shorter_one_sorts_first() {
        let long = affix("", ".tar.gz", true);
        let short = affix("", ".gz", true);
        assert_eq!(compare_affix(&long, &short), Ordering::Less);
    }

    #[test]
    fn having_prefix_beats_having_only_suffix() {
        let prefixed = affix("a", "", true);
        let suffixed = affix("", "z", true);
        assert_eq!(compare_affix(&prefixed, &suffixed), Ordering::Less);
    }

    #[test]
    fn case_sensitive_beats_insensitive_when_otherwise_equal() {
        let sensitive = affix("", "", true);
        let insensitive = affix("", "", false);
        assert_eq!(compare_affix(&sensitive, &insensitive), Ordering::Less);
        assert_eq!(compare_affix(&insensitive, &insensitive), Ordering::Equal);
    }

    #[test]
    fn sort_places_extended_prefix_first_and_keeps_ties_in_order() {
        let mut nodes = vec![TreeNode::root()];
        let specs = [("x", ""), ("", ""), ("y", ""), ("xy", "")];
        for (prefix, suffix) in specs {
            nodes.push(TreeNode::new(
                crate::pattern::SegmentKind::Param,
                1,
                Some(NodeId::ROOT),
                affix(prefix, suffix, true),
            ));
        }
        let mut list: Vec<NodeId> = (1..nodes.len()).map(NodeId::from_index).collect();
        sort_by_specificity(&mut list, &nodes);

        let order: Vec<Option<&str>> = list
            .iter()
            .map(|id| nodes[id.index()].affix.prefix())
            .collect();
        assert_eq!(order, vec![Some("xy"), Some("x"), Some("y"), None]);
    }
}
