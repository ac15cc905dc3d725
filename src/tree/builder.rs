use std::borrow::Cow;

use super::node::{Affix, NodeId, TreeNode};
use super::route_tree::{RouteRecord, RouteTree};
use super::sort::sort_by_specificity;
use crate::matcher::SKIP_MASK_BITS;
use crate::pattern::{SegmentKind, SegmentRange, parse_segment};
use crate::types::RouteDefinition;

impl RouteTree {
    pub(super) fn insert(&mut self, definition: RouteDefinition) {
        let case_sensitive = definition
            .case_sensitive
            .unwrap_or(self.options.case_sensitive);
        let template = normalize_template(definition.template);
        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            id = %definition.id,
            template = %template,
            case_sensitive
        );

        let slot = self.routes.len();
        let leaf = self.descend(&template, case_sensitive);
        let node = &mut self.nodes[leaf.index()];
        match node.route {
            None => node.route = Some(slot),
            Some(existing) => {
                tracing::warn!(
                    id = %definition.id,
                    template = %template,
                    existing = %self.routes[existing].id,
                    "template is structurally identical to an earlier route; keeping the earlier one"
                );
            }
        }

        self.routes.push(RouteRecord {
            id: definition.id,
            template,
        });
    }

    /// Walks `template` from the root, creating missing nodes, and returns the
    /// node the route attaches to.
    fn descend(&mut self, template: &str, case_sensitive: bool) -> NodeId {
        let mut node = NodeId::ROOT;
        let mut scratch = SegmentRange::default();
        let mut cursor = 1usize;
        let mut depth = 0u16;

        while cursor < template.len() {
            let range = *parse_segment(template, cursor, &mut scratch);
            cursor = range.end + 1;
            // Only ranks read depth, so very long templates pin at the cap.
            depth = depth.saturating_add(1);

            node = match range.kind {
                SegmentKind::Pathname => {
                    self.static_child(node, range.value(template), case_sensitive, depth)
                }
                SegmentKind::OptionalParam if usize::from(depth) >= SKIP_MASK_BITS => {
                    tracing::warn!(
                        template = %template,
                        depth,
                        "optional segment is nested too deep to be skipped; reading as literal"
                    );
                    let text = &template[range.start..range.end];
                    self.static_child(node, text, case_sensitive, depth)
                }
                // Index is appended by parse_template only, never by parse_segment.
                SegmentKind::Index => node,
                kind @ (SegmentKind::Param
                | SegmentKind::OptionalParam
                | SegmentKind::Wildcard) => {
                    let affix = Affix::new(
                        range.prefix(template),
                        range.suffix(template),
                        case_sensitive,
                        self.options.affix_case_sensitive,
                    );
                    self.dynamic_child(node, kind, affix, depth)
                }
            };

            if range.kind == SegmentKind::Wildcard {
                return node;
            }
        }

        if template.ends_with('/') {
            self.index_child(node, depth.saturating_add(1))
        } else {
            node
        }
    }

    fn alloc(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn static_child(
        &mut self,
        parent: NodeId,
        literal: &str,
        case_sensitive: bool,
        depth: u16,
    ) -> NodeId {
        let key: Cow<'_, str> = if case_sensitive {
            Cow::Borrowed(literal)
        } else {
            Cow::Owned(literal.to_lowercase())
        };

        let existing = {
            let node = &self.nodes[parent.index()];
            let map = if case_sensitive {
                &node.static_exact
            } else {
                &node.static_insensitive
            };
            map.get(key.as_ref()).copied()
        };
        if let Some(id) = existing {
            return id;
        }

        let id = self.alloc(TreeNode::new(
            SegmentKind::Pathname,
            depth,
            Some(parent),
            Affix::literal(case_sensitive),
        ));
        let node = &mut self.nodes[parent.index()];
        let map = if case_sensitive {
            &mut node.static_exact
        } else {
            &mut node.static_insensitive
        };
        map.insert(key.into_owned().into_boxed_str(), id);
        id
    }

    fn dynamic_child(
        &mut self,
        parent: NodeId,
        kind: SegmentKind,
        affix: Affix,
        depth: u16,
    ) -> NodeId {
        let existing = self.nodes[parent.index()]
            .children(kind)
            .iter()
            .copied()
            .find(|id| self.nodes[id.index()].affix == affix);
        if let Some(id) = existing {
            return id;
        }

        let id = self.alloc(TreeNode::new(kind, depth, Some(parent), affix));
        if let Some(list) = self.nodes[parent.index()].children_mut(kind) {
            list.push(id);
        }
        id
    }

    fn index_child(&mut self, parent: NodeId, depth: u16) -> NodeId {
        if let Some(id) = self.nodes[parent.index()].index {
            return id;
        }

        let id = self.alloc(TreeNode::new(
            SegmentKind::Index,
            depth,
            Some(parent),
            Affix::literal(true),
        ));
        self.nodes[parent.index()].index = Some(id);
        id
    }

    /// Orders every node's dynamic, optional and wildcard children by specificity.
    pub(super) fn finalize(&mut self) {
        for i in 0..self.nodes.len() {
            for kind in [
                SegmentKind::Param,
                SegmentKind::OptionalParam,
                SegmentKind::Wildcard,
            ] {
                let Some(list) = self.nodes[i].children_mut(kind) else {
                    continue;
                };
                if list.len() < 2 {
                    continue;
                }
                let mut list = std::mem::take(list);
                sort_by_specificity(&mut list, &self.nodes);
                if let Some(slot) = self.nodes[i].children_mut(kind) {
                    *slot = list;
                }
            }
        }
    }
}

/// Templates are matched from a leading `/`; an empty template is the root index.
pub(super) fn normalize_template(template: String) -> String {
    if template.is_empty() {
        "/".to_string()
    } else if template.starts_with('/') {
        template
    } else {
        format!("/{template}")
    }
}
