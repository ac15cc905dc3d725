use hashbrown::HashSet as FastHashSet;
use parking_lot::Mutex;
use smallvec::SmallVec;

use super::node::{NodeId, RouteSlot, TreeNode};
use super::{TreeError, TreeResult};
use crate::cache::{CacheStats, LruCache};
use crate::matcher::find_match;
use crate::router::RouterOptions;
use crate::types::{RouteDefinition, RouteMatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteRecord {
    pub(crate) id: String,
    pub(crate) template: String,
}

type MatchCache = LruCache<String, Option<RouteMatch>>;

#[derive(Debug)]
struct MatchCaches {
    exact: MatchCache,
    fuzzy: MatchCache,
}

impl MatchCaches {
    fn new(capacity: usize) -> Self {
        Self {
            exact: MatchCache::new(capacity),
            fuzzy: MatchCache::new(capacity),
        }
    }

    fn select(&mut self, fuzzy: bool) -> &mut MatchCache {
        if fuzzy { &mut self.fuzzy } else { &mut self.exact }
    }
}

/// Arena of template nodes plus the match cache that belongs to it.
///
/// Immutable after [`RouteTree::build`] returns; only cache entries change.
#[derive(Debug)]
pub struct RouteTree {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) routes: Vec<RouteRecord>,
    pub(crate) options: RouterOptions,
    caches: Option<Mutex<MatchCaches>>,
    cache_stats: Option<CacheStats>,
}

impl RouteTree {
    fn empty(options: &RouterOptions) -> Self {
        let caches = options
            .cache_routes
            .then(|| Mutex::new(MatchCaches::new(options.match_cache_capacity)));
        let cache_stats = caches.as_ref().map(|_| CacheStats::default());

        Self {
            nodes: vec![TreeNode::root()],
            routes: Vec::new(),
            options: options.clone(),
            caches,
            cache_stats,
        }
    }

    #[tracing::instrument(level = "trace", skip(routes, options))]
    pub fn build<I>(routes: I, options: &RouterOptions) -> TreeResult<Self>
    where
        I: IntoIterator<Item = RouteDefinition>,
    {
        let mut tree = Self::empty(options);
        let mut seen: FastHashSet<String> = FastHashSet::new();

        for definition in routes {
            if !seen.insert(definition.id.clone()) {
                return Err(TreeError::DuplicateRouteId { id: definition.id });
            }
            tree.insert(definition);
        }

        tree.finalize();
        tracing::event!(
            tracing::Level::TRACE,
            operation = "build",
            routes = tree.routes.len() as u64,
            nodes = tree.nodes.len() as u64
        );
        Ok(tree)
    }

    /// Tree holding one template, used for ad-hoc `from` matching.
    pub(crate) fn single(template: &str, case_sensitive: bool, options: &RouterOptions) -> Self {
        let mut tree = Self::empty(&options.without_match_cache());
        tree.insert(RouteDefinition::from_template(template).case_sensitive(case_sensitive));
        tree.finalize();
        tree
    }

    /// Finds the best route for `path`. With `fuzzy`, falls back to the most
    /// specific ancestor route and reports the unconsumed remainder as `*`.
    #[tracing::instrument(level = "trace", skip_all, fields(path = %path, fuzzy = fuzzy))]
    pub fn match_path(&self, path: &str, fuzzy: bool) -> Option<RouteMatch> {
        let (Some(caches), Some(stats)) = (self.caches.as_ref(), self.cache_stats.as_ref()) else {
            return find_match(self, path, fuzzy);
        };

        let cached = caches.lock().select(fuzzy).get(path).cloned();
        if let Some(hit) = cached {
            stats.record_hit();
            if self.options.debug {
                tracing::event!(
                    tracing::Level::DEBUG,
                    cache = "hit",
                    path = %path,
                    fuzzy,
                    "route match cache hit"
                );
            }
            return hit;
        }

        stats.record_miss();
        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                cache = "miss",
                path = %path,
                fuzzy,
                "route match cache miss"
            );
        }

        let result = find_match(self, path, fuzzy);
        caches
            .lock()
            .select(fuzzy)
            .insert(path.to_string(), result.clone());
        result
    }

    pub fn cache_metrics(&self) -> Option<(u64, u64)> {
        self.cache_stats.as_ref().map(CacheStats::snapshot)
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Registered `(id, template)` pairs in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|record| (record.id.as_str(), record.template.as_str()))
    }

    pub(crate) fn route_record(&self, slot: RouteSlot) -> Option<&RouteRecord> {
        self.routes.get(slot)
    }

    /// Node ids from the root down to `leaf`.
    pub(crate) fn branch(&self, leaf: NodeId) -> SmallVec<[NodeId; 16]> {
        let mut branch: SmallVec<[NodeId; 16]> = SmallVec::new();
        let mut current = Some(leaf);
        while let Some(id) = current {
            branch.push(id);
            current = self.nodes[id.index()].parent;
        }
        branch.reverse();
        branch
    }
}

/// Builds a [`RouteTree`] from route definitions.
pub fn build_tree<I>(routes: I, options: &RouterOptions) -> TreeResult<RouteTree>
where
    I: IntoIterator<Item = RouteDefinition>,
{
    RouteTree::build(routes, options)
}
