use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, OnceLock};

use super::{RouterError, RouterOptions, RouterReadOnly, RouterResult};
use crate::cache::LruCache;
use crate::enums::TrailingSlash;
use crate::path::{InterpolatedPath, interpolate_path, resolve_path};
use crate::tree::RouteTree;
use crate::types::{RouteDefinition, RouteMatch, RouteParams};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResolveKey {
    /// `None` when `to` is absolute and the base cannot matter.
    base: Option<String>,
    to: String,
    trailing_slash: TrailingSlash,
}

type SingleKey = (String, bool);

#[derive(Debug, Default)]
struct RouterState {
    routes: Vec<RouteDefinition>,
    masks: Vec<RouteDefinition>,
    readonly: OnceLock<Arc<RouterReadOnly>>,
}

#[derive(Debug)]
pub struct Router {
    options: RouterOptions,
    inner: RwLock<RouterState>,
    single_cache: Mutex<LruCache<SingleKey, Arc<RouteTree>>>,
    resolve_cache: Mutex<LruCache<ResolveKey, String>>,
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default();
        Self {
            single_cache: Mutex::new(LruCache::new(options.single_cache_capacity)),
            resolve_cache: Mutex::new(LruCache::new(options.resolve_cache_capacity)),
            inner: RwLock::new(RouterState::default()),
            options,
        }
    }

    /// Like [`Router::new`] but rejects invalid options instead of clamping them.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn add(&self, route: RouteDefinition) -> RouterResult<()> {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed { id: route.id });
        }
        guard.routes.push(route);
        Ok(())
    }

    pub fn add_bulk<I>(&self, routes: I) -> RouterResult<()>
    where
        I: IntoIterator<Item = RouteDefinition>,
    {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            let count = routes.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }
        guard.routes.extend(routes);
        Ok(())
    }

    /// Registers a route mask, matched separately through [`Router::find_mask`].
    pub fn add_mask(&self, mask: RouteDefinition) -> RouterResult<()> {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed { id: mask.id });
        }
        guard.masks.push(mask);
        Ok(())
    }

    /// Builds the route and mask trees. Registration is closed afterwards.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn seal(&self) -> RouterResult<()> {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return Err(RouterError::AlreadySealed);
        }

        let routes = RouteTree::build(guard.routes.iter().cloned(), &self.options)?;
        let masks = RouteTree::build(guard.masks.iter().cloned(), &self.options)?;
        tracing::event!(
            tracing::Level::TRACE,
            operation = "seal",
            routes = routes.route_count() as u64,
            masks = masks.route_count() as u64
        );

        if guard
            .readonly
            .set(Arc::new(RouterReadOnly::new(routes, masks)))
            .is_err()
        {
            return Err(RouterError::AlreadySealed);
        }
        guard.routes = Vec::new();
        guard.masks = Vec::new();
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn find(&self, path: &str) -> RouterResult<Option<RouteMatch>> {
        Ok(self.sealed()?.find(path))
    }

    pub fn find_nearest(&self, path: &str) -> RouterResult<Option<RouteMatch>> {
        Ok(self.sealed()?.find_nearest(path))
    }

    pub fn find_mask(&self, path: &str) -> RouterResult<Option<RouteMatch>> {
        Ok(self.sealed()?.find_mask(path))
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly>> {
        self.inner
            .read()
            .readonly
            .get()
            .cloned()
            .ok_or(RouterError::ReadOnlyUnavailable)
    }

    fn sealed(&self) -> RouterResult<Arc<RouterReadOnly>> {
        self.inner
            .read()
            .readonly
            .get()
            .cloned()
            .ok_or(RouterError::FindWhileMutable)
    }

    /// Matches `path` against the single template `from`. The one-route tree
    /// is built once per `(from, case_sensitive)` and kept in a bounded cache.
    #[tracing::instrument(level = "trace", skip(self, from, path), fields(from = %from, path = %path))]
    pub fn find_single(
        &self,
        from: &str,
        path: &str,
        case_sensitive: bool,
        fuzzy: bool,
    ) -> Option<RouteMatch> {
        let from = if from.is_empty() { "/" } else { from };
        let key: SingleKey = (from.to_string(), case_sensitive);

        let tree = {
            let mut cache = self.single_cache.lock();
            match cache.get(&key) {
                Some(tree) => Arc::clone(tree),
                None => {
                    let tree = Arc::new(RouteTree::single(from, case_sensitive, &self.options));
                    cache.insert(key, Arc::clone(&tree));
                    tree
                }
            }
        };

        tree.match_path(path, fuzzy)
    }

    /// [`resolve_path`] with the router's trailing-slash policy, memoized.
    pub fn resolve_path(&self, base: &str, to: &str) -> String {
        self.resolve_path_with(base, to, self.options.trailing_slash)
    }

    pub fn resolve_path_with(&self, base: &str, to: &str, trailing_slash: TrailingSlash) -> String {
        let key = ResolveKey {
            base: (!to.starts_with('/')).then(|| base.to_string()),
            to: to.to_string(),
            trailing_slash,
        };

        if let Some(resolved) = self.resolve_cache.lock().get(&key) {
            return resolved.clone();
        }

        let resolved = resolve_path(base, to, trailing_slash);
        self.resolve_cache.lock().insert(key, resolved.clone());
        resolved
    }

    pub fn interpolate(&self, template: &str, params: &RouteParams) -> InterpolatedPath {
        interpolate_path(template, params)
    }
}
