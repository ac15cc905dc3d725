use crate::tree::RouteTree;
use crate::types::RouteMatch;

/// Sealed route and mask trees, shared behind an `Arc` for lookups.
#[derive(Debug)]
pub struct RouterReadOnly {
    routes: RouteTree,
    masks: RouteTree,
}

impl RouterReadOnly {
    pub(crate) fn new(routes: RouteTree, masks: RouteTree) -> Self {
        Self { routes, masks }
    }

    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        self.routes.match_path(path, false)
    }

    /// Most specific route owning a prefix of `path`, for not-found handling.
    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn find_nearest(&self, path: &str) -> Option<RouteMatch> {
        self.routes.match_path(path, true)
    }

    pub fn find_mask(&self, path: &str) -> Option<RouteMatch> {
        self.masks.match_path(path, false)
    }

    pub fn routes(&self) -> &RouteTree {
        &self.routes
    }

    pub fn masks(&self) -> &RouteTree {
        &self.masks
    }
}
