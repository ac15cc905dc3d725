use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::enums::TrailingSlash;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Default for routes that do not set their own flag.
    pub case_sensitive: bool,
    /// Param, optional and wildcard segments with a literal prefix or suffix
    /// compare case-sensitively even on case-insensitive routes.
    pub affix_case_sensitive: bool,
    pub trailing_slash: TrailingSlash,
    pub cache_routes: bool,
    pub match_cache_capacity: usize,
    pub single_cache_capacity: usize,
    pub resolve_cache_capacity: usize,
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            affix_case_sensitive: true,
            trailing_slash: TrailingSlash::default(),
            cache_routes: true,
            match_cache_capacity: DEFAULT_CACHE_CAPACITY,
            single_cache_capacity: DEFAULT_CACHE_CAPACITY,
            resolve_cache_capacity: DEFAULT_CACHE_CAPACITY,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        let capacities = [
            ("match_cache_capacity", self.match_cache_capacity),
            ("single_cache_capacity", self.single_cache_capacity),
            ("resolve_cache_capacity", self.resolve_cache_capacity),
        ];
        for (field, provided) in capacities {
            if provided == 0 {
                return Err(RouterOptionsError::CacheCapacityInvalid { field, provided });
            }
        }
        Ok(())
    }

    /// Options for throwaway trees that are cached as a whole elsewhere.
    pub(crate) fn without_match_cache(&self) -> Self {
        Self {
            cache_routes: false,
            ..self.clone()
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn affix_case_sensitive(mut self, value: bool) -> Self {
        self.options.affix_case_sensitive = value;
        self
    }

    pub fn trailing_slash(mut self, value: TrailingSlash) -> Self {
        self.options.trailing_slash = value;
        self
    }

    pub fn cache_routes(mut self, value: bool) -> Self {
        self.options.cache_routes = value;
        self
    }

    pub fn match_cache_capacity(mut self, value: usize) -> Self {
        self.options.match_cache_capacity = value;
        self
    }

    pub fn single_cache_capacity(mut self, value: usize) -> Self {
        self.options.single_cache_capacity = value;
        self
    }

    pub fn resolve_cache_capacity(mut self, value: usize) -> Self {
        self.options.resolve_cache_capacity = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("{field} must be at least 1 (got {provided})")]
    CacheCapacityInvalid {
        field: &'static str,
        provided: usize,
    },
}
