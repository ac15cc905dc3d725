use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enums::MatchKind;

pub type RouteParams = HashMap<String, String>;

/// Reserved key holding the wildcard remainder.
pub const SPLAT_KEY: &str = "*";
/// Alias of [`SPLAT_KEY`] kept for route-level hooks.
pub const SPLAT_ALIAS_KEY: &str = "_splat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub id: String,
    pub template: String,
    pub case_sensitive: Option<bool>,
}

impl RouteDefinition {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, template: T) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            case_sensitive: None,
        }
    }

    /// Route whose id is its own template, used for masks and ad-hoc `from` bases.
    pub fn from_template<T: Into<String>>(template: T) -> Self {
        let template = template.into();
        Self {
            id: template.clone(),
            template,
            case_sensitive: None,
        }
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub route_id: String,
    pub template: String,
    pub params: RouteParams,
    pub kind: MatchKind,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn splat(&self) -> Option<&str> {
        self.param(SPLAT_KEY)
    }
}
