use serde::Serialize;

use super::codec::{encode_component, encode_splat};
use crate::pattern::{Segment, parse_template};
use crate::types::{RouteParams, SPLAT_ALIAS_KEY, SPLAT_KEY};

/// Written in place of a required param that was not supplied.
pub const MISSING_PARAM_PLACEHOLDER: &str = "undefined";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpolatedPath {
    pub path: String,
    /// Params that were consumed, with their unencoded values.
    pub used_params: RouteParams,
    pub is_missing_params: bool,
}

/// Fills `template` with `params`.
///
/// Required params are percent-encoded; a missing one still renders as
/// `undefined` so the path stays well formed, and `is_missing_params` is set.
/// Optional params without a value vanish together with their prefix and
/// suffix. The splat keeps its `/` separators and is read from `_splat`
/// first, then `*`.
pub fn interpolate_path(template: &str, params: &RouteParams) -> InterpolatedPath {
    let mut pieces: Vec<String> = Vec::new();
    let mut used_params = RouteParams::new();
    let mut is_missing_params = false;

    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => pieces.push(text.to_string()),
            Segment::Index => pieces.push(String::new()),
            Segment::Param {
                name,
                prefix,
                suffix,
            } => {
                let value = match params.get(name) {
                    Some(value) => {
                        used_params.insert(name.to_string(), value.clone());
                        encode_component(value)
                    }
                    None => {
                        is_missing_params = true;
                        MISSING_PARAM_PLACEHOLDER.to_string()
                    }
                };
                pieces.push(format!("{prefix}{value}{suffix}"));
            }
            Segment::OptionalParam {
                name,
                prefix,
                suffix,
            } => {
                if let Some(value) = params.get(name) {
                    used_params.insert(name.to_string(), value.clone());
                    pieces.push(format!("{prefix}{}{suffix}", encode_component(value)));
                }
            }
            Segment::Wildcard { prefix, suffix } => {
                let splat = params
                    .get(SPLAT_ALIAS_KEY)
                    .or_else(|| params.get(SPLAT_KEY))
                    .filter(|value| !value.is_empty());
                match splat {
                    Some(value) => {
                        used_params.insert(SPLAT_KEY.to_string(), value.clone());
                        used_params.insert(SPLAT_ALIAS_KEY.to_string(), value.clone());
                        pieces.push(format!("{prefix}{}{suffix}", encode_splat(value)));
                    }
                    None => {
                        is_missing_params = true;
                        if !prefix.is_empty() || !suffix.is_empty() {
                            pieces.push(format!("{prefix}{suffix}"));
                        }
                    }
                }
            }
        }
    }

    let mut path = pieces.join("/");
    if template.starts_with('/') {
        path.insert(0, '/');
    }

    InterpolatedPath {
        path,
        used_params,
        is_missing_params,
    }
}
