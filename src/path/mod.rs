mod codec;
mod interpolate;
mod resolve;

pub use codec::{decode_component, encode_component, encode_splat};
pub use interpolate::{InterpolatedPath, MISSING_PARAM_PLACEHOLDER, interpolate_path};
pub use resolve::resolve_path;
