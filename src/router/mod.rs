mod errors;
mod options;
mod readonly;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use readonly::RouterReadOnly;
pub use service::Router;
