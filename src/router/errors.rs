use super::RouterOptionsError;
use crate::tree::TreeError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{id}'")]
    AddWhileSealed { id: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is already sealed")]
    AlreadySealed,
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

pub type RouterResult<T> = Result<T, RouterError>;
