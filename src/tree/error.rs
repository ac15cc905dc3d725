use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate route id '{id}' in route registration")]
    DuplicateRouteId { id: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
