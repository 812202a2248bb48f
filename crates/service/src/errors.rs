use thiserror::Error;

use crate::lms::repository::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// The record still exists but changed underneath the update. Fatal for the request.
    #[error("concurrency conflict: {0}")]
    Concurrency(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Human readable detail without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::BadRequest(m)
            | ServiceError::NotFound(m)
            | ServiceError::Conflict(m)
            | ServiceError::Concurrency(m)
            | ServiceError::Unavailable(m)
            | ServiceError::Db(m) => m.clone(),
            ServiceError::Model(e) => e.to_string(),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(m) => ServiceError::Unavailable(m),
            StoreError::Concurrency(m) => ServiceError::Concurrency(m),
            StoreError::Duplicate(m) => ServiceError::Conflict(m),
            StoreError::ForeignKey(m) => ServiceError::BadRequest(m),
            StoreError::Db(m) => ServiceError::Db(m),
        }
    }
}
