//! Checks shared by the three services.

use std::future::Future;

use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::lms::repository::StoreError;

/// The identity in the path must match the identity in the body.
pub(crate) fn ensure_same_id(entity: &str, path_id: i32, body_id: i32) -> Result<(), ServiceError> {
    if path_id != body_id {
        return Err(ServiceError::BadRequest(format!("{entity} id mismatch: path {path_id}, body {body_id}")));
    }
    Ok(())
}

/// Resolve the outcome of an update.
///
/// A concurrency fault on a record that no longer exists becomes `NotFound`;
/// on a record that still exists it stays a fatal `Concurrency` error.
pub(crate) async fn resolve_update<T, F, Fut>(
    entity: &str,
    id: i32,
    outcome: Result<T, StoreError>,
    still_exists: F,
) -> Result<T, ServiceError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, ServiceError>>,
{
    match outcome {
        Ok(updated) => Ok(updated),
        Err(StoreError::Concurrency(detail)) => {
            if still_exists().await? {
                warn!(entity, id, %detail, "concurrency conflict on a live record");
                Err(ServiceError::Concurrency(detail))
            } else {
                debug!(entity, id, "record vanished during update");
                Err(ServiceError::not_found(entity))
            }
        }
        Err(other) => Err(other.into()),
    }
}
