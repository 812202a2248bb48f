use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

/// Identities are caller-assigned and must be positive.
pub fn validate_id(entity: &str, id: i32) -> Result<(), ModelError> {
    if id <= 0 {
        return Err(ModelError::Validation(format!("{entity} id must be a positive integer")));
    }
    Ok(())
}
