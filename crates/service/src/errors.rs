use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] models::errors::ModelError),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid fixtures: {0}")]
    Fixture(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}
