use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn operation_failed(msg: impl Into<String>) -> Self { Self::OperationFailed(msg.into()) }

    /// True for outcomes the caller caused (missing record, rejected write),
    /// false for infrastructure faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::OperationFailed(_))
    }
}
