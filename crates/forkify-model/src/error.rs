use thiserror::Error;

/// Errors surfaced by model operations
#[derive(Debug, Error)]
pub enum ModelError {
    /// Request failed or the API answered with a non-success status
    #[error("{0}")]
    Gateway(String),

    #[error("Request took too long! Timeout after {0} seconds")]
    Timeout(u64),

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),

    #[error("No recipe is loaded")]
    NoRecipeLoaded,

    #[error("Invalid servings: {0}")]
    InvalidServings(u32),
}

impl ModelError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation(_))
    }
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
