/// Catalog-specific errors
use thiserror::Error;

/// Result type alias using `CatalogError`
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<CatalogError> for aria_core::AriaError {
    fn from(err: CatalogError) -> Self {
        aria_core::AriaError::storage(err.to_string())
    }
}
