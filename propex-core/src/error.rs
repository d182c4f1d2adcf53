use bigdecimal::BigDecimal;
use thiserror::Error;

/// Error taxonomy for the catalog core.
///
/// Validation failures (`InvalidRange`, `InvalidFilter`, `MalformedId`) are
/// detected before any store round-trip and short-circuit the request.
/// Store failures propagate unchanged; they are never retried here and never
/// replaced by an empty result. "Not found" is not an error anywhere in this
/// crate - lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("minPrice {min} cannot be greater than maxPrice {max}")]
    InvalidRange { min: BigDecimal, max: BigDecimal },

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("invalid identifier: {0}")]
    MalformedId(String),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<propex_model::ModelError> for CatalogError {
    fn from(err: propex_model::ModelError) -> Self {
        match err {
            propex_model::ModelError::InvalidId(msg) => {
                CatalogError::MalformedId(msg)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
