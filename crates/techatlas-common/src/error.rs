use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    /// Weight value rejected at the store boundary (non-finite or negative).
    #[error("Invalid weight for '{key}': {value}")]
    InvalidWeight { key: String, value: f64 },

    /// Dataset snapshot could not be parsed.
    #[error("Dataset parse error: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// Dataset snapshot parsed but yielded no usable rows.
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
