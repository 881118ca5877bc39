use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid ranking weights: {0}")]
    InvalidWeights(String),

    #[error("failed to parse ranking weights: {0}")]
    WeightsParse(#[from] serde_json::Error),
}
