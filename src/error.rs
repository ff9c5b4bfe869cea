#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Card already requested: {0}")]
    DuplicateCard(String),

    #[error("Too many cards requested (limit {limit})")]
    TooManyCards { limit: usize },

    #[error("Seller search failed: {0}")]
    Search(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;
