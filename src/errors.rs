#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no worker selected")]
    NoWorkerSelected,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
