use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
