use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid JSON data: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid ffuf output format: missing `results` array")]
    MissingResults,
}

pub type Result<T> = std::result::Result<T, TreeError>;
