use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcError {
    #[error("Expected a JSON object, got {kind}")]
    NotARecord { kind: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EcError>;
