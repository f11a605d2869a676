use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Unknown actor '{name}' referenced by {referenced_by}")]
    UnknownActor { referenced_by: String, name: String },

    #[error("Unknown region '{name}' referenced by {referenced_by}")]
    UnknownRegion { referenced_by: String, name: String },

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WarError>;
