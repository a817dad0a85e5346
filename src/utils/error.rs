use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Lookup failed: {message}")]
    LookupError { message: String },

    #[error("Duplicate meter id: {id}")]
    DuplicateMeterError { id: String },

    #[error("Unknown query operation: {name}")]
    UnknownOperationError { name: String },

    #[error("Operation {operation} requires argument '{argument}'")]
    MissingArgumentError {
        operation: String,
        argument: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
