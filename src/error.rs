#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query, validation or administrative call was refused by the service.
    #[error("{0}")]
    Service(String),

    #[error("Connection error: {0}")]
    Connectivity(String),

    #[error("another command is executing")]
    Busy,

    #[error("Query worker has stopped")]
    WorkerStopped,

    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid result type: {0}")]
    InvalidType(String),

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Errors the user can act on. Anything else is a bug in the editor.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Service(_) | Error::Connectivity(_))
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;
