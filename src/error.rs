use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("View registry has no entries")]
    EmptyRegistry,

    #[error("Duplicate view id: {0}")]
    DuplicateViewId(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}
