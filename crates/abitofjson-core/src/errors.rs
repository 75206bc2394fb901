//! Error types for the fetch pipeline
//!
//! One enum covers every stage of the pipeline. Most callers never see these
//! values directly: the log-and-abandon wrappers in [`crate::http`],
//! [`crate::parser`] and [`crate::screen`] turn them into log lines and empty
//! results. They surface only from the fallible building blocks and from
//! configuration loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Error response code: {0}")]
    Status(u16),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parsing(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}
