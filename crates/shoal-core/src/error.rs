use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A cost token outside the closed vocabulary. Fatal for the whole pass.
    #[error("line {line}: unknown cost token '{token}'")]
    UnknownCostToken { token: String, line: usize },

    /// A cost item that is not of the form `TAG=TOKEN`.
    #[error("line {line}: malformed cost item '{item}', expected TAG=TOKEN")]
    MalformedCostItem { item: String, line: usize },

    /// An access record whose cost descriptor holds nothing past the marker.
    #[error("line {line}: access to '{array}' carries no cost tokens")]
    EmptyCostProduct { array: String, line: usize },

    #[error("Failed to replace {}: {source}", .path.display())]
    HeaderPersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Raised by the vocabulary lookup before a line number is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cost token '{0}'")]
pub struct UnknownToken(pub String);
