//! Error types for coloring
//!
//! Every variant here is a configuration or startup error. Tagging a
//! block never fails.

use thiserror::Error;

/// Result type alias for coloring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration and I/O errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern for `{name}`: {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{name}` has no capture group {index}")]
    MissingCapture { name: String, index: usize },

    #[error("delimiter of region `{0}` can match the empty string")]
    EmptyDelimiter(String),

    #[error("region `{0}` must use a non-zero state id")]
    ZeroStateId(String),

    #[error("language `{language}` declares state id {state_id} twice")]
    DuplicateStateId { language: String, state_id: u8 },

    #[error("unknown token category: {0}")]
    UnknownCategory(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}
