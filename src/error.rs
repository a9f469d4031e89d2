// src/error.rs
use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("element not found: {context}")]
    MissingElement { context: String },

    #[error("{context} has no `{attr}` attribute")]
    MissingAttribute { context: &'static str, attr: &'static str },

    #[error("could not read {field} from {value:?}")]
    BadValue { field: &'static str, value: String },

    #[error("bout reports {rounds} rounds; only 1..={max} are tracked")]
    RoundsOutOfRange { rounds: usize, max: usize },

    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn missing(context: impl Into<String>) -> Self {
        ScrapeError::MissingElement { context: context.into() }
    }

    pub fn bad_value(field: &'static str, value: impl Into<String>) -> Self {
        ScrapeError::BadValue { field, value: value.into() }
    }

    /// Short, stable label for run-report aggregation.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Client(_) => "client",
            ScrapeError::Transport { .. } => "transport",
            ScrapeError::Status { .. } => "http status",
            ScrapeError::MissingElement { .. } => "missing element",
            ScrapeError::MissingAttribute { .. } => "missing attribute",
            ScrapeError::BadValue { .. } => "bad value",
            ScrapeError::RoundsOutOfRange { .. } => "rounds out of range",
            ScrapeError::Selector { .. } => "selector",
            ScrapeError::Io(_) => "io",
        }
    }
}
