use thiserror::Error;

// Why a response body could not be read as a wish array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("response body is empty")]
    EmptyBody,
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("response body is not a JSON array")]
    NotAnArray,
}

// Recoverable failures while loading wishes; the loader swaps in fallback data for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("wish source responded with status {status}")]
    UpstreamStatus { status: u16 },
    #[error("parse error: {0}")]
    Parse(#[from] ParseFailure),
    // The spawned load task panicked or was cancelled before settling.
    #[error("load task failed: {0}")]
    Task(String),
}

// Page session transitions that are not allowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("page session already started")]
    AlreadyStarted,
    #[error("page session is not fetching")]
    NotFetching,
}
