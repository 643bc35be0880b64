use serde::Serialize;

// Generic failure message; upstream details stay in the logs.
pub const RELAY_FAILURE_MESSAGE: &str = "Failed to fetch from upstream";

// Error envelope returned when the relay cannot serve the upstream body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
