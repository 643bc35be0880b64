mod upstream;

// Re-export the domain boundary types and ports.
pub use upstream::{UpstreamError, UpstreamFeed};
