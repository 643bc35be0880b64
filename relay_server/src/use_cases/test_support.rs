use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Bytes;

use crate::domain::{UpstreamError, UpstreamFeed};

// Feed that replays one scripted result and counts how often it was asked.
pub(crate) struct ScriptedFeed {
    result: Mutex<Option<Result<Bytes, UpstreamError>>>,
    calls: AtomicUsize,
}

impl ScriptedFeed {
    pub(crate) fn body(body: &str) -> Self {
        Self::with_result(Ok(Bytes::copy_from_slice(body.as_bytes())))
    }

    pub(crate) fn failing(err: UpstreamError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<Bytes, UpstreamError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamFeed for ScriptedFeed {
    async fn fetch(&self) -> Result<Bytes, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.result.lock().expect("feed mutex poisoned");
        guard
            .take()
            .unwrap_or_else(|| Err(UpstreamError::Transport("feed already drained".into())))
    }
}
