use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::errors::LoadError;
use crate::domain::ports::{Clock, WishSource};

// Shared instant for deterministic fallback timestamps.
pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 17, 9, 0, 0).unwrap()
}

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Source that replays one scripted response and counts requests.
pub(crate) struct ScriptedSource {
    response: Mutex<Option<Result<String, LoadError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn body(body: &str) -> Self {
        Self::with_response(Ok(body.to_string()))
    }

    pub(crate) fn failing(err: LoadError) -> Self {
        Self::with_response(Err(err))
    }

    fn with_response(response: Result<String, LoadError>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WishSource for ScriptedSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.response.lock().expect("response mutex poisoned");
        guard
            .take()
            .unwrap_or_else(|| Err(LoadError::Network("source already drained".to_string())))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
