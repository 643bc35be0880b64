use crate::domain::WishRecord;
use crate::domain::errors::SessionError;
use crate::domain::ports::{Clock, WishSource};
use crate::use_cases::load_wishes::{LoadOutcome, WishLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Fetching,
    Normalized,
    Fallback,
}

impl SessionPhase {
    pub fn is_settled(self) -> bool {
        matches!(self, SessionPhase::Normalized | SessionPhase::Fallback)
    }
}

/// Owns the wish list for one page load.
///
/// The list is written exactly once, when the load settles, and is read-only
/// afterwards. A new page load means a new session.
#[derive(Debug)]
pub struct PageSession {
    phase: SessionPhase,
    wishes: Vec<WishRecord>,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            wishes: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    // Settled list, or None while the load is still pending.
    pub fn wishes(&self) -> Option<&[WishRecord]> {
        self.phase.is_settled().then_some(self.wishes.as_slice())
    }

    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::AlreadyStarted);
        }
        self.phase = SessionPhase::Fetching;
        Ok(())
    }

    pub fn settle(&mut self, outcome: LoadOutcome) -> Result<&[WishRecord], SessionError> {
        if self.phase != SessionPhase::Fetching {
            return Err(SessionError::NotFetching);
        }

        self.phase = if outcome.is_fallback() {
            SessionPhase::Fallback
        } else {
            SessionPhase::Normalized
        };
        self.wishes = outcome.into_wishes();
        tracing::debug!(phase = ?self.phase, count = self.wishes.len(), "page session settled.");
        Ok(&self.wishes)
    }

    // Drives Idle -> Fetching -> settled with a single load.
    pub async fn run<S, C>(&mut self, loader: &WishLoader<S, C>) -> Result<&[WishRecord], SessionError>
    where
        S: WishSource,
        C: Clock,
    {
        self.begin()?;
        let outcome = loader.load().await;
        self.settle(outcome)
    }
}
