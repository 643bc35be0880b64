use chrono::SecondsFormat;

use crate::domain::WishRecord;
use crate::domain::errors::LoadError;
use crate::domain::ports::{Clock, WishSource};
use crate::use_cases::normalize::{normalize_wishes, parse_wish_array, sort_newest_first};

pub const FALLBACK_NAME: &str = "Example Friend";
pub const FALLBACK_MESSAGE: &str = "Happy 17th Birthday! Semoga selalu bahagia dan sukses! 🎉💜";

// Result of one load attempt. Neither variant is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<WishRecord>),
    Fallback {
        wishes: Vec<WishRecord>,
        reason: LoadError,
    },
}

impl LoadOutcome {
    pub fn wishes(&self) -> &[WishRecord] {
        match self {
            LoadOutcome::Loaded(wishes) | LoadOutcome::Fallback { wishes, .. } => wishes,
        }
    }

    pub fn into_wishes(self) -> Vec<WishRecord> {
        match self {
            LoadOutcome::Loaded(wishes) | LoadOutcome::Fallback { wishes, .. } => wishes,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }
}

// Placeholder shown when live wishes cannot be retrieved, so the wall is never empty.
pub fn fallback_wishes(clock: &dyn Clock) -> Vec<WishRecord> {
    vec![WishRecord {
        timestamp: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        name: FALLBACK_NAME.to_string(),
        message: FALLBACK_MESSAGE.to_string(),
        photo_url: None,
    }]
}

// Wish loader use case with injected dependencies.
pub struct WishLoader<S, C> {
    pub source: S,
    pub clock: C,
}

impl<S, C> WishLoader<S, C>
where
    S: WishSource,
    C: Clock,
{
    // One fetch, no retry. Failures are logged and replaced by the fallback list.
    #[tracing::instrument(name = "load_wishes", skip_all, fields(source = %self.source.describe()))]
    pub async fn load(&self) -> LoadOutcome {
        match self.fetch_sorted().await {
            Ok(wishes) => {
                tracing::info!(count = wishes.len(), "wishes loaded.");
                LoadOutcome::Loaded(wishes)
            }
            Err(reason) => {
                tracing::error!(error = %reason, "failed to load wishes, using fallback.");
                LoadOutcome::Fallback {
                    wishes: fallback_wishes(&self.clock),
                    reason,
                }
            }
        }
    }

    async fn fetch_sorted(&self) -> Result<Vec<WishRecord>, LoadError> {
        let body = self.source.fetch().await?;
        let items = parse_wish_array(&body)?;

        let mut wishes = normalize_wishes(items);
        sort_newest_first(&mut wishes);
        Ok(wishes)
    }
}
