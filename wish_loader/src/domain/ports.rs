use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::LoadError;
use crate::domain::WishCard;

// Port for the single outbound request that returns the raw wish list body.
#[async_trait]
pub trait WishSource: Send + Sync {
    async fn fetch(&self) -> Result<String, LoadError>;

    // Where the request goes, for diagnostics.
    fn describe(&self) -> String;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// Port for the rendering layer that displays settled wishes.
pub trait WishRenderer {
    fn render(&self, cards: &[WishCard]) -> std::io::Result<()>;
}
