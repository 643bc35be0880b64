use chrono::Datelike;
use serde::Serialize;

use crate::domain::WishRecord;

/// Display-ready projection of a wish, one per card on the wish wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishCard {
    // Avatar letter; uppercasing can yield more than one char.
    pub initial: String,
    pub name: String,
    pub message: String,
    // Short day/month/year date, absent when the timestamp does not parse.
    pub display_date: Option<String>,
    pub photo_url: Option<String>,
}

impl WishCard {
    pub fn from_record(record: &WishRecord) -> Self {
        let initial = record
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| "?".to_string());

        // Unpadded d/m/yyyy, matching the id-ID short date the page shows.
        let display_date = record
            .submitted_at()
            .map(|at| format!("{}/{}/{}", at.day(), at.month(), at.year()));

        Self {
            initial,
            name: record.name.clone(),
            message: record.message.clone(),
            display_date,
            photo_url: record.photo_url.clone(),
        }
    }
}
