use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::errors::{LoadError, ParseFailure};
use crate::domain::{CanonicalField, WishRecord, parse_timestamp};

// Reads a response body as the raw array of wish-like objects.
pub fn parse_wish_array(body: &str) -> Result<Vec<Value>, LoadError> {
    if body.trim().is_empty() {
        return Err(ParseFailure::EmptyBody.into());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|err| ParseFailure::InvalidJson(err.to_string()))?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ParseFailure::NotAnArray.into()),
    }
}

// Maps one upstream object onto the canonical record, whatever its key casing.
// Returns None for non-objects and for objects missing a required field.
pub fn normalize_record(value: &Value) -> Option<WishRecord> {
    let object = value.as_object()?;
    let fields: HashMap<String, &Value> = object
        .iter()
        .map(|(key, value)| (key.trim().to_lowercase(), value))
        .collect();

    let lookup = |field: CanonicalField| {
        field
            .aliases()
            .iter()
            .find_map(|alias| fields.get(*alias).and_then(|value| field_text(value)))
    };

    Some(WishRecord {
        timestamp: lookup(CanonicalField::Timestamp)?,
        name: lookup(CanonicalField::Name)?,
        message: lookup(CanonicalField::Message)?,
        photo_url: lookup(CanonicalField::PhotoUrl).filter(|url| !url.is_empty()),
    })
}

// Sheets-backed sources may hand back numbers or booleans in text columns.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn normalize_wishes(items: Vec<Value>) -> Vec<WishRecord> {
    let total = items.len();
    let wishes: Vec<WishRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = normalize_record(item);
            if record.is_none() {
                tracing::warn!(index, "dropping wish with missing required fields.");
            }
            record
        })
        .collect();

    if wishes.len() < total {
        tracing::debug!(total, kept = wishes.len(), "normalized wish list.");
    }
    wishes
}

// Newest first; unparseable timestamps sink to the end. Stable for equal times.
pub fn sort_newest_first(wishes: &mut [WishRecord]) {
    wishes.sort_by_key(|wish| {
        Reverse(parse_timestamp(&wish.timestamp).unwrap_or(DateTime::<Utc>::MIN_UTC))
    });
}
