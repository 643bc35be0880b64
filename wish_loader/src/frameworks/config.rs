use crate::domain::FetchRoute;
use std::{env, time::Duration};
use url::{ParseError, Url};

// Runtime constants for the loader; env vars override the compiled-in defaults.

// Apps Script deployment backing the wish form.
pub const DEFAULT_UPSTREAM_URL: &str = "https://script.google.com/macros/s/AKfycbw-zxUvQCudVOFeHrTaMw5rMi4tbtV7O24vn_G7iOI19kxVRyT1f8dqG4Z5bwjfa13aIQ/exec";
pub const DEFAULT_CORS_RELAY_BASE: &str = "https://api.allorigins.win/raw";
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000/api/wishProxy";

pub fn upstream_url() -> Result<Url, ParseError> {
    Url::parse(&env::var("WISH_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()))
}

pub fn fetch_route() -> Result<FetchRoute, ParseError> {
    let cors_base =
        env::var("CORS_RELAY_BASE").unwrap_or_else(|_| DEFAULT_CORS_RELAY_BASE.to_string());
    let relay_url = env::var("WISH_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    parse_route(
        env::var("WISH_FETCH_ROUTE").ok().as_deref(),
        &cors_base,
        &relay_url,
    )
}

pub fn fetch_timeout() -> Option<Duration> {
    env::var("WISH_FETCH_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

// Unknown route names fall back to a direct call.
pub fn parse_route(
    name: Option<&str>,
    cors_base: &str,
    relay_url: &str,
) -> Result<FetchRoute, ParseError> {
    match name.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("direct") => Ok(FetchRoute::Direct),
        Some("cors-relay") => Ok(FetchRoute::CorsRelay {
            base: Url::parse(cors_base)?,
        }),
        Some("relay") => Ok(FetchRoute::OwnRelay {
            url: Url::parse(relay_url)?,
        }),
        Some(other) => {
            tracing::warn!(route = other, "unknown WISH_FETCH_ROUTE, using direct.");
            Ok(FetchRoute::Direct)
        }
    }
}
