use std::{
    env,
    net::{IpAddr, Ipv4Addr},
    time::Duration,
};

// Runtime/server constants for the relay.

// Apps Script deployment backing the wish form.
pub const DEFAULT_UPSTREAM_URL: &str = "https://script.google.com/macros/s/AKfycbx5hF5eJUNYhJ1ZIXe4V5J5-GfPmg-pckfbwDQdI_onHCRihuSfOnyaUq7vmK19xwIO2w/exec";

pub fn http_port() -> u16 {
    env::var("RELAY_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn bind_addr() -> IpAddr {
    env::var("RELAY_BIND_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn upstream_url() -> String {
    env::var("WISH_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string())
}

// Unset keeps reqwest's default, i.e. no explicit request timeout.
pub fn upstream_timeout() -> Option<Duration> {
    env::var("UPSTREAM_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}
