// Framework bootstrap for the relay runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::UpstreamClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn build_state(upstream_url: &str) -> Result<Arc<AppState>> {
    let url = Url::parse(upstream_url)
        .map_err(|e| std::io::Error::other(format!("invalid upstream url: {e}")))?;
    let timeout = config::upstream_timeout();
    let upstream = UpstreamClient::new(url, timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize upstream client: {e}")))?;
    tracing::debug!(
        upstream_url = %upstream.url,
        timeout_ms = timeout.map(|t| t.as_millis()),
        "upstream client configured."
    );

    Ok(Arc::new(AppState {
        upstream: Arc::new(upstream),
    }))
}

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let state = build_state(&config::upstream_url()).inspect_err(|e| {
        tracing::error!(error = %e, "failed to build relay state");
    })?;

    let address = SocketAddr::new(config::bind_addr(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}
