// Framework bootstrap for one page session.

use crate::domain::WishCard;
use crate::domain::errors::LoadError;
use crate::domain::ports::{Clock, WishRenderer, WishSource};
use crate::frameworks::config;
use crate::interface_adapters::clients::HttpWishSource;
use crate::interface_adapters::clock::SystemClock;
use crate::interface_adapters::renderer::ConsoleRenderer;
use crate::use_cases::{LoadOutcome, PageSession, WishLoader, fallback_wishes};
use std::io::Result;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays reserved for rendered cards.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn build_loader() -> Result<WishLoader<HttpWishSource, SystemClock>> {
    let upstream = config::upstream_url()
        .map_err(|e| std::io::Error::other(format!("invalid upstream url: {e}")))?;
    let route = config::fetch_route()
        .map_err(|e| std::io::Error::other(format!("invalid fetch route url: {e}")))?;
    let timeout = config::fetch_timeout();

    let source = HttpWishSource::new(&route, &upstream, timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize wish client: {e}")))?;
    tracing::debug!(
        route = route.label(),
        target = %source.target(),
        timeout_ms = timeout.map(|t| t.as_millis()),
        "wish source configured."
    );

    Ok(WishLoader {
        source,
        clock: SystemClock,
    })
}

// Loads once on a dedicated task, settles the session and hands the cards to `renderer`.
pub async fn load_and_render<S, C, R>(loader: WishLoader<S, C>, renderer: &R) -> Result<PageSession>
where
    S: WishSource + 'static,
    C: Clock + 'static,
    R: WishRenderer,
{
    let loader = Arc::new(loader);
    let mut session = PageSession::new();
    session.begin().map_err(std::io::Error::other)?;

    let task = tokio::spawn({
        let loader = Arc::clone(&loader);
        async move { loader.load().await }
    });

    // A panicked task is just another recoverable failure.
    let outcome = task.await.unwrap_or_else(|err| {
        let reason = LoadError::Task(err.to_string());
        tracing::error!(error = %reason, "wish load task failed, using fallback.");
        LoadOutcome::Fallback {
            wishes: fallback_wishes(&loader.clock),
            reason,
        }
    });

    let wishes = session.settle(outcome).map_err(std::io::Error::other)?;
    let cards: Vec<WishCard> = wishes.iter().map(WishCard::from_record).collect();
    renderer.render(&cards)?;
    Ok(session)
}

pub async fn run() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let loader = build_loader().inspect_err(|e| {
        tracing::error!(error = %e, "failed to configure wish loader");
    })?;

    let session = load_and_render(loader, &ConsoleRenderer::stdout()).await?;
    tracing::info!(phase = ?session.phase(), "page session finished.");
    Ok(())
}
