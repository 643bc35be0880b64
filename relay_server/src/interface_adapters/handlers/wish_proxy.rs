use crate::interface_adapters::protocol::{ErrorResponse, RELAY_FAILURE_MESSAGE};
use crate::interface_adapters::state::AppState;
use crate::use_cases::relay_wishes::{RelayError, RelayWishesUseCase};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[tracing::instrument(name = "wish_proxy", skip_all)]
pub async fn wish_proxy(State(state): State<Arc<AppState>>) -> Result<Response, RelayError> {
    let use_case = RelayWishesUseCase {
        feed: state.upstream.as_ref(),
    };

    let body = use_case.execute().await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to relay wishes.");
    })?;

    tracing::info!(bytes = body.len(), "wishes relayed.");

    // Browsers call this from the page origin, so the body must be readable cross-origin.
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response())
}

// Every relay failure collapses to the same generic 500 for the caller.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: RELAY_FAILURE_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
