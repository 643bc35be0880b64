// Fake wish endpoints served by real axum routers on ephemeral ports.
use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    routing::get,
};
use std::collections::HashMap;
use url::Url;

pub const SHEET_BODY: &str = r#"[
    {"Timestamp":"2024-01-01T08:00:00.000Z","Nama":"Ana","Ucapan":"Happy bday!","FotoURL":""},
    {"timestamp":"2024-01-05T08:00:00.000Z","name":"Budi","wish":"Sehat selalu","photoUrl":"https://example.com/budi.jpg"},
    {"Nama":"No Message","Timestamp":"2024-01-03"}
]"#;

// Serve `app` on 127.0.0.1:0 and return its base URL.
pub async fn spawn_router(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake server failed");
    });
    Url::parse(&format!("http://{addr}/")).expect("valid base url")
}

// Form backend answering `/exec` with a fixed status and body.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> Url {
    let app = Router::new().route("/exec", get(move || async move { (status, body) }));
    spawn_router(app).await.join("exec").expect("valid upstream url")
}

// Form backend answering `/exec` with raw bytes, which need not be valid UTF-8.
pub async fn spawn_upstream_bytes(status: StatusCode, body: &'static [u8]) -> Url {
    let app = Router::new().route("/exec", get(move || async move { (status, body) }));
    spawn_router(app).await.join("exec").expect("valid upstream url")
}

// The real wish relay in front of `upstream`; returns its `/api/wishProxy` URL.
pub async fn spawn_wish_relay(upstream: &Url) -> Url {
    let state = relay_server::build_state(upstream.as_str()).expect("relay state should build");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        relay_server::run(listener, state)
            .await
            .expect("relay server failed");
    });
    Url::parse(&format!("http://{addr}/api/wishProxy")).expect("valid relay url")
}

// Public relay stand-in: echoes back `SHEET_BODY` only when asked for `expected_upstream`.
pub async fn spawn_cors_relay(expected_upstream: Url) -> Url {
    let app = Router::new().route(
        "/raw",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let expected = expected_upstream.clone();
            async move {
                match params.get("url") {
                    Some(url) if *url == expected.as_str() => (StatusCode::OK, SHEET_BODY),
                    _ => (StatusCode::BAD_REQUEST, "missing url"),
                }
            }
        }),
    );
    spawn_router(app).await.join("raw").expect("valid relay url")
}

// A URL on a port nothing listens on.
pub async fn closed_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/exec")).expect("valid url")
}
