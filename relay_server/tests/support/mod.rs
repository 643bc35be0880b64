// Shared helpers for starting real servers on ephemeral ports inside a test runtime.
use axum::{Router, http::StatusCode, routing::get};

// Serve `app` on 127.0.0.1:0 and return its base URL.
pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake server failed");
    });
    format!("http://{addr}")
}

// Fake form backend answering `/exec` with a fixed status and body.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/exec", get(move || async move { (status, body) }));
    format!("{}/exec", spawn_router(app).await)
}

// Start the relay pointed at `upstream_url` and return its base URL.
pub async fn spawn_relay(upstream_url: &str) -> String {
    let state = relay_server::build_state(upstream_url).expect("relay state should build");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        relay_server::run(listener, state)
            .await
            .expect("relay server failed");
    });
    format!("http://{addr}")
}
