#[tokio::main]
async fn main() -> std::io::Result<()> {
    relay_server::frameworks::server::run_with_config().await
}
