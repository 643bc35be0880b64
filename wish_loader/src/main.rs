#[tokio::main]
async fn main() -> std::io::Result<()> {
    wish_loader::run().await
}
