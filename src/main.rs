#[tokio::main]
async fn main() -> std::io::Result<()> {
    millwright::run_with_config().await
}
