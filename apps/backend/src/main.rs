#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_drill_backend::run().await
}
