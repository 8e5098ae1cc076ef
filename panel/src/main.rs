#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    panel::host::run().await
}
