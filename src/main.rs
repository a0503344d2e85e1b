use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ci_slack_notify::cli::run().await
}
