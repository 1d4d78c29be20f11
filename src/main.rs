use clap::Parser;

use homework_bot_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = std::env::var("HOMEWORK_BOT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = Config::parse();
    homework_bot_lib::run(config).await
}
