//! Shopnotes Entry Point

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shopnotes::config::Config;
use shopnotes::shell;

fn init_tracing() {
    // Logs go to stderr; stdout belongs to the shell.
    let filter = EnvFilter::try_from_env("SHOPNOTES_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(db = %config.db_path.display(), "starting shopnotes");

    shell::run(&config).await
}
