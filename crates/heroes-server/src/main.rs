use clap::Parser;
use std::path::PathBuf;

/// Serves the race resource over REST.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to read.
    #[arg(long, default_value = configuration::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

// The entry point when running `cargo run -p heroes-server`.
// Its only job is to load settings and call `run_server` from the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = configuration::load_config(&cli.config)?;
    let _guard = configuration::init_tracing(&config.logging, "heroes-server")?;

    heroes_server::run_server(&config.server).await
}
