use clap::{Parser, Subcommand};
use configuration::LogFormat;
use core_types::{Pagination, RecordId};
use heroes_admin::loading::with_spinner;
use heroes_admin::{Route, TerminalNotifier, assemble, browse};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// The main entry point for the Heroes admin.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from an optional .env file (e.g. RUST_LOG).
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.validate()?;
    let _guard = configuration::init_tracing(&config.logging, "heroes-admin")?;

    let mut navigator = assemble(&config, Arc::new(TerminalNotifier))?;

    // Execute the appropriate command
    match cli.command {
        Commands::List(args) => {
            let page_size = args.page_size.unwrap_or(config.pagination.page_size);
            navigator.set_pagination(Pagination::new(args.page, page_size)?);
            with_spinner("Loading races...", navigator.navigate(Route::Listing)).await;
        }
        Commands::Show(args) => {
            with_spinner("Loading race...", navigator.open(RecordId::new(args.id))).await;
        }
        Commands::Browse => {
            browse::run(&mut navigator).await?;
            return Ok(ExitCode::SUCCESS);
        }
    }

    print!("{}", navigator.render());
    Ok(if navigator.has_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Lists and shows races from a heroes REST store.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file to read.
    #[arg(long, global = true, default_value = configuration::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Base address of the REST store; overrides `api.base_url`.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log output style; overrides `logging.format`.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of races as a table.
    List(ListArgs),
    /// Show a single race.
    Show(ShowArgs),
    /// Move between the list and race pages interactively.
    Browse,
}

#[derive(Parser)]
struct ListArgs {
    /// Page to show, starting at 1.
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Races per page; defaults to `pagination.page_size`.
    #[arg(long)]
    page_size: Option<u32>,
}

#[derive(Parser)]
struct ShowArgs {
    /// Id of the race to show.
    id: String,
}
