//! pgpeek - Command-line inspection of a PostgreSQL database.

use clap::Parser;

use pgpeek_cli::cli::{Cli, Command};
use pgpeek_cli::commands;
use pgpeek_cli::config::Config;
use pgpeek_cli::error::CliResult;
use pgpeek_cli::inspect;
use pgpeek_cli::logging;
use pgpeek_cli::output;

#[tokio::main]
async fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration before logging so `debug = true` takes effect
    let cwd = std::env::current_dir()?;
    let mut loaded = Config::resolve(cli.config.as_deref(), &cwd)?;
    loaded.config = loaded.config.with_url_override(cli.url);

    logging::init(cli.verbose, loaded.config.debug);
    tracing::debug!(config = ?loaded.path, "Configuration resolved");

    // Run the appropriate command
    match cli.command {
        Command::Db(args) => commands::db::run(args, &loaded.config).await,
        Command::Tenants => {
            let inspector = inspect::connect(loaded.config.require_url()?).await?;
            commands::tenants::run(&inspector).await
        }
        Command::Roles => {
            let inspector = inspect::connect(loaded.config.require_url()?).await?;
            commands::roles::run(&inspector).await
        }
        Command::Users => {
            let inspector = inspect::connect(loaded.config.require_url()?).await?;
            commands::users::run(&inspector).await
        }
        Command::Config(args) => commands::config::run(args, &loaded).await,
        Command::Version => commands::version::run().await,
    }
}
