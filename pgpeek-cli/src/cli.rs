//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// pgpeek - Inspect a PostgreSQL database from the command line
#[derive(Parser, Debug)]
#[command(name = "pgpeek")]
#[command(version)]
#[command(about = "pgpeek - Inspect a PostgreSQL database from the command line", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database connection URL (overrides the config file)
    #[arg(long, global = true, env = "POSTGRES_URL", hide_env_values = true)]
    pub url: Option<String>,

    /// Path to a config file (.toml or .json)
    #[arg(long, global = true, env = "PGPEEK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display database connection information
    Db(DbArgs),

    /// List all tenants in the database
    Tenants,

    /// List all roles in the database
    Roles,

    /// List all users in the database
    Users,

    /// Show the loaded configuration
    Config(ConfigArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Db Command
// =============================================================================

/// Arguments for the `db` command
#[derive(Args, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: Option<DbSubcommand>,

    /// Only show the properties parsed from the connection URL
    #[arg(long)]
    pub no_connect: bool,
}

/// Db subcommands
#[derive(Subcommand, Debug)]
pub enum DbSubcommand {
    /// List all tables in the database
    Tables(DbTablesArgs),
}

/// Arguments for `db tables`
#[derive(Args, Debug)]
pub struct DbTablesArgs {
    /// Schema to list tables from
    #[arg(short, long, default_value = "public")]
    pub schema: String,
}

// =============================================================================
// Config Command
// =============================================================================

/// Arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show a single setting
    #[arg(short, long)]
    pub key: Option<String>,

    /// Print settings as a JSON object
    #[arg(long, conflicts_with = "key")]
    pub json: bool,

    /// Show passwords embedded in URLs
    #[arg(long)]
    pub show_secrets: bool,
}
