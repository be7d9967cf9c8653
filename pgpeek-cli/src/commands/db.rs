//! `pgpeek db` commands - Connection information and table listing.

use pgpeek_conn::ConnectionFields;
use tracing::info;

use crate::cli::{DbArgs, DbSubcommand};
use crate::config::Config;
use crate::error::CliResult;
use crate::inspect::{self, Inspector, ServerInfo, TableRow};
use crate::output::{self, TextTable, kv};

/// Run the db command
pub async fn run(args: DbArgs, config: &Config) -> CliResult<()> {
    let url = config.require_url()?;

    match args.command {
        Some(DbSubcommand::Tables(tables_args)) => {
            let inspector = inspect::connect(url).await?;
            run_tables(&inspector, &tables_args.schema).await
        }
        None if args.no_connect => {
            print_connection_properties(url);
            Ok(())
        }
        None => {
            let inspector = inspect::connect(url).await?;
            run_info(&inspector, url).await
        }
    }
}

/// Run `pgpeek db` - Print server metadata and connection string properties
pub async fn run_info<I: Inspector>(inspector: &I, url: &str) -> CliResult<()> {
    let info = inspector.server_info().await;

    output::header("Database Connection Information");
    for (label, value) in server_info_lines(&info) {
        kv(label, value);
    }
    output::newline();

    print_connection_properties(url);
    Ok(())
}

/// Run `pgpeek db tables` - List the tables of a schema
pub async fn run_tables<I: Inspector>(inspector: &I, schema: &str) -> CliResult<()> {
    info!(schema, "Listing tables");
    let rows = inspector.tables(schema).await?;
    print!("{}", render_tables(schema, &rows));
    Ok(())
}

/// Label/value pairs for the metadata that could be read
pub fn server_info_lines(info: &ServerInfo) -> Vec<(&'static str, &str)> {
    [
        ("Database Name", &info.database),
        ("Database Version", &info.version),
        ("Connected User", &info.user),
        ("Server Encoding", &info.encoding),
        ("Timezone", &info.timezone),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
    .collect()
}

/// Label/value pairs parsed from the connection string
pub fn connection_properties(url: &str) -> [(&'static str, &str); 3] {
    let fields = ConnectionFields::extract(url);
    [
        ("SSL Mode", fields.ssl_mode),
        ("Host", fields.host),
        ("Port", fields.port),
    ]
}

fn print_connection_properties(url: &str) {
    output::section("Connection String Properties");
    for (label, value) in connection_properties(url) {
        kv(label, value);
    }
}

/// Render the table listing
pub fn render_tables(schema: &str, rows: &[TableRow]) -> String {
    let mut table = TextTable::new(&[("SCHEMA", 20), ("TABLE NAME", 30), ("COLUMNS", 0)], 60);
    for row in rows {
        table.push_row([
            row.schema.clone(),
            row.name.clone(),
            row.column_count.to_string(),
        ]);
    }

    output::listing(
        "Database Tables",
        &table,
        &format!("No tables found in the {} schema.", schema),
        "Total tables found",
    )
}
