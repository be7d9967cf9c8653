//! `pgpeek version` command - Display version information.

use clap::CommandFactory;

use crate::cli::Cli;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the installed binary, as declared on [`Cli`]
pub fn binary_name() -> String {
    Cli::command().get_name().to_string()
}

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::header("pgpeek");

    kv("Version", VERSION);
    kv("Binary", &binary_name());

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    let mut features = Vec::new();

    #[cfg(feature = "postgres")]
    features.push("postgres");

    if features.is_empty() {
        features.push("none");
    }

    kv("Features", &features.join(", "));

    output::newline();

    output::section("Components");
    kv("pgpeek-conn", env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_name_is_not_package_name() {
        assert_eq!(binary_name(), "pgpeek");
        assert_ne!(binary_name(), env!("CARGO_PKG_NAME"));
    }
}
