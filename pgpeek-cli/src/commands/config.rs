//! `pgpeek config` command - Show the loaded configuration.

use std::collections::BTreeMap;

use crate::cli::ConfigArgs;
use crate::config::{CONFIG_FILE_NAME, Config, LEGACY_CONFIG_FILE_NAME, LoadedConfig, mask_password};
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the config command
pub async fn run(args: ConfigArgs, loaded: &LoadedConfig) -> CliResult<()> {
    let settings = loaded.config.settings(args.show_secrets);

    if args.json {
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| CliError::Command(format!("Failed to serialize settings: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(key) = args.key {
        let value = settings
            .get(&key.to_lowercase())
            .ok_or_else(|| CliError::Command(format!("Unknown configuration key: {}", key)))?;
        println!("{}", value);
        return Ok(());
    }

    match &loaded.path {
        Some(path) => output::dim(&format!("Loaded from {}", path.display())),
        None => output::info(&format!(
            "No {} or {} found in the working directory.",
            CONFIG_FILE_NAME, LEGACY_CONFIG_FILE_NAME
        )),
    }

    print!("{}", render_settings(&settings));
    if loaded.config.debug {
        print!("{}", render_debug(&loaded.config, args.show_secrets));
    }

    Ok(())
}

/// Render every setting as `key: value`
pub fn render_settings(settings: &BTreeMap<String, String>) -> String {
    let mut out = String::from("Current Configuration:\n---------------------\n");
    for (key, value) in settings {
        out.push_str(&format!("{}: {}\n", key, value));
    }
    out
}

/// Render the debug information block
pub fn render_debug(config: &Config, show_secrets: bool) -> String {
    let url = match &config.postgres_url {
        Some(url) if show_secrets => url.clone(),
        Some(url) => mask_password(url),
        None => String::new(),
    };

    format!(
        "\nDebug Information:\n----------------\nPostgres URL: {}\nUsername: {}\nDebug Mode: {}\n",
        url,
        config.username.as_deref().unwrap_or_default(),
        config.debug
    )
}
