use anyhow::{Context, Result};
use revopt_cli::RevoptConfig;

/// Print the effective configuration, after flag overrides.
pub fn handle(config: &RevoptConfig) -> Result<()> {
    let text = toml::to_string_pretty(config).context("serializing config to TOML")?;
    print!("{text}");
    Ok(())
}
