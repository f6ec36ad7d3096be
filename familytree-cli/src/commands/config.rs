use anyhow::{Context, Result};
use shared::config::ClientConfig;
use std::fs;

/// Generates a configuration file in the specified format.
///
/// # Arguments
/// * `format` - The format of the configuration file ("yaml" or "json").
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file fails.
pub fn generate_config(format: &str) -> Result<()> {
    let file_name = match format {
        "yaml" => "config.yaml",
        "json" => "config.json",
        _ => anyhow::bail!("Unsupported format. Use 'yaml' or 'json'."),
    };
    let serialized = ClientConfig::with_defaults().render(format)?;

    fs::write(file_name, serialized.as_bytes())
        .with_context(|| format!("failed to write {file_name}"))?;

    println!("Configuration file '{file_name}' generated successfully.");
    Ok(())
}
