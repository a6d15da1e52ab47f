//! `config init` and `config schema`

use anyhow::{Context, Result, bail};
use lintrc_core::{ConfigFormat, ConfigFragment, Severity};
use lintrc_rules::presets::RECOMMENDED;
use schemars::schema_for;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output;

/// Config init command implementation
pub fn config_init_command(format: ConfigFormat, force: bool) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = format!(".lintrc.{}", format.extension());
    let config_path = PathBuf::from(&filename);

    if config_path.exists() && !force {
        bail!("Configuration file '{filename}' already exists. Use --force to overwrite");
    }

    let content = format.serialize(&starter_config())?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write '{}'", config_path.display()))?;

    output::success(&format!("Created configuration file: {filename}"));
    println!("   Edit the file to customize your linting rules.");

    Ok(())
}

fn starter_config() -> ConfigFragment {
    ConfigFragment::default()
        .as_root()
        .extending(RECOMMENDED)
        .with_env("es2021")
        .with_parser_option("ecmaVersion", json!("latest"))
        .with_parser_option("sourceType", json!("module"))
        .with_rule("no-console", Severity::Warn)
}

/// Print or write the JSON schema of configuration files
pub fn config_schema_command(output_path: Option<PathBuf>) -> Result<()> {
    let schema = schema_for!(ConfigFragment);
    let mut schema_json = serde_json::to_value(schema)?;

    schema_json["title"] = json!("lintrc configuration");
    schema_json["description"] =
        json!("Configuration file schema for lintrc - validates .lintrc.json and .lintrc.jsonc files");

    let rendered = serde_json::to_string_pretty(&schema_json)?;
    match output_path {
        Some(path) => write_schema(&path, &rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn write_schema(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered).with_context(|| format!("Failed to write '{}'", path.display()))?;
    output::success(&format!("Generated JSON Schema: {}", path.display()));
    Ok(())
}
