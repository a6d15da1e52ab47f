//! `presets list`, `presets check` and `env list`

use anyhow::{Result, bail};
use colored::*;

use super::registry_only;
use crate::GlobalOptions;
use crate::output;

pub fn presets_list_command(global: &GlobalOptions) -> Result<()> {
    let registry = registry_only(global)?;

    output::heading("Available Presets:");
    let names = registry.preset_names();
    for name in &names {
        let Some(preset) = registry.preset(name) else {
            continue;
        };
        let mut details = vec![format!("{} rule(s)", preset.rules.len())];
        if !preset.extends.is_empty() {
            details.push(format!("extends {}", preset.extends.join(", ")));
        }
        println!("  {} ({})", name.bold(), details.join("; "));
    }
    println!("\nTotal: {} presets", names.len());

    Ok(())
}

/// Statically check every preset; fails when any issue is found
pub fn presets_check_command(global: &GlobalOptions) -> Result<()> {
    let registry = registry_only(global)?;
    let issues = registry.check_presets();

    if issues.is_empty() {
        output::success(&format!(
            "{} presets checked, no issues found",
            registry.preset_names().len()
        ));
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {} {}", "✗".red(), issue);
    }
    bail!("Found {} preset issue(s)", issues.len())
}

pub fn env_list_command(global: &GlobalOptions) -> Result<()> {
    let registry = registry_only(global)?;

    output::heading("Available Environments:");
    for env in registry.environments() {
        println!("  {} - {} ({} globals)", env.name.bold(), env.description, env.globals.len());
    }
    for plugin in registry.plugins() {
        for env in &plugin.environments {
            println!(
                "  {} - {} ({} globals) [plugin: {}]",
                env.name.bold(),
                env.description,
                env.globals.len(),
                plugin.name
            );
        }
    }

    Ok(())
}
