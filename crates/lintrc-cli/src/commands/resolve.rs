//! `print-config` and `validate`

use anyhow::Result;
use colored::*;
use lintrc_core::{ConfigFormat, FragmentOrigin, Resolver};
use std::path::PathBuf;
use tracing::debug;

use super::Workspace;
use crate::GlobalOptions;
use crate::output;

/// Print the resolved configuration
pub fn print_config_command(
    global: &GlobalOptions,
    path: Option<PathBuf>,
    format: ConfigFormat,
) -> Result<()> {
    debug!("Printing resolved configuration as {:?}", format);

    let workspace = Workspace::load(global, path.as_deref())?;
    let config = Resolver::new(&workspace.registry).resolve(&workspace.fragments())?;

    let rendered = format.serialize(&config)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Resolve and report success
pub fn validate_command(global: &GlobalOptions, path: Option<PathBuf>, trace: bool) -> Result<()> {
    let workspace = Workspace::load(global, path.as_deref())?;
    let (config, resolution) =
        Resolver::new(&workspace.registry).resolve_with_trace(&workspace.fragments())?;

    output::success("Configuration is valid");
    println!("   Files: {}", workspace.files.len());
    println!(
        "   Rules: {} configured, {} enabled",
        config.rules().len(),
        config.enabled_rules().count()
    );
    if !config.plugins().is_empty() {
        let plugins: Vec<&str> = config.plugins().iter().map(String::as_str).collect();
        println!("   Plugins: {}", plugins.join(", "));
    }

    if trace {
        println!();
        output::heading("Applied fragments");
        for label in &resolution.skipped {
            println!("  {} {}", "skipped".dimmed(), label);
        }
        for applied in &resolution.applied {
            let origin = match applied.origin {
                FragmentOrigin::Chain => "config",
                FragmentOrigin::Preset => "preset",
            };
            let repeats = if applied.applications > 1 {
                format!(" (x{})", applied.applications)
            } else {
                String::new()
            };
            println!(
                "  {}{} {}{}",
                "  ".repeat(applied.depth),
                origin.cyan(),
                applied.label,
                repeats.dimmed()
            );
        }

        println!();
        output::heading("Rule sources");
        for (rule, source) in &resolution.rule_sources {
            let severity = config.severity(rule);
            println!("  {rule} = {} ({source})", output::severity(severity));
        }
    }

    Ok(())
}
