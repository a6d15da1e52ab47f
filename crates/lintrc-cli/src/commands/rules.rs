//! `rules list`, `rules explain` and `rules search`

use anyhow::{Result, bail};
use colored::*;
use lintrc_core::{OptionSchema, RuleCategory, RuleDefinition, RuleProvider};
use tracing::debug;

use super::registry_only;
use crate::GlobalOptions;
use crate::output;

/// Rules list command implementation
pub fn rules_list_command(
    global: &GlobalOptions,
    category: Option<String>,
    recommended: bool,
    detailed: bool,
) -> Result<()> {
    debug!("Listing available rules");

    let registry = registry_only(global)?;
    let category = category.as_deref().map(RuleCategory::from_slug);

    output::heading("Available Rules:");

    let mut count = 0;
    for (provider, rule) in registry.rules() {
        // Apply filters
        if let Some(ref filter) = category
            && &rule.category != filter
        {
            continue;
        }
        if recommended && !rule.recommended {
            continue;
        }

        count += 1;
        if detailed {
            println!("\n{}", rule.name.bold());
            println!("  Description: {}", rule.description);
            println!("  Category: {}", rule.category);
            println!("  Provider: {provider}");
            println!("  Options: {}", describe_schema(&rule.schema));
            if rule.recommended {
                println!("  Recommended: yes");
            }
            if rule.deprecated {
                println!("  {}", "Deprecated".yellow());
            }
        } else {
            println!("  {} - {}{}", rule.name, rule.description, flags(provider, rule));
        }
    }

    if count == 0 {
        println!("\nNo rules found matching the specified filters.");
    } else {
        println!("\nTotal: {count} rules");
    }

    Ok(())
}

/// Rules explain command implementation
pub fn rules_explain_command(global: &GlobalOptions, name: &str) -> Result<()> {
    debug!("Explaining rule: {}", name);

    let registry = registry_only(global)?;
    let Some((provider, rule)) = registry
        .rules()
        .into_iter()
        .find(|(_, rule)| rule.name == name)
    else {
        bail!("Rule '{name}' not found. Use 'lintrc rules list' to list all available rules");
    };

    output::heading(&format!("Rule: {}", rule.name));
    println!();
    println!("Category: {}", rule.category);
    println!("Provider: {provider}");
    println!("Description: {}", rule.description);
    println!("Recommended: {}", if rule.recommended { "yes" } else { "no" });
    if rule.deprecated {
        output::warning("This rule is deprecated and will be removed");
    }

    println!();
    match &rule.schema {
        OptionSchema::NoOptions => println!("This rule takes no options."),
        schema => {
            println!("Options schema:");
            let rendered = serde_yaml::to_string(schema)?;
            for line in rendered.lines() {
                println!("  {line}");
            }
        }
    }

    if let RuleProvider::Plugin(plugin) = provider {
        println!();
        println!("Requires \"plugins\": [\"{plugin}\"] in the configuration.");
    }

    Ok(())
}

/// Rules search command implementation
pub fn rules_search_command(global: &GlobalOptions, query: &str) -> Result<()> {
    debug!("Searching rules for: {}", query);

    let registry = registry_only(global)?;
    let query_lower = query.to_lowercase();

    let matches: Vec<_> = registry
        .rules()
        .into_iter()
        .filter(|(_, rule)| {
            rule.name.to_lowercase().contains(&query_lower)
                || rule.description.to_lowercase().contains(&query_lower)
        })
        .collect();

    if matches.is_empty() {
        println!("No rules found matching '{query}'");
        return Ok(());
    }

    output::heading(&format!("Rules matching '{query}':"));
    println!();
    for (_, rule) in matches {
        println!("  {} - {} ({})", rule.name, rule.description, rule.category);
    }

    Ok(())
}

fn flags(provider: RuleProvider<'_>, rule: &RuleDefinition) -> String {
    let mut flags = Vec::new();
    if rule.recommended {
        flags.push("recommended".green().to_string());
    }
    if rule.deprecated {
        flags.push("deprecated".yellow().to_string());
    }
    if let RuleProvider::Plugin(plugin) = provider {
        flags.push(format!("plugin: {plugin}"));
    }

    if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    }
}

fn describe_schema(schema: &OptionSchema) -> String {
    match schema {
        OptionSchema::NoOptions => "none".to_string(),
        OptionSchema::Any => "any".to_string(),
        OptionSchema::Tuple { items, .. } => format!("up to {} positional option(s)", items.len()),
    }
}
