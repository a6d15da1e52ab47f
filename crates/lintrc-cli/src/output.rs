//! Terminal output helpers

use colored::*;
use lintrc_core::{LintrcError, Severity};

/// Print a heading underlined to its width
pub fn heading(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(title.chars().count()));
}

pub fn success(message: &str) {
    println!("{} {}", "✅".green(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Severity with its conventional color
pub fn severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::Off => severity.as_str().dimmed(),
        Severity::Warn => severity.as_str().yellow(),
        Severity::Error => severity.as_str().red(),
    }
}

/// Print a top-level failure to stderr, with hints for common mistakes
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), error);

    let hint = match error.downcast_ref::<LintrcError>() {
        Some(LintrcError::UnknownRule { .. }) => {
            Some("run 'lintrc rules list' to see available rules, or add the plugin providing it")
        }
        Some(LintrcError::UnknownPreset { .. }) => {
            Some("run 'lintrc presets list' to see registered presets")
        }
        Some(LintrcError::UnknownPlugin { .. }) => {
            Some("register the plugin manifest with --plugin <FILE>")
        }
        _ => None,
    };
    if let Some(hint) = hint {
        eprintln!("  {} {}", "hint:".cyan(), hint);
    }
}
