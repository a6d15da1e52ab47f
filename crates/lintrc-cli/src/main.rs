//! lintrc CLI
//!
//! Command-line interface for resolving and inspecting layered lint
//! configurations

mod commands;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use lintrc_core::{ConfigFormat, init_tracing};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lintrc")]
#[command(about = "lintrc: resolve, validate and inspect layered lint configurations")]
#[command(version = lintrc_core::VERSION)]
#[command(
    long_about = "lintrc flattens lint configuration files, their presets and plugins into one\n\
resolved configuration and reports anything that cannot be resolved.\n\
\n\
Examples:\n  \
lintrc print-config              # Resolve the configuration for the current directory\n  \
lintrc print-config src/ -f yaml # Resolve for src/ and print YAML\n  \
lintrc validate                  # Check the configuration without printing it\n  \
lintrc rules list --recommended  # List recommended rules\n  \
lintrc config init               # Create a .lintrc.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration files to use instead of discovery, most general first
    #[arg(short, long, global = true, help = "Configuration file (repeatable, most general first)")]
    config: Vec<PathBuf>,

    /// Plugin manifests to register
    #[arg(short, long, global = true, help = "Plugin manifest file (repeatable)")]
    plugin: Vec<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_enum, help = "Generate completion script for specified shell")]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    PrintConfig {
        /// Directory (or file) whose configuration is resolved
        #[arg(help = "Directory to resolve for (default: current directory)")]
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: FileFormat,
    },

    /// Resolve the configuration and report errors
    Validate {
        /// Directory (or file) whose configuration is resolved
        path: Option<PathBuf>,

        /// Show every applied fragment and where each rule was set
        #[arg(long)]
        trace: bool,
    },

    /// Inspect the rule catalog
    Rules {
        #[command(subcommand)]
        command: Option<RulesCommands>,
    },

    /// Inspect registered presets
    Presets {
        #[command(subcommand)]
        command: Option<PresetsCommands>,
    },

    /// Inspect known environments
    Env {
        #[command(subcommand)]
        command: Option<EnvCommands>,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum RulesCommands {
    /// List available rules
    List {
        /// Only rules in this category (e.g. possible-errors, stylistic)
        #[arg(long)]
        category: Option<String>,

        /// Only rules enabled by the recommended preset
        #[arg(long)]
        recommended: bool,

        /// Show descriptions and options
        #[arg(short, long)]
        detailed: bool,
    },
    /// Explain a rule and its options
    Explain {
        /// Rule name
        rule: String,
    },
    /// Search rules by name or description
    Search {
        /// Text to search for
        query: String,
    },
}

#[derive(Subcommand)]
enum PresetsCommands {
    /// List registered presets
    List,
    /// Report preset cycles and unknown `extends` references
    Check,
}

#[derive(Subcommand)]
enum EnvCommands {
    /// List known environments
    List,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Create a configuration file in the current directory
    Init {
        /// File format
        #[arg(short, long, default_value = "json")]
        format: FileFormat,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the JSON schema of configuration files
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FileFormat {
    Json,
    Yaml,
    Toml,
}

impl From<FileFormat> for ConfigFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Json => ConfigFormat::Json,
            FileFormat::Yaml => ConfigFormat::Yaml,
            FileFormat::Toml => ConfigFormat::Toml,
        }
    }
}

/// Options shared by every command
pub struct GlobalOptions {
    pub config: Vec<PathBuf>,
    pub plugins: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return;
    }

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "lintrc=error",
        1 => "lintrc=warn",
        2 => "lintrc=info",
        3 => "lintrc=debug",
        _ => "lintrc=trace",
    };
    // SAFETY: single-threaded at this point, before any other code reads the environment
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    if let Err(e) = run_command(cli) {
        output::print_error(&e);
        std::process::exit(1);
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    let global = GlobalOptions {
        config: cli.config,
        plugins: cli.plugin,
    };

    match cli.command {
        Some(Commands::PrintConfig { path, format }) => {
            commands::resolve::print_config_command(&global, path, format.into())
        }
        Some(Commands::Validate { path, trace }) => {
            commands::resolve::validate_command(&global, path, trace)
        }
        Some(Commands::Rules { command }) => match command {
            None => commands::rules::rules_list_command(&global, None, false, false),
            Some(RulesCommands::List {
                category,
                recommended,
                detailed,
            }) => commands::rules::rules_list_command(&global, category, recommended, detailed),
            Some(RulesCommands::Explain { rule }) => {
                commands::rules::rules_explain_command(&global, &rule)
            }
            Some(RulesCommands::Search { query }) => {
                commands::rules::rules_search_command(&global, &query)
            }
        },
        Some(Commands::Presets { command }) => match command {
            None | Some(PresetsCommands::List) => commands::presets::presets_list_command(&global),
            Some(PresetsCommands::Check) => commands::presets::presets_check_command(&global),
        },
        Some(Commands::Env { command: None | Some(EnvCommands::List) }) => {
            commands::presets::env_list_command(&global)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { format, force } => {
                commands::config::config_init_command(format.into(), force)
            }
            ConfigCommands::Schema { output } => commands::config::config_schema_command(output),
        },
        Some(Commands::Version) => {
            println!("lintrc {}", lintrc_core::VERSION);
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
