//! lintrc core
//!
//! Layered lint-configuration resolution. Configuration fragments are
//! flattened through their `extends` presets, merged by precedence and
//! validated against a registry of rules, environments and plugins. The
//! result is a read-only [`ResolvedConfig`] for an external linting engine.
//!
//! ```
//! use lintrc_core::{ConfigFragment, Registry, Resolver, RuleCategory, RuleDefinition, Severity};
//!
//! let registry = Registry::builder()
//!     .rule(RuleDefinition::new("no-console", "Disallow console", RuleCategory::BestPractices))
//!     .build()
//!     .unwrap();
//!
//! let base = ConfigFragment::default().with_rule("no-console", Severity::Warn);
//! let project = ConfigFragment::default().with_rule("no-console", Severity::Error);
//!
//! let config = Resolver::new(&registry).resolve(&[base, project]).unwrap();
//! assert_eq!(config.severity("no-console"), Severity::Error);
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod result;
pub mod rules;

// Re-export commonly used types
pub use config::{
    CONFIG_FILE_NAMES, ConfigFile, ConfigFormat, ConfigFragment, ConfigLoader, ResolvedConfig,
    RuleEntry, Severity,
};
pub use error::{ErrorKind, LintrcError};
pub use registry::{
    CatalogEntry, PLUGIN_PRESET_PREFIX, Plugin, PresetIssue, Registry, RegistryBuilder,
    RuleCatalog, RuleProvider,
};
pub use resolver::{AppliedFragment, FragmentOrigin, ResolutionTrace, Resolver, ResolverOptions};
pub use result::Result;
pub use rules::{EnvironmentDefinition, OptionSchema, OptionType, RuleCategory, RuleDefinition};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
