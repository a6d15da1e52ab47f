//! lintrc rules
//!
//! Built-in rule catalog, environments, presets and bundled plugins.
//! This crate provides the default registry contents used by the CLI.

pub mod builtin;
pub mod environments;
pub mod plugins;
pub mod presets;

// Re-export commonly used types
pub use builtin::BuiltinRules;
pub use environments::BuiltinEnvironments;
pub use presets::BuiltinPresets;

use lintrc_core::{Registry, RegistryBuilder, Result};

/// A registry builder pre-populated with every built-in entry
///
/// Callers can add their own presets and plugins before building.
pub fn default_registry_builder() -> RegistryBuilder {
    let mut builder = Registry::builder().rules(BuiltinRules::all_rules());

    for environment in BuiltinEnvironments::all() {
        builder.add_environment(environment);
    }
    for (name, preset) in BuiltinPresets::all() {
        builder.add_preset(name, preset);
    }
    for plugin in plugins::all() {
        builder.add_plugin(plugin);
    }

    tracing::debug!("Initialized built-in registry entries");
    builder
}

/// The built-in registry
pub fn default_registry() -> Result<Registry> {
    default_registry_builder().build()
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
