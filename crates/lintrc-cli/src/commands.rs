//! Command implementations
//!
//! Every command that needs a registry builds it the same way: the built-in
//! catalog, then plugin manifests passed with `--plugin`, then presets
//! referenced by file path from the configuration chain.

pub mod config;
pub mod presets;
pub mod resolve;
pub mod rules;

use anyhow::{Context, Result, bail};
use lintrc_core::{CONFIG_FILE_NAMES, ConfigFile, ConfigLoader, Registry};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::GlobalOptions;

/// Registry and configuration chain for one invocation
pub struct Workspace {
    pub registry: Registry,
    pub files: Vec<ConfigFile>,
}

impl Workspace {
    /// Load the chain for `path` and build the matching registry
    pub fn load(global: &GlobalOptions, path: Option<&Path>) -> Result<Self> {
        let mut files = load_chain(global, path)?;
        let registry = build_registry(global, &mut files)?;
        Ok(Self { registry, files })
    }

    pub fn fragments(&self) -> Vec<lintrc_core::ConfigFragment> {
        self.files.iter().map(|file| file.fragment.clone()).collect()
    }
}

/// Registry with built-ins and `--plugin` manifests only
pub fn registry_only(global: &GlobalOptions) -> Result<Registry> {
    build_registry(global, &mut [])
}

fn build_registry(global: &GlobalOptions, files: &mut [ConfigFile]) -> Result<Registry> {
    let mut builder = lintrc_rules::default_registry_builder();

    for path in &global.plugins {
        let plugin = ConfigLoader::load_plugin(path)
            .with_context(|| format!("Failed to register plugin '{}'", path.display()))?;
        builder.add_plugin(plugin);
    }

    ConfigLoader::register_file_presets(&mut builder, files)?;
    Ok(builder.build()?)
}

fn load_chain(global: &GlobalOptions, path: Option<&Path>) -> Result<Vec<ConfigFile>> {
    if !global.config.is_empty() {
        debug!("Using {} explicit config file(s)", global.config.len());
        return global
            .config
            .iter()
            .map(|path| ConfigLoader::load_file(path).map_err(Into::into))
            .collect();
    }

    let start = path.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let files = ConfigLoader::discover_chain(&start)
        .with_context(|| format!("Failed to discover configuration for '{}'", start.display()))?;

    if files.is_empty() {
        bail!(
            "No configuration file found ({}). Run 'lintrc config init' to create one",
            CONFIG_FILE_NAMES.join(", ")
        );
    }
    Ok(files)
}
