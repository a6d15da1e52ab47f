//! Configuration file discovery and loading
//!
//! The resolver itself never touches the filesystem. This module turns files
//! into fragments, discovers the chain of configuration files that applies to
//! a directory, and registers presets that are referenced by path.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::fragment::ConfigFragment;
use crate::error::LintrcError;
use crate::registry::{Plugin, RegistryBuilder};
use crate::result::Result;

/// Configuration file names, in priority order within one directory
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintrc.json",
    ".lintrc.jsonc",
    ".lintrc.yaml",
    ".lintrc.yml",
    ".lintrc.toml",
];

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    /// JSON with comments and trailing commas
    Jsonc,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "json" => Ok(ConfigFormat::Json),
            "jsonc" | "json5" => Ok(ConfigFormat::Jsonc),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(LintrcError::config_error(format!(
                "Unsupported config file extension for '{}' (expected json, jsonc, yaml, yml or toml)",
                path.display()
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Jsonc => "jsonc",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }

    /// Parse `content` into any deserializable value
    pub fn deserialize<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        let parsed = match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Jsonc => json5::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| {
            LintrcError::config_error(format!("Failed to parse {} config: {e}", self.label()))
        })
    }

    /// Render a value in this format
    ///
    /// JSONC output is plain pretty JSON.
    pub fn serialize<T: Serialize>(self, value: &T) -> Result<String> {
        let rendered = match self {
            ConfigFormat::Json | ConfigFormat::Jsonc => {
                serde_json::to_string_pretty(value).map_err(|e| e.to_string())
            }
            ConfigFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|e| {
            LintrcError::config_error(format!(
                "Failed to serialize config to {}: {e}",
                self.label()
            ))
        })
    }

    fn label(self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Jsonc => "JSONC",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// A fragment together with the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub fragment: ConfigFragment,
}

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file
    ///
    /// Fragments without a `name` are labelled with their path.
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;

        let mut fragment: ConfigFragment = format
            .deserialize(&content)
            .map_err(|e| load_error("config", path, e))?;
        if fragment.name.is_none() {
            fragment.name = Some(path.display().to_string());
        }

        debug!("Loaded config: {}", path.display());
        Ok(ConfigFile {
            path: path.to_path_buf(),
            fragment,
        })
    }

    /// Load a single fragment from a file
    pub fn load_fragment(path: &Path) -> Result<ConfigFragment> {
        Self::load_file(path).map(|file| file.fragment)
    }

    /// Find the highest-priority config file directly inside `dir`
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Discover the configuration chain that applies to `start`
    ///
    /// Walks from `start` (a directory, or a file whose directory is used) up
    /// to the filesystem root, taking at most one config file per directory
    /// and stopping after the first one marked `root: true`. Files are
    /// returned from the most general to the most specific.
    pub fn discover_chain(start: &Path) -> Result<Vec<ConfigFile>> {
        let start = start
            .canonicalize()
            .map_err(|e| LintrcError::io_error(start, e))?;
        let mut current = if start.is_file() {
            start.parent().map(Path::to_path_buf)
        } else {
            Some(start)
        };

        let mut chain = Vec::new();
        while let Some(dir) = current {
            if let Some(path) = Self::find_in_dir(&dir) {
                debug!("Found config: {}", path.display());
                let file = Self::load_file(&path)?;
                let is_root = file.fragment.is_root();
                chain.push(file);
                if is_root {
                    break;
                }
            }
            current = dir.parent().map(Path::to_path_buf);
        }

        chain.reverse();
        Ok(chain)
    }

    /// Register presets referenced by file path
    ///
    /// `extends` entries starting with `./`, `../` or `/` are loaded relative
    /// to the file that references them, registered under their canonical
    /// path and rewritten to that name. Referenced files are processed the
    /// same way. Each file is loaded once, so a cycle between files surfaces
    /// as [`LintrcError::CyclicExtends`] during resolution.
    pub fn register_file_presets(
        builder: &mut RegistryBuilder,
        files: &mut [ConfigFile],
    ) -> Result<()> {
        let mut visited = HashSet::new();
        for file in files.iter_mut() {
            let base = file.path.parent().unwrap_or(Path::new("."));
            let label = file
                .fragment
                .name
                .clone()
                .unwrap_or_else(|| file.path.display().to_string());
            Self::rewrite_extends(builder, &mut file.fragment, base, &label, &mut visited)?;
        }
        Ok(())
    }

    fn rewrite_extends(
        builder: &mut RegistryBuilder,
        fragment: &mut ConfigFragment,
        base: &Path,
        label: &str,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        for reference in fragment.extends.iter_mut() {
            if !is_path_reference(reference) {
                continue;
            }

            let path = base
                .join(reference.as_str())
                .canonicalize()
                .map_err(|_| LintrcError::unknown_preset(reference.as_str(), label))?;
            let name = path.display().to_string();

            if visited.insert(path.clone()) && !builder.has_preset(&name) {
                let mut preset = Self::load_fragment(&path)?;
                let preset_base = path.parent().unwrap_or(Path::new("."));
                Self::rewrite_extends(builder, &mut preset, preset_base, &name, visited)?;
                debug!("Registered file preset: {}", name);
                builder.add_preset(name.clone(), preset);
            }

            *reference = name;
        }
        Ok(())
    }

    /// Load a plugin manifest
    pub fn load_plugin(path: &Path) -> Result<Plugin> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;
        let plugin: Plugin = format
            .deserialize(&content)
            .map_err(|e| load_error("plugin", path, e))?;
        debug!("Loaded plugin '{}' from {}", plugin.name, path.display());
        Ok(plugin)
    }
}

/// Whether an `extends` entry names a file rather than a registered preset
/// Prefix a parse failure with the file it came from
fn load_error(what: &str, path: &Path, error: LintrcError) -> LintrcError {
    let detail = match error {
        LintrcError::ConfigError { message } => message,
        other => other.to_string(),
    };
    LintrcError::config_error(format!(
        "Failed to load {what} from '{}': {detail}",
        path.display()
    ))
}

pub fn is_path_reference(reference: &str) -> bool {
    reference.starts_with("./") || reference.starts_with("../") || Path::new(reference).is_absolute()
}
