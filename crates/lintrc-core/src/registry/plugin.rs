//! Plugins: named bundles of rules, environments and presets

use indexmap::IndexMap;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::config::ConfigFragment;
use crate::error::LintrcError;
use crate::result::Result;
use crate::rules::{EnvironmentDefinition, RuleDefinition};

/// Prefix of presets exported by plugins: `plugin:<plugin>/<config>`
pub const PLUGIN_PRESET_PREFIX: &str = "plugin:";

/// A plugin manifest
///
/// Plugins are only consulted for rules and environments when their name
/// appears in the resolved `plugins` set. Their presets can be extended at
/// any time as `plugin:<name>/<config>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Name listed in `plugins`
    pub name: String,
    /// Plugin version
    #[serde(default = "default_plugin_version")]
    pub version: String,
    /// Oldest lintrc release this plugin works with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lintrc_version: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Rules contributed by the plugin
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
    /// Environments contributed by the plugin
    #[serde(default)]
    pub environments: Vec<EnvironmentDefinition>,
    /// Shareable presets, keyed by config name
    #[serde(default)]
    pub configs: IndexMap<String, ConfigFragment>,
}

fn default_plugin_version() -> String {
    "0.0.0".to_string()
}

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_plugin_version(),
            min_lintrc_version: None,
            description: String::new(),
            rules: Vec::new(),
            environments: Vec::new(),
            configs: IndexMap::new(),
        }
    }

    pub fn with_rule(mut self, rule: RuleDefinition) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentDefinition) -> Self {
        self.environments.push(environment);
        self
    }

    pub fn with_config(mut self, name: impl Into<String>, fragment: ConfigFragment) -> Self {
        self.configs.insert(name.into(), fragment);
        self
    }

    pub fn rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn environment(&self, name: &str) -> Option<&EnvironmentDefinition> {
        self.environments.iter().find(|env| env.name == name)
    }

    /// Preset name under which a plugin config is extended
    pub fn preset_name(&self, config: &str) -> String {
        format!("{PLUGIN_PRESET_PREFIX}{}/{config}", self.name)
    }

    /// Fail when the plugin needs a newer lintrc than `running`
    pub fn check_compatibility(&self, running: &Version) -> Result<()> {
        let Some(required) = &self.min_lintrc_version else {
            return Ok(());
        };

        let required_version = Version::parse(required).map_err(|e| {
            LintrcError::config_error(format!(
                "Plugin '{}' has an invalid minLintrcVersion '{}': {}",
                self.name, required, e
            ))
        })?;

        if running < &required_version {
            return Err(LintrcError::IncompatiblePlugin {
                name: self.name.clone(),
                required: required.clone(),
                running: running.to_string(),
            });
        }

        Ok(())
    }
}

/// Split `plugin:<plugin>/<config>` into its plugin and config names
pub fn parse_plugin_preset(name: &str) -> Option<(&str, &str)> {
    let rest = name.strip_prefix(PLUGIN_PRESET_PREFIX)?;
    let (plugin, config) = rest.split_once('/')?;
    if plugin.is_empty() || config.is_empty() {
        return None;
    }
    Some((plugin, config))
}
