//! Registry of presets, rules, environments and plugins
//!
//! `extends` references are resolved by name against this registry, which is
//! populated up front and immutable once built. A missing name is a typed
//! error at resolution time, never a lookup at runtime.
//!
//! ```
//! use lintrc_core::{ConfigFragment, Registry, RuleCategory, RuleDefinition, Severity};
//!
//! let registry = Registry::builder()
//!     .rule(RuleDefinition::new("semi", "Require semicolons", RuleCategory::Stylistic))
//!     .preset("base", ConfigFragment::default().with_rule("semi", Severity::Warn))
//!     .build()
//!     .unwrap();
//!
//! assert!(registry.preset("base").is_some());
//! ```

mod catalog;
mod graph;
mod plugin;

pub use catalog::{CatalogEntry, RuleCatalog, RuleProvider};
pub use graph::PresetIssue;
pub use plugin::{PLUGIN_PRESET_PREFIX, Plugin, parse_plugin_preset};

use indexmap::IndexMap;
use semver::Version;
use std::collections::HashSet;
use tracing::debug;

use crate::config::ConfigFragment;
use crate::error::LintrcError;
use crate::result::Result;
use crate::rules::{EnvironmentDefinition, RuleDefinition};

/// Immutable lookup tables used during resolution
#[derive(Debug, Clone, Default)]
pub struct Registry {
    presets: IndexMap<String, ConfigFragment>,
    rules: IndexMap<String, RuleDefinition>,
    environments: IndexMap<String, EnvironmentDefinition>,
    plugins: IndexMap<String, Plugin>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up a preset by name, including `plugin:<plugin>/<config>` presets
    pub fn preset(&self, name: &str) -> Option<&ConfigFragment> {
        if let Some((plugin, config)) = parse_plugin_preset(name) {
            return self.plugins.get(plugin)?.configs.get(config);
        }
        self.presets.get(name)
    }

    /// All preset names, registered presets first, then plugin presets
    pub fn preset_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        for plugin in self.plugins.values() {
            names.extend(plugin.configs.keys().map(|config| plugin.preset_name(config)));
        }
        names
    }

    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.get(name)
    }

    pub fn plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.values()
    }

    /// Rule from the base catalog (plugins excluded)
    pub fn base_rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    pub fn base_rules(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.values()
    }

    /// Environment from the base set (plugins excluded)
    pub fn environment(&self, name: &str) -> Option<&EnvironmentDefinition> {
        self.environments.get(name)
    }

    pub fn environments(&self) -> impl Iterator<Item = &EnvironmentDefinition> {
        self.environments.values()
    }

    /// Every rule known to the registry with the provider that declares it
    pub fn rules(&self) -> Vec<(RuleProvider<'_>, &RuleDefinition)> {
        let mut rules: Vec<(RuleProvider<'_>, &RuleDefinition)> = self
            .rules
            .values()
            .map(|rule| (RuleProvider::Base, rule))
            .collect();
        for plugin in self.plugins.values() {
            rules.extend(
                plugin
                    .rules
                    .iter()
                    .map(|rule| (RuleProvider::Plugin(plugin.name.as_str()), rule)),
            );
        }
        rules
    }

    /// Whether an environment is known to the base set or one of `plugins`
    pub fn knows_environment<'a, I>(&self, name: &str, plugins: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.environments.contains_key(name)
            || plugins
                .into_iter()
                .filter_map(|plugin| self.plugins.get(plugin))
                .any(|plugin| plugin.environment(name).is_some())
    }

    /// Report every preset cycle and dangling `extends` reference
    pub fn check_presets(&self) -> Vec<PresetIssue> {
        graph::PresetGraph::build(self).issues()
    }
}

/// Collects registry entries and validates them on [`RegistryBuilder::build`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    presets: Vec<(String, ConfigFragment)>,
    rules: Vec<RuleDefinition>,
    environments: Vec<EnvironmentDefinition>,
    plugins: Vec<Plugin>,
}

impl RegistryBuilder {
    pub fn preset(mut self, name: impl Into<String>, fragment: ConfigFragment) -> Self {
        self.add_preset(name, fragment);
        self
    }

    pub fn rule(mut self, rule: RuleDefinition) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleDefinition>,
    {
        self.rules.extend(rules);
        self
    }

    pub fn environment(mut self, environment: EnvironmentDefinition) -> Self {
        self.add_environment(environment);
        self
    }

    pub fn plugin(mut self, plugin: Plugin) -> Self {
        self.add_plugin(plugin);
        self
    }

    pub fn add_preset(&mut self, name: impl Into<String>, fragment: ConfigFragment) -> &mut Self {
        self.presets.push((name.into(), fragment));
        self
    }

    pub fn add_rule(&mut self, rule: RuleDefinition) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn add_environment(&mut self, environment: EnvironmentDefinition) -> &mut Self {
        self.environments.push(environment);
        self
    }

    pub fn add_plugin(&mut self, plugin: Plugin) -> &mut Self {
        self.plugins.push(plugin);
        self
    }

    /// Whether a preset with this name was already added
    pub fn has_preset(&self, name: &str) -> bool {
        self.presets.iter().any(|(existing, _)| existing == name)
    }

    /// Validate and freeze the registry
    pub fn build(self) -> Result<Registry> {
        let running = Version::parse(crate::VERSION).map_err(|e| {
            LintrcError::config_error(format!("Invalid crate version '{}': {e}", crate::VERSION))
        })?;

        let mut registry = Registry::default();

        for (name, fragment) in self.presets {
            if name.starts_with(PLUGIN_PRESET_PREFIX) {
                return Err(LintrcError::config_error(format!(
                    "Preset name '{name}' uses the reserved '{PLUGIN_PRESET_PREFIX}' prefix"
                )));
            }
            if registry.presets.contains_key(&name) {
                return Err(LintrcError::DuplicatePreset { name });
            }
            registry.presets.insert(name, fragment);
        }

        for rule in self.rules {
            if registry.rules.contains_key(&rule.name) {
                return Err(LintrcError::DuplicateRule {
                    rule: rule.name,
                    first: RuleProvider::Base.to_string(),
                    second: RuleProvider::Base.to_string(),
                });
            }
            registry.rules.insert(rule.name.clone(), rule);
        }

        for environment in self.environments {
            if registry.environments.contains_key(&environment.name) {
                return Err(LintrcError::DuplicateEnvironment {
                    name: environment.name,
                });
            }
            registry
                .environments
                .insert(environment.name.clone(), environment);
        }

        for plugin in self.plugins {
            if registry.plugins.contains_key(&plugin.name) {
                return Err(LintrcError::DuplicatePlugin { name: plugin.name });
            }
            plugin.check_compatibility(&running)?;

            let mut seen = HashSet::new();
            for rule in &plugin.rules {
                if !seen.insert(rule.name.as_str()) {
                    let provider = RuleProvider::Plugin(&plugin.name).to_string();
                    return Err(LintrcError::DuplicateRule {
                        rule: rule.name.clone(),
                        first: provider.clone(),
                        second: provider,
                    });
                }
            }

            debug!(
                "Registered plugin '{}' v{} with {} rules",
                plugin.name,
                plugin.version,
                plugin.rules.len()
            );
            registry.plugins.insert(plugin.name.clone(), plugin);
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rules::RuleCategory;

    fn rule(name: &str) -> RuleDefinition {
        RuleDefinition::new(name, "test rule", RuleCategory::BestPractices)
    }

    #[test]
    fn test_plugin_presets_are_addressable() {
        let registry = Registry::builder()
            .preset("base", ConfigFragment::default())
            .plugin(
                Plugin::new("import")
                    .with_config("recommended", ConfigFragment::default().with_plugin("import")),
            )
            .build()
            .unwrap();

        assert!(registry.preset("plugin:import/recommended").is_some());
        assert!(registry.preset("plugin:import/strict").is_none());
        assert!(registry.preset("plugin:other/recommended").is_none());
        assert_eq!(
            registry.preset_names(),
            vec!["base".to_string(), "plugin:import/recommended".to_string()]
        );
    }

    #[test]
    fn test_duplicate_preset_is_rejected() {
        let result = Registry::builder()
            .preset("base", ConfigFragment::default())
            .preset("base", ConfigFragment::default())
            .build();
        assert!(matches!(result, Err(LintrcError::DuplicatePreset { name }) if name == "base"));
    }

    #[test]
    fn test_reserved_preset_prefix_is_rejected() {
        let result = Registry::builder()
            .preset("plugin:x/y", ConfigFragment::default())
            .build();
        assert!(matches!(result, Err(LintrcError::ConfigError { .. })));
    }

    #[test]
    fn test_duplicate_base_rule_is_rejected() {
        let result = Registry::builder().rule(rule("semi")).rule(rule("semi")).build();
        assert!(matches!(result, Err(LintrcError::DuplicateRule { rule, .. }) if rule == "semi"));
    }

    #[test]
    fn test_duplicate_rule_inside_plugin_is_rejected() {
        let result = Registry::builder()
            .plugin(Plugin::new("x").with_rule(rule("x/a")).with_rule(rule("x/a")))
            .build();
        assert!(matches!(result, Err(LintrcError::DuplicateRule { .. })));
    }

    #[test]
    fn test_duplicate_plugin_is_rejected() {
        let result = Registry::builder()
            .plugin(Plugin::new("x"))
            .plugin(Plugin::new("x"))
            .build();
        assert!(matches!(result, Err(LintrcError::DuplicatePlugin { name }) if name == "x"));
    }

    #[test]
    fn test_duplicate_environment_is_rejected() {
        let err = Registry::builder()
            .environment(EnvironmentDefinition::new("node", "Node.js globals"))
            .environment(EnvironmentDefinition::new("node", "Node.js again"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Registry);
        assert!(matches!(err, LintrcError::DuplicateEnvironment { name } if name == "node"));
    }

    #[test]
    fn test_environment_lookup_respects_loaded_plugins() {
        let registry = Registry::builder()
            .environment(EnvironmentDefinition::new("node", "Node.js globals"))
            .plugin(
                Plugin::new("jest")
                    .with_environment(EnvironmentDefinition::new("jest/globals", "Jest globals")),
            )
            .build()
            .unwrap();

        let none: Vec<String> = Vec::new();
        let jest = vec!["jest".to_string()];
        assert!(registry.knows_environment("node", &none));
        assert!(!registry.knows_environment("jest/globals", &none));
        assert!(registry.knows_environment("jest/globals", &jest));
    }

    #[test]
    fn test_rules_lists_plugin_rules() {
        let registry = Registry::builder()
            .rule(rule("semi"))
            .plugin(Plugin::new("import").with_rule(rule("import/no-cycle")))
            .build()
            .unwrap();

        let names: Vec<String> = registry
            .rules()
            .into_iter()
            .map(|(provider, rule)| format!("{provider}: {}", rule.name))
            .collect();
        assert_eq!(
            names,
            vec!["base catalog: semi", "plugin 'import': import/no-cycle"]
        );
    }
}
