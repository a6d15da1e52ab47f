//! Configuration merging logic
//!
//! Fragments are applied from most general to most specific onto an
//! accumulator, so the fragment applied last takes precedence:
//! - `env` and `plugins` are unioned
//! - `parserOptions` and `settings` are overridden key by key
//! - `rules` are overridden rule by rule (a later fragment may upgrade,
//!   downgrade or disable a rule)
//! - `root`, `extends`, `name` and `$schema` are not merged (fragment-specific)

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

use super::fragment::ConfigFragment;
use super::resolved::ResolvedConfig;
use super::rule_entry::RuleEntry;

/// Merge state for a single resolution
///
/// Besides the merged values it remembers which fragment last touched each
/// rule, environment and plugin so validation errors can name their origin.
#[derive(Debug, Default)]
pub(crate) struct ConfigAccumulator {
    root: bool,
    environments: BTreeSet<String>,
    parser_options: IndexMap<String, Value>,
    plugins: BTreeSet<String>,
    rules: IndexMap<String, RuleEntry>,
    settings: IndexMap<String, Value>,
    rule_sources: HashMap<String, String>,
    env_sources: HashMap<String, String>,
    plugin_sources: HashMap<String, String>,
}

impl ConfigAccumulator {
    /// Start from deterministic parser defaults
    pub(crate) fn with_parser_defaults(defaults: &IndexMap<String, Value>) -> Self {
        Self {
            parser_options: defaults.clone(),
            ..Default::default()
        }
    }

    pub(crate) fn mark_root(&mut self) {
        self.root = true;
    }

    /// Apply a fragment's own fields on top of the accumulated state
    pub(crate) fn merge_fragment(&mut self, fragment: &ConfigFragment, label: &str) {
        for env in &fragment.environments {
            self.env_sources
                .entry(env.clone())
                .or_insert_with(|| label.to_string());
            self.environments.insert(env.clone());
        }

        for plugin in &fragment.plugins {
            self.plugin_sources
                .entry(plugin.clone())
                .or_insert_with(|| label.to_string());
            self.plugins.insert(plugin.clone());
        }

        Self::merge_map(&mut self.parser_options, &fragment.parser_options);
        Self::merge_map(&mut self.settings, &fragment.settings);

        for (rule, entry) in &fragment.rules {
            self.set_rule(rule, entry, label);
        }
    }

    /// Apply another accumulator's merged state on top of this one
    ///
    /// Equivalent to re-applying every fragment `other` was built from, in
    /// the same order. Source labels travel with the values.
    pub(crate) fn merge_accumulator(&mut self, other: &ConfigAccumulator) {
        for env in &other.environments {
            self.env_sources
                .entry(env.clone())
                .or_insert_with(|| other.env_source(env).to_string());
            self.environments.insert(env.clone());
        }

        for plugin in &other.plugins {
            self.plugin_sources
                .entry(plugin.clone())
                .or_insert_with(|| other.plugin_source(plugin).to_string());
            self.plugins.insert(plugin.clone());
        }

        Self::merge_map(&mut self.parser_options, &other.parser_options);
        Self::merge_map(&mut self.settings, &other.settings);

        for (rule, entry) in &other.rules {
            self.set_rule(rule, entry, other.rule_source(rule));
        }
    }

    fn set_rule(&mut self, rule: &str, entry: &RuleEntry, label: &str) {
        if let Some(previous) = self.rules.get(rule)
            && previous != entry
        {
            trace!(
                "Rule '{}' overridden by '{}': {} -> {}",
                rule, label, previous.severity, entry.severity
            );
        }
        self.rules.insert(rule.to_string(), entry.clone());
        self.rule_sources.insert(rule.to_string(), label.to_string());
    }

    /// Shallow key-wise override
    fn merge_map(target: &mut IndexMap<String, Value>, source: &IndexMap<String, Value>) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }

    pub(crate) fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    pub(crate) fn environments(&self) -> &BTreeSet<String> {
        &self.environments
    }

    pub(crate) fn rules(&self) -> &IndexMap<String, RuleEntry> {
        &self.rules
    }

    /// Label of the fragment that last configured `rule`
    pub(crate) fn rule_source(&self, rule: &str) -> &str {
        self.rule_sources.get(rule).map_or("<unknown>", String::as_str)
    }

    /// Label of the fragment that first listed `env`
    pub(crate) fn env_source(&self, env: &str) -> &str {
        self.env_sources.get(env).map_or("<unknown>", String::as_str)
    }

    /// Label of the fragment that first listed `plugin`
    pub(crate) fn plugin_source(&self, plugin: &str) -> &str {
        self.plugin_sources.get(plugin).map_or("<unknown>", String::as_str)
    }

    pub(crate) fn finish(self) -> ResolvedConfig {
        ResolvedConfig::new(
            self.root,
            self.environments,
            self.parser_options,
            self.plugins,
            self.rules,
            self.settings,
        )
    }
}
