//! The fully merged, immutable configuration handed to the linting engine

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use super::fragment::ConfigFragment;
use super::rule_entry::{RuleEntry, Severity};

/// Resolved configuration
///
/// Produced by [`crate::Resolver`]; every `extends` reference has been
/// flattened and every field is concrete. Fields are only reachable through
/// read-only accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    root: bool,
    #[serde(rename = "env")]
    environments: BTreeSet<String>,
    parser_options: IndexMap<String, Value>,
    plugins: BTreeSet<String>,
    rules: IndexMap<String, RuleEntry>,
    settings: IndexMap<String, Value>,
}

impl ResolvedConfig {
    pub(crate) fn new(
        root: bool,
        environments: BTreeSet<String>,
        parser_options: IndexMap<String, Value>,
        plugins: BTreeSet<String>,
        rules: IndexMap<String, RuleEntry>,
        settings: IndexMap<String, Value>,
    ) -> Self {
        Self {
            root,
            environments,
            parser_options,
            plugins,
            rules,
            settings,
        }
    }

    /// Whether a root fragment took part in the resolution
    pub fn root(&self) -> bool {
        self.root
    }

    pub fn environments(&self) -> &BTreeSet<String> {
        &self.environments
    }

    pub fn parser_options(&self) -> &IndexMap<String, Value> {
        &self.parser_options
    }

    pub fn parser_option(&self, key: &str) -> Option<&Value> {
        self.parser_options.get(key)
    }

    pub fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    pub fn rules(&self) -> &IndexMap<String, RuleEntry> {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.get(name)
    }

    pub fn settings(&self) -> &IndexMap<String, Value> {
        &self.settings
    }

    /// Severity of a rule, `Off` when it is not configured at all
    pub fn severity(&self, name: &str) -> Severity {
        self.rules
            .get(name)
            .map(|entry| entry.severity)
            .unwrap_or(Severity::Off)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.severity(name).is_enabled()
    }

    /// Rules that will run, in the order they were first configured
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.rules
            .iter()
            .filter(|(_, entry)| entry.is_enabled())
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Turn the resolved configuration back into a standalone fragment
    ///
    /// Resolving the returned fragment on its own yields an equal
    /// configuration.
    pub fn to_fragment(&self) -> ConfigFragment {
        ConfigFragment {
            schema: None,
            name: None,
            root: self.root.then_some(true),
            environments: self.environments.clone(),
            extends: Vec::new(),
            parser_options: self.parser_options.clone(),
            plugins: self.plugins.clone(),
            rules: self.rules.clone(),
            settings: self.settings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResolvedConfig {
        let mut rules = IndexMap::new();
        rules.insert("no-console".to_string(), RuleEntry::off());
        rules.insert("semi".to_string(), RuleEntry::error());
        rules.insert("indent".to_string(), RuleEntry::with_options(Severity::Warn, vec![json!(2)]));

        ResolvedConfig::new(
            true,
            BTreeSet::from(["node".to_string()]),
            IndexMap::from([("ecmaVersion".to_string(), json!(2020))]),
            BTreeSet::new(),
            rules,
            IndexMap::new(),
        )
    }

    #[test]
    fn test_severity_lookup() {
        let config = sample();
        assert_eq!(config.severity("semi"), Severity::Error);
        assert_eq!(config.severity("no-console"), Severity::Off);
        assert_eq!(config.severity("not-configured"), Severity::Off);
        assert!(!config.is_enabled("no-console"));
    }

    #[test]
    fn test_enabled_rules_keep_order() {
        let config = sample();
        let names: Vec<&str> = config.enabled_rules().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["semi", "indent"]);
    }

    #[test]
    fn test_to_fragment_has_no_extends() {
        let fragment = sample().to_fragment();
        assert!(fragment.extends.is_empty());
        assert_eq!(fragment.root, Some(true));
        assert_eq!(fragment.rules.len(), 3);
    }
}
