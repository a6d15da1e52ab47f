//! Configuration fragment: one named, partially specified settings record

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use super::rule_entry::RuleEntry;
use crate::error::LintrcError;
use crate::result::Result;

/// A partially specified configuration record
///
/// Every field is optional on disk. Presets named in `extends` are applied
/// before the fragment's own fields, so the fragment always wins over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFragment {
    /// JSON schema reference (editor support only)
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "JSON schema reference for editor support")]
    pub schema: Option<String>,

    /// Label used in error messages and cycle detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Label used in diagnostics")]
    pub name: Option<String>,

    /// Ignore fragments from ancestor directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Stop looking for configuration in parent directories")]
    pub root: Option<bool>,

    /// Runtime environments whose globals are predefined
    #[serde(
        rename = "env",
        default,
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "deserialize_environments"
    )]
    #[schemars(
        with = "EnvironmentsRepr",
        description = "Environments as a list or as a name → enabled map"
    )]
    pub environments: BTreeSet<String>,

    /// Presets applied before this fragment, lowest precedence first
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_extends"
    )]
    #[schemars(with = "ExtendsRepr", description = "Preset names to extend")]
    pub extends: Vec<String>,

    /// Parser behaviour (language version, module mode, ...)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Options handed to the parser")]
    pub parser_options: IndexMap<String, Value>,

    /// Plugins providing additional rules, environments and presets
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    #[schemars(description = "Plugin names to load")]
    pub plugins: BTreeSet<String>,

    /// Rule name → severity and options
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Rule severity and options")]
    pub rules: IndexMap<String, RuleEntry>,

    /// Shared settings available to every rule
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Shared settings available to every rule")]
    pub settings: IndexMap<String, Value>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
#[allow(dead_code)]
enum EnvironmentsRepr {
    List(Vec<String>),
    Map(IndexMap<String, bool>),
}

#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
#[allow(dead_code)]
enum ExtendsRepr {
    One(String),
    Many(Vec<String>),
}

fn deserialize_environments<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match EnvironmentsRepr::deserialize(deserializer)? {
        EnvironmentsRepr::List(names) => names.into_iter().collect(),
        EnvironmentsRepr::Map(map) => map
            .into_iter()
            .filter_map(|(name, enabled)| enabled.then_some(name))
            .collect(),
    })
}

fn deserialize_extends<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ExtendsRepr::deserialize(deserializer)? {
        ExtendsRepr::One(name) => vec![name],
        ExtendsRepr::Many(names) => names,
    })
}

impl ConfigFragment {
    /// Create an empty fragment with a label
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Mark this fragment as the root of its chain
    pub fn as_root(mut self) -> Self {
        self.root = Some(true);
        self
    }

    pub fn extending(mut self, preset: impl Into<String>) -> Self {
        self.extends.push(preset.into());
        self
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.environments.insert(env.into());
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.insert(plugin.into());
        self
    }

    pub fn with_parser_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parser_options.insert(key.into(), value);
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>, entry: impl Into<RuleEntry>) -> Self {
        self.rules.insert(rule.into(), entry.into());
        self
    }

    /// Whether this fragment stops the ancestor search
    pub fn is_root(&self) -> bool {
        self.root.unwrap_or(false)
    }
}

/// Serialization utilities for fragments
impl ConfigFragment {
    /// Deserialize a fragment from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LintrcError::config_error(format!("Failed to parse JSON config: {e}")))
    }

    /// Deserialize a fragment from JSON with comments and trailing commas
    pub fn from_jsonc(jsonc: &str) -> Result<Self> {
        json5::from_str(jsonc)
            .map_err(|e| LintrcError::config_error(format!("Failed to parse JSONC config: {e}")))
    }

    /// Deserialize a fragment from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LintrcError::config_error(format!("Failed to parse YAML config: {e}")))
    }

    /// Deserialize a fragment from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| LintrcError::config_error(format!("Failed to parse TOML config: {e}")))
    }

    /// Serialize the fragment to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LintrcError::config_error(format!("Failed to serialize config to JSON: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;
    use serde_json::json;

    #[test]
    fn test_parse_full_fragment() {
        let fragment = ConfigFragment::from_json(
            r#"{
                "root": true,
                "env": { "es6": true, "node": true, "browser": false },
                "extends": "lintrc:recommended",
                "parserOptions": { "ecmaVersion": 2018, "sourceType": "module" },
                "plugins": ["import"],
                "rules": {
                    "no-console": "off",
                    "indent": ["error", 2]
                }
            }"#,
        )
        .unwrap();

        assert!(fragment.is_root());
        assert_eq!(
            fragment.environments,
            BTreeSet::from(["es6".to_string(), "node".to_string()])
        );
        assert_eq!(fragment.extends, vec!["lintrc:recommended".to_string()]);
        assert_eq!(fragment.parser_options["ecmaVersion"], json!(2018));
        assert!(fragment.plugins.contains("import"));
        assert_eq!(fragment.rules["no-console"].severity, Severity::Off);
        assert_eq!(fragment.rules["indent"].options, vec![json!(2)]);
    }

    #[test]
    fn test_environment_list_form() {
        let fragment = ConfigFragment::from_json(r#"{ "env": ["browser", "es6"] }"#).unwrap();
        assert_eq!(fragment.environments.len(), 2);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = ConfigFragment::from_json(r#"{ "rulez": {} }"#);
        assert!(matches!(result, Err(LintrcError::ConfigError { .. })));
    }

    #[test]
    fn test_parse_jsonc_with_comments() {
        let fragment = ConfigFragment::from_jsonc(
            r#"{
                // keep console for scripts
                "rules": { "no-console": "off", },
            }"#,
        )
        .unwrap();
        assert_eq!(fragment.rules.len(), 1);
    }

    #[test]
    fn test_parse_yaml_and_toml() {
        let yaml = ConfigFragment::from_yaml(
            "extends:\n  - base\nrules:\n  semi: [error, always]\n",
        )
        .unwrap();
        assert_eq!(yaml.rules["semi"].options, vec![json!("always")]);

        let toml = ConfigFragment::from_toml(
            "root = true\nplugins = [\"import\"]\n\n[rules]\nsemi = \"warn\"\n",
        )
        .unwrap();
        assert!(toml.is_root());
        assert_eq!(toml.rules["semi"].severity, Severity::Warn);
    }

    #[test]
    fn test_empty_fields_are_not_serialized() {
        let fragment = ConfigFragment::named("base").with_rule("semi", Severity::Error);
        let value: Value = serde_json::from_str(&fragment.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({ "name": "base", "rules": { "semi": "error" } }));
    }
}
