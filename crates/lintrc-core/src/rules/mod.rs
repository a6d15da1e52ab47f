//! Rule and environment definitions
//!
//! These are descriptors only: the check logic of a rule lives in the
//! external linting engine. The resolver uses them to decide whether a
//! configured rule exists and whether its options are well-formed.

pub mod schema;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use schema::{OptionSchema, OptionType};

/// Categories for organizing rules
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Likely runtime errors or logic mistakes
    PossibleErrors,
    /// Patterns that make code harder to maintain
    BestPractices,
    /// Variable declaration and usage
    Variables,
    /// Formatting and naming conventions
    Stylistic,
    /// Custom category using a bespoke slug
    Custom(String),
}

impl RuleCategory {
    /// Return the kebab-case slug used for filtering
    pub fn slug(&self) -> &str {
        match self {
            RuleCategory::PossibleErrors => "possible-errors",
            RuleCategory::BestPractices => "best-practices",
            RuleCategory::Variables => "variables",
            RuleCategory::Stylistic => "stylistic",
            RuleCategory::Custom(name) => name.as_str(),
        }
    }

    /// Create a category from its slug, mapping unknown slugs to custom categories
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "possible-errors" | "errors" | "correctness" => RuleCategory::PossibleErrors,
            "best-practices" | "suspicious" => RuleCategory::BestPractices,
            "variables" => RuleCategory::Variables,
            "stylistic" | "style" => RuleCategory::Stylistic,
            other => RuleCategory::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl Serialize for RuleCategory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for RuleCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slug = String::deserialize(deserializer)?;
        Ok(RuleCategory::from_slug(&slug))
    }
}

/// Descriptor of a rule known to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDefinition {
    /// Unique rule name, as used in `rules`
    pub name: String,
    /// Human-readable description of what the rule checks
    pub description: String,
    /// Category this rule belongs to
    pub category: RuleCategory,
    /// Part of the recommended preset
    #[serde(default)]
    pub recommended: bool,
    /// Still accepted but slated for removal
    #[serde(default)]
    pub deprecated: bool,
    /// Schema of the options following the severity
    #[serde(default)]
    pub schema: OptionSchema,
}

impl RuleDefinition {
    /// Create a rule definition without options
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: RuleCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            recommended: false,
            deprecated: false,
            schema: OptionSchema::NoOptions,
        }
    }

    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn with_schema(mut self, schema: OptionSchema) -> Self {
        self.schema = schema;
        self
    }
}

/// A named set of predefined global identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Global identifier → whether it may be reassigned
    #[serde(default)]
    pub globals: IndexMap<String, bool>,
}

impl EnvironmentDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            globals: IndexMap::new(),
        }
    }

    /// Add read-only globals
    pub fn with_globals<I, S>(mut self, globals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.globals
            .extend(globals.into_iter().map(|name| (name.into(), false)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slugs_round_trip() {
        for category in [
            RuleCategory::PossibleErrors,
            RuleCategory::BestPractices,
            RuleCategory::Variables,
            RuleCategory::Stylistic,
        ] {
            assert_eq!(RuleCategory::from_slug(category.slug()), category);
        }
        assert_eq!(
            RuleCategory::from_slug("react"),
            RuleCategory::Custom("react".to_string())
        );
    }

    #[test]
    fn test_rule_definition_from_manifest() {
        let rule: RuleDefinition = serde_json::from_str(
            r#"{
                "name": "import/no-cycle",
                "description": "Forbid import cycles",
                "category": "best-practices",
                "schema": { "kind": "any" }
            }"#,
        )
        .unwrap();
        assert_eq!(rule.category, RuleCategory::BestPractices);
        assert!(!rule.recommended);
        assert_eq!(rule.schema, OptionSchema::Any);
    }
}
