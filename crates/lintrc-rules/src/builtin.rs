//! Built-in rule catalog

use lintrc_core::RuleDefinition;

pub mod best_practices;
pub mod possible_errors;
pub mod stylistic;
pub mod variables;

/// Collection of built-in rule definitions
pub struct BuiltinRules;

impl BuiltinRules {
    /// Every built-in rule, grouped by category
    pub fn all_rules() -> Vec<RuleDefinition> {
        let mut rules = Self::possible_errors_rules();
        rules.extend(Self::best_practices_rules());
        rules.extend(Self::variables_rules());
        rules.extend(Self::stylistic_rules());
        rules
    }

    /// Rules catching likely runtime errors or logic mistakes
    pub fn possible_errors_rules() -> Vec<RuleDefinition> {
        possible_errors::rules()
    }

    /// Rules discouraging error-prone patterns
    pub fn best_practices_rules() -> Vec<RuleDefinition> {
        best_practices::rules()
    }

    /// Rules about variable declarations and scoping
    pub fn variables_rules() -> Vec<RuleDefinition> {
        variables::rules()
    }

    /// Formatting and naming rules
    pub fn stylistic_rules() -> Vec<RuleDefinition> {
        stylistic::rules()
    }

    /// Rules enabled by the recommended preset
    pub fn recommended_rules() -> Vec<RuleDefinition> {
        Self::all_rules()
            .into_iter()
            .filter(|rule| rule.recommended && !rule.deprecated)
            .collect()
    }

    /// Look up a built-in rule by name
    pub fn get(name: &str) -> Option<RuleDefinition> {
        Self::all_rules().into_iter().find(|rule| rule.name == name)
    }
}
