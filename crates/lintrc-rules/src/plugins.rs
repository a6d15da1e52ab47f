//! Plugins bundled with the built-in catalog

use lintrc_core::{ConfigFragment, OptionSchema, OptionType, Plugin, RuleCategory, RuleDefinition, Severity};

use crate::presets::PRETTIER;

pub const PRETTIER_RULE: &str = "prettier/prettier";

/// The `prettier` plugin: reports formatter differences as a single rule
///
/// Its `recommended` config loads the plugin, enables the rule and extends
/// the `prettier` preset so no stylistic rule fights the formatter.
pub fn prettier() -> Plugin {
    let mut plugin = Plugin::new("prettier")
        .with_rule(
            RuleDefinition::new(
                PRETTIER_RULE,
                "Report differences from the formatter's output",
                RuleCategory::Stylistic,
            )
            .with_schema(OptionSchema::tuple(vec![
                OptionType::Object {
                    properties: Default::default(),
                    required: Vec::new(),
                    additional_properties: true,
                },
                OptionType::object([
                    ("usePrettierrc", OptionType::Boolean),
                    ("fileInfoOptions", OptionType::Any),
                ]),
            ])),
        )
        .with_config(
            "recommended",
            ConfigFragment::default()
                .extending(PRETTIER)
                .with_plugin("prettier")
                .with_rule(PRETTIER_RULE, Severity::Error),
        );
    plugin.version = crate::VERSION.to_string();
    plugin.description = "Run the formatter as a lint rule".to_string();
    plugin
}

/// All bundled plugins
pub fn all() -> Vec<Plugin> {
    vec![prettier()]
}
