//! Rules about variable declarations and scoping

use lintrc_core::{OptionSchema, OptionType, RuleCategory, RuleDefinition};

pub const NO_DELETE_VAR: &str = "no-delete-var";
pub const NO_SHADOW: &str = "no-shadow";
pub const NO_SHADOW_RESTRICTED_NAMES: &str = "no-shadow-restricted-names";
pub const NO_UNDEF: &str = "no-undef";
pub const NO_UNDEF_INIT: &str = "no-undef-init";
pub const NO_UNUSED_VARS: &str = "no-unused-vars";
pub const NO_USE_BEFORE_DEFINE: &str = "no-use-before-define";

fn rule(name: &str, description: &str) -> RuleDefinition {
    RuleDefinition::new(name, description, RuleCategory::Variables)
}

fn no_unused_vars_options() -> OptionType {
    OptionType::OneOf {
        variants: vec![
            OptionType::one_of_strings(["all", "local"]),
            OptionType::object([
                ("vars", OptionType::one_of_strings(["all", "local"])),
                ("args", OptionType::one_of_strings(["all", "after-used", "none"])),
                ("caughtErrors", OptionType::one_of_strings(["all", "none"])),
                ("ignoreRestSiblings", OptionType::Boolean),
                ("argsIgnorePattern", OptionType::string()),
                ("varsIgnorePattern", OptionType::string()),
                ("caughtErrorsIgnorePattern", OptionType::string()),
            ]),
        ],
    }
}

pub fn rules() -> Vec<RuleDefinition> {
    vec![
        rule(NO_DELETE_VAR, "Disallow deleting variables").recommended(),
        rule(NO_SHADOW, "Disallow variable declarations from shadowing outer variables")
            .with_schema(OptionSchema::single(OptionType::object([
                ("builtinGlobals", OptionType::Boolean),
                ("hoist", OptionType::one_of_strings(["all", "functions", "never"])),
                ("allow", OptionType::array_of(OptionType::string())),
            ]))),
        rule(NO_SHADOW_RESTRICTED_NAMES, "Disallow identifiers from shadowing restricted names")
            .recommended(),
        rule(NO_UNDEF, "Disallow the use of undeclared variables")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "typeof",
                OptionType::Boolean,
            )]))),
        rule(NO_UNDEF_INIT, "Disallow initializing variables to `undefined`"),
        rule(NO_UNUSED_VARS, "Disallow unused variables")
            .recommended()
            .with_schema(OptionSchema::single(no_unused_vars_options())),
        rule(NO_USE_BEFORE_DEFINE, "Disallow the use of variables before they are defined")
            .with_schema(OptionSchema::single(OptionType::OneOf {
                variants: vec![
                    OptionType::one_of_strings(["nofunc"]),
                    OptionType::object([
                        ("functions", OptionType::Boolean),
                        ("classes", OptionType::Boolean),
                        ("variables", OptionType::Boolean),
                    ]),
                ],
            })),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_unused_vars_options() {
        let schema = OptionSchema::single(no_unused_vars_options());
        assert!(schema.validate(&[json!("local")]).is_ok());
        assert!(
            schema
                .validate(&[json!({ "args": "none", "argsIgnorePattern": "^_" })])
                .is_ok()
        );
        assert!(schema.validate(&[json!({ "args": "some" })]).is_err());
    }
}
