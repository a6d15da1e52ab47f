//! Rules discouraging error-prone patterns

use lintrc_core::{OptionSchema, OptionType, RuleCategory, RuleDefinition};

pub const COMPLEXITY: &str = "complexity";
pub const CURLY: &str = "curly";
pub const DEFAULT_CASE: &str = "default-case";
pub const DOT_NOTATION: &str = "dot-notation";
pub const EQEQEQ: &str = "eqeqeq";
pub const NO_CALLER: &str = "no-caller";
pub const NO_EMPTY_PATTERN: &str = "no-empty-pattern";
pub const NO_EVAL: &str = "no-eval";
pub const NO_FALLTHROUGH: &str = "no-fallthrough";
pub const NO_GLOBAL_ASSIGN: &str = "no-global-assign";
pub const NO_IMPLIED_EVAL: &str = "no-implied-eval";
pub const NO_REDECLARE: &str = "no-redeclare";
pub const NO_SELF_ASSIGN: &str = "no-self-assign";
pub const NO_USELESS_ESCAPE: &str = "no-useless-escape";

fn rule(name: &str, description: &str) -> RuleDefinition {
    RuleDefinition::new(name, description, RuleCategory::BestPractices)
}

pub fn rules() -> Vec<RuleDefinition> {
    vec![
        rule(COMPLEXITY, "Enforce a maximum cyclomatic complexity").with_schema(
            OptionSchema::single(OptionType::OneOf {
                variants: vec![
                    OptionType::integer_at_least(0),
                    OptionType::object([("max", OptionType::integer_at_least(0))]),
                ],
            }),
        ),
        rule(CURLY, "Enforce consistent brace style for control statements").with_schema(
            OptionSchema::tuple(vec![
                OptionType::one_of_strings(["all", "multi", "multi-line", "multi-or-nest"]),
                OptionType::one_of_strings(["consistent"]),
            ]),
        ),
        rule(DEFAULT_CASE, "Require `default` cases in `switch` statements").with_schema(
            OptionSchema::single(OptionType::object([(
                "commentPattern",
                OptionType::string(),
            )])),
        ),
        rule(DOT_NOTATION, "Enforce dot notation whenever possible").with_schema(
            OptionSchema::single(OptionType::object([
                ("allowKeywords", OptionType::Boolean),
                ("allowPattern", OptionType::string()),
            ])),
        ),
        rule(EQEQEQ, "Require the use of `===` and `!==`").with_schema(OptionSchema::tuple(
            vec![
                OptionType::one_of_strings(["always", "smart"]),
                OptionType::object([(
                    "null",
                    OptionType::one_of_strings(["always", "never", "ignore"]),
                )]),
            ],
        )),
        rule(NO_CALLER, "Disallow the use of `arguments.caller` or `arguments.callee`"),
        rule(NO_EMPTY_PATTERN, "Disallow empty destructuring patterns").recommended(),
        rule(NO_EVAL, "Disallow the use of `eval()`").with_schema(OptionSchema::single(
            OptionType::object([("allowIndirect", OptionType::Boolean)]),
        )),
        rule(NO_FALLTHROUGH, "Disallow fallthrough of `case` statements")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([
                ("commentPattern", OptionType::string()),
                ("allowEmptyCase", OptionType::Boolean),
            ]))),
        rule(NO_GLOBAL_ASSIGN, "Disallow assignments to native objects or read-only globals")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "exceptions",
                OptionType::array_of(OptionType::string()),
            )]))),
        rule(NO_IMPLIED_EVAL, "Disallow the use of `eval()`-like methods"),
        rule(NO_REDECLARE, "Disallow variable redeclaration")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "builtinGlobals",
                OptionType::Boolean,
            )]))),
        rule(NO_SELF_ASSIGN, "Disallow assignments where both sides are exactly the same")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "props",
                OptionType::Boolean,
            )]))),
        rule(NO_USELESS_ESCAPE, "Disallow unnecessary escape characters").recommended(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn find(name: &str) -> RuleDefinition {
        rules().into_iter().find(|rule| rule.name == name).unwrap()
    }

    #[test]
    fn test_eqeqeq_options() {
        let schema = find(EQEQEQ).schema;
        assert!(schema.validate(&[json!("smart")]).is_ok());
        assert!(
            schema
                .validate(&[json!("always"), json!({ "null": "ignore" })])
                .is_ok()
        );
        assert!(schema.validate(&[json!("sometimes")]).is_err());
    }

    #[test]
    fn test_complexity_accepts_number_or_object() {
        let schema = find(COMPLEXITY).schema;
        assert!(schema.validate(&[json!(10)]).is_ok());
        assert!(schema.validate(&[json!({ "max": 10 })]).is_ok());
        assert!(schema.validate(&[json!("high")]).is_err());
    }
}
