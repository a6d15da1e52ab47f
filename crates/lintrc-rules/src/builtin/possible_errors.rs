//! Rules for likely runtime errors and logic mistakes

use lintrc_core::{OptionSchema, OptionType, RuleCategory, RuleDefinition};

pub const NO_CONSOLE: &str = "no-console";
pub const NO_COND_ASSIGN: &str = "no-cond-assign";
pub const NO_CONSTANT_CONDITION: &str = "no-constant-condition";
pub const NO_DEBUGGER: &str = "no-debugger";
pub const NO_DUPE_KEYS: &str = "no-dupe-keys";
pub const NO_DUPLICATE_CASE: &str = "no-duplicate-case";
pub const NO_EMPTY: &str = "no-empty";
pub const NO_EXTRA_SEMI: &str = "no-extra-semi";
pub const NO_SPARSE_ARRAYS: &str = "no-sparse-arrays";
pub const NO_UNREACHABLE: &str = "no-unreachable";
pub const NO_UNSAFE_FINALLY: &str = "no-unsafe-finally";
pub const GETTER_RETURN: &str = "getter-return";
pub const USE_ISNAN: &str = "use-isnan";
pub const VALID_TYPEOF: &str = "valid-typeof";

fn rule(name: &str, description: &str) -> RuleDefinition {
    RuleDefinition::new(name, description, RuleCategory::PossibleErrors)
}

pub fn rules() -> Vec<RuleDefinition> {
    vec![
        rule(NO_CONSOLE, "Disallow the use of `console`").with_schema(OptionSchema::single(
            OptionType::object([("allow", OptionType::array_of(OptionType::string()))]),
        )),
        rule(NO_COND_ASSIGN, "Disallow assignment operators in conditional expressions")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::one_of_strings([
                "except-parens",
                "always",
            ]))),
        rule(NO_CONSTANT_CONDITION, "Disallow constant expressions in conditions")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "checkLoops",
                OptionType::Boolean,
            )]))),
        rule(NO_DEBUGGER, "Disallow the use of `debugger`").recommended(),
        rule(NO_DUPE_KEYS, "Disallow duplicate keys in object literals").recommended(),
        rule(NO_DUPLICATE_CASE, "Disallow duplicate case labels").recommended(),
        rule(NO_EMPTY, "Disallow empty block statements")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "allowEmptyCatch",
                OptionType::Boolean,
            )]))),
        rule(NO_EXTRA_SEMI, "Disallow unnecessary semicolons").deprecated(),
        rule(NO_SPARSE_ARRAYS, "Disallow sparse arrays").recommended(),
        rule(
            NO_UNREACHABLE,
            "Disallow unreachable code after `return`, `throw`, `continue`, and `break`",
        )
        .recommended(),
        rule(NO_UNSAFE_FINALLY, "Disallow control flow statements in `finally` blocks")
            .recommended(),
        rule(GETTER_RETURN, "Enforce `return` statements in getters")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "allowImplicit",
                OptionType::Boolean,
            )]))),
        rule(USE_ISNAN, "Require calls to `isNaN()` when checking for `NaN`")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([
                ("enforceForSwitchCase", OptionType::Boolean),
                ("enforceForIndexOf", OptionType::Boolean),
            ]))),
        rule(VALID_TYPEOF, "Enforce comparing `typeof` expressions against valid strings")
            .recommended()
            .with_schema(OptionSchema::single(OptionType::object([(
                "requireStringLiterals",
                OptionType::Boolean,
            )]))),
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
    fn test_no_console_allow_list() {
        let schema = find(NO_CONSOLE).schema;
        assert!(schema.validate(&[json!({ "allow": ["warn", "error"] })]).is_ok());
        assert!(schema.validate(&[json!({ "allow": "warn" })]).is_err());
    }

    #[test]
    fn test_no_console_is_not_recommended() {
        assert!(!find(NO_CONSOLE).recommended);
        assert!(find(NO_DEBUGGER).recommended);
    }
}
