//! Formatting and naming rules

use lintrc_core::{OptionSchema, OptionType, RuleCategory, RuleDefinition};

pub const BRACE_STYLE: &str = "brace-style";
pub const CAMELCASE: &str = "camelcase";
pub const COMMA_DANGLE: &str = "comma-dangle";
pub const EOL_LAST: &str = "eol-last";
pub const INDENT: &str = "indent";
pub const LINEBREAK_STYLE: &str = "linebreak-style";
pub const MAX_LEN: &str = "max-len";
pub const NO_MIXED_SPACES_AND_TABS: &str = "no-mixed-spaces-and-tabs";
pub const NO_TRAILING_SPACES: &str = "no-trailing-spaces";
pub const QUOTES: &str = "quotes";
pub const SEMI: &str = "semi";

fn rule(name: &str, description: &str) -> RuleDefinition {
    RuleDefinition::new(name, description, RuleCategory::Stylistic)
}

pub fn rules() -> Vec<RuleDefinition> {
    vec![
        rule(BRACE_STYLE, "Enforce consistent brace style for blocks").with_schema(
            OptionSchema::tuple(vec![
                OptionType::one_of_strings(["1tbs", "stroustrup", "allman"]),
                OptionType::object([("allowSingleLine", OptionType::Boolean)]),
            ]),
        ),
        rule(CAMELCASE, "Enforce camelcase naming convention").with_schema(
            OptionSchema::single(OptionType::object([
                ("properties", OptionType::one_of_strings(["always", "never"])),
                ("ignoreDestructuring", OptionType::Boolean),
                ("ignoreImports", OptionType::Boolean),
                ("allow", OptionType::array_of(OptionType::string())),
            ])),
        ),
        rule(COMMA_DANGLE, "Require or disallow trailing commas").with_schema(
            OptionSchema::single(OptionType::one_of_strings([
                "never",
                "always",
                "always-multiline",
                "only-multiline",
            ])),
        ),
        rule(EOL_LAST, "Require or disallow newline at the end of files").with_schema(
            OptionSchema::single(OptionType::one_of_strings(["always", "never"])),
        ),
        rule(INDENT, "Enforce consistent indentation").with_schema(OptionSchema::tuple(vec![
            OptionType::OneOf {
                variants: vec![
                    OptionType::one_of_strings(["tab"]),
                    OptionType::integer_at_least(0),
                ],
            },
            OptionType::object([
                ("SwitchCase", OptionType::integer_at_least(0)),
                ("ignoreComments", OptionType::Boolean),
            ]),
        ])),
        rule(LINEBREAK_STYLE, "Enforce consistent linebreak style").with_schema(
            OptionSchema::single(OptionType::one_of_strings(["unix", "windows"])),
        ),
        rule(MAX_LEN, "Enforce a maximum line length").with_schema(OptionSchema::tuple(vec![
            OptionType::OneOf {
                variants: vec![
                    OptionType::integer_at_least(0),
                    OptionType::object([
                        ("code", OptionType::integer_at_least(0)),
                        ("tabWidth", OptionType::integer_at_least(0)),
                        ("ignorePattern", OptionType::string()),
                        ("ignoreComments", OptionType::Boolean),
                        ("ignoreStrings", OptionType::Boolean),
                        ("ignoreUrls", OptionType::Boolean),
                    ]),
                ],
            },
            OptionType::integer_at_least(0),
        ])),
        rule(NO_MIXED_SPACES_AND_TABS, "Disallow mixed spaces and tabs for indentation")
            .deprecated()
            .with_schema(OptionSchema::single(OptionType::one_of_strings(["smart-tabs"]))),
        rule(NO_TRAILING_SPACES, "Disallow trailing whitespace at the end of lines").with_schema(
            OptionSchema::single(OptionType::object([
                ("skipBlankLines", OptionType::Boolean),
                ("ignoreComments", OptionType::Boolean),
            ])),
        ),
        rule(QUOTES, "Enforce the consistent use of either backticks, double, or single quotes")
            .with_schema(OptionSchema::tuple(vec![
                OptionType::one_of_strings(["single", "double", "backtick"]),
                OptionType::OneOf {
                    variants: vec![
                        OptionType::one_of_strings(["avoid-escape"]),
                        OptionType::object([
                            ("avoidEscape", OptionType::Boolean),
                            ("allowTemplateLiterals", OptionType::Boolean),
                        ]),
                    ],
                },
            ])),
        rule(SEMI, "Require or disallow semicolons instead of ASI").with_schema(
            OptionSchema::tuple(vec![
                OptionType::one_of_strings(["always", "never"]),
                OptionType::object([
                    ("omitLastInOneLineBlock", OptionType::Boolean),
                    (
                        "beforeStatementContinuationChars",
                        OptionType::one_of_strings(["always", "any", "never"]),
                    ),
                ]),
            ]),
        ),
    ]
}
