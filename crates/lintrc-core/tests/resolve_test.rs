//! End-to-end resolution tests against a small in-memory registry

use lintrc_core::{
    ConfigFragment, EnvironmentDefinition, LintrcError, OptionSchema, OptionType, Plugin,
    Registry, Resolver, RuleCategory, RuleDefinition, RuleEntry, Severity,
};
use serde_json::json;

fn rule(name: &str, category: RuleCategory) -> RuleDefinition {
    RuleDefinition::new(name, format!("{name} rule"), category)
}

fn registry() -> Registry {
    Registry::builder()
        .rule(rule("no-console", RuleCategory::BestPractices))
        .rule(rule("no-undef", RuleCategory::Variables).recommended())
        .rule(rule("no-unused-vars", RuleCategory::Variables).recommended())
        .rule(
            rule("quotes", RuleCategory::Stylistic).with_schema(OptionSchema::single(
                OptionType::one_of_strings(["single", "double"]),
            )),
        )
        .environment(EnvironmentDefinition::new("es6", "ES2015 globals"))
        .environment(EnvironmentDefinition::new("node", "Node.js globals"))
        .preset(
            "recommended",
            ConfigFragment::default()
                .with_rule("no-undef", Severity::Error)
                .with_rule("no-unused-vars", Severity::Error),
        )
        .preset(
            "prettier",
            ConfigFragment::default().with_rule("quotes", Severity::Off),
        )
        .plugin(
            Plugin::new("prettier").with_rule(rule("prettier/prettier", RuleCategory::Stylistic)),
        )
        .build()
        .unwrap()
}

fn project() -> ConfigFragment {
    ConfigFragment::from_json(
        r#"{
            "root": true,
            "env": { "es6": true, "node": true },
            "extends": ["recommended", "prettier"],
            "parserOptions": { "ecmaVersion": 2018, "sourceType": "script" },
            "plugins": ["prettier"],
            "rules": {
                "prettier/prettier": "error",
                "no-console": "off",
                "no-unused-vars": "error"
            }
        }"#,
    )
    .unwrap()
}

#[test]
fn test_acyclic_chain_resolves_without_extends() {
    let registry = registry();
    let config = Resolver::new(&registry).resolve(&[project()]).unwrap();
    assert!(config.to_fragment().extends.is_empty());
}

#[test]
fn test_later_override_wins() {
    let registry = registry();
    let base = ConfigFragment::named("B").with_rule("no-console", Severity::Warn);
    let derived = ConfigFragment::named("D").with_rule("no-console", Severity::Error);

    let config = Resolver::new(&registry).resolve(&[base, derived]).unwrap();
    assert_eq!(config.severity("no-console"), Severity::Error);
}

#[test]
fn test_environments_are_unioned() {
    let registry = registry();
    let base = ConfigFragment::named("B").with_env("es6");
    let derived = ConfigFragment::named("D").with_env("node");

    let config = Resolver::new(&registry).resolve(&[base, derived]).unwrap();
    let envs: Vec<&str> = config.environments().iter().map(String::as_str).collect();
    assert_eq!(envs, vec!["es6", "node"]);
}

#[test]
fn test_resolution_is_idempotent() {
    let registry = registry();
    let resolver = Resolver::new(&registry);

    let config = resolver.resolve(&[project()]).unwrap();
    let again = resolver.resolve(&[config.to_fragment()]).unwrap();
    assert_eq!(again, config);

    let plain = resolver
        .resolve(&[ConfigFragment::default().with_rule("quotes", RuleEntry::with_options(
            Severity::Warn,
            vec![json!("double")],
        ))])
        .unwrap();
    assert_eq!(resolver.resolve(&[plain.to_fragment()]).unwrap(), plain);
}

#[test]
fn test_mutual_extends_is_cyclic() {
    let registry = Registry::builder()
        .preset("A", ConfigFragment::default().extending("B"))
        .preset("B", ConfigFragment::default().extending("A"))
        .build()
        .unwrap();

    let err = Resolver::new(&registry)
        .resolve(&[ConfigFragment::default().extending("A")])
        .unwrap_err();
    assert_eq!(err.to_string(), "Cyclic extends detected: A → B → A");
}

#[test]
fn test_unknown_rule() {
    let registry = registry();
    let err = Resolver::new(&registry)
        .resolve(&[ConfigFragment::default().with_rule("no-such-rule", Severity::Error)])
        .unwrap_err();
    assert!(matches!(err, LintrcError::UnknownRule { ref rule, .. } if rule == "no-such-rule"));
}

#[test]
fn test_no_console_example() {
    let registry = registry();
    let first = ConfigFragment::from_json(r#"{ "rules": { "no-console": "off" } }"#).unwrap();
    let second = ConfigFragment::from_json(
        r#"{ "rules": { "no-console": "error", "no-unused-vars": "error" } }"#,
    )
    .unwrap();

    let config = Resolver::new(&registry).resolve(&[first, second]).unwrap();
    let rules: Vec<(&str, Severity)> = config
        .rules()
        .iter()
        .map(|(name, entry)| (name.as_str(), entry.severity))
        .collect();
    assert_eq!(
        rules,
        vec![
            ("no-console", Severity::Error),
            ("no-unused-vars", Severity::Error)
        ]
    );
}

#[test]
fn test_plugin_rule_without_plugin_is_unknown() {
    let registry = registry();
    let mut fragment = project();
    fragment.plugins.clear();

    let err = Resolver::new(&registry).resolve(&[fragment]).unwrap_err();
    assert!(
        matches!(err, LintrcError::UnknownRule { ref rule, .. } if rule == "prettier/prettier")
    );
}

#[test]
fn test_duplicate_rule_across_loaded_plugins() {
    let registry = Registry::builder()
        .plugin(Plugin::new("a").with_rule(rule("shared/rule", RuleCategory::BestPractices)))
        .plugin(Plugin::new("b").with_rule(rule("shared/rule", RuleCategory::BestPractices)))
        .build()
        .unwrap();
    let resolver = Resolver::new(&registry);

    assert!(resolver.resolve(&[ConfigFragment::default().with_plugin("a")]).is_ok());

    let err = resolver
        .resolve(&[ConfigFragment::default().with_plugin("a").with_plugin("b")])
        .unwrap_err();
    assert!(matches!(err, LintrcError::DuplicateRule { ref rule, .. } if rule == "shared/rule"));
}

#[test]
fn test_plugin_presets_can_be_extended() {
    let registry = Registry::builder()
        .plugin(
            Plugin::new("import")
                .with_rule(rule("import/no-cycle", RuleCategory::BestPractices))
                .with_config(
                    "recommended",
                    ConfigFragment::default()
                        .with_plugin("import")
                        .with_rule("import/no-cycle", Severity::Error),
                ),
        )
        .build()
        .unwrap();

    let config = Resolver::new(&registry)
        .resolve(&[ConfigFragment::default().extending("plugin:import/recommended")])
        .unwrap();
    assert!(config.plugins().contains("import"));
    assert!(config.is_enabled("import/no-cycle"));
}

#[test]
fn test_invalid_options_message() {
    let registry = registry();
    let fragment = ConfigFragment::named("project").with_rule(
        "quotes",
        RuleEntry::with_options(Severity::Error, vec![json!("backtick")]),
    );

    let err = Resolver::new(&registry).resolve(&[fragment]).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Invalid options for rule 'quotes': options[0] must be one of "single", "double", got "backtick""#
    );
}

#[test]
fn test_resolved_config_snapshot() {
    let registry = registry();
    let config = Resolver::new(&registry).resolve(&[project()]).unwrap();

    insta::assert_yaml_snapshot!(config, @r#"
    root: true
    env:
      - es6
      - node
    parserOptions:
      ecmaVersion: 2018
      sourceType: script
    plugins:
      - prettier
    rules:
      no-undef: error
      no-unused-vars: error
      quotes: "off"
      prettier/prettier: error
      no-console: "off"
    settings: {}
    "#);
}
