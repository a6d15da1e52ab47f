//! Built-in presets
//!
//! - `lintrc:recommended`: every recommended rule as an error
//! - `lintrc:all`: every non-deprecated rule as an error
//! - `prettier`: turns off rules that conflict with an external formatter
//! - `eslint:recommended`: alias of `lintrc:recommended`, so existing
//!   project configurations resolve unchanged

use lintrc_core::{ConfigFragment, Severity};

use crate::builtin::BuiltinRules;

pub const RECOMMENDED: &str = "lintrc:recommended";
pub const ALL: &str = "lintrc:all";
pub const PRETTIER: &str = "prettier";
pub const ESLINT_RECOMMENDED: &str = "eslint:recommended";

/// Collection of built-in presets
pub struct BuiltinPresets;

impl BuiltinPresets {
    /// All presets as `(name, fragment)` pairs
    pub fn all() -> Vec<(&'static str, ConfigFragment)> {
        vec![
            (RECOMMENDED, Self::recommended()),
            (ALL, Self::all_rules()),
            (PRETTIER, Self::prettier()),
            (ESLINT_RECOMMENDED, Self::eslint_recommended()),
        ]
    }

    pub fn recommended() -> ConfigFragment {
        BuiltinRules::recommended_rules()
            .into_iter()
            .fold(ConfigFragment::named(RECOMMENDED), |fragment, rule| {
                fragment.with_rule(rule.name, Severity::Error)
            })
    }

    pub fn all_rules() -> ConfigFragment {
        BuiltinRules::all_rules()
            .into_iter()
            .filter(|rule| !rule.deprecated)
            .fold(ConfigFragment::named(ALL), |fragment, rule| {
                fragment.with_rule(rule.name, Severity::Error)
            })
    }

    pub fn eslint_recommended() -> ConfigFragment {
        ConfigFragment::named(ESLINT_RECOMMENDED).extending(RECOMMENDED)
    }

    /// Disable every stylistic rule, including deprecated ones
    pub fn prettier() -> ConfigFragment {
        BuiltinRules::stylistic_rules()
            .into_iter()
            .chain(BuiltinRules::get(crate::builtin::possible_errors::NO_EXTRA_SEMI))
            .fold(ConfigFragment::named(PRETTIER), |fragment, rule| {
                fragment.with_rule(rule.name, Severity::Off)
            })
    }
}
