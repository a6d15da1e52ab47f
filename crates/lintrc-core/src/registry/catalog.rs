//! Effective rule catalog for a set of loaded plugins

use indexmap::IndexMap;
use std::fmt;

use super::Registry;
use crate::error::LintrcError;
use crate::result::Result;
use crate::rules::RuleDefinition;

/// Where a rule definition comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleProvider<'a> {
    /// The base catalog shipped with the registry
    Base,
    /// A plugin, by name
    Plugin(&'a str),
}

impl fmt::Display for RuleProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleProvider::Base => f.write_str("base catalog"),
            RuleProvider::Plugin(name) => write!(f, "plugin '{name}'"),
        }
    }
}

/// A rule definition together with its provider
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub provider: RuleProvider<'a>,
    pub definition: &'a RuleDefinition,
}

/// Rules visible to one resolution: the base catalog plus loaded plugins
#[derive(Debug, Default)]
pub struct RuleCatalog<'a> {
    entries: IndexMap<&'a str, CatalogEntry<'a>>,
}

impl<'a> RuleCatalog<'a> {
    /// Build the catalog for `plugins`, which must all be registered
    ///
    /// Fails with [`LintrcError::DuplicateRule`] when two providers declare
    /// the same rule name.
    pub fn build<I, S>(registry: &'a Registry, plugins: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();

        for definition in registry.base_rules() {
            catalog.insert(RuleProvider::Base, definition)?;
        }

        for name in plugins {
            let Some(plugin) = registry.plugin(name.as_ref()) else {
                continue;
            };
            for definition in &plugin.rules {
                catalog.insert(RuleProvider::Plugin(plugin.name.as_str()), definition)?;
            }
        }

        Ok(catalog)
    }

    fn insert(&mut self, provider: RuleProvider<'a>, definition: &'a RuleDefinition) -> Result<()> {
        if let Some(existing) = self.entries.get(definition.name.as_str()) {
            return Err(LintrcError::DuplicateRule {
                rule: definition.name.clone(),
                first: existing.provider.to_string(),
                second: provider.to_string(),
            });
        }
        self.entries.insert(
            definition.name.as_str(),
            CatalogEntry {
                provider,
                definition,
            },
        );
        Ok(())
    }

    pub fn get(&self, rule: &str) -> Option<&CatalogEntry<'a>> {
        self.entries.get(rule)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.entries.contains_key(rule)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry<'a>> {
        self.entries.values()
    }
}
