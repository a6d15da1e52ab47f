//! Configuration resolution
//!
//! Flattens an ordered chain of fragments and the presets they extend into a
//! single [`ResolvedConfig`], then validates the result against the rules,
//! environments and plugins known to the [`Registry`].
//!
//! Resolution is a pure function of the registry, the options and the input
//! chain. The resolver keeps no state between calls.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

use crate::config::merge::ConfigAccumulator;
use crate::config::{ConfigFragment, ResolvedConfig};
use crate::error::LintrcError;
use crate::registry::{Registry, RuleCatalog};
use crate::result::Result;

/// Tunables for a [`Resolver`]
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    /// Parser options every resolution starts from
    pub default_parser_options: IndexMap<String, Value>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            default_parser_options: IndexMap::from([
                ("ecmaVersion".to_string(), json!("latest")),
                ("sourceType".to_string(), json!("module")),
            ]),
        }
    }
}

/// Whether an applied fragment came from the input chain or the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentOrigin {
    Chain,
    Preset,
}

/// One fragment applied during resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFragment {
    pub label: String,
    pub origin: FragmentOrigin,
    /// Number of `extends` hops from the chain fragment (0 for the fragment itself)
    pub depth: usize,
    /// Times the fragment was merged; repeated `extends` of a preset reuse
    /// its first expansion and only bump this count
    pub applications: usize,
}

/// Record of how a configuration was assembled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionTrace {
    /// Fragments dropped because a later fragment is marked `root`
    pub skipped: Vec<String>,
    /// Fragments in application order, lowest precedence first
    pub applied: Vec<AppliedFragment>,
    /// Rule name → label of the fragment that set it last
    pub rule_sources: IndexMap<String, String>,
}

/// Resolves fragment chains against a registry
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    registry: &'a Registry,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self::with_options(registry, ResolverOptions::default())
    }

    pub fn with_options(registry: &'a Registry, options: ResolverOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Resolve `fragments`, ordered most general first
    pub fn resolve(&self, fragments: &[ConfigFragment]) -> Result<ResolvedConfig> {
        self.resolve_with_trace(fragments).map(|(config, _)| config)
    }

    /// Resolve `fragments` and report which fragments were applied
    pub fn resolve_with_trace(
        &self,
        fragments: &[ConfigFragment],
    ) -> Result<(ResolvedConfig, ResolutionTrace)> {
        if fragments.is_empty() {
            return Err(LintrcError::EmptyChain);
        }

        let labels: Vec<String> = fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| fragment_label(fragment, index))
            .collect();

        // The last root fragment starts the chain
        let start = fragments.iter().rposition(ConfigFragment::is_root).unwrap_or(0);

        let mut acc = ConfigAccumulator::with_parser_defaults(&self.options.default_parser_options);
        let mut pass = MergePass {
            registry: self.registry,
            stack: Vec::new(),
            expanded: HashMap::new(),
            trace: ResolutionTrace {
                skipped: labels[..start].to_vec(),
                ..Default::default()
            },
            trace_index: HashMap::new(),
        };

        if !pass.trace.skipped.is_empty() {
            debug!(
                "Root fragment '{}' hides {} ancestor fragment(s)",
                labels[start],
                pass.trace.skipped.len()
            );
        }

        for (fragment, label) in fragments[start..].iter().zip(&labels[start..]) {
            if fragment.is_root() {
                acc.mark_root();
            }
            pass.apply(&mut acc, fragment, label, FragmentOrigin::Chain, 0)?;
        }

        validate(self.registry, &acc)?;

        let mut trace = pass.trace;
        trace.rule_sources = acc
            .rules()
            .keys()
            .map(|rule| (rule.clone(), acc.rule_source(rule).to_string()))
            .collect();

        let config = acc.finish();
        debug!(
            "Resolved configuration with {} rule(s), {} enabled",
            config.rules().len(),
            config.enabled_rules().count()
        );
        Ok((config, trace))
    }
}

/// Label used for a chain fragment in errors and traces
fn fragment_label(fragment: &ConfigFragment, index: usize) -> String {
    fragment
        .name
        .clone()
        .unwrap_or_else(|| format!("fragment #{index}"))
}

/// State of one resolution
struct MergePass<'r> {
    registry: &'r Registry,
    /// Presets currently being expanded, outermost first
    stack: Vec<String>,
    /// Preset name → its fully expanded contribution, built on first use
    expanded: HashMap<String, ConfigAccumulator>,
    trace: ResolutionTrace,
    /// Preset name → its entry in `trace.applied`
    trace_index: HashMap<String, usize>,
}

impl MergePass<'_> {
    /// Apply the presets `fragment` extends, then the fragment itself
    fn apply(
        &mut self,
        acc: &mut ConfigAccumulator,
        fragment: &ConfigFragment,
        label: &str,
        origin: FragmentOrigin,
        depth: usize,
    ) -> Result<()> {
        for name in &fragment.extends {
            self.apply_preset(acc, name, label, depth + 1)?;
        }

        debug!("Applying {:?} fragment '{}' (depth {})", origin, label, depth);
        acc.merge_fragment(fragment, label);
        if origin == FragmentOrigin::Preset {
            self.trace_index
                .insert(label.to_string(), self.trace.applied.len());
        }
        self.trace.applied.push(AppliedFragment {
            label: label.to_string(),
            origin,
            depth,
            applications: 1,
        });
        Ok(())
    }

    /// Merge preset `name` into `acc`, expanding it on first use only
    ///
    /// Merging is a key-wise override plus set unions, so merging the cached
    /// expansion gives the same result as walking the preset again.
    fn apply_preset(
        &mut self,
        acc: &mut ConfigAccumulator,
        name: &str,
        referrer: &str,
        depth: usize,
    ) -> Result<()> {
        if let Some(position) = self.stack.iter().position(|open| open == name) {
            let mut chain = self.stack[position..].to_vec();
            chain.push(name.to_string());
            return Err(LintrcError::cyclic_extends(chain));
        }

        if let Some(expanded) = self.expanded.get(name) {
            trace!("Reusing expanded preset '{}' for '{}'", name, referrer);
            acc.merge_accumulator(expanded);
            if let Some(&index) = self.trace_index.get(name) {
                self.trace.applied[index].applications += 1;
            }
            return Ok(());
        }

        let registry = self.registry;
        let preset = registry
            .preset(name)
            .ok_or_else(|| LintrcError::unknown_preset(name, referrer))?;

        self.stack.push(name.to_string());
        let mut expanded = ConfigAccumulator::default();
        self.apply(&mut expanded, preset, name, FragmentOrigin::Preset, depth)?;
        self.stack.pop();

        acc.merge_accumulator(&expanded);
        self.expanded.insert(name.to_string(), expanded);
        Ok(())
    }
}

/// Check the merged state against the registry
fn validate(registry: &Registry, acc: &ConfigAccumulator) -> Result<()> {
    for plugin in acc.plugins() {
        if registry.plugin(plugin).is_none() {
            return Err(LintrcError::UnknownPlugin {
                name: plugin.clone(),
                source_label: acc.plugin_source(plugin).to_string(),
            });
        }
    }

    let catalog = RuleCatalog::build(registry, acc.plugins())?;

    for env in acc.environments() {
        if !registry.knows_environment(env, acc.plugins()) {
            return Err(LintrcError::UnknownEnvironment {
                name: env.clone(),
                source_label: acc.env_source(env).to_string(),
            });
        }
    }

    for (rule, entry) in acc.rules() {
        let Some(known) = catalog.get(rule) else {
            return Err(LintrcError::unknown_rule(rule, acc.rule_source(rule)));
        };

        if !entry.is_enabled() {
            continue;
        }

        known
            .definition
            .schema
            .validate(&entry.options)
            .map_err(|message| LintrcError::invalid_options(rule, message))?;

        if known.definition.deprecated {
            warn!(
                "Rule '{}' ({}) is deprecated, enabled by '{}'",
                rule,
                known.provider,
                acc.rule_source(rule)
            );
        }
    }

    Ok(())
}
