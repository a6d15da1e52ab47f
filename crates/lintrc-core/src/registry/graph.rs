//! Static analysis of the preset `extends` graph
//!
//! Resolution detects cycles lazily, only along the chain it follows. This
//! module checks every registered preset at once, which is what
//! `lintrc presets check` reports.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

use super::Registry;

/// Problem found in the preset graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetIssue {
    /// Presets that extend each other; the first name is repeated at the end
    Cycle(Vec<String>),
    /// A preset extends a name that is not registered
    Dangling { preset: String, missing: String },
}

impl fmt::Display for PresetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetIssue::Cycle(cycle) => write!(f, "cycle: {}", cycle.join(" → ")),
            PresetIssue::Dangling { preset, missing } => {
                write!(f, "'{preset}' extends unknown preset '{missing}'")
            }
        }
    }
}

/// Directed graph: preset → preset it extends
pub(crate) struct PresetGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    dangling: Vec<PresetIssue>,
}

impl PresetGraph {
    pub(crate) fn build(registry: &Registry) -> Self {
        let mut this = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            dangling: Vec::new(),
        };

        for name in registry.preset_names() {
            this.add_node(&name);
        }

        for name in registry.preset_names() {
            let Some(fragment) = registry.preset(&name) else {
                continue;
            };
            for target in &fragment.extends {
                if registry.preset(target).is_some() {
                    let from = this.add_node(&name);
                    let to = this.add_node(target);
                    this.graph.add_edge(from, to, ());
                } else {
                    this.dangling.push(PresetIssue::Dangling {
                        preset: name.clone(),
                        missing: target.clone(),
                    });
                }
            }
        }

        this
    }

    fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Strongly connected components with more than one node, or self-loops
    fn find_cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || (scc.len() == 1 && self.graph.contains_edge(scc[0], scc[0]))
            })
            .map(|scc| {
                let mut cycle: Vec<String> =
                    scc.iter().map(|&idx| self.graph[idx].clone()).collect();
                cycle.sort();
                if let Some(first) = cycle.first().cloned() {
                    cycle.push(first);
                }
                cycle
            })
            .collect();
        cycles.sort();
        cycles
    }

    pub(crate) fn issues(self) -> Vec<PresetIssue> {
        let mut issues: Vec<PresetIssue> = self
            .find_cycles()
            .into_iter()
            .map(PresetIssue::Cycle)
            .collect();
        issues.extend(self.dangling);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFragment;

    #[test]
    fn test_clean_registry_has_no_issues() {
        let registry = Registry::builder()
            .preset("base", ConfigFragment::default())
            .preset("strict", ConfigFragment::default().extending("base"))
            .build()
            .unwrap();
        assert!(registry.check_presets().is_empty());
    }

    #[test]
    fn test_detects_cycle_and_dangling_reference() {
        let registry = Registry::builder()
            .preset("a", ConfigFragment::default().extending("b"))
            .preset("b", ConfigFragment::default().extending("c"))
            .preset("c", ConfigFragment::default().extending("a"))
            .preset("d", ConfigFragment::default().extending("missing"))
            .build()
            .unwrap();

        let issues = registry.check_presets();
        assert_eq!(
            issues,
            vec![
                PresetIssue::Cycle(vec![
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "a".to_string()
                ]),
                PresetIssue::Dangling {
                    preset: "d".to_string(),
                    missing: "missing".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_self_extension_is_a_cycle() {
        let registry = Registry::builder()
            .preset("loop", ConfigFragment::default().extending("loop"))
            .build()
            .unwrap();
        let issues = registry.check_presets();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "cycle: loop → loop");
    }
}
