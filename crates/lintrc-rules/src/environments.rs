//! Built-in environments

use lintrc_core::EnvironmentDefinition;

const ES2015_GLOBALS: &[&str] = &[
    "Promise", "Map", "Set", "WeakMap", "WeakSet", "Symbol", "Proxy", "Reflect",
    "ArrayBuffer", "DataView", "Float32Array", "Float64Array", "Int8Array", "Int16Array",
    "Int32Array", "Uint8Array", "Uint8ClampedArray", "Uint16Array", "Uint32Array",
];
const ES2017_GLOBALS: &[&str] = &["Atomics", "SharedArrayBuffer"];
const ES2020_GLOBALS: &[&str] = &["BigInt", "BigInt64Array", "BigUint64Array", "globalThis"];
const ES2021_GLOBALS: &[&str] = &["AggregateError", "FinalizationRegistry", "WeakRef"];

/// Collection of built-in environments
pub struct BuiltinEnvironments;

impl BuiltinEnvironments {
    pub fn all() -> Vec<EnvironmentDefinition> {
        vec![
            Self::es_version("es6", "ES2015 globals", &[ES2015_GLOBALS]),
            Self::es_version("es2017", "ES2017 globals", &[ES2015_GLOBALS, ES2017_GLOBALS]),
            Self::es_version(
                "es2020",
                "ES2020 globals",
                &[ES2015_GLOBALS, ES2017_GLOBALS, ES2020_GLOBALS],
            ),
            Self::es_version(
                "es2021",
                "ES2021 globals",
                &[ES2015_GLOBALS, ES2017_GLOBALS, ES2020_GLOBALS, ES2021_GLOBALS],
            ),
            EnvironmentDefinition::new("browser", "Browser globals").with_globals([
                "window",
                "document",
                "navigator",
                "location",
                "localStorage",
                "sessionStorage",
                "fetch",
                "console",
                "setTimeout",
                "clearTimeout",
                "setInterval",
                "clearInterval",
            ]),
            EnvironmentDefinition::new("node", "Node.js globals and scoping").with_globals([
                "process",
                "require",
                "module",
                "exports",
                "__dirname",
                "__filename",
                "Buffer",
                "global",
                "console",
                "setImmediate",
                "clearImmediate",
            ]),
            EnvironmentDefinition::new("commonjs", "CommonJS globals and scoping")
                .with_globals(["require", "module", "exports"]),
            EnvironmentDefinition::new("shared-node-browser", "Globals common to Node.js and browsers")
                .with_globals(["console", "setTimeout", "clearTimeout", "setInterval", "clearInterval"]),
            EnvironmentDefinition::new("worker", "Web worker globals")
                .with_globals(["self", "postMessage", "importScripts", "onmessage"]),
            EnvironmentDefinition::new("mocha", "Mocha testing globals").with_globals([
                "describe", "it", "before", "after", "beforeEach", "afterEach", "context",
            ]),
            EnvironmentDefinition::new("jest", "Jest testing globals").with_globals([
                "describe", "it", "test", "expect", "beforeAll", "afterAll", "beforeEach",
                "afterEach", "jest",
            ]),
        ]
    }

    fn es_version(name: &str, description: &str, groups: &[&[&str]]) -> EnvironmentDefinition {
        EnvironmentDefinition::new(name, description)
            .with_globals(groups.iter().flat_map(|group| group.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_es_versions_are_cumulative() {
        let all = BuiltinEnvironments::all();
        let es6 = all.iter().find(|env| env.name == "es6").unwrap();
        let es2021 = all.iter().find(|env| env.name == "es2021").unwrap();

        assert!(es6.globals.contains_key("Promise"));
        assert!(!es6.globals.contains_key("globalThis"));
        assert!(es2021.globals.contains_key("Promise"));
        assert!(es2021.globals.contains_key("WeakRef"));
    }

    #[test]
    fn test_names_are_unique() {
        let all = BuiltinEnvironments::all();
        let mut names: Vec<&str> = all.iter().map(|env| env.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}
