//! Resolution Performance Benchmarks
//!
//! Run with: `cargo bench --package lintrc-bench resolve_benchmark`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lintrc_core::{ConfigFragment, Registry, Resolver, RuleEntry, Severity};
use lintrc_rules::presets::{PRETTIER, RECOMMENDED};
use serde_json::json;
use std::hint::black_box;

/// Project configuration in the shape most repositories use
fn project_chain() -> Vec<ConfigFragment> {
    vec![
        ConfigFragment::named(".lintrc.json")
            .as_root()
            .extending(RECOMMENDED)
            .extending(PRETTIER)
            .with_env("es6")
            .with_env("node")
            .with_parser_option("ecmaVersion", json!(2018))
            .with_plugin("prettier")
            .with_rule("prettier/prettier", Severity::Error)
            .with_rule("no-console", Severity::Off),
        ConfigFragment::named("src/.lintrc.json").with_rule("eqeqeq", Severity::Warn),
    ]
}

/// Registry with `depth` presets, each extending the previous one
fn layered_registry(depth: usize) -> Registry {
    let mut builder = lintrc_rules::default_registry_builder();
    for level in 0..depth {
        let mut preset = ConfigFragment::default().with_rule(
            "indent",
            RuleEntry::with_options(Severity::Error, vec![json!(level % 8)]),
        );
        preset = if level == 0 {
            preset.extending(RECOMMENDED)
        } else {
            preset.extending(format!("layer-{}", level - 1))
        };
        builder.add_preset(format!("layer-{level}"), preset);
    }
    builder.build().unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let registry = lintrc_rules::default_registry().unwrap();
    let chain = project_chain();

    let mut group = c.benchmark_group("resolve");

    group.bench_function("project_config", |b| {
        let resolver = Resolver::new(&registry);
        b.iter(|| black_box(resolver.resolve(black_box(&chain)).unwrap()));
    });

    group.bench_function("project_config_with_trace", |b| {
        let resolver = Resolver::new(&registry);
        b.iter(|| black_box(resolver.resolve_with_trace(black_box(&chain)).unwrap()));
    });

    group.bench_function("build_default_registry", |b| {
        b.iter(|| black_box(lintrc_rules::default_registry().unwrap()));
    });

    group.finish();
}

fn bench_preset_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("preset_depth");

    for depth in [1, 8, 32, 128] {
        let registry = layered_registry(depth);
        let chain = vec![ConfigFragment::named("leaf").extending(format!("layer-{}", depth - 1))];

        group.bench_with_input(BenchmarkId::from_parameter(depth), &chain, |b, chain| {
            let resolver = Resolver::new(&registry);
            b.iter(|| black_box(resolver.resolve(black_box(chain)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_preset_depth);
criterion_main!(benches);
