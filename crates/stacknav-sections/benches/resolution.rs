//! Benchmarks for active-section resolution.

use criterion::{Criterion, criterion_group, criterion_main};
use stacknav_sections::{
    PathRule, ResolutionPolicy, Resolver, SectionDefinition, SectionRegistry, audit,
    default_corpus,
};

/// Registry with `count` top-level sections plus one nested section each.
fn create_registry(count: usize) -> SectionRegistry {
    let definitions = (0..count).flat_map(|i| {
        let base = format!("/docs/stack-{i}");
        let nested = format!("{base}/legacy");
        [
            SectionDefinition::new(format!("stack-{i}"), format!("Stack {i}"), base.clone())
                .include(PathRule::prefix(base))
                .exclude(PathRule::prefix(nested.clone())),
            SectionDefinition::new(format!("stack-{i}-legacy"), format!("Legacy {i}"), nested.clone())
                .include(PathRule::prefix(nested)),
        ]
    });
    SectionRegistry::register(definitions).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let registry = create_registry(8);

    let mut group = c.benchmark_group("resolve");

    group.bench_function("exclusions_hit", |b| {
        let resolver = Resolver::new(&registry);
        b.iter(|| resolver.resolve("/docs/stack-7/legacy/introduccion"));
    });

    group.bench_function("longest_prefix_hit", |b| {
        let resolver = Resolver::with_policy(&registry, ResolutionPolicy::LongestPrefix);
        b.iter(|| resolver.resolve("/docs/stack-7/legacy/introduccion"));
    });

    group.bench_function("miss", |b| {
        let resolver = Resolver::new(&registry);
        b.iter(|| resolver.resolve("/blog/2024/hello"));
    });

    group.finish();
}

fn bench_audit(c: &mut Criterion) {
    let registry = create_registry(64);
    let corpus = default_corpus(&registry, "/docs");

    c.bench_function("audit_64_sections", |b| {
        b.iter(|| audit(&registry, &corpus, "/docs"));
    });
}

criterion_group!(benches, bench_resolve, bench_audit);
criterion_main!(benches);
