//! Property tests for active-section resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;
use stacknav_sections::{
    PathRule, ResolutionPolicy, Resolver, SectionDefinition, SectionRegistry,
    resolve_active_section,
};

/// Lowercase path segment, optionally hyphenated.
fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(-[a-z]{1,6})?"
}

/// Absolute path made of 0..5 segments.
fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..5).prop_map(|segments| format!("/{}", segments.join("/")))
}

/// Registry with one section per distinct name, each owning `/docs/<name>/`.
fn disjoint_registry(names: &BTreeSet<String>) -> SectionRegistry {
    SectionRegistry::register(names.iter().map(|name| {
        let prefix = format!("/docs/{name}/");
        SectionDefinition::new(name.as_str(), name.as_str(), format!("{prefix}intro"))
            .include(PathRule::prefix(prefix))
    }))
    .unwrap()
}

proptest! {
    #[test]
    fn prop_paths_outside_every_prefix_resolve_to_none(
        names in prop::collection::btree_set(segment(), 1..6),
        tail in path(),
    ) {
        let registry = disjoint_registry(&names);
        let probe = format!("/blog{tail}");

        prop_assert_eq!(resolve_active_section(&probe, &registry), None);
    }

    #[test]
    fn prop_disjoint_registries_never_compete(
        names in prop::collection::btree_set(segment(), 1..6),
        pick in any::<prop::sample::Index>(),
        tail in path(),
    ) {
        let registry = disjoint_registry(&names);
        let owner = pick.get(&names.iter().collect::<Vec<_>>()).to_string();
        let probe = format!("/docs/{owner}{tail}");

        for policy in [ResolutionPolicy::Exclusions, ResolutionPolicy::LongestPrefix] {
            let resolution = Resolver::with_policy(&registry, policy).resolve_detailed(&probe);
            prop_assert_eq!(resolution.candidates.len(), 1);
            prop_assert_eq!(resolution.active.as_ref().map(|id| id.as_str()), Some(owner.as_str()));
        }
    }

    #[test]
    fn prop_resolution_is_idempotent(
        names in prop::collection::btree_set(segment(), 1..6),
        probe in path(),
    ) {
        let registry = disjoint_registry(&names);
        let resolver = Resolver::new(&registry);

        prop_assert_eq!(resolver.resolve_detailed(&probe), resolver.resolve_detailed(&probe));
    }

    #[test]
    fn prop_nested_section_wins_in_any_order(
        broad_first in any::<bool>(),
        tail in path(),
    ) {
        let broad = SectionDefinition::new("spring", "Spring", "/docs/spring")
            .include(PathRule::prefix("/docs/spring"));
        let nested = SectionDefinition::new("spring-security", "Spring Security", "/docs/spring/security")
            .include(PathRule::prefix("/docs/spring/security"));
        let definitions = if broad_first { vec![broad, nested] } else { vec![nested, broad] };
        let registry = SectionRegistry::register(definitions).unwrap();

        let active = resolve_active_section(&format!("/docs/spring/security{tail}"), &registry);

        prop_assert_eq!(active.as_ref().map(|id| id.as_str()), Some("spring-security"));
    }
}
