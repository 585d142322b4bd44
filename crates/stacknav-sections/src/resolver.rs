//! Active-section resolution.
//!
//! Candidates are the sections whose rules admit the path. A single candidate
//! wins outright; several candidates are an authoring ambiguity resolved by
//! specificity (length of the include match), then by registration order.

use crate::id::SectionId;
use crate::registry::SectionRegistry;

/// How candidates are collected before the specificity tie-break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResolutionPolicy {
    /// Include and exclude rules both apply; specificity breaks remaining ties.
    #[default]
    Exclusions,
    /// Exclude rules are ignored; the longest include match wins.
    LongestPrefix,
}

impl ResolutionPolicy {
    /// Kebab-case name used on the command line and in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exclusions => "exclusions",
            Self::LongestPrefix => "longest-prefix",
        }
    }
}

/// A section that admitted the path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    /// Section id.
    pub id: SectionId,
    /// Length of the include match.
    pub specificity: usize,
    /// Registration position.
    pub position: usize,
}

/// Outcome of resolving a path, with the candidates that competed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resolution {
    /// Winning section, if any.
    pub active: Option<SectionId>,
    /// All candidates in registration order.
    pub candidates: Vec<Candidate>,
}

impl Resolution {
    /// More than one section claimed the path.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

/// Resolves paths against a registry with a fixed policy.
///
/// Holds no state besides the borrowed registry; calls are pure and may run
/// concurrently.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'r> {
    registry: &'r SectionRegistry,
    policy: ResolutionPolicy,
}

impl<'r> Resolver<'r> {
    /// Create a resolver with the default [`ResolutionPolicy::Exclusions`] policy.
    #[must_use]
    pub fn new(registry: &'r SectionRegistry) -> Self {
        Self::with_policy(registry, ResolutionPolicy::default())
    }

    /// Create a resolver with an explicit policy.
    #[must_use]
    pub fn with_policy(registry: &'r SectionRegistry, policy: ResolutionPolicy) -> Self {
        Self { registry, policy }
    }

    /// The registry this resolver reads.
    #[must_use]
    pub fn registry(&self) -> &'r SectionRegistry {
        self.registry
    }

    /// The active policy.
    #[must_use]
    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Resolve `path` to the active section id.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<SectionId> {
        self.resolve_detailed(path).active
    }

    /// Resolve `path`, keeping every candidate for inspection.
    #[must_use]
    pub fn resolve_detailed(&self, path: &str) -> Resolution {
        let candidates: Vec<Candidate> = self
            .registry
            .all()
            .iter()
            .enumerate()
            .filter(|(_, def)| match self.policy {
                ResolutionPolicy::Exclusions => def.claims(path),
                ResolutionPolicy::LongestPrefix => def.includes(path),
            })
            .map(|(position, def)| Candidate {
                id: def.id.clone(),
                specificity: def.specificity(path).unwrap_or_default(),
                position,
            })
            .collect();

        let mut winner: Option<&Candidate> = None;
        for candidate in &candidates {
            // Strictly greater keeps the earliest registration on ties.
            if winner.is_none_or(|best| candidate.specificity > best.specificity) {
                winner = Some(candidate);
            }
        }
        let active = winner.map(|candidate| candidate.id.clone());

        if candidates.len() > 1 {
            tracing::debug!(
                path,
                policy = self.policy.as_str(),
                candidates = candidates.len(),
                chosen = ?active,
                "Ambiguous section match resolved by specificity"
            );
        }

        Resolution { active, candidates }
    }
}

/// Resolve `path` against `registry` with the default policy.
#[must_use]
pub fn resolve_active_section(path: &str, registry: &SectionRegistry) -> Option<SectionId> {
    Resolver::new(registry).resolve(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::definition::SectionDefinition;
    use crate::rule::PathRule;

    /// Section table of the portfolio site, with its hand-written exclusions.
    fn portfolio() -> SectionRegistry {
        SectionRegistry::register(vec![
            SectionDefinition::new("angular", "Angular", "/docs/angular/vision-general")
                .include(PathRule::prefix("/docs/angular"))
                .exclude(PathRule::prefix("/docs/angular/angularjs")),
            SectionDefinition::new("angularjs", "AngularJS", "/docs/angular/angularjs/introduccion")
                .include(PathRule::prefix("/docs/angular/angularjs")),
            SectionDefinition::new(
                "spring-framework",
                "Spring Framework",
                "/docs/spring/framework-fundamentos",
            )
            .include(PathRule::prefix("/docs/spring/framework")),
            SectionDefinition::new("spring-boot", "Spring Boot", "/docs/spring/introduccion")
                .include(PathRule::prefix("/docs/spring"))
                .exclude(PathRule::prefix("/docs/spring/framework"))
                .exclude(PathRule::prefix("/docs/spring/security"))
                .exclude(PathRule::prefix("/docs/spring/microservicios")),
            SectionDefinition::new(
                "spring-security",
                "Spring Security",
                "/docs/spring/security/guia-completa",
            )
            .include(PathRule::prefix("/docs/spring/security")),
            SectionDefinition::new(
                "microservicios",
                "Microservicios Java",
                "/docs/spring/microservicios/arquitectura",
            )
            .include(PathRule::prefix("/docs/spring/microservicios")),
            SectionDefinition::new("electron", "Electron", "/docs/electron/introduccion")
                .include(PathRule::prefix("/docs/electron")),
            SectionDefinition::new(
                "estrategia",
                "Guías estratégicas",
                "/docs/estrategia/seleccion-tecnologica",
            )
            .include(PathRule::prefix("/docs/estrategia")),
        ])
        .unwrap()
    }

    fn resolve(registry: &SectionRegistry, path: &str) -> Option<String> {
        resolve_active_section(path, registry).map(|id| id.to_string())
    }

    #[test]
    fn test_home_resolves_to_none() {
        assert_eq!(resolve(&portfolio(), "/"), None);
        assert_eq!(resolve(&portfolio(), "/blog/first-post"), None);
        assert_eq!(resolve(&portfolio(), "/documentacion"), None);
    }

    #[test]
    fn test_angular_excludes_angularjs() {
        let registry = portfolio();

        assert_eq!(
            resolve(&registry, "/docs/angular/vision-general").as_deref(),
            Some("angular")
        );
        assert_eq!(
            resolve(&registry, "/docs/angular/angularjs/introduccion").as_deref(),
            Some("angularjs")
        );
    }

    #[test]
    fn test_spring_namespaces() {
        let registry = portfolio();

        assert_eq!(
            resolve(&registry, "/docs/spring/framework-fundamentos").as_deref(),
            Some("spring-framework")
        );
        assert_eq!(
            resolve(&registry, "/docs/spring/introduccion").as_deref(),
            Some("spring-boot")
        );
        assert_eq!(
            resolve(&registry, "/docs/spring/security/guia-completa").as_deref(),
            Some("spring-security")
        );
        assert_eq!(
            resolve(&registry, "/docs/spring/microservicios/conectividad").as_deref(),
            Some("microservicios")
        );
    }

    #[test]
    fn test_specificity_beats_registration_order() {
        let registry = SectionRegistry::register(vec![
            SectionDefinition::new("spring", "Spring", "/docs/spring")
                .include(PathRule::prefix("/docs/spring")),
            SectionDefinition::new("security", "Security", "/docs/spring/security")
                .include(PathRule::prefix("/docs/spring/security")),
        ])
        .unwrap();

        let resolution = Resolver::new(&registry).resolve_detailed("/docs/spring/security/guia-completa");

        assert!(resolution.is_ambiguous());
        assert_eq!(resolution.active, Some(SectionId::new("security")));
        assert_eq!(
            resolution.candidates,
            vec![
                Candidate {
                    id: SectionId::new("spring"),
                    specificity: 12,
                    position: 0,
                },
                Candidate {
                    id: SectionId::new("security"),
                    specificity: 21,
                    position: 1,
                },
            ]
        );
    }

    #[test]
    fn test_equal_specificity_first_registered_wins() {
        let registry = SectionRegistry::register(vec![
            SectionDefinition::new("first", "First", "/docs/a")
                .include(PathRule::prefix("/docs/a")),
            SectionDefinition::new("second", "Second", "/docs/b")
                .include(PathRule::prefix("/docs/a")),
        ])
        .unwrap();

        assert_eq!(resolve(&registry, "/docs/a/page").as_deref(), Some("first"));
    }

    #[test]
    fn test_longest_prefix_ignores_exclusions() {
        let registry = SectionRegistry::register(vec![
            SectionDefinition::new("wide", "Wide", "/docs/x")
                .include(PathRule::prefix("/docs/x"))
                .exclude(PathRule::prefix("/docs/x/private")),
        ])
        .unwrap();

        let exclusions = Resolver::new(&registry);
        let longest = Resolver::with_policy(&registry, ResolutionPolicy::LongestPrefix);

        assert_eq!(exclusions.resolve("/docs/x/private/a"), None);
        assert_eq!(longest.resolve("/docs/x/private/a"), Some(SectionId::new("wide")));
        assert_eq!(longest.policy(), ResolutionPolicy::LongestPrefix);
    }

    #[test]
    fn test_policies_agree_on_portfolio_table() {
        let registry = portfolio();
        let exclusions = Resolver::new(&registry);
        let longest = Resolver::with_policy(&registry, ResolutionPolicy::LongestPrefix);

        for path in [
            "/docs/angular/plataforma",
            "/docs/angular/angularjs/herramientas",
            "/docs/spring/framework-web",
            "/docs/spring/rest-apis",
            "/docs/spring/security/guia-completa",
            "/docs/spring/microservicios/arquitectura",
            "/docs/electron/packaging",
            "/docs/estrategia/observabilidad",
        ] {
            assert_eq!(exclusions.resolve(path), longest.resolve(path), "path {path}");
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let registry = portfolio();
        let resolver = Resolver::new(&registry);

        let first = resolver.resolve_detailed("/docs/spring/testing");
        let second = resolver.resolve_detailed("/docs/spring/testing");

        assert_eq!(first, second);
        assert!(!first.is_ambiguous());
    }
}
