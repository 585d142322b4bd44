//! Per-path navigation state for the whole site.

use serde::Serialize;
use stacknav_config::Config;
use stacknav_sections::{ResolutionPolicy, Resolver, SectionId, SectionRegistry};

use crate::error::NavigationError;
use crate::landing::{LandingCard, landing_cards};
use crate::navbar::{Navbar, NavbarLink};
use crate::path::normalize_path;
use crate::sidebar::Sidebar;
use crate::subheader::DocsSubheader;

/// Everything the navigation renderer needs for one path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// Normalized path that was resolved.
    pub path: String,
    /// Active documentation section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_section: Option<SectionId>,
    /// Top navbar links.
    pub navbar: Vec<NavbarLink>,
    /// Docs chip bar, absent outside the docs tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<DocsSubheader>,
    /// Sidebar of the active section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Sidebar>,
}

/// Immutable navigation model built once at startup.
///
/// Owns the section registry and the navbar; [`state`](Self::state) is pure
/// and can be called from any number of threads.
#[derive(Clone, Debug)]
pub struct SiteNavigation {
    registry: SectionRegistry,
    navbar: Navbar,
    base_url: String,
    docs_base: String,
    landing_path: String,
    policy: ResolutionPolicy,
}

impl SiteNavigation {
    /// Build the navigation model from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self, NavigationError> {
        let registry = config.registry()?;
        let navbar = Navbar::from_config(&config.navbar)?;

        tracing::debug!(
            sections = registry.len(),
            navbar_items = navbar.items().len(),
            "Built site navigation"
        );

        Ok(Self {
            registry,
            navbar,
            base_url: config.site.base_url.clone(),
            docs_base: config.site.docs_base.clone(),
            landing_path: config.site.landing_path.clone(),
            policy: ResolutionPolicy::default(),
        })
    }

    /// Use a different resolution policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The section registry.
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Resolver bound to this site's registry and policy.
    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::with_policy(&self.registry, self.policy)
    }

    /// Path prefix of the documentation tree.
    #[must_use]
    pub fn docs_base(&self) -> &str {
        &self.docs_base
    }

    /// Path of the documentation landing page.
    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Normalize a raw location (query, fragment, escapes, base URL).
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        normalize_path(raw, &self.base_url)
    }

    /// Active section for a raw location.
    #[must_use]
    pub fn active_section(&self, raw: &str) -> Option<SectionId> {
        self.resolver().resolve(&self.normalize(raw))
    }

    /// Landing-page cards.
    #[must_use]
    pub fn landing_cards(&self) -> Vec<LandingCard> {
        landing_cards(&self.registry)
    }

    /// Navigation state for a raw location.
    #[must_use]
    pub fn state(&self, raw: &str) -> NavigationState {
        let path = self.normalize(raw);
        let resolver = self.resolver();
        let active_section = resolver.resolve(&path);

        let sidebar = active_section
            .as_ref()
            .and_then(|id| self.registry.get(id.as_str()))
            .filter(|def| !def.sidebar.is_empty())
            .map(|def| Sidebar::for_section(def, &self.docs_base, &path));

        NavigationState {
            navbar: self.navbar.links(&path),
            subheader: DocsSubheader::for_path(&path, &resolver, &self.docs_base),
            sidebar,
            active_section,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stacknav_sections::{audit, default_corpus};

    use super::*;

    static_assertions::assert_impl_all!(super::SiteNavigation: Send, Sync);

    fn site() -> SiteNavigation {
        SiteNavigation::from_config(&Config::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_home_has_no_section() {
        let state = site().state("/");

        assert_eq!(state.path, "/");
        assert_eq!(state.active_section, None);
        assert!(state.subheader.is_none());
        assert!(state.sidebar.is_none());
        let active: Vec<_> = state.navbar.iter().filter(|l| l.active).map(|l| l.label.as_str()).collect();
        assert_eq!(active, vec!["Inicio"]);
    }

    #[test]
    fn test_docs_page_state() {
        let state = site().state("/docs/spring/framework-web?ref=nav#mvc");

        assert_eq!(state.path, "/docs/spring/framework-web");
        assert_eq!(state.active_section, Some(SectionId::new("spring-framework")));

        let subheader = state.subheader.unwrap();
        assert_eq!(subheader.chips.len(), 8);
        assert_eq!(subheader.active().unwrap().label, "Spring Framework");

        let sidebar = state.sidebar.unwrap();
        assert_eq!(sidebar.current().unwrap().id, "spring/framework-web");

        let docs = state.navbar.iter().find(|l| l.label == "Documentación").unwrap();
        assert!(docs.active);
    }

    #[test]
    fn test_every_builtin_sidebar_doc_highlights_its_owner() {
        let site = site();

        for def in site.registry().all() {
            for path in def.sidebar_paths(site.docs_base()) {
                assert_eq!(site.active_section(&path).as_ref(), Some(&def.id), "{path}");
            }
        }
    }

    #[test]
    fn test_builtin_audit_is_clean() {
        let site = site();
        let corpus = default_corpus(site.registry(), site.docs_base());

        let report = audit(site.registry(), &corpus, site.docs_base());

        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_landing_page() {
        let site = site();
        let state = site.state(site.landing_path());

        assert!(state.subheader.is_none());
        assert_eq!(site.landing_cards().len(), 8);
        assert_eq!(site.landing_cards()[0].title, "Angular moderno");
    }

    #[test]
    fn test_base_url_stripped_before_resolution() {
        let mut config = Config::builtin().unwrap();
        config.site.base_url = "/portfolio/".to_owned();
        let site = SiteNavigation::from_config(&config).unwrap();

        assert_eq!(
            site.active_section("/portfolio/docs/electron/packaging"),
            Some(SectionId::new("electron"))
        );
    }

    #[test]
    fn test_percent_encoded_path() {
        assert_eq!(
            site().active_section("/docs/angular/angularjs/introducci%C3%B3n"),
            Some(SectionId::new("angularjs"))
        );
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(site().state("/docs/electron/introduccion")).unwrap();

        assert_eq!(json["path"], "/docs/electron/introduccion");
        assert_eq!(json["active_section"], "electron");
        assert_eq!(json["sidebar"]["docs"][0]["current"], true);

        let home = serde_json::to_value(site().state("/")).unwrap();
        assert!(home.get("active_section").is_none());
        assert!(home.get("subheader").is_none());
    }
}
