//! Declarative section definitions.

use crate::id::SectionId;
use crate::rule::PathRule;

/// A documentation section and the rules that decide which paths belong to it.
///
/// Built with [`SectionDefinition::new`] and the chaining setters, then
/// validated by [`SectionRegistry::register`](crate::SectionRegistry::register).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDefinition {
    /// Unique identifier.
    pub id: SectionId,
    /// Human-readable chip label.
    pub label: String,
    /// Where the chip links to.
    pub canonical_path: String,
    /// Include predicate. `None` is rejected at registration.
    pub include: Option<PathRule>,
    /// Exclude predicates; the path is excluded when any of them matches.
    pub exclude: Vec<PathRule>,
    /// Landing-page title (defaults to the label).
    pub title: Option<String>,
    /// Landing-page description.
    pub description: Option<String>,
    /// Landing-page highlight pills.
    pub highlights: Vec<String>,
    /// Ordered doc ids of the section sidebar (e.g. `spring/framework-web`).
    pub sidebar: Vec<String>,
}

impl SectionDefinition {
    /// Create a definition with no rules.
    pub fn new(
        id: impl Into<SectionId>,
        label: impl Into<String>,
        canonical_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            canonical_path: canonical_path.into(),
            include: None,
            exclude: Vec::new(),
            title: None,
            description: None,
            highlights: Vec::new(),
            sidebar: Vec::new(),
        }
    }

    /// Set the include rule.
    #[must_use]
    pub fn include(mut self, rule: PathRule) -> Self {
        self.include = Some(rule);
        self
    }

    /// Add an exclude rule.
    #[must_use]
    pub fn exclude(mut self, rule: PathRule) -> Self {
        self.exclude.push(rule);
        self
    }

    /// Set the landing-page title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the landing-page description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the landing-page highlights.
    #[must_use]
    pub fn highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = highlights.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sidebar doc ids.
    #[must_use]
    pub fn sidebar<I, S>(mut self, docs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sidebar = docs.into_iter().map(Into::into).collect();
        self
    }

    /// Title for the landing page, falling back to the label.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }

    /// URL paths of the sidebar docs under `docs_base` (e.g. `/docs/spring/framework-web`).
    pub fn sidebar_paths<'a>(&'a self, docs_base: &'a str) -> impl Iterator<Item = String> + 'a {
        self.sidebar.iter().map(move |doc| doc_path(docs_base, doc))
    }

    /// Whether the include rule matches `path`.
    #[must_use]
    pub fn includes(&self, path: &str) -> bool {
        self.include.as_ref().is_some_and(|rule| rule.matches(path))
    }

    /// Whether any exclude rule matches `path`.
    #[must_use]
    pub fn excludes(&self, path: &str) -> bool {
        self.exclude.iter().any(|rule| rule.matches(path))
    }

    /// Whether this section claims `path`: included and not excluded.
    #[must_use]
    pub fn claims(&self, path: &str) -> bool {
        self.includes(path) && !self.excludes(path)
    }

    /// Specificity of the include match against `path`.
    #[must_use]
    pub fn specificity(&self, path: &str) -> Option<usize> {
        self.include.as_ref().and_then(|rule| rule.specificity(path))
    }
}

/// Join a docs base and a doc id into a URL path.
///
/// Tolerates a trailing slash on the base and a leading slash on the id.
#[must_use]
pub fn doc_path(docs_base: &str, doc_id: &str) -> String {
    format!(
        "{}/{}",
        docs_base.trim_end_matches('/'),
        doc_id.trim_start_matches('/')
    )
}
