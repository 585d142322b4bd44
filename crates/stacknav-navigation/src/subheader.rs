//! Documentation sub-header: one chip per section, at most one active.

use serde::Serialize;
use stacknav_sections::{Resolver, SectionId};

/// A section chip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chip {
    /// Section id.
    pub id: SectionId,
    /// Display label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Whether this chip is highlighted.
    pub active: bool,
}

/// The chip bar shown under the navbar on documentation pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocsSubheader {
    /// Chips in registry order.
    pub chips: Vec<Chip>,
}

impl DocsSubheader {
    /// Build the sub-header for `path`.
    ///
    /// Returns `None` outside the documentation tree (`docs_base`), where the
    /// bar is not rendered at all.
    #[must_use]
    pub fn for_path(path: &str, resolver: &Resolver<'_>, docs_base: &str) -> Option<Self> {
        if !in_docs_tree(path, docs_base) {
            return None;
        }

        let active = resolver.resolve(path);
        let chips = resolver
            .registry()
            .all()
            .iter()
            .map(|def| Chip {
                id: def.id.clone(),
                label: def.label.clone(),
                href: def.canonical_path.clone(),
                active: active.as_ref() == Some(&def.id),
            })
            .collect();

        Some(Self { chips })
    }

    /// The highlighted chip, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Chip> {
        self.chips.iter().find(|chip| chip.active)
    }
}

/// Whether `path` is `docs_base` or below it.
///
/// Segment-aware, so `/documentacion` is not under `/docs`.
#[must_use]
pub fn in_docs_tree(path: &str, docs_base: &str) -> bool {
    let base = docs_base.trim_end_matches('/');
    match path.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
