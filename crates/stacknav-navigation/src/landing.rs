//! Cards for the documentation landing page.

use serde::Serialize;
use stacknav_sections::{SectionId, SectionRegistry};

/// One card per section on the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LandingCard {
    /// Section id.
    pub id: SectionId,
    /// Card heading.
    pub title: String,
    /// Card body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Highlight pills.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    /// Link to the section.
    pub href: String,
}

/// Landing cards in registry order.
#[must_use]
pub fn landing_cards(registry: &SectionRegistry) -> Vec<LandingCard> {
    registry
        .all()
        .iter()
        .map(|def| LandingCard {
            id: def.id.clone(),
            title: def.display_title().to_owned(),
            description: def.description.clone(),
            highlights: def.highlights.clone(),
            href: def.canonical_path.clone(),
        })
        .collect()
}
