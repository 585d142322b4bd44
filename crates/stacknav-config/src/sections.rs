//! `[[sections]]` and `[[navbar]]` tables.

use serde::{Deserialize, Serialize};
use stacknav_sections::{ConfigurationError, PathRule, SectionDefinition, SectionId};

/// Path rule as written in TOML.
///
/// A bare string is a prefix; `{ pattern = "..." }` is a regular expression.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RuleConfig {
    /// Path prefix.
    Prefix(String),
    /// Regular expression.
    Pattern {
        /// Regex source.
        pattern: String,
    },
}

impl RuleConfig {
    /// Convert to a [`PathRule`], compiling patterns.
    fn to_rule(&self, id: &str) -> Result<PathRule, ConfigurationError> {
        match self {
            Self::Prefix(prefix) => Ok(PathRule::prefix(prefix.as_str())),
            Self::Pattern { pattern } => {
                PathRule::pattern(pattern).map_err(|e| ConfigurationError::InvalidRule {
                    id: SectionId::new(id),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// One `[[sections]]` entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SectionConfig {
    /// Unique section id.
    pub id: String,
    /// Chip label.
    pub label: String,
    /// Canonical path the chip links to.
    pub href: String,
    /// Include rule. Required; a missing rule fails registration.
    pub include: Option<RuleConfig>,
    /// Exclude rules.
    #[serde(default)]
    pub exclude: Vec<RuleConfig>,
    /// Landing-page title.
    pub title: Option<String>,
    /// Landing-page description.
    pub description: Option<String>,
    /// Landing-page highlights.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Sidebar doc ids, relative to the docs base.
    #[serde(default)]
    pub sidebar: Vec<String>,
}

impl SectionConfig {
    /// Convert into a [`SectionDefinition`] ready for registration.
    pub fn to_definition(&self) -> Result<SectionDefinition, ConfigurationError> {
        let mut def = SectionDefinition::new(self.id.as_str(), self.label.as_str(), self.href.as_str())
            .highlights(self.highlights.iter().cloned())
            .sidebar(self.sidebar.iter().cloned());
        def.title.clone_from(&self.title);
        def.description.clone_from(&self.description);

        if let Some(include) = &self.include {
            def = def.include(include.to_rule(&self.id)?);
        }
        for exclude in &self.exclude {
            def = def.exclude(exclude.to_rule(&self.id)?);
        }

        Ok(def)
    }
}

/// Horizontal placement of a navbar item.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side (default).
    #[default]
    Left,
    /// Right side.
    Right,
}

/// One `[[navbar]]` entry.
///
/// Exactly one of `to` (site route) or `href` (external URL) must be set.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NavbarConfig {
    /// Item label.
    pub label: String,
    /// Internal route.
    pub to: Option<String>,
    /// External URL.
    pub href: Option<String>,
    /// Placement.
    #[serde(default)]
    pub position: NavbarPosition,
    /// Regex tested against the path to decide whether the item is active.
    pub active_base_regex: Option<String>,
}
