//! Top navbar items and their active state.

use regex::Regex;
use serde::Serialize;
use stacknav_config::{NavbarConfig, NavbarPosition};

use crate::error::NavigationError;

/// Where a navbar item points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Route inside the site, possibly with an anchor (`/#about`).
    Route(String),
    /// External URL.
    External(String),
}

/// A navbar item with its activation rule.
#[derive(Clone, Debug)]
pub struct NavbarItem {
    label: String,
    target: NavTarget,
    position: NavbarPosition,
    active_base_regex: Option<Regex>,
}

impl NavbarItem {
    /// Build an item from its `[[navbar]]` entry.
    pub fn from_config(config: &NavbarConfig) -> Result<Self, NavigationError> {
        let target = match (&config.to, &config.href) {
            (Some(to), _) => NavTarget::Route(to.clone()),
            (None, Some(href)) => NavTarget::External(href.clone()),
            (None, None) => return Err(NavigationError::MissingTarget(config.label.clone())),
        };
        let active_base_regex = config
            .active_base_regex
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|source| NavigationError::InvalidRegex {
                label: config.label.clone(),
                source,
            })?;

        Ok(Self {
            label: config.label.clone(),
            target,
            position: config.position,
            active_base_regex,
        })
    }

    /// Item label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Link target.
    #[must_use]
    pub fn target(&self) -> &NavTarget {
        &self.target
    }

    /// Whether the item is highlighted on `path`.
    ///
    /// An `active_base_regex` is searched in the path. Otherwise only plain
    /// routes can be active, on an exact match (ignoring a trailing slash).
    /// Anchors and external links never are.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if let Some(regex) = &self.active_base_regex {
            return regex.is_match(path);
        }
        match &self.target {
            NavTarget::External(_) => false,
            NavTarget::Route(to) if to.contains('#') => false,
            NavTarget::Route(to) => {
                path == to || (to != "/" && path.strip_suffix('/') == Some(to.as_str()))
            }
        }
    }
}

/// Serializable navbar item state for one path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarLink {
    /// Item label.
    pub label: String,
    /// Route or URL.
    pub link: String,
    /// Placement.
    pub position: NavbarPosition,
    /// True for links leaving the site.
    pub external: bool,
    /// Whether the item is highlighted.
    pub active: bool,
}

/// All navbar items in configuration order.
#[derive(Clone, Debug, Default)]
pub struct Navbar {
    items: Vec<NavbarItem>,
}

impl Navbar {
    /// Build the navbar from its `[[navbar]]` entries.
    pub fn from_config(items: &[NavbarConfig]) -> Result<Self, NavigationError> {
        let items = items
            .iter()
            .map(NavbarItem::from_config)
            .collect::<Result<_, _>>()?;
        Ok(Self { items })
    }

    /// Items in configuration order.
    #[must_use]
    pub fn items(&self) -> &[NavbarItem] {
        &self.items
    }

    /// Link states for `path`.
    #[must_use]
    pub fn links(&self, path: &str) -> Vec<NavbarLink> {
        self.items
            .iter()
            .map(|item| {
                let (link, external) = match &item.target {
                    NavTarget::Route(to) => (to.clone(), false),
                    NavTarget::External(href) => (href.clone(), true),
                };
                NavbarLink {
                    label: item.label.clone(),
                    link,
                    position: item.position,
                    external,
                    active: item.is_active(path),
                }
            })
            .collect()
    }
}
