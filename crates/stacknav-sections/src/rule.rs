//! Path predicates with an implicit specificity.

use std::fmt;

use regex::Regex;

/// A pure predicate over an absolute URL path.
///
/// Every rule also reports a *specificity* for the paths it matches, used to
/// pick a winner when more than one section claims a path.
#[derive(Clone, Debug)]
pub enum PathRule {
    /// Raw string prefix test.
    ///
    /// Not segment-aware: `/docs/spring/framework` matches
    /// `/docs/spring/framework-fundamentos`. Specificity is the prefix length.
    Prefix(String),
    /// Regular expression searched anywhere in the path.
    ///
    /// For overlaps a prefix cannot express. Specificity is the end offset of
    /// the first match.
    Pattern(Regex),
}

impl PathRule {
    /// Create a prefix rule.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    /// Compile a pattern rule.
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Pattern)
    }

    /// Whether `path` satisfies this rule.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
            Self::Pattern(regex) => regex.is_match(path),
        }
    }

    /// Specificity of the match against `path`, or `None` when it does not match.
    #[must_use]
    pub fn specificity(&self, path: &str) -> Option<usize> {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()).then_some(prefix.len()),
            Self::Pattern(regex) => regex.find(path).map(|m| m.end()),
        }
    }

    /// The literal prefix, if this is a prefix rule.
    #[must_use]
    pub fn as_prefix(&self) -> Option<&str> {
        match self {
            Self::Prefix(prefix) => Some(prefix),
            Self::Pattern(_) => None,
        }
    }

    /// Check the rule is usable, returning the reason when it is not.
    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Self::Prefix(prefix) if prefix.is_empty() => Err("prefix is empty".to_owned()),
            Self::Prefix(prefix) if !prefix.starts_with('/') => {
                Err(format!("prefix {prefix:?} must start with '/'"))
            }
            Self::Prefix(_) => Ok(()),
            Self::Pattern(regex) if regex.as_str().is_empty() => {
                Err("pattern is empty".to_owned())
            }
            Self::Pattern(_) => Ok(()),
        }
    }
}

impl PartialEq for PathRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Prefix(a), Self::Prefix(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for PathRule {}

impl fmt::Display for PathRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}
