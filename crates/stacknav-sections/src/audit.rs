//! Registry audit: ambiguity detection and policy comparison.
//!
//! The runtime never fails on an ambiguous path, it silently picks the most
//! specific section. That silence hides authoring mistakes (a new section whose
//! prefix overlaps an existing one without an exclusion), so the audit walks a
//! corpus of paths and reports every place the registry is not clean.
//!
//! Paths are evaluated in parallel on the global rayon pool.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::id::SectionId;
use crate::registry::SectionRegistry;
use crate::resolver::{ResolutionPolicy, Resolver};

/// A path claimed by more than one section under the exclusions policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmbiguousMatch {
    /// The contested path.
    pub path: String,
    /// Every section that claimed it, in registration order.
    pub candidates: Vec<SectionId>,
    /// The section the runtime picks.
    pub chosen: Option<SectionId>,
}

/// A path on which the two resolution policies disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PolicyDiff {
    /// The path.
    pub path: String,
    /// Answer with explicit exclusions.
    pub exclusions: Option<SectionId>,
    /// Answer with longest-prefix only.
    pub longest_prefix: Option<SectionId>,
}

/// A sidebar doc that does not resolve to the section owning the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MisplacedDoc {
    /// URL path of the doc.
    pub path: String,
    /// Section whose sidebar lists the doc.
    pub owner: SectionId,
    /// Section the path actually resolves to.
    pub resolved: Option<SectionId>,
}

/// Findings of [`audit`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuditReport {
    /// Number of corpus paths evaluated.
    pub paths_checked: usize,
    /// Paths claimed by several sections.
    pub ambiguities: Vec<AmbiguousMatch>,
    /// Paths where the policies disagree.
    pub policy_diffs: Vec<PolicyDiff>,
    /// Corpus paths under the docs base that no section claims.
    pub orphans: Vec<String>,
    /// Sidebar docs highlighted under the wrong section.
    pub misplaced: Vec<MisplacedDoc>,
}

impl AuditReport {
    /// No findings of any kind.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.ambiguities.is_empty()
            && self.policy_diffs.is_empty()
            && self.orphans.is_empty()
            && self.misplaced.is_empty()
    }
}

/// Per-path result collected in parallel.
struct PathFindings {
    ambiguity: Option<AmbiguousMatch>,
    diff: Option<PolicyDiff>,
    orphan: bool,
}

/// Audit `registry` over `corpus`.
///
/// `docs_base` decides which unclaimed paths count as orphans and where
/// sidebar docs live.
#[must_use]
pub fn audit(registry: &SectionRegistry, corpus: &[String], docs_base: &str) -> AuditReport {
    let exclusions = Resolver::with_policy(registry, ResolutionPolicy::Exclusions);
    let longest = Resolver::with_policy(registry, ResolutionPolicy::LongestPrefix);

    let findings: Vec<(&String, PathFindings)> = corpus
        .par_iter()
        .map(|path| {
            let resolution = exclusions.resolve_detailed(path);
            let alternative = longest.resolve(path);

            let ambiguity = resolution.is_ambiguous().then(|| AmbiguousMatch {
                path: path.clone(),
                candidates: resolution.candidates.iter().map(|c| c.id.clone()).collect(),
                chosen: resolution.active.clone(),
            });
            let diff = (resolution.active != alternative).then(|| PolicyDiff {
                path: path.clone(),
                exclusions: resolution.active.clone(),
                longest_prefix: alternative,
            });
            let orphan = resolution.active.is_none() && path.starts_with(docs_base);

            (path, PathFindings { ambiguity, diff, orphan })
        })
        .collect();

    let mut report = AuditReport {
        paths_checked: corpus.len(),
        ..AuditReport::default()
    };
    for (path, found) in findings {
        report.ambiguities.extend(found.ambiguity);
        report.policy_diffs.extend(found.diff);
        if found.orphan {
            report.orphans.push(path.clone());
        }
    }

    report.misplaced = registry
        .all()
        .par_iter()
        .flat_map_iter(|def| {
            def.sidebar_paths(docs_base)
                .filter_map(|path| {
                    let resolved = exclusions.resolve(&path);
                    (resolved.as_ref() != Some(&def.id)).then(|| MisplacedDoc {
                        path,
                        owner: def.id.clone(),
                        resolved,
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect();

    if report.is_clean() {
        tracing::debug!(paths = report.paths_checked, "Section registry audit clean");
    } else {
        tracing::warn!(
            paths = report.paths_checked,
            ambiguities = report.ambiguities.len(),
            policy_diffs = report.policy_diffs.len(),
            orphans = report.orphans.len(),
            misplaced = report.misplaced.len(),
            "Section registry audit found issues"
        );
    }

    report
}

/// Paths worth probing for `registry`: canonical paths, literal include and
/// exclude prefixes, and sidebar doc paths. Sorted and deduplicated.
#[must_use]
pub fn default_corpus(registry: &SectionRegistry, docs_base: &str) -> Vec<String> {
    let mut corpus = BTreeSet::new();

    for def in registry.all() {
        corpus.insert(def.canonical_path.clone());
        let prefixes = def
            .include
            .iter()
            .chain(&def.exclude)
            .filter_map(|rule| rule.as_prefix());
        for prefix in prefixes {
            corpus.insert(prefix.to_owned());
            corpus.insert(format!("{}/", prefix.trim_end_matches('/')));
        }
        corpus.extend(def.sidebar_paths(docs_base));
    }

    corpus.into_iter().collect()
}
