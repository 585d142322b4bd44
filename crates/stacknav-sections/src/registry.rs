//! Validated, immutable section registry.

use std::collections::HashMap;

use crate::definition::SectionDefinition;
use crate::error::ConfigurationError;
use crate::id::SectionId;

/// Ordered set of [`SectionDefinition`]s, validated once at construction.
///
/// The registry is write-once: there is no way to add or remove sections after
/// [`register`](Self::register) returns, so it can be shared freely between
/// threads rendering pages in parallel.
#[derive(Clone, Debug)]
pub struct SectionRegistry {
    sections: Vec<SectionDefinition>,
    index: HashMap<SectionId, usize>,
}

impl SectionRegistry {
    /// Validate `definitions` and build a registry in authoring order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] on the first definition with an empty
    /// or duplicate id, a missing or invalid include rule, an invalid exclude
    /// rule, or a relative canonical path.
    pub fn register(
        definitions: impl IntoIterator<Item = SectionDefinition>,
    ) -> Result<Self, ConfigurationError> {
        let sections: Vec<SectionDefinition> = definitions.into_iter().collect();
        let mut index = HashMap::with_capacity(sections.len());

        for (position, def) in sections.iter().enumerate() {
            validate_definition(position, def)?;
            if index.insert(def.id.clone(), position).is_some() {
                return Err(ConfigurationError::DuplicateId(def.id.clone()));
            }
        }

        tracing::debug!(sections = sections.len(), "Registered sections");
        Ok(Self { sections, index })
    }

    /// Definitions in authoring order.
    #[must_use]
    pub fn all(&self) -> &[SectionDefinition] {
        &self.sections
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SectionDefinition> {
        self.index
            .get(&SectionId::new(id))
            .map(|&position| &self.sections[position])
    }

    /// Registration position of a section.
    #[must_use]
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Section ids in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|def| &def.id)
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no sections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every definition that claims `path` (included, not excluded), in
    /// authoring order.
    ///
    /// This is the per-chip view: each section evaluated independently, with
    /// no tie-breaking.
    pub fn claims<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a SectionDefinition> {
        self.sections.iter().filter(move |def| def.claims(path))
    }
}

fn validate_definition(position: usize, def: &SectionDefinition) -> Result<(), ConfigurationError> {
    if def.id.as_str().trim().is_empty() {
        return Err(ConfigurationError::EmptyId(position));
    }

    let include = def
        .include
        .as_ref()
        .ok_or_else(|| ConfigurationError::MissingInclude(def.id.clone()))?;

    for rule in std::iter::once(include).chain(&def.exclude) {
        rule.validate()
            .map_err(|reason| ConfigurationError::InvalidRule {
                id: def.id.clone(),
                reason,
            })?;
    }

    if !def.canonical_path.starts_with('/') {
        return Err(ConfigurationError::InvalidCanonicalPath {
            id: def.id.clone(),
            path: def.canonical_path.clone(),
        });
    }

    Ok(())
}
