use crate::id::SectionId;

/// Registry construction error.
///
/// Always an authoring defect in the section table; callers should abort
/// startup rather than serve pages with a half-valid registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Two definitions share an id.
    #[error("Duplicate section id: {0}")]
    DuplicateId(SectionId),
    /// A definition has no include rule.
    #[error("Section {0} has no include rule")]
    MissingInclude(SectionId),
    /// A definition has an empty id.
    #[error("Section at position {0} has an empty id")]
    EmptyId(usize),
    /// An include or exclude rule is unusable.
    #[error("Section {id} has an invalid rule: {reason}")]
    InvalidRule {
        /// Offending section.
        id: SectionId,
        /// Why the rule was rejected.
        reason: String,
    },
    /// The canonical path is not an absolute path.
    #[error("Section {id} canonical path {path:?} must start with '/'")]
    InvalidCanonicalPath {
        /// Offending section.
        id: SectionId,
        /// The rejected path.
        path: String,
    },
}
