//! Section registry and active-section resolver.
//!
//! A documentation site is split into *sections*, each owning a path
//! namespace (e.g. `/docs/spring/security`). Namespaces overlap: the Spring
//! Boot section lives under `/docs/spring`, which is also the parent of the
//! Spring Security and Spring Framework namespaces. This crate decides which
//! single section is active for a given path so the navigation UI can
//! highlight it.
//!
//! # Architecture
//!
//! - [`PathRule`]: a pure predicate over a path with an implicit specificity
//! - [`SectionDefinition`]: id, label, canonical path, include and exclude rules
//! - [`SectionRegistry`]: validated, immutable, ordered set of definitions
//! - [`Resolver`]: maps a path to zero or one [`SectionId`]
//! - [`audit`]: flags ambiguous paths and diffs the two [`ResolutionPolicy`] variants
//!
//! # Example
//!
//! ```
//! use stacknav_sections::{PathRule, SectionDefinition, SectionRegistry, resolve_active_section};
//!
//! let registry = SectionRegistry::register(vec![
//!     SectionDefinition::new("spring-boot", "Spring Boot", "/docs/spring/introduccion")
//!         .include(PathRule::prefix("/docs/spring")),
//!     SectionDefinition::new("spring-security", "Spring Security", "/docs/spring/security/guia-completa")
//!         .include(PathRule::prefix("/docs/spring/security")),
//! ])
//! .unwrap();
//!
//! let active = resolve_active_section("/docs/spring/security/guia-completa", &registry);
//! assert_eq!(active.as_ref().map(|id| id.as_str()), Some("spring-security"));
//! assert_eq!(resolve_active_section("/", &registry), None);
//! ```

mod audit;
mod definition;
mod error;
mod id;
mod registry;
mod resolver;
mod rule;

pub use audit::{AmbiguousMatch, AuditReport, MisplacedDoc, PolicyDiff, audit, default_corpus};
pub use definition::{SectionDefinition, doc_path};
pub use error::ConfigurationError;
pub use id::SectionId;
pub use registry::SectionRegistry;
pub use resolver::{Candidate, Resolution, ResolutionPolicy, Resolver, resolve_active_section};
pub use rule::PathRule;
