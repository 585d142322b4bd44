//! Section sidebars.

use serde::Serialize;
use stacknav_sections::{SectionDefinition, SectionId, doc_path};

/// A sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarDoc {
    /// Doc id relative to the docs base.
    pub id: String,
    /// URL path.
    pub path: String,
    /// The doc currently displayed.
    pub current: bool,
}

/// The sidebar of one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    /// Owning section.
    pub section: SectionId,
    /// Docs in sidebar order.
    pub docs: Vec<SidebarDoc>,
}

impl Sidebar {
    /// Sidebar of `section` with the doc at `path` marked current.
    ///
    /// A trailing slash on `path` is ignored when matching docs.
    #[must_use]
    pub fn for_section(section: &SectionDefinition, docs_base: &str, path: &str) -> Self {
        let current = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let docs = section
            .sidebar
            .iter()
            .map(|id| {
                let url = doc_path(docs_base, id);
                SidebarDoc {
                    current: url == current,
                    id: id.clone(),
                    path: url,
                }
            })
            .collect();

        Self {
            section: section.id.clone(),
            docs,
        }
    }

    /// The doc marked current, if the path is one of the sidebar docs.
    #[must_use]
    pub fn current(&self) -> Option<&SidebarDoc> {
        self.docs.iter().find(|doc| doc.current)
    }
}

#[cfg(test)]
mod tests {
    use stacknav_sections::PathRule;

    use super::*;

    fn electron() -> SectionDefinition {
        SectionDefinition::new("electron", "Electron", "/docs/electron/introduccion")
            .include(PathRule::prefix("/docs/electron"))
            .sidebar(["electron/introduccion", "electron/angular-integration", "electron/packaging"])
    }

    #[test]
    fn test_marks_current_doc() {
        let sidebar = Sidebar::for_section(&electron(), "/docs", "/docs/electron/packaging/");

        assert_eq!(sidebar.section, SectionId::new("electron"));
        assert_eq!(sidebar.docs.len(), 3);
        assert_eq!(sidebar.current().unwrap().id, "electron/packaging");
        assert_eq!(sidebar.docs[0].path, "/docs/electron/introduccion");
    }

    #[test]
    fn test_no_current_for_unlisted_path() {
        let sidebar = Sidebar::for_section(&electron(), "/docs", "/docs/electron/otro");

        assert!(sidebar.current().is_none());
    }
}
