//! Navigation state for the portfolio documentation site.
//!
//! The renderer calls into this crate on every path change. It normalizes the
//! raw location, asks the section resolver which section is active, and
//! derives what each piece of navigation UI should show:
//!
//! - the top navbar, with `active_base_regex` items
//! - the docs sub-header chip bar (only under the docs base)
//! - the sidebar of the active section
//! - the landing-page cards
//!
//! # Example
//!
//! ```
//! use stacknav_config::Config;
//! use stacknav_navigation::SiteNavigation;
//!
//! let site = SiteNavigation::from_config(&Config::builtin().unwrap()).unwrap();
//! let state = site.state("/docs/angular/vision-general#signals");
//!
//! assert_eq!(state.active_section.unwrap().as_str(), "angular");
//! assert!(state.subheader.is_some());
//! ```

mod error;
mod landing;
mod navbar;
mod path;
mod sidebar;
mod state;
mod subheader;

pub use error::NavigationError;
pub use landing::{LandingCard, landing_cards};
pub use navbar::{NavTarget, Navbar, NavbarItem, NavbarLink};
pub use path::normalize_path;
pub use sidebar::{Sidebar, SidebarDoc};
pub use state::{NavigationState, SiteNavigation};
pub use subheader::{Chip, DocsSubheader, in_docs_tree};
