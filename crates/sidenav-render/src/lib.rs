//! Trait-based sidebar renderer with pluggable presenters.
//!
//! This crate turns a navigation tree plus the resolved active routes into
//! presentation output.
//!
//! # Architecture
//!
//! Traversal concerns (hidden filtering, recursion, active detection, key
//! derivation) live in [`SidebarRenderer`]; format-specific output is
//! delegated through the [`Presenter`] trait, one hook per node kind:
//! - [`HtmlPresenter`]: semantic HTML output for web display
//!
//! [`Sidebar`] wraps both with per-location memoization of the resolver
//! result, so repeated renders without a navigation event do not re-walk
//! the tree.
//!
//! # Example
//!
//! ```
//! use sidenav_render::{HtmlPresenter, Sidebar};
//! use sidenav_tree::{GroupNode, NavNode, PageNode, SectionNode};
//!
//! let routes: Vec<NavNode> = vec![
//!     SectionNode::new(
//!         "Guides",
//!         vec![GroupNode::new("Intro", vec![PageNode::new("Overview", "/intro").into()]).into()],
//!     )
//!     .into(),
//! ];
//!
//! let mut sidebar = Sidebar::new(&routes, HtmlPresenter::default());
//! let html = sidebar.render("/intro");
//! assert!(html.contains(r#"href="/intro""#));
//! ```

mod html;
mod presenter;
mod renderer;
mod sidebar;

pub use html::{HtmlPresenter, escape_html};
pub use presenter::Presenter;
pub use renderer::SidebarRenderer;
pub use sidebar::Sidebar;
