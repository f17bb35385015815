//! Navigation tree model and active-route resolution.
//!
//! This crate provides:
//! - [`NavNode`]: the sidebar navigation tree (pages, groups, sections)
//! - [`resolve_active`]: finding the nodes on the path to the current location
//!
//! The tree is built once from site configuration and treated as immutable
//! for the lifetime of a page session. Resolution returns references into
//! that tree; downstream consumers compare those references by identity,
//! so two structurally identical nodes are never interchangeable.
//!
//! # Example
//!
//! ```
//! use sidenav_tree::{GroupNode, NavNode, PageNode, SectionNode, resolve_active};
//!
//! let routes: Vec<NavNode> = vec![
//!     SectionNode::new(
//!         "Guides",
//!         vec![GroupNode::new("Intro", vec![PageNode::new("Overview", "/intro").into()]).into()],
//!     )
//!     .into(),
//! ];
//!
//! let active = resolve_active(&routes, "/intro");
//! assert_eq!(active.page.map(NavNode::name), Some("Overview"));
//! assert_eq!(active.group.map(NavNode::name), Some("Intro"));
//! assert_eq!(active.section.map(NavNode::name), Some("Guides"));
//! ```

mod active;
mod node;

pub use active::{ActiveRoutes, resolve_active};
pub use node::{GroupNode, NavNode, NodeKind, PageNode, SectionNode};
