//! Active-route resolution.
//!
//! Walks the navigation tree once and finds the nodes which are "active"
//! for the current location:
//! - Page: the location matches the page's `href`
//! - Group: the group contains an active page
//! - Section: the section contains an active group or page

use crate::node::{NavNode, NodeKind};

/// The active node per kind, referencing instances inside the resolved tree.
///
/// All three slots are always present; an unmatched slot is `None`. The
/// slots borrow the tree passed to [`resolve_active`], so activity checks
/// can compare node identity rather than structure.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveRoutes<'a> {
    /// The page whose `href` equals the current location.
    pub page: Option<&'a NavNode>,
    /// The group containing the active page.
    pub group: Option<&'a NavNode>,
    /// The section containing the active group or page.
    pub section: Option<&'a NavNode>,
}

impl<'a> ActiveRoutes<'a> {
    /// Slot for the given kind.
    #[must_use]
    pub const fn get(&self, kind: NodeKind) -> Option<&'a NavNode> {
        match kind {
            NodeKind::Page => self.page,
            NodeKind::Group => self.group,
            NodeKind::Section => self.section,
        }
    }

    /// Whether `node` is the active instance for its own kind.
    ///
    /// Compares by pointer identity, never by structural equality: two
    /// structurally identical nodes are not interchangeable.
    #[must_use]
    pub fn is_active(&self, node: &NavNode) -> bool {
        self.get(node.kind())
            .is_some_and(|active| std::ptr::eq(active, node))
    }

    /// True when no node matched the location.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.page.is_none() && self.group.is_none() && self.section.is_none()
    }
}

/// Find the active routes for `location`, in one pass over the tree.
///
/// Matching is exact string equality against page `href`s — no
/// normalization, no trailing-slash handling. Hidden nodes and their
/// subtrees are never considered. An all-`None` result is the normal
/// no-match outcome, not an error.
///
/// The top-level loop visits every sibling: a later sibling that itself
/// produces a match overwrites earlier slots. With unique `href`s (a
/// precondition of the source configuration) at most one page matches,
/// so overwriting does not occur in practice.
#[must_use]
pub fn resolve_active<'a>(routes: &'a [NavNode], location: &str) -> ActiveRoutes<'a> {
    let mut active = ActiveRoutes::default();

    for route in routes {
        // Hidden subtrees never render, so they are never active either
        if route.hidden() {
            continue;
        }

        match route {
            NavNode::Page(page) => {
                if page.href == location {
                    active.page = Some(route);
                }
            }
            NavNode::Group(group) => {
                let nested = resolve_active(&group.children, location);
                if nested.page.is_some() {
                    active.page = nested.page;
                    active.group = Some(route);
                }
            }
            NavNode::Section(section) => {
                let nested = resolve_active(&section.children, location);
                if nested.group.is_some() || nested.page.is_some() {
                    active.page = nested.page;
                    active.group = nested.group;
                    active.section = Some(route);
                }
            }
        }
    }

    active
}
