//! Sidebar facade with per-location memoization.

use sidenav_tree::{ActiveRoutes, NavNode, resolve_active};

use crate::presenter::Presenter;
use crate::renderer::SidebarRenderer;

/// Sidebar over an immutable navigation tree.
///
/// Owns the transient derived state of a page session: the active routes
/// for the last seen location. Resolution runs once per navigation event;
/// repeated renders for the same location reuse the cached result. A
/// location change replaces the cached result wholesale.
///
/// Single-threaded by design — both passes are synchronous and the tree
/// is read-only for the lifetime of the borrow.
pub struct Sidebar<'a, P: Presenter> {
    routes: &'a [NavNode],
    renderer: SidebarRenderer<P>,
    resolved: Option<(String, ActiveRoutes<'a>)>,
}

impl<'a, P: Presenter> Sidebar<'a, P> {
    /// Create a sidebar over `routes`, presenting with `presenter`.
    pub const fn new(routes: &'a [NavNode], presenter: P) -> Self {
        Self {
            routes,
            renderer: SidebarRenderer::new(presenter),
            resolved: None,
        }
    }

    /// Active routes for `location`, resolving only on location change.
    pub fn navigate(&mut self, location: &str) -> ActiveRoutes<'a> {
        if let Some((cached_location, active)) = &self.resolved
            && cached_location == location
        {
            return *active;
        }

        let active = resolve_active(self.routes, location);
        tracing::debug!(
            location,
            page = active.page.map(NavNode::name),
            "Resolved active routes"
        );
        self.resolved = Some((location.to_owned(), active));
        active
    }

    /// Render the sidebar for `location` in one synchronous pass.
    pub fn render(&mut self, location: &str) -> String {
        let active = self.navigate(location);
        self.renderer.render_tree(self.routes, &active)
    }
}
