//! Recursive render dispatch over the navigation tree.

use sidenav_tree::{ActiveRoutes, NavNode};

use crate::presenter::Presenter;

/// Generic sidebar renderer with a pluggable [`Presenter`].
///
/// Walks the tree recursively, skipping hidden nodes, and dispatches each
/// node to the presenter hook matching its kind. Activity is decided by
/// node identity against the resolver result, so the same [`ActiveRoutes`]
/// must come from the same tree instance being rendered.
pub struct SidebarRenderer<P: Presenter> {
    presenter: P,
}

impl<P: Presenter> SidebarRenderer<P> {
    /// Create a renderer delegating output to `presenter`.
    pub const fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// Render all top-level routes in order.
    ///
    /// Hidden routes contribute nothing; visible routes are concatenated
    /// in tree order.
    #[must_use]
    pub fn render_tree(&self, routes: &[NavNode], active: &ActiveRoutes<'_>) -> String {
        let mut out = String::with_capacity(1024);
        for route in routes {
            self.render_into(route, active, &mut out);
        }
        out
    }

    /// Render a single node, or `None` when the node is hidden.
    #[must_use]
    pub fn render_node(&self, node: &NavNode, active: &ActiveRoutes<'_>) -> Option<String> {
        let mut out = String::new();
        if self.render_into(node, active, &mut out) {
            Some(out)
        } else {
            None
        }
    }

    /// Render `node` into `out`. Returns false when the node is hidden.
    fn render_into(&self, node: &NavNode, active: &ActiveRoutes<'_>, out: &mut String) -> bool {
        if node.hidden() {
            return false;
        }

        let key = node.key();
        let is_active = active.is_active(node);

        match node {
            NavNode::Page(page) => {
                // Pages are leaves; a children field would be ignored
                self.presenter.page(page, &key, is_active, out);
            }
            NavNode::Group(group) => {
                let children = self.render_children(&group.children, active);
                self.presenter.group(group, &key, is_active, &children, out);
            }
            NavNode::Section(section) => {
                let children = self.render_children(&section.children, active);
                self.presenter
                    .section(section, &key, is_active, &children, out);
            }
        }

        true
    }

    fn render_children(&self, children: &[NavNode], active: &ActiveRoutes<'_>) -> String {
        let mut out = String::new();
        for child in children {
            self.render_into(child, active, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlPresenter;
    use sidenav_tree::{GroupNode, PageNode, SectionNode, resolve_active};

    fn renderer() -> SidebarRenderer<HtmlPresenter> {
        SidebarRenderer::new(HtmlPresenter::default())
    }

    #[test]
    fn test_hidden_node_renders_nothing() {
        let node = NavNode::from(PageNode::new("Secret", "/secret").hide());
        let output = renderer().render_node(&node, &ActiveRoutes::default());
        assert!(output.is_none());
    }

    #[test]
    fn test_hidden_subtree_omitted_from_tree_output() {
        let routes: Vec<NavNode> = vec![
            SectionNode::new("Internal", vec![PageNode::new("Runbook", "/runbook").into()])
                .hide()
                .into(),
            PageNode::new("Overview", "/intro").into(),
        ];
        let active = resolve_active(&routes, "/intro");

        let html = renderer().render_tree(&routes, &active);

        assert!(!html.contains("Internal"));
        assert!(!html.contains("Runbook"));
        assert!(html.contains("Overview"));
    }

    #[test]
    fn test_hidden_child_inside_visible_group_is_skipped() {
        let routes: Vec<NavNode> = vec![
            GroupNode::new(
                "Intro",
                vec![
                    PageNode::new("Overview", "/intro").into(),
                    PageNode::new("Draft", "/draft").hide().into(),
                ],
            )
            .into(),
        ];

        let html = renderer().render_tree(&routes, &ActiveRoutes::default());

        assert!(html.contains("Overview"));
        assert!(!html.contains("Draft"));
    }

    #[test]
    fn test_dispatch_by_kind() {
        let routes: Vec<NavNode> = vec![
            SectionNode::new("Guides", Vec::new()).into(),
            GroupNode::new("Intro", Vec::new()).into(),
            PageNode::new("Overview", "/intro").into(),
        ];

        let html = renderer().render_tree(&routes, &ActiveRoutes::default());

        assert!(html.contains(r#"class="sidenav-section""#));
        assert!(html.contains(r#"class="sidenav-group""#));
        assert!(html.contains(r#"class="sidenav-page""#));
    }

    #[test]
    fn test_nodes_carry_presentation_keys() {
        let routes: Vec<NavNode> = vec![
            SectionNode::new("Guides", vec![PageNode::new("Overview", "/intro").into()]).into(),
        ];

        let html = renderer().render_tree(&routes, &ActiveRoutes::default());

        assert!(html.contains(r#"data-key="section-Guides""#));
        assert!(html.contains(r#"data-key="page-Overview""#));
    }

    #[test]
    fn test_only_resolved_instance_marked_active() {
        // Two structurally identical pages; only the resolved one is active
        let routes: Vec<NavNode> = vec![
            PageNode::new("Overview", "/intro").into(),
            PageNode::new("Overview", "/intro").into(),
        ];
        let active = ActiveRoutes {
            page: Some(&routes[0]),
            ..ActiveRoutes::default()
        };
        let r = renderer();

        let first = r.render_node(&routes[0], &active).unwrap();
        let second = r.render_node(&routes[1], &active).unwrap();

        assert!(first.contains("active"));
        assert!(!second.contains("active"));
    }

    #[test]
    fn test_active_path_marked_at_every_level() {
        let routes: Vec<NavNode> = vec![
            SectionNode::new(
                "Guides",
                vec![GroupNode::new("Intro", vec![PageNode::new("Overview", "/intro").into()])
                    .into()],
            )
            .into(),
        ];
        let active = resolve_active(&routes, "/intro");

        let html = renderer().render_tree(&routes, &active);

        assert!(html.contains(r#"class="sidenav-section active""#));
        assert!(html.contains(r#"class="sidenav-group active""#));
        assert!(html.contains(r#"class="sidenav-page active""#));
    }

    #[test]
    fn test_empty_group_renders_label_without_children() {
        let routes: Vec<NavNode> = vec![GroupNode::new("Advanced", Vec::new()).into()];

        let html = renderer().render_tree(&routes, &ActiveRoutes::default());

        assert!(html.contains("Advanced"));
        assert!(html.contains(r#"<span class="sidenav-label">Advanced</span></div>"#));
    }

    #[test]
    fn test_siblings_render_in_tree_order() {
        let routes: Vec<NavNode> = vec![
            PageNode::new("First", "/a").into(),
            PageNode::new("Second", "/b").into(),
        ];

        let html = renderer().render_tree(&routes, &ActiveRoutes::default());

        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }
}
