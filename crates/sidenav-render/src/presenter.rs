//! Presenter trait for sidebar output.

use sidenav_tree::{GroupNode, PageNode, SectionNode};

/// Format-specific presentation of sidebar nodes.
///
/// The renderer handles traversal, hidden filtering, active detection and
/// key derivation; presenters only emit output. Group and section hooks
/// receive their children pre-rendered, so presenters decide placement but
/// never recurse themselves.
///
/// `key` is the stable presentation-list key (`"{kind}-{name}"`) and
/// `is_active` reflects identity against the resolved active routes.
pub trait Presenter {
    /// Emit a page link.
    fn page(&self, page: &PageNode, key: &str, is_active: bool, out: &mut String);

    /// Emit a group wrapping its pre-rendered children.
    fn group(&self, group: &GroupNode, key: &str, is_active: bool, children: &str, out: &mut String);

    /// Emit a section wrapping its pre-rendered children.
    fn section(
        &self,
        section: &SectionNode,
        key: &str,
        is_active: bool,
        children: &str,
        out: &mut String,
    );
}
