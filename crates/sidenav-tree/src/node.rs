//! Navigation node types.
//!
//! The tree is a tagged union over three node kinds. Sections hold groups
//! and pages, groups hold pages (and nested groups), pages are leaves.
//! Serialization uses an external `kind` tag so configuration files read
//! naturally (`kind: page`, `kind: group`, `kind: section`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of navigation node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Leaf node linking to a document.
    Page,
    /// Collection of related pages within a section.
    Group,
    /// Top-level grouping of the sidebar.
    Section,
}

impl NodeKind {
    /// Lowercase tag used in configuration and presentation keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Group => "group",
            Self::Section => "section",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf node linking to a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    /// Display name, also used for key disambiguation.
    pub name: String,
    /// Location to match against, verbatim (no normalization).
    pub href: String,
    /// Hidden nodes never resolve as active and never render.
    #[serde(default)]
    pub hidden: bool,
}

impl PageNode {
    /// Create a visible page.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            hidden: false,
        }
    }

    /// Mark the page as hidden.
    #[must_use]
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Collection of related pages within a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    /// Display name, also used for key disambiguation.
    pub name: String,
    /// Hidden nodes never resolve as active and never render.
    #[serde(default)]
    pub hidden: bool,
    /// Child nodes, in display order. Expected to be pages or groups.
    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl GroupNode {
    /// Create a visible group.
    pub fn new(name: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
            children,
        }
    }

    /// Mark the group as hidden. Its whole subtree is skipped.
    #[must_use]
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Top-level grouping of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Display name, also used for key disambiguation.
    pub name: String,
    /// Hidden nodes never resolve as active and never render.
    #[serde(default)]
    pub hidden: bool,
    /// Child nodes, in display order. Expected to be groups or pages.
    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl SectionNode {
    /// Create a visible section.
    pub fn new(name: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
            children,
        }
    }

    /// Mark the section as hidden. Its whole subtree is skipped.
    #[must_use]
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Navigation tree node.
///
/// Authored as static configuration; acyclic by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavNode {
    /// Leaf linking to a document.
    Page(PageNode),
    /// Collection of pages within a section.
    Group(GroupNode),
    /// Top-level sidebar grouping.
    Section(SectionNode),
}

impl NavNode {
    /// Kind discriminant of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Page(_) => NodeKind::Page,
            Self::Group(_) => NodeKind::Group,
            Self::Section(_) => NodeKind::Section,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Page(page) => &page.name,
            Self::Group(group) => &group.name,
            Self::Section(section) => &section.name,
        }
    }

    /// Whether this node (and its subtree) is excluded from the sidebar.
    #[must_use]
    pub const fn hidden(&self) -> bool {
        match self {
            Self::Page(page) => page.hidden,
            Self::Group(group) => group.hidden,
            Self::Section(section) => section.hidden,
        }
    }

    /// Child nodes. Pages are leaves and always return an empty slice.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Page(_) => &[],
            Self::Group(group) => &group.children,
            Self::Section(section) => &section.children,
        }
    }

    /// Stable presentation-list key, derived from kind and name.
    ///
    /// Same-kind siblings sharing a name collide; keeping names unique
    /// among siblings is the configuration author's responsibility.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind(), self.name())
    }
}

impl From<PageNode> for NavNode {
    fn from(page: PageNode) -> Self {
        Self::Page(page)
    }
}

impl From<GroupNode> for NavNode {
    fn from(group: GroupNode) -> Self {
        Self::Group(group)
    }
}

impl From<SectionNode> for NavNode {
    fn from(section: SectionNode) -> Self {
        Self::Section(section)
    }
}
