//! HTML presenter for the sidebar.
//!
//! Produces semantic HTML suitable for web display:
//! - `<a>` for page links
//! - `<div>` wrappers with a label element for groups and sections
//!
//! Active nodes carry an extra `active` class; every element carries its
//! presentation key in a `data-key` attribute.

use std::fmt::Write;

use sidenav_tree::{GroupNode, PageNode, SectionNode};

use crate::presenter::Presenter;

/// HTML presenter with a configurable class prefix.
#[derive(Clone, Debug)]
pub struct HtmlPresenter {
    class_prefix: String,
}

impl HtmlPresenter {
    /// Create a presenter using `prefix` for CSS class names.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: prefix.into(),
        }
    }

    fn class_attr(&self, kind: &str, is_active: bool) -> String {
        let base = format!("{}-{kind}", self.class_prefix);
        if is_active {
            format!("{base} active")
        } else {
            base
        }
    }
}

impl Default for HtmlPresenter {
    /// Presenter with the `sidenav` class prefix.
    fn default() -> Self {
        Self::new("sidenav")
    }
}

impl Presenter for HtmlPresenter {
    fn page(&self, page: &PageNode, key: &str, is_active: bool, out: &mut String) {
        write!(
            out,
            r#"<a class="{}" data-key="{}" href="{}">{}</a>"#,
            self.class_attr("page", is_active),
            escape_html(key),
            escape_html(&page.href),
            escape_html(&page.name)
        )
        .unwrap();
    }

    fn group(
        &self,
        group: &GroupNode,
        key: &str,
        is_active: bool,
        children: &str,
        out: &mut String,
    ) {
        write!(
            out,
            r#"<div class="{}" data-key="{}"><span class="{}-label">{}</span>{children}</div>"#,
            self.class_attr("group", is_active),
            escape_html(key),
            self.class_prefix,
            escape_html(&group.name)
        )
        .unwrap();
    }

    fn section(
        &self,
        section: &SectionNode,
        key: &str,
        is_active: bool,
        children: &str,
        out: &mut String,
    ) {
        write!(
            out,
            r#"<div class="{}" data-key="{}"><span class="{}-label">{}</span>{children}</div>"#,
            self.class_attr("section", is_active),
            escape_html(key),
            self.class_prefix,
            escape_html(&section.name)
        )
        .unwrap();
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
