//! Navigation tree configuration loading.
//!
//! Parses sidebar navigation trees from YAML files with serde and
//! validates them before handing them to the resolver and renderer.
//!
//! Validation enforces the preconditions the resolver relies on:
//! - every node has a non-empty `name`
//! - every page has a non-empty `href`
//! - `href` values are unique across the whole tree
//!
//! Structurally surprising but harmless shapes (a `section` nested below
//! the top level) are logged and accepted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use sidenav_tree::NavNode;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Navigation file not found.
    #[error("Navigation file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Navigation error: {0}")]
    Validation(String),
}

/// Sidebar navigation configuration.
///
/// The production input format is a YAML file with a top-level `routes`
/// list of navigation nodes:
///
/// ```yaml
/// routes:
///   - kind: section
///     name: Guides
///     children:
///       - kind: page
///         name: Overview
///         href: /intro
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct NavigationConfig {
    /// Top-level navigation nodes, in display order.
    #[serde(default)]
    pub routes: Vec<NavNode>,
}

impl NavigationConfig {
    /// Load and validate navigation configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not valid
    /// YAML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            route_count = config.routes.len(),
            "Loaded navigation configuration"
        );
        Ok(config)
    }

    /// Parse and validate navigation configuration from YAML content.
    ///
    /// Empty content yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or validation fails.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(trimmed)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` on empty names, empty hrefs, or
    /// duplicate hrefs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen_hrefs: HashMap<&str, &str> = HashMap::new();
        validate_nodes(&self.routes, 0, &mut seen_hrefs)
    }
}

/// Recursively validate `nodes` at the given nesting depth.
fn validate_nodes<'a>(
    nodes: &'a [NavNode],
    depth: usize,
    seen_hrefs: &mut HashMap<&'a str, &'a str>,
) -> Result<(), ConfigError> {
    for node in nodes {
        if node.name().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} node has an empty name",
                node.kind()
            )));
        }

        if let NavNode::Page(page) = node {
            if page.href.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "page '{}' has an empty href",
                    page.name
                )));
            }
            if let Some(previous) = seen_hrefs.insert(&page.href, &page.name) {
                return Err(ConfigError::Validation(format!(
                    "duplicate href '{}' on pages '{}' and '{}'",
                    page.href, previous, page.name
                )));
            }
        }

        if matches!(node, NavNode::Section(_)) && depth > 0 {
            // Accepted, but almost always an authoring mistake
            tracing::warn!(name = node.name(), depth, "Section nested below top level");
        }

        validate_nodes(node.children(), depth + 1, seen_hrefs)?;
    }

    Ok(())
}
