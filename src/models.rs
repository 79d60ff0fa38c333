//! Core data models for navrail
//!
//! Defines the fundamental data structures used throughout navrail:
//! - `MenuNode`: one entry in the navigation hierarchy (leaf or group)
//! - `MenuTree`: a validated collection of root nodes
//! - `RoleId`: the externally supplied access-level tag

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Role identifier supplied by the host application's session layer.
///
/// navrail never fetches or validates roles; it only compares them
/// against per-node allow-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub u16);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A navigable menu entry.
///
/// `target` may be absent for placeholder entries that are displayed but
/// not yet wired to a route; activating such an entry does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    pub key: String,
    pub label: String,
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<RoleId>>,
}

/// A grouping entry holding an ordered run of child nodes.
///
/// Groups never navigate; their role in the rail is expand/collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<RoleId>>,
    pub children: Vec<MenuNode>,
}

/// One entry in the navigation hierarchy.
///
/// The leaf/group split is a closed variant set so the access filter and
/// the path resolver are exhaustive instead of probing optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuNode {
    Group(GroupNode),
    Leaf(LeafNode),
}

/// Wire form of a node as it appears in menu configuration files.
///
/// Supports both shapes with one table: `children` present means group.
#[derive(Deserialize)]
struct RawNode {
    key: String,
    label: String,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    access: Option<Vec<RoleId>>,
    #[serde(default)]
    children: Option<Vec<MenuNode>>,
}

impl<'de> Deserialize<'de> for MenuNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawNode::deserialize(deserializer)?;
        Ok(match raw.children {
            // A node that declares children is a group even if it also
            // carries a target; group nodes never navigate.
            Some(children) => MenuNode::Group(GroupNode {
                key: raw.key,
                label: raw.label,
                access: raw.access,
                children,
            }),
            None => MenuNode::Leaf(LeafNode {
                key: raw.key,
                label: raw.label,
                target: raw.to,
                access: raw.access,
            }),
        })
    }
}

impl MenuNode {
    /// Create a leaf entry with no target and no access restriction
    pub fn leaf(key: impl Into<String>, label: impl Into<String>) -> Self {
        MenuNode::Leaf(LeafNode {
            key: key.into(),
            label: label.into(),
            target: None,
            access: None,
        })
    }

    /// Create a group entry with the given children
    pub fn group(
        key: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        MenuNode::Group(GroupNode {
            key: key.into(),
            label: label.into(),
            access: None,
            children,
        })
    }

    /// Attach a navigation target. Ignored on groups, which never navigate.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        if let MenuNode::Leaf(ref mut leaf) = self {
            leaf.target = Some(target.into());
        }
        self
    }

    /// Restrict visibility to the given roles
    pub fn with_access(mut self, roles: impl IntoIterator<Item = u16>) -> Self {
        let access = Some(roles.into_iter().map(RoleId).collect());
        match self {
            MenuNode::Leaf(ref mut leaf) => leaf.access = access,
            MenuNode::Group(ref mut group) => group.access = access,
        }
        self
    }

    pub fn key(&self) -> &str {
        match self {
            MenuNode::Leaf(leaf) => &leaf.key,
            MenuNode::Group(group) => &group.key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuNode::Leaf(leaf) => &leaf.label,
            MenuNode::Group(group) => &group.label,
        }
    }

    /// Allow-list of roles, if this node is restricted
    pub fn access(&self) -> Option<&[RoleId]> {
        match self {
            MenuNode::Leaf(leaf) => leaf.access.as_deref(),
            MenuNode::Group(group) => group.access.as_deref(),
        }
    }

    /// Navigation target; always `None` for groups
    pub fn target(&self) -> Option<&str> {
        match self {
            MenuNode::Leaf(leaf) => leaf.target.as_deref(),
            MenuNode::Group(_) => None,
        }
    }

    /// Child nodes in display order; empty for leaves
    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Leaf(_) => &[],
            MenuNode::Group(group) => &group.children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, MenuNode::Group(_))
    }

    /// Whether this single node is visible to `role`.
    ///
    /// Unrestricted nodes are visible to every role, including unknown
    /// ones. This fail-open policy only hides navigation shortcuts; it is
    /// not an authorization boundary.
    pub fn visible_to(&self, role: RoleId) -> bool {
        match self.access() {
            None => true,
            Some(roles) => roles.contains(&role),
        }
    }
}

/// A validated, immutable navigation tree.
///
/// Construction rejects duplicate keys anywhere in the tree, since a
/// colliding key would make path-to-node resolution ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    /// Validate and wrap a set of root nodes
    pub fn new(nodes: Vec<MenuNode>) -> NavResult<Self> {
        let mut seen = HashSet::new();
        check_unique_keys(&nodes, &mut seen)?;
        Ok(Self { nodes })
    }

    pub fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Root nodes in display order
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }
}

fn check_unique_keys(nodes: &[MenuNode], seen: &mut HashSet<String>) -> NavResult<()> {
    for node in nodes {
        if !seen.insert(node.key().to_string()) {
            return Err(NavError::DuplicateKey {
                key: node.key().to_string(),
            });
        }
        check_unique_keys(node.children(), seen)?;
    }
    Ok(())
}
