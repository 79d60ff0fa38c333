//! Access filter: role-specific projection of the menu tree
//!
//! The projection is recomputed whenever the role changes and is never
//! persisted. Filtering composes top-down independently at each level: a
//! dropped node takes its whole subtree with it, and an unrestricted
//! child is kept as long as its parent was kept.

use crate::models::{MenuNode, RoleId};

/// Produce the subset of `nodes` visible to `role`, preserving order.
///
/// A node is retained iff it has no allow-list or `role` is a member of
/// it. Retained groups keep the recursive filter result as children,
/// which may be empty: an empty-but-visible group is not removed. A role
/// matching nothing yields an empty, valid tree.
pub fn filter_nodes(nodes: &[MenuNode], role: RoleId) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|node| node.visible_to(role))
        .map(|node| match node {
            MenuNode::Leaf(leaf) => MenuNode::Leaf(leaf.clone()),
            MenuNode::Group(group) => {
                let mut filtered = group.clone();
                filtered.children = filter_nodes(&group.children, role);
                MenuNode::Group(filtered)
            }
        })
        .collect()
}
