//! Path resolver: maps the current URL path to a menu node and derives
//! the top-level group that should be shown expanded.
//!
//! The two steps are deliberately split: selection can be absent (the
//! path belongs to a route outside the menu) while the rail still needs
//! a deterministic open/closed state for its groups.

use crate::models::MenuNode;

/// How deep below a top-level group the auto-expansion search looks.
///
/// The rail keeps exactly one top-level section open and does not
/// auto-expand nested groups. A future multi-level menu must raise this
/// deliberately rather than rely on traversal shape.
pub const MAX_AUTO_EXPAND_DEPTH: usize = 1;

/// Find the key of the first node whose target equals `path` exactly.
///
/// Pre-order depth-first, first match wins, no path normalization
/// (trailing slashes and query strings are the host router's concern).
/// `None` when the path belongs to no menu entry.
pub fn key_for_path<'a>(nodes: &'a [MenuNode], path: &str) -> Option<&'a str> {
    for node in nodes {
        if node.target() == Some(path) {
            return Some(node.key());
        }
        if let Some(key) = key_for_path(node.children(), path) {
            return Some(key);
        }
    }
    None
}

/// Key of the top-level node whose subtree contains `selected` within
/// [`MAX_AUTO_EXPAND_DEPTH`] levels.
///
/// Falls back to the first top-level node's key when `selected` is
/// absent or contained in no group; `None` only for an empty tree.
pub fn open_ancestor<'a>(nodes: &'a [MenuNode], selected: Option<&str>) -> Option<&'a str> {
    if let Some(key) = selected {
        for node in nodes {
            if contains_within_depth(node.children(), key, MAX_AUTO_EXPAND_DEPTH) {
                return Some(node.key());
            }
        }
    }
    nodes.first().map(|node| node.key())
}

fn contains_within_depth(nodes: &[MenuNode], key: &str, depth: usize) -> bool {
    if depth == 0 {
        return false;
    }
    nodes.iter().any(|node| {
        node.key() == key || contains_within_depth(node.children(), key, depth - 1)
    })
}
