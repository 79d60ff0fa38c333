//! Plain-text rendering of a filtered tree
//!
//! Used by the `show` command and snapshot tests. Purely presentational;
//! all role and path decisions happen before this point.

use crate::models::MenuNode;

/// Render `nodes` as indented text, marking the selected entry with `›`
/// and open groups with `▾` (closed groups show `▸`).
pub fn render_tree(nodes: &[MenuNode], selected: Option<&str>, open_keys: &[String]) -> String {
    let mut out = String::new();
    render_level(nodes, selected, open_keys, 0, &mut out);
    out
}

fn render_level(
    nodes: &[MenuNode],
    selected: Option<&str>,
    open_keys: &[String],
    depth: usize,
    out: &mut String,
) {
    for node in nodes {
        let marker = if node.is_group() {
            if open_keys.iter().any(|k| k == node.key()) {
                "▾ "
            } else {
                "▸ "
            }
        } else if selected == Some(node.key()) {
            "› "
        } else {
            "  "
        };

        out.push_str(&"  ".repeat(depth));
        out.push_str(marker);
        out.push_str(node.label());
        out.push_str(" [");
        out.push_str(node.key());
        out.push(']');
        if let Some(target) = node.target() {
            out.push_str(" -> ");
            out.push_str(target);
        }
        out.push('\n');

        render_level(node.children(), selected, open_keys, depth + 1, out);
    }
}
