//! Indented tree rendering.

use std::fmt::Write;

use treetally_core::Node;

/// Render a node tree as an indented listing.
///
/// One basename per line, two spaces of indent per depth level, children
/// in the order the scan produced them. Pruned entries were never added
/// to the tree, so nothing here filters.
pub fn render_tree(root: &Node) -> String {
    let mut output = String::new();
    render_node(&mut output, root, 0);
    output
}

/// Print the indented tree to stdout.
pub fn print_tree(root: &Node) {
    print!("{}", render_tree(root));
}

fn render_node(output: &mut String, node: &Node, depth: usize) {
    let _ = writeln!(output, "{}{}", "  ".repeat(depth), node.name);
    if let Some(children) = node.children() {
        for child in children {
            render_node(output, child, depth + 1);
        }
    }
}
