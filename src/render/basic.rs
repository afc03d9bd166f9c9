use crate::tree::{ExprTree, NodeId};

/// Connector printed before a node that is its parent's left child.
const LEFT_CONNECTOR: &str = "└── ";
/// Connector printed before a node that is its parent's right child.
const RIGHT_CONNECTOR: &str = "│└── ";
/// Indentation unit added when no continuation bar is needed.
const BLANK_INDENT: &str = "    ";
/// Indentation unit carrying a continuation bar for a pending sibling.
const BAR_INDENT: &str = "│    ";

/// Renders the tree as compact indented text.
///
/// The root is printed bare; every other node is printed after its
/// accumulated prefix and a connector that depends on whether it is the left
/// or right child of its parent. At each node the right subtree block is
/// printed before the left subtree block, so the visual top-to-bottom order
/// is right-to-left.
///
/// # Example
/// ```
/// use treecalc::{parse, render::basic};
///
/// let tree = parse("2+3*4").unwrap();
/// let expected = "*\n│└── 4\n└── +\n    │└── 3\n    └── 2";
/// assert_eq!(basic::render(&tree), expected);
/// ```
#[must_use]
pub fn render(tree: &ExprTree) -> String {
    let mut lines = Vec::new();
    render_node(tree, tree.root(), "", &mut lines);
    lines.join("\n")
}

fn render_node(tree: &ExprTree, id: NodeId, prefix: &str, lines: &mut Vec<String>) {
    let node = tree.node(id);
    let label = node.kind();

    if tree.is_root(id) {
        lines.push(label.to_string());
    } else if tree.is_left_child(id) {
        lines.push(format!("{prefix}{LEFT_CONNECTOR}{label}"));
    } else {
        lines.push(format!("{prefix}{RIGHT_CONNECTOR}{label}"));
    }

    // Right before left, so the right subtree's block sits above its
    // sibling's. The root adds no indentation of its own since it carries no
    // connector.
    if let Some(right) = node.right() {
        let next = if tree.is_root(id) {
            prefix.to_string()
        } else if tree.is_left_child(id) {
            format!("{prefix}{BLANK_INDENT}")
        } else {
            format!("{prefix}{BAR_INDENT}")
        };
        render_node(tree, right, &next, lines);
    }

    if let Some(left) = node.left() {
        let next = if tree.is_root(id) {
            prefix.to_string()
        } else if tree.is_right_child(id) {
            format!("{prefix}{BAR_INDENT}")
        } else {
            format!("{prefix}{BLANK_INDENT}")
        };
        render_node(tree, left, &next, lines);
    }
}
