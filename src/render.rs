/// Compact indented rendering.
///
/// Produces a directory-tree style listing of the expression tree, printing
/// every right subtree block above its sibling left block. Its width is
/// unbounded, so it can draw trees of any size.
pub mod basic;
/// Coordinate-grid rendering.
///
/// Draws the tree onto a fixed-size character grid sized from the tree
/// height, with diagonal connector strokes between parents and children.
pub mod grid;

use crate::{error::RenderError, tree::ExprTree};

/// Selects one of the two tree visualizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Compact, unbounded-width indented rendering.
    Basic,
    /// Fixed-size character-grid rendering with diagonal strokes.
    Enhanced,
}

/// Renders the tree in the requested mode.
///
/// The output is plain structural text; applying color or other styling is
/// left to the caller.
///
/// # Errors
/// Only the enhanced mode can fail, when the grid sizing formula cannot hold
/// the tree being drawn; see [`grid::render`].
///
/// # Example
/// ```
/// use treecalc::{
///     parse,
///     render::{render, DisplayMode},
/// };
///
/// let tree = parse("2+3").unwrap();
/// assert_eq!(render(&tree, DisplayMode::Basic).unwrap(), "+\n│└── 3\n└── 2");
/// assert_eq!(render(&tree, DisplayMode::Enhanced).unwrap(), ".+.\n2.3");
/// ```
pub fn render(tree: &ExprTree, mode: DisplayMode) -> Result<String, RenderError> {
    match mode {
        DisplayMode::Basic => Ok(basic::render(tree)),
        DisplayMode::Enhanced => Ok(grid::render(tree)?.to_string()),
    }
}
