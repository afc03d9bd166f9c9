use std::fmt;

use crate::{
    error::RenderError,
    tree::{ExprTree, NodeId},
};

/// Filler glyph printed for cells the layout never wrote.
const FILLER: char = '.';
/// Glyph printed for diagonal connector stroke cells.
const STROKE: char = 'o';

/// A single written cell of the grid.
///
/// The distinction between labels and strokes is kept so that a boundary
/// layer can style them differently; this module prints both as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// A node label.
    Label(char),
    /// One cell of a diagonal connector stroke.
    Stroke,
}

/// A fixed-size character grid holding a drawn tree.
///
/// Dimensions are derived from the tree height `h` when the grid is built:
/// `width = 2^h - 1` and `row count = 2 * (2^h / 4)`. Cells that were never
/// written render as the filler glyph.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<Option<GridCell>>>,
    width: usize,
}

impl Grid {
    fn blank(rows: usize, width: usize) -> Self {
        Self { cells: vec![vec![None; width]; rows],
               width }
    }

    /// Returns the grid width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the written cell at the given coordinates, or `None` for
    /// blank or out-of-range cells.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<GridCell> {
        self.cells.get(row).and_then(|cells| cells.get(column).copied().flatten())
    }

    /// Writes a cell, reporting coordinates the allocated grid cannot hold.
    fn set(&mut self, row: usize, column: isize, cell: GridCell) -> Result<(), RenderError> {
        let col = usize::try_from(column).ok().filter(|&c| c < self.width);

        match (self.cells.get_mut(row), col) {
            (Some(cells), Some(col)) => {
                cells[col] = Some(cell);
                Ok(())
            },
            _ => Err(RenderError::OutOfBounds { row, column }),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let glyph = match cell {
                    Some(GridCell::Label(label)) => *label,
                    Some(GridCell::Stroke) => STROKE,
                    None => FILLER,
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

/// Draws the tree onto a grid sized from its height.
///
/// The root label lands at row 0, column `width / 2`. For each child a
/// diagonal stroke of `arc` cells is drawn one row down and one column
/// sideways per step, and the child is placed at the end of the stroke with
/// the arc halved, so deeper levels draw shorter diagonals.
///
/// The sizing formula is not a worst-case geometric bound, and it is kept
/// as-is rather than corrected. Shapes it cannot hold are reported:
/// a height-1 tree allocates a zero-row grid, so even its root label has
/// nowhere to go.
///
/// # Errors
/// - `TooTall` when `2^height` is not representable.
/// - `OutOfBounds` when a label or stroke lands outside the allocated grid.
///
/// # Example
/// ```
/// use treecalc::{parse, render::grid};
///
/// let tree = parse("2+3").unwrap();
/// let drawn = grid::render(&tree).unwrap();
/// assert_eq!(drawn.width(), 3);
/// assert_eq!(drawn.row_count(), 2);
/// assert_eq!(drawn.to_string(), ".+.\n2.3");
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn render(tree: &ExprTree) -> Result<Grid, RenderError> {
    let height = tree.height(tree.root());
    if height >= usize::BITS as usize - 1 {
        return Err(RenderError::TooTall { height });
    }

    let width = (1_usize << height) - 1;
    let arc = (1_usize << height) / 4;
    let mut grid = Grid::blank(arc * 2, width);

    place(tree, tree.root(), 0, (width / 2) as isize, arc, &mut grid)?;
    Ok(grid)
}

#[allow(clippy::cast_possible_wrap)]
fn place(tree: &ExprTree,
         id: NodeId,
         row: usize,
         column: isize,
         arc: usize,
         grid: &mut Grid)
         -> Result<(), RenderError> {
    let node = tree.node(id);
    grid.set(row, column, GridCell::Label(node.kind().glyph()))?;

    if let Some(left) = node.left() {
        for step in 1..=arc {
            grid.set(row + step, column - step as isize, GridCell::Stroke)?;
        }
        place(tree, left, row + arc, column - arc as isize, arc / 2, grid)?;
    }

    if let Some(right) = node.right() {
        for step in 1..=arc {
            grid.set(row + step, column + step as isize, GridCell::Stroke)?;
        }
        place(tree, right, row + arc, column + arc as isize, arc / 2, grid)?;
    }

    Ok(())
}
