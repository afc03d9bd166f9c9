#[derive(Debug)]
/// Represents all errors that can occur while drawing a tree onto a grid.
///
/// The grid dimensions are derived from the tree height by the fixed formula
/// `width = 2^h - 1`, `rows = 2 * (2^h / 4)`. The formula is not a worst-case
/// geometric bound; shapes it cannot hold (a height-1 tree allocates zero
/// rows, for instance) are reported here rather than drawn partially.
pub enum RenderError {
    /// A node label or connector stroke landed outside the allocated grid.
    OutOfBounds {
        /// Row of the attempted write.
        row:    usize,
        /// Column of the attempted write; may be negative.
        column: isize,
    },
    /// The tree is too tall for the grid dimensions to be computed at all.
    TooTall {
        /// The offending tree height.
        height: usize,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { row, column } => {
                write!(f,
                       "Error: Grid cell (row {row}, column {column}) lies outside the allocated tree matrix.")
            },

            Self::TooTall { height } => {
                write!(f, "Error: A tree of height {height} is too tall to draw.")
            },
        }
    }
}

impl std::error::Error for RenderError {}
