#[derive(Debug)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found a token where a literal was required.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source line.
        position: usize,
    },
    /// Reached the end of input while a literal was still expected.
    UnexpectedEndOfInput {
        /// Byte offset just past the last token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at offset {position}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
