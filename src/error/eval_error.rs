#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression tree.
///
/// Division by zero is deliberately absent: it follows IEEE-754 semantics
/// and surfaces as an infinity or NaN inside the numeric result.
pub enum EvalError {
    /// A leaf's lexeme could not be read as a decimal digit.
    InvalidLiteral {
        /// The offending lexeme.
        lexeme: char,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral { lexeme } => {
                write!(f, "Error: Literal '{lexeme}' is not a decimal digit.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
