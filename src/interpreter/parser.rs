use crate::{
    error::ParseError,
    interpreter::lexer::{Token, TokenCursor},
    tree::{BinaryOperator, ExprTree, NodeId},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry production of the grammar, and it is the one that
/// consumes multiplication and division. Because the entry production sits at
/// the *lowest* precedence level, `*` and `/` bind the entire preceding
/// factor chain as their left operand and associate to the right: `2+3*4`
/// parses as `(2+3)*4`, not `2+(3*4)`. This inversion of conventional
/// arithmetic precedence is the defined contract of the grammar, not an
/// accident to be corrected.
///
/// The rule is: `expression := factor ("*" | "/") expression | factor`
///
/// # Parameters
/// - `cursor`: Token cursor, advanced past everything this production
///   consumes.
/// - `tree`: Arena receiving the nodes built by this production.
///
/// # Returns
/// The id of the subtree root: a fresh operator node when a multiplicative
/// operator followed the factor, otherwise the factor subtree unchanged.
pub fn parse_expression(cursor: &mut TokenCursor, tree: &mut ExprTree) -> ParseResult<NodeId> {
    let factor = parse_factor(cursor, tree)?;

    if let Some(op) = cursor.current().and_then(token_to_operator) {
        if matches!(op, BinaryOperator::Mul | BinaryOperator::Div) {
            cursor.advance();
            let rest = parse_expression(cursor, tree)?;
            return Ok(tree.branch(op, factor, rest));
        }
    }

    Ok(factor)
}

/// Parses a factor.
///
/// Addition and subtraction are consumed here, one level *below* the entry
/// production, which makes them bind tighter than `*` and `/`. Like the
/// multiplicative rule they associate to the right: `8-4-2` parses as
/// `8-(4-2)`.
///
/// The rule is: `factor := term ("+" | "-") factor | term`
///
/// # Parameters
/// - `cursor`: Token cursor.
/// - `tree`: Arena receiving the nodes.
///
/// # Returns
/// The id of the subtree root.
pub fn parse_factor(cursor: &mut TokenCursor, tree: &mut ExprTree) -> ParseResult<NodeId> {
    let term = parse_term(cursor, tree)?;

    if let Some(op) = cursor.current().and_then(token_to_operator) {
        if matches!(op, BinaryOperator::Add | BinaryOperator::Sub) {
            cursor.advance();
            let rest = parse_factor(cursor, tree)?;
            return Ok(tree.branch(op, term, rest));
        }
    }

    Ok(term)
}

/// Parses a term: either a bracketed expression or a literal.
///
/// A bracketed term re-enters [`parse_expression`] from the top, which is
/// how `{`...`}` overrides the ambient precedence for its subtree. The
/// brackets themselves leave no node behind.
///
/// The rule is: `term := "{" expression "}" | literal`
///
/// # Parameters
/// - `cursor`: Token cursor.
/// - `tree`: Arena receiving the nodes.
///
/// # Returns
/// The id of the inner expression subtree, or of a fresh leaf.
pub fn parse_term(cursor: &mut TokenCursor, tree: &mut ExprTree) -> ParseResult<NodeId> {
    if matches!(cursor.current(), Some(Token::Bracket(_))) {
        cursor.advance();
        let inner = parse_expression(cursor, tree)?;
        // The token after the inner expression is taken to be the closing
        // bracket and is consumed without inspection. Advancing past the end
        // of a truncated input is harmless: the cursor keeps yielding the
        // end sentinel.
        cursor.advance();
        return Ok(inner);
    }

    parse_literal(cursor, tree)
}

/// Parses a single-character literal into a leaf node.
///
/// The rule is: `literal := 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9`
///
/// Only a literal token may sit here; leaves always hold literal content.
/// An exhausted cursor or a stray operator or bracket in literal position is
/// reported as a parse error rather than wrapped into the tree.
///
/// # Parameters
/// - `cursor`: Token cursor, advanced past the literal on success.
/// - `tree`: Arena receiving the leaf.
///
/// # Returns
/// The id of the new leaf.
///
/// # Errors
/// - `UnexpectedEndOfInput` when the cursor is exhausted.
/// - `UnexpectedToken` for any non-literal token.
pub fn parse_literal(cursor: &mut TokenCursor, tree: &mut ExprTree) -> ParseResult<NodeId> {
    match cursor.current() {
        Some(Token::Integer(lexeme)) => {
            let leaf = tree.leaf(lexeme);
            cursor.advance();
            Ok(leaf)
        },

        Some(token) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                         position: cursor.position(), }),

        None => Err(ParseError::UnexpectedEndOfInput { position: cursor.position() }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of the four arithmetic
/// operators.
///
/// # Example
/// ```
/// use treecalc::{
///     interpreter::{lexer::Token, parser::token_to_operator},
///     tree::BinaryOperator,
/// };
///
/// assert_eq!(token_to_operator(Token::Multiply), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_operator(Token::Bracket('{')), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}
