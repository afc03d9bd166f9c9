use crate::{
    error::EvalError,
    tree::{BinaryOperator, ExprTree, NodeId, NodeKind},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to a floating-point result.
///
/// # Parameters
/// - `tree`: The tree to reduce, starting from its declared root.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use treecalc::{interpreter::evaluator::evaluate, parse};
///
/// let tree = parse("2+3*4").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 20.0);
///
/// // Division by zero is not an error; it follows IEEE-754 semantics.
/// let tree = parse("8/0").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), f64::INFINITY);
/// ```
pub fn evaluate(tree: &ExprTree) -> EvalResult<f64> {
    evaluate_node(tree, tree.root())
}

/// Evaluates the subtree rooted at `id` by structural recursion.
///
/// A leaf yields its lexeme read as a base-10 digit; an internal node
/// applies its operator to the recursively evaluated children. Division by
/// zero is deliberately not guarded and yields an IEEE-754 infinity or NaN
/// as part of the numeric result.
///
/// # Errors
/// - `InvalidLiteral` when a leaf's lexeme is not a decimal digit.
pub fn evaluate_node(tree: &ExprTree, id: NodeId) -> EvalResult<f64> {
    let node = tree.node(id);

    match node.kind() {
        NodeKind::Literal(lexeme) => lexeme.to_digit(10)
                                           .map(f64::from)
                                           .ok_or(EvalError::InvalidLiteral { lexeme }),

        NodeKind::Operator(op) => {
            let (Some(left), Some(right)) = (node.left(), node.right()) else {
                unreachable!("operator node is missing a child")
            };

            let left = evaluate_node(tree, left)?;
            let right = evaluate_node(tree, right)?;

            Ok(match op {
                   BinaryOperator::Add => left + right,
                   BinaryOperator::Sub => left - right,
                   BinaryOperator::Mul => left * right,
                   BinaryOperator::Div => left / right,
               })
        },
    }
}
