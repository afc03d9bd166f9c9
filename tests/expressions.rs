use treecalc::{
    error::{EvalError, ParseError},
    evaluate_source,
    interpreter::evaluator::evaluate,
    parse,
    tree::{BinaryOperator, ExprTree, NodeKind},
};

fn eval(source: &str) -> f64 {
    evaluate_source(source).unwrap_or_else(|e| panic!("{source:?} failed to evaluate: {e}"))
}

#[test]
fn single_digit_literals() {
    for digit in 0..=9_u32 {
        let source = digit.to_string();
        assert_eq!(eval(&source), f64::from(digit));

        let tree = parse(&source).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(tree.root()), 1);
        assert!(tree.is_leaf(tree.root()));
    }
}

#[test]
fn multiplicative_operators_bind_the_preceding_factor_chain() {
    assert_eq!(eval("2+3*4"), 20.0);
    assert_eq!(eval("2*3+4"), 14.0);
    assert_eq!(eval("1-2/4"), -0.25);
    assert_eq!(eval("5+1*2+3"), 30.0);
}

#[test]
fn operators_associate_to_the_right() {
    assert_eq!(eval("8/4/2"), 4.0);
    assert_eq!(eval("8-4-2"), 6.0);
}

#[test]
fn brackets_override_ambient_precedence() {
    assert_eq!(eval("{2+3}*4"), 20.0);
    assert_eq!(eval("{1+2}*3"), 9.0);
    assert_eq!(eval("2+{3*4}"), 14.0);
    assert_eq!(eval("{{8}}"), 8.0);
}

#[test]
fn division_by_zero_yields_ieee_values() {
    assert_eq!(eval("8/0"), f64::INFINITY);
    assert_eq!(eval("0-8/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(eval(" 2 + 3 "), 5.0);
    assert_eq!(eval("2\t+\t3"), 5.0);
}

#[test]
fn operator_without_left_literal_is_a_parse_error() {
    assert!(matches!(parse("+"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("*3"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn exhausted_input_is_a_parse_error() {
    assert!(matches!(parse(""), Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse("2+"), Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse("{"), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn missing_closing_bracket_is_tolerated() {
    // The token after a bracketed expression is consumed without inspection,
    // so a truncated input still parses and evaluates.
    assert_eq!(eval("{1+2"), 3.0);
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_eq!(eval("2}3"), 2.0);
    assert_eq!(eval("2 3"), 2.0);
}

#[test]
fn non_digit_literal_fails_at_evaluation_not_parsing() {
    let tree = parse("a").unwrap();
    assert!(matches!(evaluate(&tree), Err(EvalError::InvalidLiteral { lexeme: 'a' })));

    assert!(evaluate_source("2+a").is_err());
}

#[test]
fn parse_builds_the_inverted_precedence_shape() {
    let tree = parse("2+3*4").unwrap();

    let root = tree.node(tree.root());
    assert_eq!(root.kind(), NodeKind::Operator(BinaryOperator::Mul));

    let left = tree.node(root.left().unwrap());
    assert_eq!(left.kind(), NodeKind::Operator(BinaryOperator::Add));

    let right = tree.node(root.right().unwrap());
    assert_eq!(right.kind(), NodeKind::Literal('4'));
}

#[test]
fn heights_propagate_to_every_ancestor() {
    let mut tree = ExprTree::new();
    let two = tree.leaf('2');
    let three = tree.leaf('3');
    let four = tree.leaf('4');
    let sum = tree.branch(BinaryOperator::Add, two, three);
    let product = tree.branch(BinaryOperator::Mul, sum, four);
    tree.set_root(product);

    assert_eq!(tree.height(two), 1);
    assert_eq!(tree.height(sum), 2);
    assert_eq!(tree.height(product), 3);

    // Replacing the right leaf with a taller subtree must update the root's
    // cached height through the parent chain.
    let five = tree.leaf('5');
    let six = tree.leaf('6');
    let diff = tree.branch(BinaryOperator::Sub, five, six);
    let seven = tree.leaf('7');
    let deep = tree.branch(BinaryOperator::Div, diff, seven);
    tree.attach_right(product, deep);

    assert_eq!(tree.height(deep), 3);
    assert_eq!(tree.height(product), 4);
}

#[test]
fn height_invariant_holds_for_every_node() {
    for source in ["5", "2+3", "2+3*4", "{1+2}*{3+4}", "1*2*3*4"] {
        let tree = parse(source).unwrap();
        for id in tree.node_ids() {
            let node = tree.node(id);
            let left = node.left().map_or(0, |child| tree.height(child));
            let right = node.right().map_or(0, |child| tree.height(child));
            assert_eq!(tree.height(id), 1 + left.max(right), "node {id:?} in {source:?}");
        }
    }
}

#[test]
fn positional_queries_follow_the_parent_links() {
    let tree = parse("2+3").unwrap();
    let root = tree.root();
    let left = tree.node(root).left().unwrap();
    let right = tree.node(root).right().unwrap();

    assert!(tree.is_root(root));
    assert!(!tree.is_left_child(root) && !tree.is_right_child(root));
    assert!(tree.is_left_child(left));
    assert!(tree.is_right_child(right));
    assert_eq!(tree.node(left).parent(), Some(root));
}
