//! # treecalc
//!
//! treecalc parses a single-line arithmetic expression against a fixed
//! four-rule grammar, evaluates the resulting binary expression tree, and
//! renders the tree as text in one of two visual styles.
//!
//! The grammar is deliberately small and deliberately non-standard: literals
//! are single decimal digits, `{` and `}` play the role parentheses usually
//! do, and multiplicative operators sit at the entry production, binding
//! more loosely than additive ones. `2+3*4` therefore evaluates to `20`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{evaluator, lexer, parser},
    tree::ExprTree,
};

/// Provides unified error types for parsing, evaluation and rendering.
///
/// This module defines all errors the crate can report. Parse errors carry
/// the byte offset of the offending token; render errors carry the grid
/// coordinates the sizing formula could not hold.
///
/// # Responsibilities
/// - Defines error enums for each phase (lexer/parser, evaluator, renderer).
/// - Attaches positions and detailed messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, the token cursor, the four grammar
/// productions and the evaluator. It exposes the building blocks that
/// [`parse`] and [`evaluate_source`] assemble.
///
/// # Responsibilities
/// - Classifies characters into tokens and tracks the read position.
/// - Builds the expression tree with the grammar's inverted precedence.
/// - Reduces trees to floating-point results.
pub mod interpreter;
/// Renders expression trees as text.
///
/// This module holds the two independent visualizations: a compact indented
/// listing and a height-sized character grid with diagonal connector
/// strokes. Both return plain text and leave styling to the caller.
///
/// # Responsibilities
/// - Declares the [`render::DisplayMode`] selector.
/// - Implements both rendering algorithms over a read-only tree.
/// - Reports grid shapes the fixed sizing formula cannot hold.
pub mod render;
/// Defines the arena-backed binary expression tree.
///
/// This module declares the node content types and the tree arena with
/// parent back-links and cached, self-maintaining heights. Trees are built
/// by the parser and only read by the evaluator and the renderers.
///
/// # Responsibilities
/// - Stores nodes under stable ids with owning child and non-owning parent
///   links.
/// - Recomputes cached heights along the ancestor chain on every attach.
/// - Answers positional queries (root, left child, right child, leaf).
pub mod tree;

/// Parses a source line into an expression tree.
///
/// Runs the tokenizer and the grammar's entry production. Tokens left over
/// after the entry production returns are ignored, matching the grammar's
/// defined behavior on trailing input.
///
/// # Errors
/// Returns a [`ParseError`] when the input ends, or a non-literal token
/// appears, where a literal was required.
///
/// # Examples
/// ```
/// use treecalc::parse;
///
/// let tree = parse("2+3*4").unwrap();
/// assert_eq!(tree.height(tree.root()), 3);
///
/// assert!(parse("2+").is_err());
/// ```
pub fn parse(source: &str) -> Result<ExprTree, ParseError> {
    let mut cursor = lexer::tokenize(source)?;
    let mut tree = ExprTree::new();

    let root = parser::parse_expression(&mut cursor, &mut tree)?;
    tree.set_root(root);

    Ok(tree)
}

/// Parses and evaluates a source line in one call.
///
/// # Errors
/// Returns the underlying parse or evaluation error.
///
/// # Examples
/// ```
/// use treecalc::evaluate_source;
///
/// // Multiplicative operators bind the whole preceding factor chain.
/// assert_eq!(evaluate_source("2+3*4").unwrap(), 20.0);
///
/// // Brackets force full re-entry into the grammar.
/// assert_eq!(evaluate_source("2+{3*4}").unwrap(), 14.0);
/// ```
pub fn evaluate_source(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tree = parse(source)?;
    Ok(evaluator::evaluate(&tree)?)
}
