/// The lexer module tokenizes a source line for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a
/// sequence of single-character tokens, skipping whitespace. It also defines
/// the token cursor the parser reads from, whose end-of-input sentinel is
/// what keeps the recursive productions total on truncated input.
///
/// # Responsibilities
/// - Classifies each non-whitespace character into exactly one token.
/// - Tracks each token's byte offset for error reporting.
/// - Yields the end sentinel instead of failing past the last token.
pub mod lexer;
/// The parser module builds the binary expression tree from tokens.
///
/// The parser implements the four mutually recursive grammar productions
/// over the token cursor. The grammar places multiplicative operators at the
/// entry production and additive operators below it, inverting conventional
/// arithmetic precedence; that inversion is the defined contract and is
/// preserved exactly.
///
/// # Responsibilities
/// - Consumes tokens and produces an arena-backed expression tree.
/// - Reports unexpected-token and end-of-input conditions as parse errors.
/// - Guarantees that leaves hold literals and internal nodes hold operators.
pub mod parser;
/// The evaluator module reduces an expression tree to a number.
///
/// The evaluator walks the tree by structural recursion, reading leaves as
/// base-10 digits and applying the four arithmetic operators at internal
/// nodes using standard floating-point semantics.
///
/// # Responsibilities
/// - Computes the `f64` value of a parsed expression tree.
/// - Reports leaves whose lexeme is not a decimal digit.
/// - Lets division by zero propagate as infinity or NaN, by contract.
pub mod evaluator;
