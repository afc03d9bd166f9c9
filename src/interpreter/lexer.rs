use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// Every non-whitespace character maps to exactly one token; no lookahead
/// merging ever takes place, so multi-character numbers cannot form.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `{` or `}`. The grammar does not distinguish the two sides; the
    /// parser treats whichever bracket it meets first as an opener.
    #[regex(r"[{}]", lexeme_char, priority = 2)]
    Bracket(char),
    /// Any other character, treated as a single-character literal. Whether
    /// the lexeme actually is a decimal digit is only checked when the tree
    /// is evaluated.
    #[regex(r"[^ \t\r\n]", lexeme_char, priority = 1)]
    Integer(char),
}

fn lexeme_char(lex: &mut logos::Lexer<'_, Token>) -> Option<char> {
    lex.slice().chars().next()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Bracket(lexeme) | Self::Integer(lexeme) => write!(f, "{lexeme}"),
        }
    }
}

/// An ordered token sequence plus a monotonically increasing read position.
///
/// The position only ever moves forward. Reading past the last real token
/// yields `None` instead of failing; the end marker is synthesized on demand
/// and never stored in the sequence. This is what lets every parser
/// production fall through to its base case on truncated input.
pub struct TokenCursor {
    tokens:  Vec<(Token, usize)>,
    pos:     usize,
    end_pos: usize,
}

impl TokenCursor {
    /// Returns the token at the read position, or `None` once the position
    /// has passed the last real token.
    #[must_use]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    /// Returns the byte offset of the current token in the source line, or
    /// the offset just past the input once the cursor is exhausted.
    #[must_use]
    pub fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end_pos, |(_, position)| *position)
    }

    /// Advances the read position by one token.
    pub fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Tokenizes a source line into a [`TokenCursor`], skipping whitespace.
///
/// Unrecognized characters are not an error here: the catch-all literal rule
/// classifies them as [`Token::Integer`], and they fail later, during
/// evaluation, if they turn out not to be digits.
pub fn tokenize(source: &str) -> Result<TokenCursor, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedToken { token:    lexer.slice().to_string(),
                                                     position: lexer.span().start, });
        }
    }

    Ok(TokenCursor { tokens,
                     pos: 0,
                     end_pos: source.len() })
}
