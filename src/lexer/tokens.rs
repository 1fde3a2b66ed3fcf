use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, ops::Index, slice::Iter};

use crate::Span;

lazy_static! {
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Asterisk);
        map.insert('/', TokenKind::Slash);
        map.insert(':', TokenKind::Colon);
        map.insert('=', TokenKind::Equals);
        map.insert('(', TokenKind::LeftParen);
        map.insert(')', TokenKind::RightParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Error,

    Number,
    Ident,

    Plus,
    Minus,
    Asterisk,
    Slash,

    // Reserved, never consumed by the grammar
    Colon,
    Equals,

    LeftParen,
    RightParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload carried by a token, copied out of the source at lex time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    None,
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Exact source text, the offending character for `Error` tokens
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::Number(n) => write!(f, "{}({})", self.kind, n),
            TokenValue::Text(text) => write!(f, "{}({})", self.kind, text),
            TokenValue::None if self.kind == TokenKind::Error => {
                write!(f, "{}({})", self.kind, self.lexeme.escape_debug())
            }
            TokenValue::None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn row(&self) -> usize {
        self.span.start.row
    }

    pub fn col(&self) -> usize {
        self.span.start.col
    }

    pub fn number(&self) -> Option<u64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// The ordered output of one lexing pass.
///
/// The stream is never modified after the lexer hands it over; the parser
/// only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Tokens produced for unrecognised characters.
    pub fn errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
