//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Numbers, identifiers and single-character punctuation
//! - Row/column tracking for every token
//! - In-band `Error` tokens for unrecognised characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
