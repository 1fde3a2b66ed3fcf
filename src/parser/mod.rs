//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a token stream into an
//! Abstract Syntax Tree. It uses a Pratt parser for expressions with
//! operator precedence and handles:
//!
//! - Statement parsing (every statement is an expression statement)
//! - Expression parsing (number literals and binary operators)
//! - Reporting the first grammar violation as a typed error
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
