//! Error types and error handling for the parser.
//!
//! This module defines the typed failure the parser returns. It includes:
//!
//! - Error structures with source span information
//! - Specific error variants for each grammar violation
//! - Helpful error messages and suggestions

pub mod errors;
