//! Lexical layer and error types for the Newick parser.
//!
//! This module provides the [tokenizer] turning a Newick string into a flat
//! token sequence, and the [ParsingError] reported for malformed input.

pub mod parsing_error;
pub mod tokenizer;

pub use parsing_error::{ParsingError, ParsingErrorType};
pub use tokenizer::{Expectation, Token, TokenKind, tokenize};
