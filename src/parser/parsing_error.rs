//! Error types for the Newick tokenizer and parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for reporting
//! malformed Newick strings, always with the byte position at which the
//! problem was detected and a short snippet of the input from there on.

use crate::newick::defs::DEFAULT_CONTEXT_LENGTH;
use crate::parser::tokenizer::Expectation;
use thiserror::Error;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Kinds of malformed input detected while tokenizing or parsing.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ParsingErrorType {
    #[error("Newick string contains no tree")]
    EmptyInput,
    #[error("Unexpected end of Newick string, expected {0}")]
    UnexpectedEnd(Expectation),
    #[error("Expected {expected} but found {found:?}")]
    UnexpectedToken { expected: Expectation, found: String },
    #[error("Separator ',' must be followed by whitespace")]
    MissingSpaceAfterSeparator,
    #[error("Unsupported character {0:?} (branch lengths, comments and quoted labels are not supported)")]
    UnsupportedCharacter(char),
    #[error("Unexpected input after terminating ';'")]
    TrailingInput,
    #[error("Found {leaves} leaves but taxon list holds {taxa} names")]
    LeafCountMismatch { leaves: usize, taxa: usize },
    #[error("Taxon {0:?} occurs more than once")]
    DuplicateTaxon(String),
    #[error("Internal node ids starting at {offset} exceed the id range")]
    InternalIdOverflow { offset: usize },
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following input).
#[derive(Error, PartialEq, Eq, Debug, Clone)]
#[error("{kind} at position {position}")]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError for the given input at a byte position.
    pub(crate) fn at(kind: ParsingErrorType, input: &str, position: usize) -> Self {
        let context = input
            .get(position..)
            .map(|rest| rest.chars().take(DEFAULT_CONTEXT_LENGTH).collect())
            .unwrap_or_default();

        Self { kind, position, context }
    }

    /// Create a ParsingError without input context (for whole-string checks)
    pub(crate) fn without_context(kind: ParsingErrorType) -> Self {
        Self { kind, position: 0, context: String::new() }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position (possibly empty)
    pub fn context(&self) -> &str {
        &self.context
    }
}
