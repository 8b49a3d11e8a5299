//! Tokenizer for restricted Newick strings.
//!
//! This module provides [tokenize], which splits a Newick string into a flat
//! sequence of positioned [Token]s: opening and closing parentheses, the
//! `", "` separator, the terminating `;`, and taxon names. Whitespace is
//! insignificant except that a separator must be followed by some.

use crate::newick::defs::{NEWICK_STRUCTURAL_CHARS, NEWICK_UNSUPPORTED_CHARS};
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use std::fmt;

// =#========================================================================#=
// TOKEN
// =#========================================================================#=
/// Kind of a [Token], borrowing taxon names from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `(` opening a group of two subtrees
    Open,
    /// `)` closing a group
    Close,
    /// `,` between left and right subtree
    Separator,
    /// `;` ending the tree
    Terminator,
    /// Taxon name of a leaf
    Taxon(&'a str),
}

/// A token together with the byte position in the input it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind<'a>,
    position: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind<'a>, position: usize) -> Self {
        Self { kind, position }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind<'a> {
        self.kind
    }

    /// Returns the byte position of this token in the input.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Open => f.write_str("("),
            TokenKind::Close => f.write_str(")"),
            TokenKind::Separator => f.write_str(","),
            TokenKind::Terminator => f.write_str(";"),
            TokenKind::Taxon(name) => f.write_str(name),
        }
    }
}

// =#========================================================================#=
// EXPECTATION
// =#========================================================================#=
/// What the parser expects next; one state per step of reading a group
/// `( left , right )` plus the terminator of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Start of a subtree: `(` or a taxon
    OpenOrTaxon,
    /// `,` after a left subtree
    Separator,
    /// `)` after a right subtree
    Close,
    /// `;` after the root group
    Terminator,
}

impl Expectation {
    /// Returns whether the given token kind satisfies this expectation.
    pub fn is_met_by(&self, kind: &TokenKind<'_>) -> bool {
        matches!(
            (self, kind),
            (Expectation::OpenOrTaxon, TokenKind::Open | TokenKind::Taxon(_))
                | (Expectation::Separator, TokenKind::Separator)
                | (Expectation::Close, TokenKind::Close)
                | (Expectation::Terminator, TokenKind::Terminator)
        )
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::OpenOrTaxon => f.write_str("'(' or taxon name"),
            Expectation::Separator => f.write_str("','"),
            Expectation::Close => f.write_str("')'"),
            Expectation::Terminator => f.write_str("';'"),
        }
    }
}

// =#========================================================================#=
// TOKENIZE
// =#========================================================================#=
/// Splits a Newick string into tokens.
///
/// # Arguments
/// * `input` - Newick string, e.g. `"(A, (B, C));"`
///
/// # Returns
/// * `Ok(Vec<Token>)` - Tokens in input order
/// * `Err(ParsingError)` - If the input contains characters of the full
///   Newick format that are not supported (`:`, `[`, `]`, `'`), or a `,`
///   directly followed by something other than whitespace
///
/// # Example
/// ```
/// use parsimony_tree::parser::tokenizer::{TokenKind, tokenize};
///
/// let tokens = tokenize("(Kea, Kaka);").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Open,
///         TokenKind::Taxon("Kea"),
///         TokenKind::Separator,
///         TokenKind::Taxon("Kaka"),
///         TokenKind::Close,
///         TokenKind::Terminator,
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParsingError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let kind = match c {
            c if c.is_whitespace() => continue,
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            ';' => TokenKind::Terminator,
            ',' => {
                if let Some(&(next_position, next)) = chars.peek() {
                    if !next.is_whitespace() {
                        return Err(ParsingError::at(
                            ParsingErrorType::MissingSpaceAfterSeparator,
                            input,
                            next_position,
                        ));
                    }
                }
                TokenKind::Separator
            }
            c if NEWICK_UNSUPPORTED_CHARS.contains(&c) => {
                return Err(ParsingError::at(
                    ParsingErrorType::UnsupportedCharacter(c),
                    input,
                    position,
                ));
            }
            _ => {
                // Taxon runs until whitespace, structural or unsupported character
                let mut end = position + c.len_utf8();
                while let Some(&(next_position, next)) = chars.peek() {
                    if is_taxon_delimiter(next) {
                        break;
                    }
                    end = next_position + next.len_utf8();
                    chars.next();
                }
                TokenKind::Taxon(&input[position..end])
            }
        };

        tokens.push(Token::new(kind, position));
    }

    Ok(tokens)
}

fn is_taxon_delimiter(c: char) -> bool {
    c.is_whitespace() || NEWICK_STRUCTURAL_CHARS.contains(&c) || NEWICK_UNSUPPORTED_CHARS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind<'_>> {
        tokenize(input).unwrap().iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        assert_eq!(kinds("( A,  B )\n;"), kinds("(A, B);"));
    }

    #[test]
    fn test_taxon_positions() {
        let tokens = tokenize("(Weka, Takahe);").unwrap();
        assert_eq!(tokens[1].position(), 1);
        assert_eq!(tokens[3].kind(), TokenKind::Taxon("Takahe"));
        assert_eq!(tokens[3].position(), 7);
    }

    #[test]
    fn test_non_ascii_taxon() {
        assert_eq!(kinds("(Tūī, Kōkako);")[1], TokenKind::Taxon("Tūī"));
    }

    #[test]
    fn test_expectation_matching() {
        assert!(Expectation::OpenOrTaxon.is_met_by(&TokenKind::Open));
        assert!(Expectation::OpenOrTaxon.is_met_by(&TokenKind::Taxon("A")));
        assert!(!Expectation::OpenOrTaxon.is_met_by(&TokenKind::Close));
        assert!(!Expectation::Separator.is_met_by(&TokenKind::Terminator));
    }
}
