//! Constants for the restricted Newick grammar.
//!
//! Structural characters and defaults shared by the tokenizer,
//! the taxon-list extraction and the tree builder.

/// Identifier given to the first internal node created while parsing,
/// unless configured otherwise.
pub const DEFAULT_INTERNAL_OFFSET: usize = 7;

/// Structural characters of the grammar: parentheses, separator, terminator
pub(crate) const NEWICK_STRUCTURAL_CHARS: &[char] = &['(', ')', ',', ';'];

/// Characters of the full Newick format that this grammar does not support:
/// branch lengths, comments/annotations, and quoted labels
pub(crate) const NEWICK_UNSUPPORTED_CHARS: &[char] = &[':', '[', ']', '\''];

/// Default length of context snippet attached to parsing errors
pub(crate) const DEFAULT_CONTEXT_LENGTH: usize = 20;
