//! Newick parser for binary parsimony trees.
//!
//! This module reads restricted Newick strings into
//! [ParsimonyTree](crate::ParsimonyTree)s. Use
//! [`ParsimonyTree::builder`](crate::ParsimonyTree::builder) for full
//! configuration or the quick functions in the crate root.
//!
//! # Format
//! The restricted Newick grammar is:
//! * `tree ::= subtree ';'`
//! * `subtree ::= taxon | group`
//! * `group ::= '(' subtree ', ' subtree ')'`
//! * `taxon ::= any run of characters other than whitespace and ( ) , ;`
//!
//! Furthermore:
//! * Every group has exactly two subtrees (strictly binary)
//! * The separator `,` must be followed by whitespace, e.g.
//!   `(Lungfish, (Opossum, (Turtle, (Frog, (Gecko, Ostrich)))));`
//! * Other whitespace is insignificant
//! * Branch lengths (`:`), comments (`[...]`) and quoted labels are not supported
//! * Each taxon may occur only once
//!
//! # Leaf naming
//! Leaves are named by position: the n-th leaf read gets the n-th name of
//! the taxon list from [extract_taxa]. Both come from reading the string
//! left to right, so for valid input they agree; if their counts differ
//! the string is rejected.

pub mod defs;
pub(crate) mod parser;

use crate::newick::defs::NEWICK_STRUCTURAL_CHARS;

/// Extracts the taxon names of a Newick string in order of appearance.
///
/// Removes the structural characters `(`, `)`, `,` and `;`, then splits
/// on whitespace. Does not check for duplicates.
///
/// # Example
/// ```
/// use parsimony_tree::newick::extract_taxa;
///
/// let taxa = extract_taxa("(Lungfish, (Opossum, (Turtle, Frog)));");
/// assert_eq!(taxa, ["Lungfish", "Opossum", "Turtle", "Frog"]);
/// ```
pub fn extract_taxa(newick: &str) -> Vec<String> {
    let stripped: String = newick
        .chars()
        .filter(|c| !NEWICK_STRUCTURAL_CHARS.contains(c))
        .collect();

    stripped.split_whitespace().map(String::from).collect()
}
