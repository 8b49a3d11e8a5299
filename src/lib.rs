//! Parsimony-tree is a library to parse binary phylogenetic trees from
//! Newick strings and attach observed character states to their leaves.
//!
//! It provides the tree that maximum-parsimony scoring algorithms
//! (e.g. Fitch's algorithm) work on; the scoring itself is left to the caller.
//! Core functionality provided:
//! - Newick: Parse a restricted Newick string (strictly binary, `", "`
//!   separated, no branch lengths) into a [ParsimonyTree].
//! - Node identifiers: Leaves are identified by taxon name, internal nodes by
//!   sequential numbers starting at a configurable offset (default `7`).
//! - Character states: Attach states from any [CharacterStates] provider
//!   while building, or rebind them later to score another character on the
//!   same topology.
//! - Traversal: Post-order (and pre-order) iteration over the nodes.
//!
//! Limitations:
//! - Only binary trees
//! - Only leaf-labels considered, no branch lengths or annotations
//! - Malformed strings are rejected, never partially built
//!
//! # Usage patterns
//! 1. Quick functions [parse_tree] and [parse_tree_with_states] use the
//!    default internal offset.
//! 2. Configure a [TreeBuilder] via [`ParsimonyTree::builder`] for full
//!    control.
//!
//! ## Example
//! ```
//! use parsimony_tree::parse_tree_with_states;
//! use std::collections::HashMap;
//!
//! let newick = "(Lungfish, (Opossum, (Turtle, Frog)));";
//! let first = HashMap::from([("Lungfish", 0), ("Opossum", 1), ("Turtle", 1), ("Frog", 0)]);
//! let second = HashMap::from([("Lungfish", 2), ("Opossum", 2), ("Turtle", 3), ("Frog", 3)]);
//!
//! let mut tree = parse_tree_with_states(newick, &first)?;
//! for node in tree.post_order_iter() {
//!     // score first character
//! #   let _ = node;
//! }
//!
//! tree.bind_states(&second)?;
//! assert_eq!(tree.leaf("Turtle").and_then(|l| l.state()), Some(&3));
//! # Ok::<(), parsimony_tree::TreeError>(())
//! ```

pub mod error;
pub mod model;
pub mod newick;
pub mod parser;

pub use crate::error::TreeError;
pub use crate::model::{CharacterStates, Node, NodeId, ParsimonyTree, TreeBuilder};
pub use crate::newick::defs::DEFAULT_INTERNAL_OFFSET;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a Newick string using default settings, returning a
/// [ParsimonyTree] whose leaves have no states yet.
///
/// # Example
/// ```
/// use parsimony_tree::parse_tree;
///
/// let tree = parse_tree::<char>("(A, (B, (C, D)));")?;
/// assert_eq!(tree.num_leaves(), 4);
/// assert_eq!(tree.num_internal(), 3);
/// # Ok::<(), parsimony_tree::TreeError>(())
/// ```
pub fn parse_tree<S: Clone>(newick: &str) -> Result<ParsimonyTree<S>, TreeError> {
    TreeBuilder::new(newick).build()
}

/// Parses a Newick string using default settings and attaches the given
/// character states to the leaves.
///
/// Fails with [TreeError::MissingTaxonState] if a taxon has no state.
pub fn parse_tree_with_states<C>(newick: &str, states: &C) -> Result<ParsimonyTree<C::State>, TreeError>
where
    C: CharacterStates,
    C::State: Clone,
{
    TreeBuilder::new(newick).with_states(states).build()
}
