//! Builder configuring how a Newick string becomes a [ParsimonyTree].
//!
//! # Configuration
//! * [`with_internal_offset(offset)`](TreeBuilder::with_internal_offset)
//!     - Identifier of the first internal node, default
//!       [DEFAULT_INTERNAL_OFFSET] (`7`, the first free id after six
//!       numbered leaves).
//! * [`with_states(states)`](TreeBuilder::with_states)
//!     - Character states bound to the leaves while they are created.
//!       Without it, leaves start without state; bind states later with
//!       [`ParsimonyTree::bind_states`].
//!
//! # Builder lifecycle
//! Each [`build`](TreeBuilder::build) runs one construction with fresh
//! counters (internal ids, leaf count), so no state leaks between trees:
//!
//! ```text
//! new(newick) ──→ with_* ──→ build() ──→ extract taxa ──→ tokenize ──→ parse ──→ ParsimonyTree
//! ```

use crate::error::TreeError;
use crate::model::character_states::CharacterStates;
use crate::model::node::InternalId;
use crate::model::tree::ParsimonyTree;
use crate::newick::defs::DEFAULT_INTERNAL_OFFSET;
use crate::newick::extract_taxa;
use crate::newick::parser::NewickParser;
use crate::parser::tokenizer::tokenize;

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Configuration for parsing a single Newick string into a [ParsimonyTree].
///
/// Generic over `S`, the character-state payload of the leaves.
///
/// # Example
/// ```
/// use parsimony_tree::ParsimonyTree;
/// use std::collections::HashMap;
///
/// let states = HashMap::from([
///     ("Lungfish", 'A'),
///     ("Opossum", 'C'),
///     ("Turtle", 'C'),
/// ]);
/// let tree = ParsimonyTree::builder("(Lungfish, (Opossum, Turtle));")
///     .with_internal_offset(4)
///     .with_states(&states)
///     .build()?;
///
/// assert_eq!(tree.root().internal_id(), Some(4));
/// assert_eq!(tree.leaf("Turtle").and_then(|l| l.state()), Some(&'C'));
/// # Ok::<(), parsimony_tree::TreeError>(())
/// ```
pub struct TreeBuilder<'a, S> {
    newick: &'a str,
    internal_offset: InternalId,
    states: Option<&'a dyn CharacterStates<State = S>>,
}

impl<'a, S> TreeBuilder<'a, S> {
    /// Creates a new builder for the given Newick string with default settings:
    /// - Internal offset [DEFAULT_INTERNAL_OFFSET]
    /// - No character states
    pub fn new(newick: &'a str) -> Self {
        Self {
            newick,
            internal_offset: DEFAULT_INTERNAL_OFFSET,
            states: None,
        }
    }

    /// Sets the identifier of the first internal node.
    pub fn with_internal_offset(mut self, offset: InternalId) -> Self {
        self.internal_offset = offset;
        self
    }

    /// Sets the character states to attach to the leaves during construction.
    ///
    /// Every taxon must have a state, otherwise [`build`](Self::build)
    /// fails with [TreeError::MissingTaxonState].
    pub fn with_states<C>(mut self, states: &'a C) -> Self
    where
        C: CharacterStates<State = S>,
    {
        self.states = Some(states);
        self
    }
}

impl<S: Clone> TreeBuilder<'_, S> {
    /// Parses the Newick string and builds the tree.
    ///
    /// # Returns
    /// * `Ok(ParsimonyTree)` - The fully constructed tree
    /// * `Err(TreeError::MalformedNewick)` - If the string does not follow
    ///   the grammar, repeats a taxon, or its leaves disagree with the
    ///   taxon list
    /// * `Err(TreeError::MissingTaxonState)` - If states were given but
    ///   lack a taxon
    pub fn build(self) -> Result<ParsimonyTree<S>, TreeError> {
        let taxa = extract_taxa(self.newick);
        let tokens = tokenize(self.newick)?;

        let parser = NewickParser::new(self.newick, &tokens, &taxa, self.internal_offset, self.states);
        let parsed = parser.parse()?;

        Ok(ParsimonyTree::from_parts(
            self.newick.to_string(),
            taxa,
            parsed.nodes,
            parsed.leaves,
            parsed.root_index,
            self.internal_offset,
        ))
    }
}
