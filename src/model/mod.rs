//! Data model for binary parsimony trees.
//!
//! # Tree representation
//! Trees are represented by [ParsimonyTree], which uses the arena pattern to
//! store [Node]s. Each node is either a `Leaf` (identified by taxon name,
//! carrying an optional character state) or an `Internal` node (identified by
//! a sequential [InternalId], with two children), referenced by [NodeIndex].
//!
//! # Building trees
//! Trees are constructed from a Newick string via [TreeBuilder], which
//! configures the internal-id offset and optional initial character states.
//!
//! # Character states
//! States come from a [CharacterStates] provider, which maps taxon names to
//! an opaque payload `S`. The same tree can be rebound to successive
//! characters with [`ParsimonyTree::bind_states`].

pub mod character_states;
pub mod node;
pub mod tree;
pub mod tree_builder;

pub use character_states::CharacterStates;
pub use node::{InternalId, Node, NodeId};
pub use tree::{NodeIndex, ParsimonyTree, PostOrderIter, PreOrderIter};
pub use tree_builder::TreeBuilder;
