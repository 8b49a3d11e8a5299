//! Node module for parsimony tree representation.

use crate::model::tree::NodeIndex;
use std::fmt;

/// Identifier of an internal node, assigned sequentially while parsing.
pub type InternalId = usize;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node (vertex) of a binary parsimony tree.
///
/// A node is either:
/// - **Leaf**: Identified by its taxon name, carries an optional character
///   state, has no children
/// - **Internal**: Identified by a sequential [InternalId], has exactly two
///   children
///
/// Generic over `S`, the opaque character-state payload.
///
/// # Invariants
/// - `index` is the position of the node in the tree arena
/// - `children` are arena indices of the left and right child
/// - Taxon names and internal ids are unique within a tree
#[derive(PartialEq, Debug, Clone)]
pub enum Node<S> {
    /// Leaf node (has taxon and optional state, no children)
    Leaf {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Name of the taxon this leaf stands for
        taxon: String,
        /// Observed character state, if bound
        state: Option<S>,
    },
    /// Internal node (has two children)
    Internal {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Sequential identifier
        id: InternalId,
        /// Arena indices of left and right child
        children: (NodeIndex, NodeIndex),
    },
}

impl<S> Node<S> {
    /// Creates a new leaf node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `taxon` - Taxon name of the leaf
    /// * `state` - Initial character state, if known
    pub fn new_leaf(index: NodeIndex, taxon: String, state: Option<S>) -> Self {
        Node::Leaf { index, taxon, state }
    }

    /// Creates a new internal node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `id` - Sequential internal identifier
    /// * `children` - Tuple of child indices
    pub fn new_internal(index: NodeIndex, id: InternalId, children: (NodeIndex, NodeIndex)) -> Self {
        Node::Internal { index, id, children }
    }

    /// Returns the arena index of this node.
    pub fn index(&self) -> NodeIndex {
        match self {
            Node::Leaf { index, .. } => *index,
            Node::Internal { index, .. } => *index,
        }
    }

    /// Returns the identifier of this node: its taxon name for a leaf,
    /// its sequential id for an internal node.
    pub fn id(&self) -> NodeId<'_> {
        match self {
            Node::Leaf { taxon, .. } => NodeId::Taxon(taxon),
            Node::Internal { id, .. } => NodeId::Internal(*id),
        }
    }

    /// Returns whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Returns whether this node is internal.
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal { .. })
    }

    /// Returns the taxon name if this is a leaf, `None` otherwise.
    pub fn taxon(&self) -> Option<&str> {
        match self {
            Node::Leaf { taxon, .. } => Some(taxon),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the internal id if this is an internal node, `None` otherwise.
    pub fn internal_id(&self) -> Option<InternalId> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { id, .. } => Some(*id),
        }
    }

    /// Returns the child indices `(left, right)` if this is an internal node,
    /// `None` for a leaf.
    pub fn children(&self) -> Option<(NodeIndex, NodeIndex)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { children, .. } => Some(*children),
        }
    }

    /// Returns the character state of a leaf, `None` for internal nodes
    /// or leaves without a bound state.
    pub fn state(&self) -> Option<&S> {
        match self {
            Node::Leaf { state, .. } => state.as_ref(),
            Node::Internal { .. } => None,
        }
    }

    /// Sets the character state of a leaf; internal nodes carry no state.
    pub(crate) fn set_state(&mut self, new_state: Option<S>) {
        if let Node::Leaf { state, .. } = self {
            *state = new_state;
        }
    }
}

// =#========================================================================#=
// NODE ID
// =#========================================================================#=
/// Identifier of a [Node]: taxon name of a leaf or number of an internal node.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum NodeId<'a> {
    /// Leaf identified by its taxon name
    Taxon(&'a str),
    /// Internal node identified by its sequential id
    Internal(InternalId),
}

impl fmt::Display for NodeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Taxon(name) => f.write_str(name),
            NodeId::Internal(id) => write!(f, "{id}"),
        }
    }
}
