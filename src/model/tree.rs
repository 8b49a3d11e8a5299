//! Provides the parsimony tree representation.
//!
//! Core data structures:
//! * [`ParsimonyTree<S>`] - Binary tree parsed from a Newick string, using the
//!   arena pattern, generic over the character-state payload `S`
//! * [NodeIndex] as type used to index nodes in the tree
//! * [PostOrderIter] and [PreOrderIter] for traversal

use crate::error::TreeError;
use crate::model::character_states::CharacterStates;
use crate::model::node::{InternalId, Node};
use crate::model::tree_builder::TreeBuilder;
use std::collections::HashSet;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A binary phylogenetic tree whose leaves carry character states,
/// as consumed by parsimony scoring algorithms.
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// Leaves are identified by taxon name, internal nodes by a sequential
/// [InternalId] starting at the configured offset.
///
/// Generic over `S`, the opaque character-state payload of the leaves.
///
/// # Structure
/// - All nodes are stored in the arena, children before their parent.
/// - Index of root is maintained; the root is the last node in the arena.
/// - The leaf index lists leaves in creation order, which is the
///   left-to-right order of the taxa in the Newick string.
///
/// # Construction
/// Use [`ParsimonyTree::builder`] (or the quick functions
/// [parse_tree](crate::parse_tree) and
/// [parse_tree_with_states](crate::parse_tree_with_states)).
/// The topology is fixed afterward; only leaf states can change through
/// [`bind_states`](Self::bind_states).
///
/// # Example
/// ```
/// use parsimony_tree::ParsimonyTree;
/// use parsimony_tree::model::NodeId;
///
/// let tree: ParsimonyTree<char> = ParsimonyTree::builder("(A, (B, (C, D)));").build()?;
/// let ids: Vec<String> = tree.post_order_iter().map(|n| n.id().to_string()).collect();
/// assert_eq!(ids, ["A", "B", "C", "D", "9", "8", "7"]);
/// assert_eq!(tree.root().id(), NodeId::Internal(7));
/// # Ok::<(), parsimony_tree::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParsimonyTree<S> {
    /// Newick string this tree was parsed from
    newick: String,

    /// Taxon names in order of appearance in the Newick string
    taxa: Vec<String>,

    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node<S>>,

    /// Indices of the leaves in creation order
    leaves: Vec<NodeIndex>,

    /// Index of the root of this tree
    root_index: NodeIndex,

    /// Identifier of the first internal node
    internal_offset: InternalId,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<S> ParsimonyTree<S> {
    /// Returns a [TreeBuilder] to configure and parse the given Newick string.
    pub fn builder(newick: &str) -> TreeBuilder<'_, S> {
        TreeBuilder::new(newick)
    }

    pub(crate) fn from_parts(
        newick: String,
        taxa: Vec<String>,
        nodes: Vec<Node<S>>,
        leaves: Vec<NodeIndex>,
        root_index: NodeIndex,
        internal_offset: InternalId,
    ) -> Self {
        Self {
            newick,
            taxa,
            nodes,
            leaves,
            root_index,
            internal_offset,
        }
    }

    /// Returns the Newick string this tree was parsed from.
    pub fn newick(&self) -> &str {
        &self.newick
    }

    /// Returns the taxon names in order of appearance in the Newick string.
    pub fn taxa(&self) -> &[String] {
        &self.taxa
    }

    /// Returns the identifier assigned to the first internal node.
    pub fn internal_offset(&self) -> InternalId {
        self.internal_offset
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node<S> {
        &self.nodes[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node<S> {
        &self.nodes[index]
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.leaves.len()
    }

    /// Returns the number of internal nodes in this tree.
    pub fn num_internal(&self) -> usize {
        self.nodes.len() - self.leaves.len()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over the leaves in creation order,
    /// i.e. in the order of [`taxa`](Self::taxa).
    pub fn leaves(&self) -> impl Iterator<Item = &Node<S>> + '_ {
        self.leaves.iter().map(|&index| &self.nodes[index])
    }

    /// Returns the leaf of the given taxon, or `None` if there is none.
    pub fn leaf(&self, taxon: &str) -> Option<&Node<S>> {
        self.leaves().find(|leaf| leaf.taxon() == Some(taxon))
    }

    /// Returns the internal node with the given id, or `None` if there is none.
    pub fn internal(&self, id: InternalId) -> Option<&Node<S>> {
        self.nodes.iter().find(|node| node.internal_id() == Some(id))
    }

    /// Returns an iterator over `(taxon, state)` of all leaves in creation order.
    pub fn leaf_states(&self) -> impl Iterator<Item = (&str, Option<&S>)> + '_ {
        self.leaves()
            .filter_map(|leaf| leaf.taxon().map(|taxon| (taxon, leaf.state())))
    }
}

// ============================================================================
// Character states (pub)
// ============================================================================
impl<S: Clone> ParsimonyTree<S> {
    /// Replaces the character state of every leaf with the state the given
    /// provider holds for its taxon.
    ///
    /// Used to score the same topology against successive characters
    /// without parsing again. All lookups happen before any leaf is
    /// modified, so on error the tree is left unchanged.
    ///
    /// # Arguments
    /// * `states` - Provider with a state for every taxon of the tree
    ///
    /// # Returns
    /// * `Ok(())` - All leaves got their new state
    /// * `Err(TreeError::MissingTaxonState)` - If a taxon has no state
    ///   (first such taxon in leaf order)
    pub fn bind_states<C>(&mut self, states: &C) -> Result<(), TreeError>
    where
        C: CharacterStates<State = S> + ?Sized,
    {
        let mut new_states = Vec::with_capacity(self.leaves.len());
        for leaf in self.leaves() {
            let taxon = leaf.taxon().unwrap_or_default();
            let state = states
                .state_of(taxon)
                .ok_or_else(|| TreeError::missing_state(taxon))?;
            new_states.push(state.clone());
        }

        for (&index, state) in self.leaves.iter().zip(new_states) {
            self.nodes[index].set_state(Some(state));
        }

        Ok(())
    }
}

impl<S> ParsimonyTree<S> {
    /// Removes the character states of all leaves.
    pub fn clear_states(&mut self) {
        for &index in &self.leaves {
            self.nodes[index].set_state(None);
        }
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl<S> ParsimonyTree<S> {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and points to the last node in the arena
    /// - All node indices match their position in the arena
    /// - All child indices point to earlier nodes, each non-root node is
    ///   the child of exactly one node
    /// - Leaf index lists exactly the leaves, named as the taxon list
    /// - Internal ids are unique and exactly `offset..offset + num_internal`
    /// - For n leaves, there are n-1 internal nodes
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.nodes.is_empty() || self.root_index != self.nodes.len() - 1 {
            return false;
        }

        let mut child_count = vec![0usize; self.nodes.len()];
        let mut internal_ids = HashSet::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            if let Node::Internal { id, children: (left, right), .. } = node {
                if *left >= index || *right >= index {
                    return false;
                }
                child_count[*left] += 1;
                child_count[*right] += 1;

                let in_range = id
                    .checked_sub(self.internal_offset)
                    .is_some_and(|step| step < self.num_internal());
                if !in_range || !internal_ids.insert(*id) {
                    return false;
                }
            }
        }

        let parents_ok = child_count
            .iter()
            .enumerate()
            .all(|(index, &count)| count == usize::from(index != self.root_index));
        if !parents_ok {
            return false;
        }

        let leaves_ok = self.leaves.len() == self.taxa.len()
            && self.leaves().zip(&self.taxa).all(|(leaf, taxon)| leaf.taxon() == Some(taxon));
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();

        leaves_ok && leaf_count == self.leaves.len() && self.nodes.len() + 1 == 2 * leaf_count
    }
}

impl<S> std::ops::Index<NodeIndex> for ParsimonyTree<S> {
    type Output = Node<S>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<S> ParsimonyTree<S> {
    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// The left subtree is emitted fully before the right subtree, then the
    /// node itself; the root comes last. Each call starts a fresh traversal.
    pub fn post_order_iter(&self) -> PostOrderIter<'_, S> {
        PostOrderIter::new(self)
    }

    /// Returns all nodes in post-order, see [`post_order_iter`](Self::post_order_iter).
    pub fn post_order(&self) -> Vec<&Node<S>> {
        self.post_order_iter().collect()
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Useful for propagating data from the root to the leaves, e.g. in the
    /// top-down pass of a parsimony reconstruction.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, S> {
        PreOrderIter::new(self)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a, S> {
    tree: &'a ParsimonyTree<S>,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a, S> PostOrderIter<'a, S> {
    fn new(tree: &'a ParsimonyTree<S>) -> Self {
        let mut stack = Vec::with_capacity(tree.num_nodes());
        stack.push((tree.root_index, false));
        PostOrderIter { tree, stack }
    }
}

impl<'a, S> Iterator for PostOrderIter<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            match node.children() {
                Some((left, right)) if !children_visited => {
                    self.stack.push((index, true));
                    // Right first, so left is processed first
                    self.stack.push((right, false));
                    self.stack.push((left, false));
                }
                _ => return Some(node),
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Each node is visited before any of its descendants, left subtree first.
pub struct PreOrderIter<'a, S> {
    tree: &'a ParsimonyTree<S>,
    stack: Vec<NodeIndex>,
}

impl<'a, S> PreOrderIter<'a, S> {
    fn new(tree: &'a ParsimonyTree<S>) -> Self {
        PreOrderIter { tree, stack: vec![tree.root_index] }
    }
}

impl<'a, S> Iterator for PreOrderIter<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        if let Some((left, right)) = node.children() {
            self.stack.push(right);
            self.stack.push(left);
        }

        Some(node)
    }
}
