//! Parser building the nodes of a [ParsimonyTree].
//!
//! [NewickParser] walks an immutable token array with an explicit cursor.
//! Reading a group `( left , right )` passes through the states of
//! [Expectation]: `OpenOrTaxon` for the left subtree, `Separator`,
//! `OpenOrTaxon` for the right subtree, `Close`. After the root follows
//! `Terminator`, then nothing. Every mismatch becomes a [ParsingError].
//!
//! Open groups wait on an explicit stack of [PendingGroup]s instead of the
//! call stack, so nesting depth is bounded by memory only.
//!
//! [ParsimonyTree]: crate::ParsimonyTree

use crate::error::TreeError;
use crate::model::character_states::CharacterStates;
use crate::model::node::{InternalId, Node};
use crate::model::tree::NodeIndex;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use crate::parser::tokenizer::{Expectation, Token, TokenKind};
use std::collections::HashSet;

/// Group whose `(` has been read but whose `)` has not.
#[derive(Debug, Clone, Copy)]
struct PendingGroup {
    id: InternalId,
    /// Arena index of the left subtree, once it is complete
    left: Option<NodeIndex>,
}

/// Nodes produced by one run of the parser.
pub(crate) struct ParsedNodes<S> {
    pub(crate) nodes: Vec<Node<S>>,
    pub(crate) leaves: Vec<NodeIndex>,
    pub(crate) root_index: NodeIndex,
}

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================$=
/// State of a single tree construction.
///
/// Leaves are named by position: the n-th leaf created gets the n-th entry
/// of the taxon list. Internal ids are handed out in pre-order, i.e. when
/// the `(` of a group is read. Consumed by [`parse`](Self::parse), so the
/// counters never outlive one construction.
pub(crate) struct NewickParser<'a, S> {
    input: &'a str,
    tokens: &'a [Token<'a>],
    cursor: usize,
    taxa: &'a [String],
    seen_taxa: HashSet<&'a str>,
    states: Option<&'a dyn CharacterStates<State = S>>,
    internal_offset: InternalId,
    // None once the id space is exhausted
    next_internal_id: Option<InternalId>,
    nodes: Vec<Node<S>>,
    leaves: Vec<NodeIndex>,
}

impl<'a, S: Clone> NewickParser<'a, S> {
    pub(crate) fn new(
        input: &'a str,
        tokens: &'a [Token<'a>],
        taxa: &'a [String],
        internal_offset: InternalId,
        states: Option<&'a dyn CharacterStates<State = S>>,
    ) -> Self {
        Self {
            input,
            tokens,
            cursor: 0,
            taxa,
            seen_taxa: HashSet::with_capacity(taxa.len()),
            states,
            internal_offset,
            next_internal_id: Some(internal_offset),
            nodes: Vec::with_capacity(2 * taxa.len()),
            leaves: Vec::with_capacity(taxa.len()),
        }
    }

    /// Parses the whole token array: `subtree ';'` and nothing after.
    ///
    /// # Returns
    /// - the arena of nodes, the leaf index and the root index
    /// - [TreeError] if the input is malformed or a state is missing
    pub(crate) fn parse(mut self) -> Result<ParsedNodes<S>, TreeError> {
        if self.tokens.is_empty() {
            return Err(ParsingError::without_context(ParsingErrorType::EmptyInput).into());
        }

        let root_index = self.parse_node()?;
        self.expect(Expectation::Terminator)?;

        if let Some(token) = self.tokens.get(self.cursor) {
            return Err(self.error_at(ParsingErrorType::TrailingInput, token.position()).into());
        }

        if self.leaves.len() != self.taxa.len() {
            return Err(ParsingError::without_context(ParsingErrorType::LeafCountMismatch {
                leaves: self.leaves.len(),
                taxa: self.taxa.len(),
            })
            .into());
        }

        Ok(ParsedNodes {
            nodes: self.nodes,
            leaves: self.leaves,
            root_index,
        })
    }

    /// Parses the subtree starting at the cursor and returns the arena
    /// index of its top node.
    ///
    /// A `(` opens a [PendingGroup]. A completed subtree (a leaf, or a
    /// group whose `)` was just read) fills the left slot of the innermost
    /// pending group and is followed by `,`, or it is the right subtree,
    /// so `)` follows and the group itself completes. With no group
    /// pending, the completed subtree is the root.
    fn parse_node(&mut self) -> Result<NodeIndex, TreeError> {
        let mut pending: Vec<PendingGroup> = Vec::new();

        loop {
            let token = self.expect(Expectation::OpenOrTaxon)?;
            if token.kind() == TokenKind::Open {
                let id = self.allocate_internal_id(token.position())?;
                pending.push(PendingGroup { id, left: None });
                continue;
            }

            let mut completed = self.create_leaf(token.position())?;
            loop {
                let Some(group) = pending.last_mut() else {
                    return Ok(completed);
                };

                match group.left {
                    None => {
                        group.left = Some(completed);
                        self.expect(Expectation::Separator)?;
                        break;
                    }
                    Some(left) => {
                        let id = group.id;
                        pending.pop();
                        self.expect(Expectation::Close)?;
                        completed = self.push_internal(id, (left, completed));
                    }
                }
            }
        }
    }

    /// Hands out the next internal id, in pre-order of the groups.
    fn allocate_internal_id(&mut self, position: usize) -> Result<InternalId, ParsingError> {
        let Some(id) = self.next_internal_id else {
            let kind = ParsingErrorType::InternalIdOverflow { offset: self.internal_offset };
            return Err(self.error_at(kind, position));
        };
        self.next_internal_id = id.checked_add(1);
        Ok(id)
    }

    fn push_internal(&mut self, id: InternalId, children: (NodeIndex, NodeIndex)) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new_internal(index, id, children));
        index
    }

    /// Creates the next leaf, named by the next taxon-list entry, with its
    /// state looked up if states were supplied.
    fn create_leaf(&mut self, position: usize) -> Result<NodeIndex, TreeError> {
        let Some(taxon) = self.taxa.get(self.leaves.len()) else {
            let kind = ParsingErrorType::LeafCountMismatch {
                leaves: self.leaves.len() + 1,
                taxa: self.taxa.len(),
            };
            return Err(self.error_at(kind, position).into());
        };

        if !self.seen_taxa.insert(taxon.as_str()) {
            let kind = ParsingErrorType::DuplicateTaxon(taxon.clone());
            return Err(self.error_at(kind, position).into());
        }

        let state = match self.states {
            Some(states) => Some(
                states
                    .state_of(taxon)
                    .cloned()
                    .ok_or_else(|| TreeError::missing_state(taxon))?,
            ),
            None => None,
        };

        let index = self.nodes.len();
        self.nodes.push(Node::new_leaf(index, taxon.clone(), state));
        self.leaves.push(index);
        Ok(index)
    }

    /// Consumes the token at the cursor if it meets the expectation.
    fn expect(&mut self, expectation: Expectation) -> Result<Token<'a>, ParsingError> {
        match self.tokens.get(self.cursor) {
            Some(token) if expectation.is_met_by(&token.kind()) => {
                self.cursor += 1;
                Ok(*token)
            }
            Some(token) => Err(self.error_at(
                ParsingErrorType::UnexpectedToken {
                    expected: expectation,
                    found: token.kind().to_string(),
                },
                token.position(),
            )),
            None => Err(self.error_at(ParsingErrorType::UnexpectedEnd(expectation), self.input.len())),
        }
    }

    fn error_at(&self, kind: ParsingErrorType, position: usize) -> ParsingError {
        ParsingError::at(kind, self.input, position)
    }
}
