//! Crate-level error type.

use crate::parser::ParsingError;
use thiserror::Error;

/// Errors raised while building a [ParsimonyTree](crate::ParsimonyTree)
/// or binding character states to its leaves.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum TreeError {
    /// The Newick string is structurally invalid.
    #[error("Malformed Newick string: {0}")]
    MalformedNewick(#[from] ParsingError),
    /// A character-state mapping lacks an entry for a leaf.
    #[error("No character state for taxon {taxon:?}")]
    MissingTaxonState { taxon: String },
}

impl TreeError {
    pub(crate) fn missing_state(taxon: &str) -> Self {
        TreeError::MissingTaxonState { taxon: taxon.to_string() }
    }
}
