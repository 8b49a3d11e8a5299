//! Provides the [CharacterStates] trait, through which leaves obtain their
//! character states.
//!
//! A provider maps taxon names to an opaque per-character state payload.
//! The tree never interprets the payload; it only looks it up by taxon name
//! and stores a clone in the matching leaf.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Mapping from taxon name to character state.
///
/// Implemented for [HashMap] and [BTreeMap] keyed by anything that borrows
/// as `str` (e.g. `String` or `&str`). Implement it for your own character
/// matrix type to bind states without building an intermediate map.
///
/// # Example
/// ```
/// use parsimony_tree::model::CharacterStates;
/// use std::collections::HashMap;
///
/// let states = HashMap::from([("Kiwi", 'A'), ("Moa", 'G')]);
/// assert_eq!(states.state_of("Moa"), Some(&'G'));
/// assert_eq!(states.state_of("Emu"), None);
/// ```
pub trait CharacterStates {
    /// Opaque state payload
    type State;

    /// Returns the state for the given taxon, or `None` if there is none.
    fn state_of(&self, taxon: &str) -> Option<&Self::State>;
}

impl<K, S, H> CharacterStates for HashMap<K, S, H>
where
    K: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    type State = S;

    fn state_of(&self, taxon: &str) -> Option<&S> {
        self.get(taxon)
    }
}

impl<K, S> CharacterStates for BTreeMap<K, S>
where
    K: Borrow<str> + Ord,
{
    type State = S;

    fn state_of(&self, taxon: &str) -> Option<&S> {
        self.get(taxon)
    }
}

impl<C: CharacterStates + ?Sized> CharacterStates for &C {
    type State = C::State;

    fn state_of(&self, taxon: &str) -> Option<&C::State> {
        (**self).state_of(taxon)
    }
}
