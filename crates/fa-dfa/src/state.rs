// DFA state: a named identity holding its own transition table.

use std::hash::{Hash, Hasher};

use fa_core::FaError;
use hashbrown::HashMap;

/// A single DFA state.
///
/// Identity is the name alone: two states compare equal iff their names do,
/// whatever their transitions. Each state owns its transition table, mapping
/// an input symbol to the *name* of the destination state. Cloning produces a
/// fully independent table.
#[derive(Debug, Clone)]
pub struct DfaState {
    name: String,
    transitions: HashMap<char, String>,
}

impl DfaState {
    /// Create a state with an empty transition table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind `symbol` to `destination`, replacing any earlier binding.
    ///
    /// The destination name is not checked against any automaton.
    pub fn add_transition(&mut self, symbol: char, destination: impl Into<String>) {
        self.transitions.insert(symbol, destination.into());
    }

    /// Destination name bound to `symbol`.
    pub fn transition(&self, symbol: char) -> Result<&str, FaError> {
        self.transitions
            .get(&symbol)
            .map(String::as_str)
            .ok_or_else(|| FaError::MissingTransition {
                state: self.name.clone(),
                symbol,
            })
    }

    /// All `(symbol, destination)` pairs, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (char, &str)> {
        self.transitions.iter().map(|(&sym, dest)| (sym, dest.as_str()))
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Returns `true` if this state is called `name`.
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl PartialEq for DfaState {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DfaState {}

impl Hash for DfaState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
