// Programmatic contract shared by automaton engines.

use crate::FaError;

/// Construction and query interface of a finite automaton.
///
/// Engines register states by name, wire transitions between them, and then
/// answer acceptance queries. Registering a name twice replaces the earlier
/// state; there is no removal.
pub trait FiniteAutomaton {
    /// The state record the engine hands out from lookups.
    type State;

    /// Register `name` as a fresh state and make it the start state.
    fn add_start_state(&mut self, name: &str);

    /// Register `name` as a fresh non-final state.
    fn add_state(&mut self, name: &str);

    /// Register `name` as a fresh final state.
    fn add_final_state(&mut self, name: &str);

    /// Add the transition `from --symbol--> to`.
    ///
    /// Fails with [`FaError::NoSuchState`] if `from` is not registered. The
    /// destination is not checked until it is reached.
    fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), FaError>;

    /// The designated start state.
    fn start_state(&self) -> Result<&Self::State, FaError>;

    /// Resolve the state reached from `from` on `symbol`.
    fn to_state(&self, from: &Self::State, symbol: char) -> Result<&Self::State, FaError>;

    /// Run the automaton on `input` and report whether it ends in a final state.
    fn accepts(&self, input: &str) -> Result<bool, FaError>;

    /// Build a new automaton recognising the complement language.
    fn complement(&self) -> Self
    where
        Self: Sized;
}
