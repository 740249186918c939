//! Shared vocabulary for finite automata.
//!
//! This crate holds the pieces every automaton engine in the workspace agrees
//! on, independent of how a particular engine stores its graph.
//!
//! # Architecture
//!
//! - [`symbol`] -- The reserved empty-string marker
//! - [`automaton`] -- The [`FiniteAutomaton`] trait implemented by engines
//! - [`FaError`] -- Error type shared by construction and simulation

pub mod automaton;
pub mod symbol;

pub use automaton::FiniteAutomaton;

/// Error type for automaton construction and simulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FaError {
    #[error("no state named {0:?} is registered")]
    NoSuchState(String),
    #[error("state {state:?} has no transition on symbol {symbol:?}")]
    MissingTransition { state: String, symbol: char },
    #[error("empty input; use the marker {epsilon:?} to test the empty string")]
    MalformedInput { epsilon: char },
    #[error("no start state has been registered")]
    NoStartState,
    #[error("symbol {0:?} is the reserved empty-string marker and cannot label a transition")]
    ReservedSymbol(char),
}
