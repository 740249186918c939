//! Deterministic finite automaton engine.
//!
//! Build an automaton by registering named states and wiring transitions,
//! then simulate it on input strings, derive its complement, or render it in
//! the canonical text layout.
//!
//! ```
//! use fa_dfa::Dfa;
//!
//! let mut dfa = Dfa::new();
//! dfa.add_start_state("even");
//! dfa.add_final_state("even");
//! dfa.add_state("odd");
//! dfa.add_transition("even", '1', "odd")?;
//! dfa.add_transition("odd", '1', "even")?;
//!
//! assert!(dfa.accepts("11")?);
//! assert!(!dfa.complement().accepts("11")?);
//! # Ok::<(), fa_dfa::FaError>(())
//! ```
//!
//! # Architecture
//!
//! - [`state`] -- Named state with its own transition table
//! - [`alphabet`] -- Ordered input alphabet with the empty-string marker
//! - [`config`] -- Engine configuration
//! - [`dfa`] -- State registry, simulation, and complement
//! - `display` -- Canonical text rendering via [`std::fmt::Display`]

pub mod alphabet;
pub mod config;
pub mod dfa;
mod display;
pub mod state;

pub use alphabet::Alphabet;
pub use config::DfaConfig;
pub use dfa::Dfa;
pub use fa_core::{FaError, FiniteAutomaton};
pub use state::DfaState;
