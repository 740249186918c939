// Automaton engine: state registry, simulation, complement.

use fa_core::symbol::is_epsilon_input;
use fa_core::{FaError, FiniteAutomaton};
use hashbrown::HashMap;
use tracing::{debug, trace, warn};

use crate::alphabet::Alphabet;
use crate::config::DfaConfig;
use crate::state::DfaState;

/// Deterministic finite automaton.
///
/// States live in an arena in registration order and are addressed by name
/// through `index`. Re-registering a name replaces the state in its original
/// slot, so the slot id is stable and `start`/`finals` keep referring to
/// whatever is currently registered under that name.
///
/// The engine does not check that the transition function is total. A
/// missing transition is reported when simulation reaches it.
#[derive(Clone)]
pub struct Dfa {
    config: DfaConfig,
    states: Vec<DfaState>,
    index: HashMap<String, usize>,
    /// Slot ids in the order they first became final.
    finals: Vec<usize>,
    start: Option<usize>,
    alphabet: Alphabet,
}

impl std::fmt::Debug for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dfa")
            .field("state_count", &self.states.len())
            .field("final_count", &self.finals.len())
            .field("start", &self.start.map(|id| self.states[id].name()))
            .field("alphabet", &self.alphabet.symbols().collect::<String>())
            .finish()
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}

impl Dfa {
    /// Create an empty automaton with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DfaConfig::default())
    }

    pub fn with_config(config: DfaConfig) -> Self {
        Self {
            config,
            states: Vec::new(),
            index: HashMap::new(),
            finals: Vec::new(),
            start: None,
            alphabet: Alphabet::new(config.epsilon),
        }
    }

    pub fn config(&self) -> &DfaConfig {
        &self.config
    }

    /// Put `state` into the arena, replacing any state of the same name.
    fn register(&mut self, state: DfaState) -> usize {
        if let Some(&id) = self.index.get(state.name()) {
            self.states[id] = state;
            id
        } else {
            let id = self.states.len();
            self.index.insert(state.name().to_string(), id);
            self.states.push(state);
            id
        }
    }

    fn mark_final(&mut self, id: usize) {
        if !self.finals.contains(&id) {
            self.finals.push(id);
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Register a fresh state called `name` and make it the start state.
    ///
    /// A previous start state stays registered; it just stops being the start.
    pub fn add_start_state(&mut self, name: &str) {
        let id = self.register(DfaState::new(name));
        self.start = Some(id);
        debug!(state = name, "registered start state");
    }

    /// Register a fresh non-final state called `name`.
    ///
    /// Final membership is tracked by name, so re-adding a final state's name
    /// here replaces its transitions but leaves it final.
    pub fn add_state(&mut self, name: &str) {
        self.register(DfaState::new(name));
        debug!(state = name, "registered state");
    }

    /// Register a fresh final state called `name`.
    pub fn add_final_state(&mut self, name: &str) {
        self.add_final_state_from(DfaState::new(name));
    }

    /// Register an existing state value as final, transitions included.
    pub fn add_final_state_from(&mut self, state: DfaState) {
        debug!(state = state.name(), "registered final state");
        let id = self.register(state);
        self.mark_final(id);
    }

    /// Add the transition `from --symbol--> to`.
    ///
    /// `symbol` joins the alphabet on first use. The destination is not
    /// checked here; an unknown destination surfaces as
    /// [`FaError::NoSuchState`] when simulation reaches it. A failed call
    /// leaves the automaton unchanged.
    pub fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), FaError> {
        if symbol == self.config.epsilon {
            return Err(FaError::ReservedSymbol(symbol));
        }
        let &id = self
            .index
            .get(from)
            .ok_or_else(|| FaError::NoSuchState(from.to_string()))?;
        self.alphabet.insert(symbol);
        self.states[id].add_transition(symbol, to);
        trace!(from, %symbol, to, "added transition");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All registered states in registration order.
    pub fn states(&self) -> impl Iterator<Item = &DfaState> {
        self.states.iter()
    }

    /// Final states in the order they became final.
    pub fn final_states(&self) -> impl Iterator<Item = &DfaState> {
        self.finals.iter().map(|&id| &self.states[id])
    }

    pub fn start_state(&self) -> Result<&DfaState, FaError> {
        self.start
            .map(|id| &self.states[id])
            .ok_or(FaError::NoStartState)
    }

    /// The alphabet, including the empty-string marker.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The state currently registered as `name`.
    pub fn state(&self, name: &str) -> Option<&DfaState> {
        self.index.get(name).map(|&id| &self.states[id])
    }

    pub fn is_final(&self, name: &str) -> bool {
        self.index
            .get(name)
            .is_some_and(|id| self.finals.contains(id))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Resolve the state reached from `from` on `symbol`.
    pub fn to_state(&self, from: &DfaState, symbol: char) -> Result<&DfaState, FaError> {
        let dest = from.transition(symbol).inspect_err(|_| {
            warn!(state = from.name(), %symbol, "no transition for symbol");
        })?;
        self.state(dest).ok_or_else(|| {
            warn!(state = from.name(), %symbol, dest, "transition leads to unregistered state");
            FaError::NoSuchState(dest.to_string())
        })
    }

    // -----------------------------------------------------------------------
    // Algorithms
    // -----------------------------------------------------------------------

    /// Simulate the automaton on `input`.
    ///
    /// The single-character marker (`'e'` by default) tests the empty string:
    /// it is accepted iff the start state is final. A zero-length input is
    /// rejected with [`FaError::MalformedInput`]. Any other input is consumed
    /// one character at a time and accepted iff the last state reached is final.
    pub fn accepts(&self, input: &str) -> Result<bool, FaError> {
        let mut current = self.start_state()?;
        let epsilon = self.config.epsilon;

        if is_epsilon_input(input, epsilon) {
            return Ok(self.is_final(current.name()));
        }
        if input.is_empty() {
            return Err(FaError::MalformedInput { epsilon });
        }

        for symbol in input.chars() {
            let next = self.to_state(current, symbol)?;
            trace!(from = current.name(), %symbol, to = next.name(), "step");
            current = next;
        }

        Ok(self.is_final(current.name()))
    }

    /// Build the automaton accepting exactly the strings this one rejects.
    ///
    /// Every state is deep-copied in registration order with its transitions.
    /// States that are final here become plain, and all others become final.
    /// The start state keeps its name, and the alphabet and configuration are
    /// carried over unchanged.
    pub fn complement(&self) -> Dfa {
        let mut comp = Dfa::with_config(self.config);
        comp.alphabet = self.alphabet.clone();

        for (id, state) in self.states.iter().enumerate() {
            if self.finals.contains(&id) {
                comp.register(state.clone());
            } else {
                let new_id = comp.register(state.clone());
                comp.mark_final(new_id);
            }
        }

        comp.start = self
            .start
            .and_then(|id| comp.index.get(self.states[id].name()).copied());

        debug!(
            states = comp.states.len(),
            finals = comp.finals.len(),
            "built complement"
        );
        comp
    }
}

impl FiniteAutomaton for Dfa {
    type State = DfaState;

    fn add_start_state(&mut self, name: &str) {
        Dfa::add_start_state(self, name);
    }

    fn add_state(&mut self, name: &str) {
        Dfa::add_state(self, name);
    }

    fn add_final_state(&mut self, name: &str) {
        Dfa::add_final_state(self, name);
    }

    fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), FaError> {
        Dfa::add_transition(self, from, symbol, to)
    }

    fn start_state(&self) -> Result<&DfaState, FaError> {
        Dfa::start_state(self)
    }

    fn to_state(&self, from: &DfaState, symbol: char) -> Result<&DfaState, FaError> {
        Dfa::to_state(self, from, symbol)
    }

    fn accepts(&self, input: &str) -> Result<bool, FaError> {
        Dfa::accepts(self, input)
    }

    fn complement(&self) -> Self {
        Dfa::complement(self)
    }
}
