//! Language-level properties of simulation and complement, checked over
//! randomly generated complete automata.

use fa_dfa::{Dfa, FaError, FiniteAutomaton};
use proptest::prelude::*;

const SYMBOLS: [char; 2] = ['0', '1'];

/// A complete automaton over `{0, 1}` described by plain data.
#[derive(Debug, Clone)]
struct Blueprint {
    finals: Vec<bool>,
    // delta[state][symbol index] = destination state
    delta: Vec<[usize; 2]>,
}

impl Blueprint {
    fn build(&self) -> Dfa {
        let mut dfa = Dfa::new();
        for (i, &is_final) in self.finals.iter().enumerate() {
            let name = format!("q{i}");
            match (i, is_final) {
                (0, true) => {
                    dfa.add_start_state(&name);
                    dfa.add_final_state(&name);
                }
                (0, false) => dfa.add_start_state(&name),
                (_, true) => dfa.add_final_state(&name),
                (_, false) => dfa.add_state(&name),
            }
        }
        for (i, row) in self.delta.iter().enumerate() {
            for (sym, &dest) in SYMBOLS.iter().zip(row) {
                dfa.add_transition(&format!("q{i}"), *sym, &format!("q{dest}"))
                    .unwrap();
            }
        }
        dfa
    }

    /// Direct table-driven run, independent of the engine.
    fn run(&self, input: &str) -> bool {
        let mut state = 0;
        for c in input.chars() {
            let sym = if c == '0' { 0 } else { 1 };
            state = self.delta[state][sym];
        }
        self.finals[state]
    }
}

fn blueprint() -> impl Strategy<Value = Blueprint> {
    (1usize..6).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(prop::array::uniform2(0..n), n),
        )
            .prop_map(|(finals, delta)| Blueprint { finals, delta })
    })
}

proptest! {
    /// Simulation agrees with a direct table walk.
    #[test]
    fn accepts_matches_reference(bp in blueprint(), input in "[01]{1,16}") {
        let dfa = bp.build();
        prop_assert_eq!(dfa.accepts(&input).unwrap(), bp.run(&input));
    }

    /// Every non-empty string is accepted by exactly one of A and its complement.
    #[test]
    fn complement_disagrees_everywhere(bp in blueprint(), input in "[01]{1,16}") {
        let dfa = bp.build();
        let comp = dfa.complement();
        prop_assert_ne!(dfa.accepts(&input).unwrap(), comp.accepts(&input).unwrap());
    }

    /// The empty-string marker also flips under complement.
    #[test]
    fn complement_flips_empty_string(bp in blueprint()) {
        let dfa = bp.build();
        prop_assert_eq!(dfa.accepts("e").unwrap(), bp.finals[0]);
        prop_assert_ne!(dfa.accepts("e").unwrap(), dfa.complement().accepts("e").unwrap());
    }

    /// Complementing twice restores the language and the final-state partition.
    #[test]
    fn double_complement_round_trips(bp in blueprint(), input in "[01]{1,16}") {
        let dfa = bp.build();
        let back = dfa.complement().complement();
        prop_assert_eq!(dfa.accepts(&input).unwrap(), back.accepts(&input).unwrap());

        let finals: Vec<_> = dfa.final_states().map(|s| s.name().to_string()).collect();
        let mut back_finals: Vec<_> = back.final_states().map(|s| s.name().to_string()).collect();
        let mut sorted = finals.clone();
        sorted.sort();
        back_finals.sort();
        prop_assert_eq!(sorted, back_finals);
    }

    /// Complement carries the alphabet and state registry over unchanged.
    #[test]
    fn complement_preserves_structure(bp in blueprint()) {
        let dfa = bp.build();
        let comp = dfa.complement();
        prop_assert_eq!(comp.alphabet(), dfa.alphabet());
        prop_assert_eq!(comp.state_count(), dfa.state_count());
        prop_assert_eq!(
            comp.start_state().unwrap().name(),
            dfa.start_state().unwrap().name()
        );
    }

    /// Symbols join the alphabet once, in the order they are first used.
    #[test]
    fn alphabet_first_use_order(symbols in prop::collection::vec("[a-dA-D0-9]", 1..20)) {
        let mut dfa = Dfa::new();
        dfa.add_start_state("s");
        let mut expected: Vec<char> = Vec::new();
        for s in &symbols {
            let c = s.chars().next().unwrap();
            dfa.add_transition("s", c, "s").unwrap();
            if !expected.contains(&c) {
                expected.push(c);
            }
        }
        prop_assert_eq!(dfa.alphabet().symbols().collect::<Vec<_>>(), expected);
    }

    /// Re-registering names never produces duplicates.
    #[test]
    fn reregistration_keeps_names_unique(names in prop::collection::vec("[a-c]", 1..20)) {
        let mut dfa = Dfa::new();
        for (i, name) in names.iter().enumerate() {
            match i % 3 {
                0 => dfa.add_state(name),
                1 => dfa.add_final_state(name),
                _ => dfa.add_start_state(name),
            }
        }
        let mut registered: Vec<_> = dfa.states().map(|s| s.name().to_string()).collect();
        let total = registered.len();
        registered.sort();
        registered.dedup();
        prop_assert_eq!(registered.len(), total);
    }
}

#[test]
fn trait_surface_reports_errors() {
    fn query<A: FiniteAutomaton>(a: &A, input: &str) -> Result<bool, FaError> {
        a.accepts(input)
    }

    let mut dfa = Dfa::new();
    assert_eq!(query(&dfa, "0"), Err(FaError::NoStartState));

    dfa.add_start_state("a");
    dfa.add_transition("a", '0', "a").unwrap();
    assert_eq!(
        query(&dfa, "01"),
        Err(FaError::MissingTransition {
            state: "a".to_string(),
            symbol: '1'
        })
    );
    assert_eq!(query(&dfa, ""), Err(FaError::MalformedInput { epsilon: 'e' }));
}
