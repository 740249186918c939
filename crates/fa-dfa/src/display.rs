// Canonical text rendering.
//
// Layout:
//
//   Q = { a b }
//   Sigma = {0 1 }
//   Delta =
//   	0	1	
//   a	a	b	
//   b	a	b	
//
//   q0 = a
//   F = { a b }
//
// States and symbols appear in registration and first-use order. The
// empty-string marker is never printed.

use std::fmt;

use crate::dfa::Dfa;
use crate::state::DfaState;

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Q = { ")?;
        for state in self.states() {
            write!(f, "{} ", state.name())?;
        }
        f.write_str("}\n")?;

        f.write_str("Sigma = {")?;
        for symbol in self.alphabet().symbols() {
            write!(f, "{symbol} ")?;
        }
        f.write_str("}\n")?;

        f.write_str("Delta =\n\t")?;
        for symbol in self.alphabet().symbols() {
            write!(f, "{symbol}\t")?;
        }
        f.write_str("\n")?;
        for state in self.states() {
            write!(f, "{}\t", state.name())?;
            for symbol in self.alphabet().symbols() {
                // Missing transitions render as an empty cell.
                write!(f, "{}\t", state.transition(symbol).unwrap_or(""))?;
            }
            f.write_str("\n")?;
        }
        f.write_str("\n")?;

        let start = self.start_state().map(DfaState::name).unwrap_or("");
        writeln!(f, "q0 = {start}")?;
        f.write_str("F = { ")?;
        for state in self.final_states() {
            write!(f, "{} ", state.name())?;
        }
        f.write_str("}\n")
    }
}
