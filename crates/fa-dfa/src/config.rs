// Engine configuration.

use fa_core::symbol::DEFAULT_EPSILON;

/// Settings fixed when a [`Dfa`](crate::Dfa) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfaConfig {
    /// Input that stands for the empty string in acceptance queries.
    pub epsilon: char,
}

impl DfaConfig {
    /// Use `epsilon` as the empty-string marker instead of the default `'e'`.
    pub fn with_epsilon(mut self, epsilon: char) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for DfaConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
