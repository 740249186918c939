// Input alphabet: ordered, deduplicated, always holding the empty-string marker.

/// Ordered set of input symbols.
///
/// Symbols keep first-use order. The empty-string marker is always a member
/// but is never yielded by [`Alphabet::symbols`], so it stays out of
/// transition tables and rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    epsilon: char,
    // Excludes the marker.
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(epsilon: char) -> Self {
        Self {
            epsilon,
            symbols: Vec::new(),
        }
    }

    /// The reserved empty-string marker.
    pub fn epsilon(&self) -> char {
        self.epsilon
    }

    /// Append `symbol` if it is new. Returns `true` if it was added.
    ///
    /// The marker is already a member, so inserting it is a no-op.
    pub fn insert(&mut self, symbol: char) -> bool {
        if self.contains(symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    pub fn contains(&self, symbol: char) -> bool {
        symbol == self.epsilon || self.symbols.contains(&symbol)
    }

    /// Real input symbols in first-use order, without the marker.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Every member: the marker first, then the real symbols.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.epsilon).chain(self.symbols())
    }

    /// Number of members, counting the marker.
    pub fn len(&self) -> usize {
        self.symbols.len() + 1
    }

    /// Always `false`: the marker is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}
