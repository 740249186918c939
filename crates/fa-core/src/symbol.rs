// Reserved empty-string marker.

/// Marker used in acceptance queries to stand for the empty string.
///
/// The marker lives in every alphabet but never labels a transition, and it
/// is left out of rendered output.
pub const DEFAULT_EPSILON: char = 'e';

/// Returns `true` if `input` is exactly the single-character marker `epsilon`.
///
/// Only the one-character string counts; `"ee"` or `"e0"` are ordinary inputs.
#[inline]
pub fn is_epsilon_input(input: &str, epsilon: char) -> bool {
    let mut chars = input.chars();
    chars.next() == Some(epsilon) && chars.next().is_none()
}
