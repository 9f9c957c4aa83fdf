//! Truncation helper.

use bytes::Bytes;

/// Keep at most the first `max` bytes.
///
/// Absence is preserved: `None` stays `None`, it never turns into an empty
/// sequence.
pub trait AtMostFirstN: Sized {
    fn at_most_first_n(self, max: usize) -> Self;
}

impl AtMostFirstN for &[u8] {
    fn at_most_first_n(self, max: usize) -> Self {
        &self[..self.len().min(max)]
    }
}

impl AtMostFirstN for Vec<u8> {
    fn at_most_first_n(mut self, max: usize) -> Self {
        self.truncate(max);
        self
    }
}

/// Zero-copy: the result shares the original allocation.
impl AtMostFirstN for Bytes {
    fn at_most_first_n(mut self, max: usize) -> Self {
        self.truncate(max);
        self
    }
}

impl<T: AtMostFirstN> AtMostFirstN for Option<T> {
    fn at_most_first_n(self, max: usize) -> Self {
        self.map(|v| v.at_most_first_n(max))
    }
}

/// First `min(len(input), max)` bytes of `input`.
pub fn at_most_first_n_bytes<T: AtMostFirstN>(input: T, max: usize) -> T {
    input.at_most_first_n(max)
}
