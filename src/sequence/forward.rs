//! Forward Fibonacci sequence.

use std::iter::FusedIterator;

use num_bigint::BigInt;
use tracing::trace;

use super::cursor::Cursor;
use super::reverse::ReverseFibonacci;

/// Infinite sequence `fib0, fib1, fib0 + fib1, ...`
///
/// # Example
///
/// ```rust
/// use num_bigint::BigInt;
/// use recursive_functions::fibonacci;
///
/// let first: Vec<BigInt> = fibonacci().take(8).collect();
/// let expected: Vec<BigInt> = [0, 1, 1, 2, 3, 5, 8, 13].into_iter().map(BigInt::from).collect();
/// assert_eq!(first, expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fibonacci {
    cursor: Cursor,
}

impl Fibonacci {
    pub fn new(fib0: impl Into<BigInt>, fib1: impl Into<BigInt>) -> Self {
        Self::from_cursor(Cursor::new(fib0, fib1))
    }

    pub fn from_cursor(cursor: Cursor) -> Self {
        trace!(target: "recursive_functions::sequence::fibonacci", fib0 = %cursor.fib0(), fib1 = %cursor.fib1(), "new sequence");
        Self { cursor }
    }

    /// The next value to be emitted is `cursor().fib0()`
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }

    /// Reverse sequence retracing this one from its current position.
    ///
    /// It emits the value this sequence would emit next, then every value
    /// already emitted in reverse order, then carries on past the seeds.
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use recursive_functions::fibonacci;
    ///
    /// let mut forward = fibonacci();
    /// forward.nth(4); // 0, 1, 1, 2, 3
    /// let back: Vec<BigInt> = forward.reversed().take(7).collect();
    /// let expected: Vec<BigInt> = [5, 3, 2, 1, 1, 0, 1].into_iter().map(BigInt::from).collect();
    /// assert_eq!(back, expected);
    /// ```
    pub fn reversed(&self) -> ReverseFibonacci {
        ReverseFibonacci::from_cursor(self.cursor.clone().swapped())
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::from_cursor(Cursor::default())
    }
}

impl Iterator for Fibonacci {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        Some(self.cursor.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Fibonacci {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn test_default_seeds() {
        let values: Vec<BigInt> = Fibonacci::default().take(8).collect();
        assert_eq!(values, ints(&[0, 1, 1, 2, 3, 5, 8, 13]));
    }

    #[test]
    fn test_custom_seeds() {
        let values: Vec<BigInt> = Fibonacci::new(3, -1).take(6).collect();
        assert_eq!(values, ints(&[3, -1, 2, 1, 3, 4]));
    }

    #[test]
    fn test_cursor_tracks_next_value() {
        let mut fib = Fibonacci::default();
        fib.nth(9);
        assert_eq!(fib.cursor(), &Cursor::new(55, 89));
        assert_eq!(fib.next(), Some(BigInt::from(55)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Fibonacci::default();
        original.next();
        let mut copy = original.clone();
        copy.nth(20);
        assert_eq!(original.next(), Some(BigInt::from(1)));
    }

    #[test]
    fn test_grows_past_u64() {
        // F(100) = 354224848179261915075
        let f100 = Fibonacci::default().nth(100).unwrap();
        assert_eq!(f100.to_string(), "354224848179261915075");
    }

    #[test]
    fn test_unbounded_size_hint() {
        assert_eq!(Fibonacci::default().size_hint(), (usize::MAX, None));
    }
}
