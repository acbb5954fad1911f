//! Reverse Fibonacci sequence.

use std::iter::FusedIterator;

use num_bigint::BigInt;
use tracing::trace;

use super::cursor::Cursor;

/// Infinite sequence running the Fibonacci recurrence backwards.
///
/// Each step replaces `(fib0, fib1)` with `(fib1, fib0 - fib1)` and then emits
/// the new `fib0`. The seeds themselves are never emitted as-is: from `(0, 1)`
/// the sequence starts `1, -1, 2, -3, 5, -8, 13`.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigInt;
/// use recursive_functions::reverse_fibonacci;
///
/// let first: Vec<BigInt> = reverse_fibonacci().take(7).collect();
/// let expected: Vec<BigInt> = [1, -1, 2, -3, 5, -8, 13].into_iter().map(BigInt::from).collect();
/// assert_eq!(first, expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseFibonacci {
    cursor: Cursor,
}

impl ReverseFibonacci {
    pub fn new(fib0: impl Into<BigInt>, fib1: impl Into<BigInt>) -> Self {
        Self::from_cursor(Cursor::new(fib0, fib1))
    }

    pub fn from_cursor(cursor: Cursor) -> Self {
        trace!(target: "recursive_functions::sequence::reverse_fibonacci", fib0 = %cursor.fib0(), fib1 = %cursor.fib1(), "new sequence");
        Self { cursor }
    }

    /// The most recently emitted value is `cursor().fib0()`, or the seed
    /// before the first pull
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }
}

impl Default for ReverseFibonacci {
    fn default() -> Self {
        Self::from_cursor(Cursor::default())
    }
}

impl Iterator for ReverseFibonacci {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        Some(self.cursor.reverse().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for ReverseFibonacci {}
