//! The `(fib0, fib1)` pair threaded through both sequences.

use std::mem;

use num_bigint::BigInt;

use super::{DEFAULT_FIB0, DEFAULT_FIB1};

/// Two consecutive terms of a Fibonacci-style sequence.
///
/// Forward and reverse transitions undo each other once the pair is swapped:
///
/// ```rust
/// use recursive_functions::Cursor;
///
/// let start = Cursor::new(3, 7);
/// let mut cursor = start.clone();
/// cursor.advance();
/// let mut back = cursor.swapped();
/// back.reverse();
/// assert_eq!(back.swapped(), start);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor {
    fib0: BigInt,
    fib1: BigInt,
}

impl Cursor {
    pub fn new(fib0: impl Into<BigInt>, fib1: impl Into<BigInt>) -> Self {
        Self {
            fib0: fib0.into(),
            fib1: fib1.into(),
        }
    }

    pub fn fib0(&self) -> &BigInt {
        &self.fib0
    }

    pub fn fib1(&self) -> &BigInt {
        &self.fib1
    }

    /// Step `(a, b) -> (b, a + b)`, returning the old `a`
    pub fn advance(&mut self) -> BigInt {
        let next = &self.fib0 + &self.fib1;
        let fib1 = mem::replace(&mut self.fib1, next);
        mem::replace(&mut self.fib0, fib1)
    }

    /// Step `(a, b) -> (b, a - b)`, returning the new first term
    pub fn reverse(&mut self) -> &BigInt {
        let next = &self.fib0 - &self.fib1;
        let fib1 = mem::replace(&mut self.fib1, next);
        self.fib0 = fib1;
        &self.fib0
    }

    /// The same pair in the opposite order
    pub fn swapped(self) -> Self {
        Self {
            fib0: self.fib1,
            fib1: self.fib0,
        }
    }

    pub fn into_pair(self) -> (BigInt, BigInt) {
        (self.fib0, self.fib1)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(DEFAULT_FIB0, DEFAULT_FIB1)
    }
}

impl From<(BigInt, BigInt)> for Cursor {
    fn from((fib0, fib1): (BigInt, BigInt)) -> Self {
        Self { fib0, fib1 }
    }
}
