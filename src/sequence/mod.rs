//! Lazy Fibonacci-style Sequences
//!
//! Both sequences are plain iterators over a [`Cursor`] holding the two most
//! recent terms. Nothing is computed until a value is pulled, and neither
//! sequence ever ends; bound consumption with [`Iterator::take`] or similar.
//!
//! - [`Fibonacci`] emits the current `fib0`, then steps `(a, b) -> (b, a + b)`.
//! - [`ReverseFibonacci`] steps `(a, b) -> (b, a - b)`, then emits the new `fib0`.
//!
//! The emit order differs between the two. With the default `(0, 1)` seeds the
//! forward sequence starts `0, 1, 1, 2, 3` and the reverse one `1, -1, 2, -3`.

mod cursor;
mod forward;
mod reverse;

pub use cursor::Cursor;
pub use forward::Fibonacci;
pub use reverse::ReverseFibonacci;

use num_bigint::BigInt;

/// Default zeroth term
pub const DEFAULT_FIB0: i64 = 0;

/// Default first term
pub const DEFAULT_FIB1: i64 = 1;

/// Forward Fibonacci sequence from the default seeds: `0, 1, 1, 2, 3, 5, ...`
pub fn fibonacci() -> Fibonacci {
    Fibonacci::default()
}

/// Forward Fibonacci sequence from explicit seeds
pub fn fibonacci_with(fib0: impl Into<BigInt>, fib1: impl Into<BigInt>) -> Fibonacci {
    Fibonacci::new(fib0, fib1)
}

/// Reverse Fibonacci sequence from the default seeds: `1, -1, 2, -3, 5, ...`
pub fn reverse_fibonacci() -> ReverseFibonacci {
    ReverseFibonacci::default()
}

/// Reverse Fibonacci sequence from explicit seeds
pub fn reverse_fibonacci_with(
    fib0: impl Into<BigInt>,
    fib1: impl Into<BigInt>,
) -> ReverseFibonacci {
    ReverseFibonacci::new(fib0, fib1)
}
