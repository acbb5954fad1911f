//! Recursive Functions
//!
//! This library provides stack-safe implementations of a few classic
//! recursively defined functions:
//!
//! 1. **Ackermann's function** (`ackermann` module)
//!    - Evaluated with an explicit, heap-resident work list
//!    - Innermost pending call reduced first, no native recursion
//!    - Arbitrary-precision results, so no overflow
//!
//! 2. **Fibonacci-style sequences** (`sequence` module)
//!    - Lazy, infinite iterators over arbitrary-precision integers
//!    - Forward: emit `fib0`, then step `(a, b) -> (b, a + b)`
//!    - Reverse: step `(a, b) -> (b, a - b)`, then emit the new `fib0`
//!    - Seeds default to `(0, 1)` and can be set per sequence
//!
//! # Example
//!
//! ```rust
//! use num_bigint::BigInt;
//! use recursive_functions::{ackermann, fibonacci, reverse_fibonacci_with};
//!
//! assert_eq!(ackermann(3, 3), BigInt::from(61));
//!
//! let fib: Vec<BigInt> = fibonacci().skip(10).take(2).collect();
//! assert_eq!(fib, vec![BigInt::from(55), BigInt::from(89)]);
//!
//! let rev: Vec<BigInt> = reverse_fibonacci_with(13, 8).take(4).collect();
//! assert_eq!(rev, vec![BigInt::from(8), BigInt::from(5), BigInt::from(3), BigInt::from(2)]);
//! ```
//!
//! # Logging
//!
//! Evaluation emits `tracing` events under the `recursive_functions` target
//! prefix. The library never installs a subscriber.

pub mod ackermann;
pub mod config;
pub mod error;
pub mod sequence;

pub use ackermann::{ackermann, AckermannEvaluator, Evaluation};
pub use config::{AckermannConfig, EvalConfig, SeedConfig};
pub use error::{ConfigError, Result};
pub use sequence::{
    fibonacci, fibonacci_with, reverse_fibonacci, reverse_fibonacci_with, Cursor, Fibonacci,
    ReverseFibonacci,
};
