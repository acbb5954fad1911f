//! Stack-safe Ackermann Evaluation
//!
//! This module evaluates Ackermann's function using an explicit work list
//! instead of recursive function calls. The list plays the role of the call
//! stack but lives on the heap, so deep evaluations are bounded by memory
//! rather than by the thread's stack size.

mod engine;
mod work_list;

pub use engine::{AckermannEvaluator, Evaluation};
pub use work_list::{Reduction, WorkList, INLINE_SLOTS};

use num_bigint::BigInt;

/// Ackermann's function, evaluated innermost call first.
///
/// Inputs are not validated. Negative arguments follow the same reduction
/// rules as non-negative ones: `m < 1` behaves like zero in the first slot,
/// and `n < 1` behaves like zero in the second.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigInt;
/// use recursive_functions::ackermann;
///
/// assert_eq!(ackermann(2, 3), BigInt::from(9));
/// assert_eq!(ackermann(3, 3), BigInt::from(61));
/// ```
pub fn ackermann(m: impl Into<BigInt>, n: impl Into<BigInt>) -> BigInt {
    AckermannEvaluator::default().evaluate(m, n)
}
