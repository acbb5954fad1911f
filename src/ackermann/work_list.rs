//! Work List for Iterative Ackermann Evaluation
//!
//! The work list is a stack of integers growing rightward. The last two
//! entries are the arguments of the innermost pending call; every entry
//! before them is the first argument of an outer call still waiting for its
//! second argument.

use std::mem;

use num_bigint::BigInt;
use num_traits::{One, Signed};
use smallvec::{smallvec, SmallVec};

/// Number of entries stored inline before the list spills to the heap
pub const INLINE_SLOTS: usize = 16;

/// The rule applied to the innermost pending call `A(mm, nn)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// `mm < 1`: `A(0, nn) = nn + 1`, collapsing the call into its result
    Successor,
    /// `nn < 1`: `A(mm, 0) = A(mm - 1, 1)`
    Unwind,
    /// `A(mm, nn) = A(mm - 1, A(mm, nn - 1))`, deferring the outer call
    Defer,
}

/// Pending Ackermann calls, innermost last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkList {
    entries: SmallVec<[BigInt; INLINE_SLOTS]>,
}

impl WorkList {
    /// Start an evaluation of `A(m, n)`
    pub fn new(m: BigInt, n: BigInt) -> Self {
        Self {
            entries: smallvec![m, n],
        }
    }

    /// Start an evaluation with room for `capacity` entries before reallocating
    pub fn with_capacity(m: BigInt, n: BigInt, capacity: usize) -> Self {
        let mut entries = SmallVec::with_capacity(capacity.max(2));
        entries.push(m);
        entries.push(n);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the list holds at least the final result
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once every pending call has been reduced to a single value
    pub fn is_collapsed(&self) -> bool {
        self.entries.len() <= 1
    }

    /// The arguments `(mm, nn)` of the innermost pending call
    pub(crate) fn innermost(&self) -> Option<(&BigInt, &BigInt)> {
        match self.entries.as_slice() {
            [.., mm, nn] => Some((mm, nn)),
            _ => None,
        }
    }

    /// Decide which rule applies to the innermost call, or `None` when collapsed
    pub(crate) fn next_reduction(&self) -> Option<Reduction> {
        let (mm, nn) = self.innermost()?;
        let reduction = if !mm.is_positive() {
            Reduction::Successor
        } else if !nn.is_positive() {
            Reduction::Unwind
        } else {
            Reduction::Defer
        };
        Some(reduction)
    }

    /// Apply one reduction to the innermost call.
    ///
    /// The rule must come from [`next_reduction`](Self::next_reduction) on the
    /// current list; outside this module only [`step`](Self::step) mutates.
    /// Applying a rule to a collapsed list does nothing.
    pub(crate) fn apply(&mut self, reduction: Reduction) {
        let len = self.entries.len();
        if len < 2 {
            return;
        }

        match reduction {
            Reduction::Successor => {
                if let Some(nn) = self.entries.pop() {
                    self.entries[len - 2] = nn + 1u32;
                }
            }
            Reduction::Unwind => {
                self.entries[len - 2] -= 1u32;
                self.entries[len - 1] = BigInt::one();
            }
            Reduction::Defer => {
                // [.., mm, nn] -> [.., mm - 1, mm, nn - 1]
                let mm = self.entries[len - 2].clone();
                let nn = mem::replace(&mut self.entries[len - 1], mm);
                self.entries[len - 2] -= 1u32;
                self.entries.push(nn - 1u32);
            }
        }
    }

    /// Apply whichever rule the innermost call needs.
    ///
    /// Returns the rule applied, or `None` once the list has collapsed.
    pub fn step(&mut self) -> Option<Reduction> {
        let reduction = self.next_reduction()?;
        self.apply(reduction);
        Some(reduction)
    }

    /// Whether the pending calls have spilled out of inline storage
    pub(crate) fn spilled(&self) -> bool {
        self.entries.spilled()
    }

    /// The final value once collapsed, or `None` while calls are pending
    pub fn into_result(self) -> Option<BigInt> {
        if self.entries.len() == 1 {
            self.entries.into_iter().next()
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[BigInt] {
        &self.entries
    }
}
