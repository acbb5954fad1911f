//! Ackermann Engine - Iterative Evaluation
//!
//! This module contains the evaluation loop that drives a [`WorkList`] until it
//! collapses to a single value. Each iteration applies exactly one reduction to
//! the innermost pending call, so no native recursion takes place.

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::config::AckermannConfig;

use super::work_list::WorkList;

/// Result of an evaluation together with the work it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Value of `A(m, n)`
    pub value: BigInt,
    /// Number of reductions applied
    pub steps: u64,
    /// Largest number of entries the work list held
    pub peak_depth: usize,
}

/// Evaluates Ackermann's function with an explicit work list.
///
/// The evaluator holds only settings; every call owns its own work list, so a
/// single evaluator can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct AckermannEvaluator {
    config: AckermannConfig,
}

impl AckermannEvaluator {
    pub fn new(config: AckermannConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AckermannConfig {
        &self.config
    }

    /// Compute `A(m, n)`
    pub fn evaluate(&self, m: impl Into<BigInt>, n: impl Into<BigInt>) -> BigInt {
        self.evaluate_with_stats(m, n).value
    }

    /// Compute `A(m, n)` and report the reductions and peak depth it needed
    pub fn evaluate_with_stats(&self, m: impl Into<BigInt>, n: impl Into<BigInt>) -> Evaluation {
        let (m, n) = (m.into(), n.into());
        debug!(target: "recursive_functions::ackermann::evaluate", %m, %n, "starting evaluation");

        let mut work = WorkList::with_capacity(m, n, self.config.initial_capacity);
        let progress_interval = self.config.progress_interval;
        let mut steps: u64 = 0;
        let mut peak_depth = work.len();

        while let Some(reduction) = work.step() {
            steps += 1;
            peak_depth = peak_depth.max(work.len());

            if progress_interval > 0 && steps % progress_interval == 0 {
                trace!(
                    target: "recursive_functions::ackermann::evaluate",
                    steps,
                    depth = work.len(),
                    ?reduction,
                    "evaluation progress"
                );
            }
        }

        // A collapsed list always holds exactly the result
        let value = work.into_result().unwrap_or_default();
        debug!(
            target: "recursive_functions::ackermann::evaluate",
            bits = value.bits(),
            steps,
            peak_depth,
            "evaluation finished"
        );

        Evaluation {
            value,
            steps,
            peak_depth,
        }
    }
}
