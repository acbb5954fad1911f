//! Evaluation Configuration
//!
//! Settings are read from TOML. Every field is optional and falls back to its
//! default, and unknown fields are rejected so typos surface as errors. The
//! values below are the defaults.
//!
//! ```toml
//! [ackermann]
//! initial_capacity = 16
//! progress_interval = 0
//!
//! [seeds]
//! fib0 = 0
//! fib1 = 1
//! ```
//!
//! Configuration never changes computed values. It only sizes the Ackermann
//! work list up front, sets how often progress is traced, and picks the seeds
//! for sequences built through [`EvalConfig::fibonacci`] and
//! [`EvalConfig::reverse_fibonacci`].

use serde::Deserialize;

use crate::ackermann::{AckermannEvaluator, INLINE_SLOTS};
use crate::error::{ConfigError, Result};
use crate::sequence::{Fibonacci, ReverseFibonacci, DEFAULT_FIB0, DEFAULT_FIB1};

/// Upper bound on the work-list slots reserved before evaluation starts
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Top-level evaluation config
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// The `[ackermann]` section
    pub ackermann: AckermannConfig,

    /// The `[seeds]` section
    pub seeds: SeedConfig,
}

/// Ackermann evaluator settings (the `[ackermann]` section)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AckermannConfig {
    /// Work-list slots reserved before evaluation starts
    pub initial_capacity: usize,

    /// Emit a trace event every this many reductions (0 disables)
    pub progress_interval: u64,
}

impl Default for AckermannConfig {
    fn default() -> Self {
        Self {
            initial_capacity: INLINE_SLOTS,
            progress_interval: 0,
        }
    }
}

/// Seeds for config-built sequences (the `[seeds]` section)
///
/// TOML integers are 64-bit, so configured seeds are limited to `i64`. Build a
/// sequence with [`Fibonacci::new`] or [`ReverseFibonacci::new`] directly for
/// larger seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub fib0: i64,
    pub fib1: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fib0: DEFAULT_FIB0,
            fib1: DEFAULT_FIB1,
        }
    }
}

impl EvalConfig {
    /// Parse and validate a TOML config
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the TOML types alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.ackermann.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::InvalidValue {
                field: "ackermann.initial_capacity",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.ackermann.initial_capacity, MAX_INITIAL_CAPACITY
                ),
            });
        }
        Ok(())
    }

    pub fn evaluator(&self) -> AckermannEvaluator {
        AckermannEvaluator::new(self.ackermann.clone())
    }

    /// Forward sequence starting from the configured seeds
    pub fn fibonacci(&self) -> Fibonacci {
        Fibonacci::new(self.seeds.fib0, self.seeds.fib1)
    }

    /// Reverse sequence starting from the configured seeds
    pub fn reverse_fibonacci(&self) -> ReverseFibonacci {
        ReverseFibonacci::new(self.seeds.fib0, self.seeds.fib1)
    }
}
