//! Shared helpers for integration tests
//!
//! - Installing a test-writer tracing subscriber once per test binary
//! - Capturing the events emitted by a closure as formatted text
//! - Building `BigInt` vectors from small literals
//! - Collecting a bounded prefix of an infinite sequence

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, Once};

use itertools::Itertools;
use num_bigint::BigInt;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows up on failure
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Writer handle appending to a buffer shared with the test
#[derive(Clone)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a TRACE-level subscriber scoped to this thread and return
/// everything it logged
pub fn capture_events<F: FnOnce()>(f: F) -> String {
    let buffer = SharedBuffer(Arc::new(Mutex::new(Vec::new())));
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).expect("log output is UTF-8")
}

pub fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().copied().map(BigInt::from).collect()
}

/// First `count` values of a sequence
pub fn prefix<I>(sequence: I, count: usize) -> Vec<BigInt>
where
    I: Iterator<Item = BigInt>,
{
    sequence.take(count).collect_vec()
}

/// `2^exp` as a `BigInt`
pub fn pow2(exp: u32) -> BigInt {
    BigInt::from(1) << exp
}
