/*
[INPUT]:  Wall-clock time
[OUTPUT]: Strictly increasing nonces for signed requests
[POS]:    Auth layer - replay protection shared by all clones of a client
[UPDATE]: When nonce resolution or seeding changes
*/

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Nonce value placed in every signed payload
pub type Nonce = u64;

/// Nonce ticks per second (10 µs resolution)
pub const NONCE_TICKS_PER_SECOND: u64 = 100_000;

/// Lock-free nonce source.
///
/// Each value is `max(now, last + 1)`, so nonces track the clock but never
/// repeat or go backwards, even under a stalled clock or concurrent draws.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Draw the next nonce from the current time
    pub fn next_nonce(&self) -> Nonce {
        self.next_at(clock_ticks())
    }

    /// Last nonce handed out, 0 if none yet
    pub fn last(&self) -> Nonce {
        self.last.load(Ordering::Acquire)
    }

    pub(crate) fn next_at(&self, now: Nonce) -> Nonce {
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(current.saturating_add(1));
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }
}

fn clock_ticks() -> Nonce {
    let micros = Utc::now().timestamp_micros();
    u64::try_from(micros / 10).unwrap_or(0)
}
