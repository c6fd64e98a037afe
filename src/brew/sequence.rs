//! Seeded Park-Miller sequence
//!
//! `state = state * 16807 mod (2^31 - 1)`, output `(state - 1) / (2^31 - 2)`.
//! Every caller builds its own instance from a fingerprint, so there is no
//! shared generator anywhere in the generation pipeline.

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Deterministic stream of floats in `[0, 1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    state: u64,
}

impl Sequence {
    /// Start a sequence. Seeds congruent to 0 would lock the generator at
    /// zero, so they start from 1 instead.
    pub fn new(seed: u64) -> Self {
        let state = match seed % MODULUS {
            0 => 1,
            s => s,
        };
        Self { state }
    }

    /// Advance and return the next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Draw a uniform index in `0..len` (`floor(value * len)`)
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index into empty list");
        let i = (self.next_f64() * len as f64).floor() as usize;
        i.min(len.saturating_sub(1))
    }

    /// Pick an entry of a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }
}

impl Iterator for Sequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
