//! Energy estimation.
//!
//! Energy drives animation intensity on the client. The deterministic part
//! grows with word count and with `!`/`?` emphasis; a small random jitter is
//! then added so repeated phrases do not render identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Words needed to reach full base energy
const FULL_ENERGY_WORDS: f64 = 20.0;
/// Energy added per unit of emphasis
const EMPHASIS_WEIGHT: f64 = 0.2;
/// A `?` counts as half an `!`
const QUESTION_WEIGHT: f64 = 0.5;
/// Jitter is drawn from [-JITTER_AMPLITUDE, JITTER_AMPLITUDE]
pub const JITTER_AMPLITUDE: f64 = 0.1;
pub const MIN_ENERGY: f64 = 0.1;
pub const MAX_ENERGY: f64 = 1.0;

/// Source of the random energy offset.
///
/// Implementations return a value in `[-amplitude, amplitude]`.
pub trait EnergyJitter: Send + Sync {
    fn sample(&self, amplitude: f64) -> f64;
}

/// Draws from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl EnergyJitter for ThreadRngJitter {
    fn sample(&self, amplitude: f64) -> f64 {
        rand::thread_rng().gen_range(-amplitude..=amplitude)
    }
}

/// Reproducible jitter from a fixed seed
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl EnergyJitter for SeededJitter {
    fn sample(&self, amplitude: f64) -> f64 {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(-amplitude..=amplitude)
    }
}

/// Always returns the same offset, clamped to the amplitude
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl EnergyJitter for FixedJitter {
    fn sample(&self, amplitude: f64) -> f64 {
        self.0.clamp(-amplitude, amplitude)
    }
}

/// Emphasis bonus: one per `!`, half per `?`
pub fn emphasis(text: &str) -> f64 {
    text.chars().fold(0.0, |acc, c| match c {
        '!' => acc + 1.0,
        '?' => acc + QUESTION_WEIGHT,
        _ => acc,
    })
}

/// Deterministic energy before jitter, in [0.0, 1.0]
pub fn base_energy(word_count: usize, text: &str) -> f64 {
    let length = (word_count as f64 / FULL_ENERGY_WORDS).min(MAX_ENERGY);
    (length + EMPHASIS_WEIGHT * emphasis(text)).min(MAX_ENERGY)
}

/// Apply jitter to a base value and clamp into [`MIN_ENERGY`, `MAX_ENERGY`]
pub fn jittered(base: f64, jitter: &dyn EnergyJitter) -> f64 {
    (base + jitter.sample(JITTER_AMPLITUDE)).clamp(MIN_ENERGY, MAX_ENERGY)
}
