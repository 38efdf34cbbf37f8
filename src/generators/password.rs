// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};

use crate::models::Alphabet;

use super::source::SamplingSource;

/// Samples passwords from an alphabet using an injected randomness source.
pub struct PasswordGenerator {
    source: SamplingSource,
}

impl PasswordGenerator {
    /// Secure generator by default; a seed switches to the deterministic
    /// source (see [`SamplingSource`] for why that mode is unsafe).
    pub fn new(seed: Option<&str>) -> Self {
        let source = match seed {
            Some(seed) => SamplingSource::seeded(seed),
            None => SamplingSource::secure(),
        };
        PasswordGenerator { source }
    }

    pub fn is_deterministic(&self) -> bool {
        self.source.is_deterministic()
    }

    /// Draws `length` characters independently and uniformly from `alphabet`.
    ///
    /// Repeats are allowed and no character class is guaranteed to appear;
    /// every index is an unbiased draw over the whole alphabet.
    pub fn generate(&mut self, alphabet: &Alphabet, length: usize) -> String {
        let dist = Uniform::from(0..alphabet.len());

        (0..length)
            .map(|_| alphabet.char_at(dist.sample(&mut self.source)))
            .collect()
    }
}
