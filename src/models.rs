// src/models.rs
use serde::{Deserialize, Serialize};

// Characters eligible for sampling, in order: lowercase, uppercase, digits,
// then the 32 ASCII punctuation characters. 94 characters total.
const PRINTABLE: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                           ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                           0123456789\
                           !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The fixed, ordered character set passwords are sampled from.
#[derive(Debug, Clone, Copy)]
pub struct Alphabet {
    chars: &'static [u8],
}

impl Alphabet {
    /// The standard printable-ASCII alphabet: a-z, A-Z, 0-9, punctuation.
    pub const fn standard() -> Self {
        Alphabet { chars: PRINTABLE }
    }

    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`. Callers draw indices from `0..len()`;
    /// anything outside that range panics.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index] as char
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::standard()
    }
}

// Sizing figures for one run, computed once from the requested length or
// entropy and the alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSizing {
    /// Password length in characters.
    pub length: usize,
    /// Approximate total entropy in bits.
    pub entropy_bits: u32,
    /// Approximate entropy carried by each character.
    pub bits_per_char: u32,
}

// Machine-readable summary of a generation run, emitted by --json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub password: String,
    pub length: usize,
    pub entropy_bits: u32,
    pub bits_per_char: u32,
    pub alphabet_size: usize,
}
