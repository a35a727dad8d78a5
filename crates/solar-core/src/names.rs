//! Name sources used when a body is created without an explicit name.

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Number of random lowercase letters following the `@` marker.
pub const GENERATED_NAME_LEN: usize = 7;

/// Supplies names for bodies constructed without one.
pub trait NameSource {
    /// Returns the next name. Implementations never return the same
    /// value twice in a row unless they are deliberately constant.
    fn next_name(&mut self) -> String;
}

/// Seeded generator producing names of the form `@abcdefg`.
///
/// The master seed is mixed with a substream identifier using SipHash-1-3
/// with zero keys, so two substreams of the same seed never share names
/// and every run with the same `(seed, substream)` pair is reproducible.
#[derive(Debug, Clone)]
pub struct RandomNames {
    rng: StdRng,
}

impl RandomNames {
    /// Creates a generator seeded directly from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator for the given substream of a master seed.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }
}

impl NameSource for RandomNames {
    fn next_name(&mut self) -> String {
        let letters = Uniform::new_inclusive(b'a', b'z');
        let mut name = String::with_capacity(GENERATED_NAME_LEN + 1);
        name.push('@');
        for _ in 0..GENERATED_NAME_LEN {
            name.push(char::from(self.rng.sample(letters)));
        }
        name
    }
}

/// Deterministic labels `prefix-0`, `prefix-1`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialNames {
    prefix: String,
    next: usize,
}

impl SequentialNames {
    /// Starts a new sequence at index zero.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl NameSource for SequentialNames {
    fn next_name(&mut self) -> String {
        let name = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        name
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
