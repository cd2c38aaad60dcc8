// FNV-1a seed hash feeding ChaCha8

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::settings::Seed;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

// 64-bit FNV-1a hash of `text`.
pub fn hash_seed(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

// Numeric seeds hash through their decimal text
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: &Seed) -> Self {
        Self::from_text(&seed.to_string())
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(hash_seed(text)),
        }
    }

    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}
