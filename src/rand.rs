use crate::mix::{umul128, VAL01, VAL10};
use rand_core::{impls, Error, RngCore, SeedableRng};

/// Outputs to discard after seeding from low-entropy values.
pub const WARMUP_ROUNDS: usize = 4;

/// a5rand step: advance the caller-owned cells and return the next value.
///
/// Any starting pair works, including `(0, 0)`; the stream self-starts
/// within [`WARMUP_ROUNDS`] calls. The cells themselves should not be used
/// as random output. Period 2^64.
#[inline(always)]
pub fn a5rand(seed1: &mut u64, seed2: &mut u64) -> u64 {
    let (s1, s2) = umul128(seed1.wrapping_add(VAL01), seed2.wrapping_add(VAL10));

    *seed1 = s1;
    *seed2 = s2;

    s1 ^ s2
}

/// a5rand generator owning its two state cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct A5Rand {
    s1: u64,
    s2: u64,
}

impl A5Rand {
    /// Start from two high-quality seeds; output is usable immediately.
    pub fn new(seed1: u64, seed2: u64) -> Self {
        Self { s1: seed1, s2: seed2 }
    }

    /// Start from arbitrary (possibly low-entropy) seeds and run the warm-up rounds.
    pub fn with_warmup(seed1: u64, seed2: u64) -> Self {
        let mut rng = Self::new(seed1, seed2);
        for _ in 0..WARMUP_ROUNDS {
            rng.next_u64();
        }
        rng
    }

    /// Current `(s1, s2)` cells.
    pub fn state(&self) -> (u64, u64) {
        (self.s1, self.s2)
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        a5rand(&mut self.s1, &mut self.s2)
    }

    /// Uniform in [0, 1) from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / 9007199254740992.0
    }

    /// Uniform in [0, end) by taking the high half of a widening multiply.
    #[inline]
    pub fn gen_range(&mut self, end: u64) -> u64 {
        assert!(end > 0, "gen_range: empty range");
        umul128(self.next_u64(), end).1
    }
}

impl RngCore for A5Rand {
    fn next_u32(&mut self) -> u32 {
        (A5Rand::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        A5Rand::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for A5Rand {
    /// Two little-endian `u64` cells.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut s1 = [0u8; 8];
        let mut s2 = [0u8; 8];
        s1.copy_from_slice(&seed[..8]);
        s2.copy_from_slice(&seed[8..]);
        Self::new(u64::from_le_bytes(s1), u64::from_le_bytes(s2))
    }
}
