use crate::rand::A5Rand;
use rand_core::RngCore;
use rayon::prelude::*;

/// Single-bit avalanche statistics over a random sample of messages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvalancheReport {
    /// Number of (message, flipped bit) pairs evaluated
    pub trials: u64,
    /// Average number of output bits that changed per flip
    pub mean_flipped: f64,
    pub min_flipped: u32,
    pub max_flipped: u32,
}

impl AvalancheReport {
    /// Distance of the mean flip rate from one half, for an `out_bits` wide digest.
    pub fn bias(&self, out_bits: u32) -> f64 {
        (self.mean_flipped / out_bits as f64 - 0.5).abs()
    }
}

#[derive(Clone, Copy)]
struct Tally {
    trials: u64,
    flipped: u64,
    min: u32,
    max: u32,
}

impl Tally {
    const EMPTY: Tally = Tally { trials: 0, flipped: 0, min: u32::MAX, max: 0 };

    fn add(mut self, flipped: u32) -> Self {
        self.trials += 1;
        self.flipped += flipped as u64;
        self.min = self.min.min(flipped);
        self.max = self.max.max(flipped);
        self
    }

    fn merge(self, other: Tally) -> Tally {
        Tally {
            trials: self.trials + other.trials,
            flipped: self.flipped + other.flipped,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Flip every input bit of `samples` random `len`-byte messages and count
/// how many output bits of `f` change.
///
/// Messages are drawn from [`A5Rand`] streams keyed by `seed` and the sample
/// index, so a report is reproducible. Samples run in parallel.
pub fn avalanche<F>(len: usize, samples: usize, seed: u64, f: F) -> AvalancheReport
where
    F: Fn(&[u8]) -> u128 + Sync,
{
    let tally = (0..samples)
        .into_par_iter()
        .map(|i| {
            let mut rng = A5Rand::with_warmup(seed, i as u64);
            let mut msg = vec![0u8; len];
            rng.fill_bytes(&mut msg);

            let base = f(&msg);
            let mut tally = Tally::EMPTY;
            for bit in 0..len * 8 {
                msg[bit / 8] ^= 1u8 << (bit % 8);
                tally = tally.add((base ^ f(&msg)).count_ones());
                msg[bit / 8] ^= 1u8 << (bit % 8);
            }
            tally
        })
        .reduce(|| Tally::EMPTY, Tally::merge);

    if tally.trials == 0 {
        return AvalancheReport { trials: 0, mean_flipped: 0.0, min_flipped: 0, max_flipped: 0 };
    }

    AvalancheReport {
        trials: tally.trials,
        mean_flipped: tally.flipped as f64 / tally.trials as f64,
        min_flipped: tally.min,
        max_flipped: tally.max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{a5hash, a5hash128, a5hash32};

    const LENGTHS: [usize; 9] = [1, 3, 4, 8, 15, 16, 17, 33, 64];

    #[test]
    fn test_a5hash_avalanche() {
        for len in LENGTHS {
            let r = avalanche(len, 256, 1, |m| a5hash(m, 0) as u128);
            assert_eq!(r.trials, 256 * len as u64 * 8);
            assert!(r.bias(64) < 1.0 / 64.0, "len {len}: {r:?}");
            assert!(r.min_flipped > 0, "len {len}: {r:?}");
            assert!(r.max_flipped <= 64);
        }
    }

    #[test]
    fn test_a5hash32_avalanche() {
        for len in LENGTHS {
            let r = avalanche(len, 256, 2, |m| a5hash32(m, 0) as u128);
            assert!(r.bias(32) < 0.75 / 32.0, "len {len}: {r:?}");
        }
    }

    #[test]
    fn test_a5hash128_avalanche() {
        for len in [3, 16, 32, 48, 49, 100] {
            let r = avalanche(len, 128, 3, |m| a5hash128(m, 0));
            assert!(r.bias(128) < 1.5 / 128.0, "len {len}: {r:?}");
        }
    }

    #[test]
    fn test_seed_avalanche() {
        // Flipping a seed bit should scramble the digest as well as a data bit.
        let r = avalanche(8, 512, 4, |m| {
            let mut seed = [0u8; 8];
            seed.copy_from_slice(m);
            a5hash(b"fixed message", u64::from_ne_bytes(seed)) as u128
        });
        assert!(r.bias(64) < 1.0 / 64.0, "{r:?}");
    }

    #[test]
    fn test_reproducible_and_empty() {
        let f = |m: &[u8]| a5hash(m, 9) as u128;
        assert_eq!(avalanche(12, 32, 5, f), avalanche(12, 32, 5, f));
        assert_eq!(avalanche(0, 32, 5, f).trials, 0);
        assert_eq!(avalanche(12, 0, 5, f).trials, 0);
    }
}
