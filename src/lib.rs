//! a5hash: multiply-mix hash functions and the a5rand PRNG.
//!
//! Every function here is built on one transition, the full 64x64 -> 128-bit
//! product of two state words split back into two words. There are no
//! accumulators; the state is just the product halves.
//!
//! - [`a5hash`]: 64-bit digest tuned for short hash-map / bloom-filter keys
//! - [`a5hash32`]: 32-bit digest using only 32x32 -> 64 multiplies
//! - [`a5hash128`]: 128-bit digest
//! - [`a5rand`] / [`A5Rand`]: self-starting PRNG with a 2^64 period
//!
//! Digests are not cryptographic, and they depend on host byte order.
//!
//! ```
//! let h = a5hash::a5hash(b"7 chars", 0);
//! if cfg!(target_endian = "little") {
//!     assert_eq!(h, 0xe49a0cc72256bbac);
//! }
//!
//! let (mut s1, mut s2) = (0, 0);
//! assert_eq!(a5hash::a5rand(&mut s1, &mut s2), 0x2492492492492491);
//! ```

mod hash;
mod hash128;
mod hash32;
mod hasher;
mod mix;
pub mod quality;
mod rand;

use rayon::prelude::*;

pub use hash::{a5hash, hash64};
pub use hash128::{a5hash128, a5hash128_low};
pub use hash32::a5hash32;
pub use hasher::{A5BuildHasher, A5HashMap, A5HashSet, A5Hasher};
pub use mix::{umul128, umul64};
pub use rand::{a5rand, A5Rand, WARMUP_ROUNDS};

/// Algorithm revision whose digests this crate reproduces.
pub const VERSION: &str = "5.14";

/// Digest many keys with one seed, in parallel.
///
/// Output order matches `keys`.
pub fn hash_many<K>(keys: &[K], seed: u64) -> Vec<u64>
where
    K: AsRef<[u8]> + Sync,
{
    keys.par_iter().map(|k| a5hash(k.as_ref(), seed)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_many_matches_serial() {
        let keys: Vec<String> = (0..5000).map(|i| format!("user:{i}")).collect();
        let hashes = hash_many(&keys, 77);
        assert_eq!(hashes.len(), keys.len());
        for (k, h) in keys.iter().zip(&hashes) {
            assert_eq!(*h, a5hash(k.as_bytes(), 77));
        }
    }

    #[test]
    fn test_hash_many_empty() {
        let keys: [&[u8]; 0] = [];
        assert!(hash_many(&keys, 0).is_empty());
    }

    #[test]
    fn test_no_collisions_on_sequential_keys() {
        let keys: Vec<[u8; 8]> = (0u64..200_000).map(|i| i.to_le_bytes()).collect();
        let mut hashes = hash_many(&keys, 0);
        hashes.sort_unstable();
        hashes.dedup();
        assert_eq!(hashes.len(), keys.len());
    }
}
