use crate::hash::a5hash;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hasher};

/// `HashMap` keyed with a5hash.
pub type A5HashMap<K, V> = HashMap<K, V, A5BuildHasher>;

/// `HashSet` keyed with a5hash.
pub type A5HashSet<T> = HashSet<T, A5BuildHasher>;

/// Streaming adapter over the single-shot digest.
///
/// Every `write` hashes its bytes with the running state as seed, so a key
/// written in several pieces chains one a5hash call per piece.
#[derive(Clone, Copy, Debug)]
pub struct A5Hasher {
    state: u64,
}

impl A5Hasher {
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Default for A5Hasher {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl Hasher for A5Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = a5hash(bytes, self.state);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Builds [`A5Hasher`]s sharing one seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct A5BuildHasher {
    seed: u64,
}

impl A5BuildHasher {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BuildHasher for A5BuildHasher {
    type Hasher = A5Hasher;

    #[inline]
    fn build_hasher(&self) -> A5Hasher {
        A5Hasher::with_seed(self.seed)
    }
}
