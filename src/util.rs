use rand::Rng;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use siphasher::sip::SipHasher;
use std::hash::{BuildHasher, Hasher};
use std::{cmp, fmt};

/// The default hash builder for the cuckoo filter.
///
/// Filters that are encoded and later decoded must hash with identically keyed builders, so the
/// `Default` implementation uses fixed keys rather than drawing them from entropy.
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy)]
pub struct SipHasherBuilder {
    k0: u64,
    k1: u64,
    hasher: SipHasher,
}

impl SipHasherBuilder {
    /// Constructs a new `SipHasherBuilder` that uses the thread-local RNG to seed itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::SipHasherBuilder;
    ///
    /// let hash_builder = SipHasherBuilder::from_entropy();
    /// ```
    pub fn from_entropy() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_seed(rng.gen(), rng.gen())
    }

    /// Constructs a new `SipHasherBuilder` that is seeded with the given keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::SipHasherBuilder;
    ///
    /// let hash_builder = SipHasherBuilder::from_seed(0, 0);
    /// ```
    pub fn from_seed(k0: u64, k1: u64) -> Self {
        SipHasherBuilder {
            k0,
            k1,
            hasher: SipHasher::new_with_keys(k0, k1),
        }
    }
}

impl Default for SipHasherBuilder {
    fn default() -> Self {
        Self::from_seed(0, 0)
    }
}

impl fmt::Debug for SipHasherBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipHasherBuilder")
            .field("k0", &self.k0)
            .field("k1", &self.k1)
            .finish()
    }
}

impl cmp::PartialEq for SipHasherBuilder {
    fn eq(&self, other: &SipHasherBuilder) -> bool {
        self.k0 == other.k0 && self.k1 == other.k1
    }
}

impl BuildHasher for SipHasherBuilder {
    type Hasher = SipHasher;

    #[inline]
    fn build_hasher(&self) -> SipHasher {
        self.hasher
    }
}

/// Hashes raw bytes without the length prefix `Hash for [u8]` would add, so the digest only
/// depends on the bytes themselves.
pub fn hash_bytes(hash_builder: &impl BuildHasher, bytes: &[u8]) -> u64 {
    let mut hasher = hash_builder.build_hasher();
    hasher.write(bytes);
    hasher.finish()
}

/// Hashes a fingerprint to derive its alternate bucket index.
pub fn hash_u16(hash_builder: &impl BuildHasher, value: u16) -> u64 {
    let mut hasher = hash_builder.build_hasher();
    hasher.write_u16(value);
    hasher.finish()
}
