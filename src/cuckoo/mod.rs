//! Space-efficient probabilistic data structure to test for membership in a set with the ability
//! to remove items.

mod bucket;
mod codec;
mod cuckoo_filter;
mod fingerprint;

/// Number of fingerprint slots in each bucket.
pub const BUCKET_SIZE: usize = 4;
/// Width of a fingerprint in bits.
pub const FINGERPRINT_BIT_COUNT: usize = 16;
/// Maximum number of fingerprint displacements before an insertion gives up.
pub const MAX_KICKS: usize = 500;
/// Load factor above which construction doubles the number of buckets.
pub const MAX_LOAD_FACTOR: f64 = 0.96;

const FINGERPRINT_BYTE_COUNT: usize = FINGERPRINT_BIT_COUNT / 8;

/// A short hash of an item. Zero is reserved for empty slots.
pub type Fingerprint = u16;

pub use self::codec::DecodeError;
pub use self::cuckoo_filter::CuckooFilter;
