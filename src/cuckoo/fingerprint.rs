use crate::cuckoo::Fingerprint;
use crate::util;
use std::hash::BuildHasher;

const FINGERPRINT_MODULUS: u64 = Fingerprint::max_value() as u64;

/// Returns the primary bucket index and the fingerprint of `data`.
///
/// The low bits of the hash select the bucket and the high 32 bits derive the fingerprint, which
/// is folded into `1..=Fingerprint::MAX` so that it never collides with an empty slot.
pub(super) fn index_and_fingerprint<B>(
    hash_builder: &B,
    data: &[u8],
    bucket_index_mask: usize,
) -> (usize, Fingerprint)
where
    B: BuildHasher,
{
    let hash = util::hash_bytes(hash_builder, data);
    let fingerprint = ((hash >> 32) % FINGERPRINT_MODULUS + 1) as Fingerprint;
    let index = hash as usize & bucket_index_mask;
    (index, fingerprint)
}

/// Returns the other candidate bucket of `fingerprint` given one of its candidate buckets.
///
/// `alt_index(fp, alt_index(fp, i, mask), mask) == i` for every `i <= mask`.
#[inline]
pub(super) fn alt_index<B>(
    hash_builder: &B,
    fingerprint: Fingerprint,
    index: usize,
    bucket_index_mask: usize,
) -> usize
where
    B: BuildHasher,
{
    (index ^ util::hash_u16(hash_builder, fingerprint) as usize) & bucket_index_mask
}
