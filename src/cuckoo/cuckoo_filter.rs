use crate::cuckoo::bucket::Bucket;
use crate::cuckoo::fingerprint;
use crate::cuckoo::{Fingerprint, BUCKET_SIZE, FINGERPRINT_BIT_COUNT, MAX_KICKS, MAX_LOAD_FACTOR};
use crate::SipHasherBuilder;
use parking_lot::RwLock;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::hash::BuildHasher;
use tracing::{debug, trace};

/// A space-efficient probabilistic data structure to test for membership in a set. Cuckoo filters
/// also provide the flexibility to remove items.
///
/// A cuckoo filter is based on cuckoo hashing and is essentially a cuckoo hash table storing
/// each keys' fingerprint. Every fingerprint lives in one of two candidate buckets; when both are
/// full, resident fingerprints are kicked to their own alternate bucket until a free slot turns
/// up or [`MAX_KICKS`](crate::cuckoo::MAX_KICKS) displacements have been made.
///
/// All operations take `&self`. A single reader/writer lock guards the buckets, so the filter can
/// be shared between threads through an `Arc`.
///
/// # Examples
///
/// ```
/// use cuckoofilter::cuckoo::CuckooFilter;
///
/// let filter = CuckooFilter::new(100);
///
/// assert!(!filter.contains(b"foo"));
/// assert!(filter.insert(b"foo"));
/// assert!(filter.contains(b"foo"));
///
/// assert!(filter.remove(b"foo"));
/// assert!(!filter.contains(b"foo"));
///
/// assert_eq!(filter.len(), 0);
/// assert_eq!(filter.capacity(), 128);
/// assert_eq!(filter.bucket_len(), 32);
/// ```
#[derive(Debug)]
pub struct CuckooFilter<B = SipHasherBuilder, R = XorShiftRng> {
    pub(super) inner: RwLock<Inner<R>>,
    pub(super) bucket_index_mask: usize,
    pub(super) hash_builder: B,
}

/// State guarded by the filter's lock.
#[derive(Debug)]
pub(super) struct Inner<R> {
    pub buckets: Vec<Bucket>,
    pub count: usize,
    pub rng: R,
}

impl<R> Inner<R> {
    // Callers must already hold the write guard.
    fn insert_unguarded(&mut self, fingerprint: Fingerprint, index: usize) -> bool {
        if self.buckets[index].insert(fingerprint) {
            self.count += 1;
            return true;
        }
        false
    }
}

impl CuckooFilter {
    /// Constructs a new, empty `CuckooFilter` suitable for `item_count` items. The filter hashes
    /// with [`SipHasherBuilder::default`], so filters built here and filters rebuilt by
    /// [`CuckooFilter::decode`] agree on where every item lives.
    ///
    /// The number of buckets is `item_count / 4` rounded up to the next power of two, doubled if
    /// the resulting load would exceed 96%. Inserting more than `item_count` items slows
    /// insertion down and eventually makes it fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(1000);
    /// assert_eq!(filter.bucket_len(), 512);
    /// ```
    pub fn new(item_count: usize) -> Self {
        Self::with_hasher(item_count, SipHasherBuilder::default())
    }
}

impl<B> CuckooFilter<B>
where
    B: BuildHasher,
{
    /// Constructs a new, empty `CuckooFilter` suitable for `item_count` items that derives
    /// fingerprints and bucket indexes with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    /// use cuckoofilter::SipHasherBuilder;
    ///
    /// let filter = CuckooFilter::with_hasher(100, SipHasherBuilder::from_seed(0, 0));
    /// ```
    pub fn with_hasher(item_count: usize, hash_builder: B) -> Self {
        Self::with_hasher_and_rng(item_count, hash_builder, XorShiftRng::from_entropy())
    }
}

impl<B, R> CuckooFilter<B, R>
where
    B: BuildHasher,
    R: Rng,
{
    /// Constructs a new, empty `CuckooFilter` suitable for `item_count` items, hashing with
    /// `hash_builder` and drawing kickout choices from `rng`. A seeded `rng` makes the
    /// displacement sequence reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    /// use cuckoofilter::SipHasherBuilder;
    /// use rand::SeedableRng;
    /// use rand_xorshift::XorShiftRng;
    ///
    /// let filter = CuckooFilter::with_hasher_and_rng(
    ///     100,
    ///     SipHasherBuilder::default(),
    ///     XorShiftRng::seed_from_u64(0),
    /// );
    /// ```
    pub fn with_hasher_and_rng(item_count: usize, hash_builder: B, rng: R) -> Self {
        let bucket_len = Self::get_bucket_len(item_count);
        Self::from_buckets(vec![Bucket::default(); bucket_len], hash_builder, rng)
    }

    pub(super) fn from_buckets(buckets: Vec<Bucket>, hash_builder: B, rng: R) -> Self {
        let count = buckets.iter().map(Bucket::occupied_len).sum();
        let bucket_index_mask = buckets.len() - 1;
        CuckooFilter {
            inner: RwLock::new(Inner {
                buckets,
                count,
                rng,
            }),
            bucket_index_mask,
            hash_builder,
        }
    }

    fn get_bucket_len(item_count: usize) -> usize {
        let mut bucket_len = (item_count / BUCKET_SIZE).next_power_of_two();
        if item_count as f64 / (bucket_len * BUCKET_SIZE) as f64 > MAX_LOAD_FACTOR {
            bucket_len <<= 1;
        }
        bucket_len
    }

    /// Checks if `data` is possibly in the cuckoo filter.
    ///
    /// The two candidate buckets are checked under two separate read acquisitions of the lock.
    /// A concurrent insertion can move the fingerprint from the second bucket into the first
    /// in between, in which case this returns `false` for an item that is present. Without
    /// concurrent mutation there are no false negatives.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// filter.insert(b"foo");
    /// assert!(filter.contains(b"foo"));
    /// ```
    pub fn contains(&self, data: &[u8]) -> bool {
        let (index_1, fingerprint) =
            fingerprint::index_and_fingerprint(&self.hash_builder, data, self.bucket_index_mask);

        {
            let inner = self.inner.read();
            if inner.buckets[index_1].contains(fingerprint) {
                return true;
            }
        }

        let index_2 = self.get_alt_index(fingerprint, index_1);
        let inner = self.inner.read();
        inner.buckets[index_2].contains(fingerprint)
    }

    /// Inserts `data` into the cuckoo filter. Returns `false` if no slot could be found within
    /// [`MAX_KICKS`](crate::cuckoo::MAX_KICKS) displacements.
    ///
    /// A failed insertion stores the new fingerprint but drops whichever fingerprint was being
    /// displaced last, so afterwards the filter may report false negatives and removals are not
    /// guaranteed to work. Use a larger filter to keep insertions from failing.
    ///
    /// Inserting the same data twice stores its fingerprint twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    /// assert!(filter.insert(b"foo"));
    /// ```
    pub fn insert(&self, data: &[u8]) -> bool {
        let (index_1, fingerprint) =
            fingerprint::index_and_fingerprint(&self.hash_builder, data, self.bucket_index_mask);
        if self.insert_fingerprint(fingerprint, index_1) {
            return true;
        }

        let index_2 = self.get_alt_index(fingerprint, index_1);
        if self.insert_fingerprint(fingerprint, index_2) {
            return true;
        }

        self.reinsert(fingerprint, index_1, index_2)
    }

    fn insert_fingerprint(&self, fingerprint: Fingerprint, index: usize) -> bool {
        self.inner.write().insert_unguarded(fingerprint, index)
    }

    fn reinsert(&self, mut fingerprint: Fingerprint, index_1: usize, index_2: usize) -> bool {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        // have to kick out an entry
        let mut index = if inner.rng.gen::<bool>() {
            index_1
        } else {
            index_2
        };
        trace!(index_1, index_2, start = index, "starting kickout chain");

        for _ in 0..MAX_KICKS {
            let slot_index = inner.rng.gen_range(0, BUCKET_SIZE);
            fingerprint = inner.buckets[index].swap(slot_index, fingerprint);
            index = self.get_alt_index(fingerprint, index);
            if inner.insert_unguarded(fingerprint, index) {
                return true;
            }
        }

        debug!(
            max_kicks = MAX_KICKS,
            count = inner.count,
            bucket_len = inner.buckets.len(),
            "kickout chain exhausted, dropping displaced fingerprint"
        );
        false
    }

    /// Removes `data` from the cuckoo filter. Returns `true` if a matching fingerprint was found
    /// in either candidate bucket and cleared.
    ///
    /// Only fingerprints are stored, so removing data that was never inserted may clear the
    /// fingerprint of a different item that happens to collide with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// filter.insert(b"foo");
    /// assert!(filter.remove(b"foo"));
    /// assert!(!filter.remove(b"foo"));
    /// ```
    pub fn remove(&self, data: &[u8]) -> bool {
        let (index_1, fingerprint) =
            fingerprint::index_and_fingerprint(&self.hash_builder, data, self.bucket_index_mask);
        let index_2 = self.get_alt_index(fingerprint, index_1);
        self.remove_fingerprint(fingerprint, index_1)
            || self.remove_fingerprint(fingerprint, index_2)
    }

    fn remove_fingerprint(&self, fingerprint: Fingerprint, index: usize) -> bool {
        let mut inner = self.inner.write();
        if inner.buckets[index].delete(fingerprint) {
            inner.count -= 1;
            return true;
        }
        false
    }

    #[inline]
    fn get_alt_index(&self, fingerprint: Fingerprint, index: usize) -> usize {
        fingerprint::alt_index(
            &self.hash_builder,
            fingerprint,
            index,
            self.bucket_index_mask,
        )
    }

    /// Clears the cuckoo filter, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// filter.insert(b"foo");
    /// filter.clear();
    ///
    /// assert!(!filter.contains(b"foo"));
    /// assert!(filter.is_empty());
    /// ```
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        for bucket in &mut inner.buckets {
            bucket.reset();
        }
        inner.count = 0;
    }

    /// Returns the number of occupied slots in the cuckoo filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// assert_eq!(filter.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.inner.read().count
    }

    /// Returns `true` if there are no occupied slots in the cuckoo filter.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fraction of slots that are occupied, in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    /// filter.insert(b"foo");
    ///
    /// assert!((filter.load_factor() - 1.0 / 128.0).abs() < std::f64::EPSILON);
    /// ```
    pub fn load_factor(&self) -> f64 {
        let inner = self.inner.read();
        inner.count as f64 / (inner.buckets.len() * BUCKET_SIZE) as f64
    }
}

impl<B, R> CuckooFilter<B, R> {
    /// Returns the total number of slots in the cuckoo filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    ///
    /// assert_eq!(filter.capacity(), 128);
    /// ```
    pub fn capacity(&self) -> usize {
        self.bucket_len() * BUCKET_SIZE
    }

    /// Returns the number of buckets in the cuckoo filter.
    pub fn bucket_len(&self) -> usize {
        self.inner.read().buckets.len()
    }

    /// Returns the estimated false positive probability of the cuckoo filter. This value will
    /// increase as more items are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    /// assert!(filter.estimated_fpp() < std::f64::EPSILON);
    ///
    /// filter.insert(b"foo");
    /// assert!(filter.estimated_fpp() > std::f64::EPSILON);
    /// assert!(filter.estimated_fpp() < 0.01);
    /// ```
    pub fn estimated_fpp(&self) -> f64 {
        let fingerprints_count = 2.0f64.powi(FINGERPRINT_BIT_COUNT as i32);
        let single_fpp = (fingerprints_count - 2.0) / (fingerprints_count - 1.0);
        let occupied_ratio = {
            let inner = self.inner.read();
            inner.count as f64 / (inner.buckets.len() * BUCKET_SIZE) as f64
        };
        1.0 - single_fpp.powf(2.0 * BUCKET_SIZE as f64 * occupied_ratio)
    }

    /// Returns a reference to the cuckoo filter's hasher builder.
    pub fn hasher(&self) -> &B {
        &self.hash_builder
    }
}

#[cfg(test)]
mod tests {
    use super::CuckooFilter;
    use crate::cuckoo::bucket::Bucket;
    use crate::cuckoo::BUCKET_SIZE;
    use crate::util::tests::hash_builder_1;
    use crate::SipHasherBuilder;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::hash::{BuildHasher, Hasher};

    // Maps every input to the same bucket and fingerprint.
    #[derive(Clone, Copy, Debug)]
    struct ConstantHasherBuilder;

    struct ConstantHasher;

    impl Hasher for ConstantHasher {
        fn finish(&self) -> u64 {
            0x0000_0005_0000_0003
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    impl BuildHasher for ConstantHasherBuilder {
        type Hasher = ConstantHasher;

        fn build_hasher(&self) -> ConstantHasher {
            ConstantHasher
        }
    }

    fn seeded_filter(item_count: usize) -> CuckooFilter<SipHasherBuilder, XorShiftRng> {
        CuckooFilter::with_hasher_and_rng(
            item_count,
            hash_builder_1(),
            XorShiftRng::seed_from_u64(0),
        )
    }

    fn occupied_slots<B, R>(filter: &CuckooFilter<B, R>) -> usize {
        filter
            .inner
            .read()
            .buckets
            .iter()
            .map(Bucket::occupied_len)
            .sum()
    }

    #[test]
    fn test_new() {
        let filter = seeded_filter(100);
        assert_eq!(filter.len(), 0);
        assert!(filter.is_empty());
        assert_eq!(filter.capacity(), 128);
        assert_eq!(filter.bucket_len(), 32);
        assert_eq!(filter.bucket_index_mask, 31);
    }

    #[test]
    fn test_new_doubles_when_too_dense() {
        // 1000 / (256 * 4) > 0.96
        assert_eq!(seeded_filter(1000).bucket_len(), 512);
        // 4 / (1 * 4) > 0.96
        assert_eq!(seeded_filter(4).bucket_len(), 2);
        assert_eq!(seeded_filter(960).bucket_len(), 256);
    }

    #[test]
    fn test_new_tiny() {
        assert_eq!(seeded_filter(0).bucket_len(), 1);
        assert_eq!(seeded_filter(3).bucket_len(), 1);
        assert_eq!(seeded_filter(0).bucket_index_mask, 0);
    }

    #[test]
    fn test_insert() {
        let filter = seeded_filter(1000);
        assert!(filter.insert(b"a"));
        assert!(filter.insert(b"b"));
        assert!(filter.insert(b"c"));

        assert!(filter.contains(b"a"));
        assert!(filter.contains(b"b"));
        assert!(filter.contains(b"c"));
        assert!(!filter.contains(b"z"));
        assert_eq!(filter.len(), 3);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_remove() {
        let filter = seeded_filter(1000);
        filter.insert(b"a");
        filter.insert(b"b");
        filter.insert(b"c");

        assert!(filter.remove(b"b"));
        assert_eq!(filter.len(), 2);
        assert!(!filter.contains(b"b"));
        assert!(filter.contains(b"a"));
        assert!(filter.contains(b"c"));
    }

    #[test]
    fn test_remove_missing() {
        let filter = seeded_filter(100);
        filter.insert(b"foo");

        assert!(!filter.remove(b"bar"));
        assert_eq!(filter.len(), 1);
        assert!(filter.contains(b"foo"));
    }

    #[test]
    fn test_insert_existing_item() {
        let filter = seeded_filter(100);
        assert!(filter.insert(b"foo"));
        assert!(filter.insert(b"foo"));
        assert_eq!(filter.len(), 2);

        assert!(filter.remove(b"foo"));
        assert_eq!(filter.len(), 1);
        assert!(filter.contains(b"foo"));

        assert!(filter.remove(b"foo"));
        assert!(filter.is_empty());
        assert!(!filter.contains(b"foo"));
    }

    #[test]
    fn test_remove_decrements_count() {
        let filter = seeded_filter(1000);
        for i in 0u32..200 {
            filter.insert(&i.to_le_bytes());
        }
        for i in 0u32..200 {
            let len = filter.len();
            assert!(filter.remove(&i.to_le_bytes()));
            assert_eq!(filter.len(), len - 1);
        }
        assert!(filter.is_empty());
    }

    #[test]
    fn test_no_false_negatives() {
        let filter = seeded_filter(1000);
        for i in 0u32..1000 {
            assert!(filter.insert(&i.to_le_bytes()));
        }
        for i in 0u32..1000 {
            assert!(filter.contains(&i.to_le_bytes()));
        }
        assert_eq!(filter.len(), 1000);
        assert_eq!(occupied_slots(&filter), 1000);
    }

    #[test]
    fn test_fill_to_item_count() {
        let item_count = 960;
        let filter = seeded_filter(item_count);
        let inserted = (0..item_count as u32)
            .filter(|i| filter.insert(&i.to_le_bytes()))
            .count();

        assert!(inserted * 10 >= item_count * 9);
        assert_eq!(filter.len(), inserted);
        assert_eq!(occupied_slots(&filter), inserted);
        assert!(filter.load_factor() <= 1.0);

        // high load means long kickout chains; none may have lost an item
        assert_eq!(inserted, item_count);
        for i in 0..item_count as u32 {
            assert!(filter.contains(&i.to_le_bytes()));
        }
    }

    #[test]
    fn test_single_bucket_full() {
        let filter = seeded_filter(0);
        for i in 0..BUCKET_SIZE as u32 {
            assert!(filter.insert(&i.to_le_bytes()));
        }

        // both candidates are bucket 0, so every kick lands back in a full bucket
        assert!(!filter.insert(b"overflow"));
        assert_eq!(filter.len(), BUCKET_SIZE);
        assert_eq!(occupied_slots(&filter), BUCKET_SIZE);
        assert!((filter.load_factor() - 1.0).abs() < std::f64::EPSILON);
    }

    #[test]
    fn test_overfill_keeps_count_exact() {
        let filter = seeded_filter(8);
        let mut inserted = 0;
        let mut failed = 0;
        for i in 0u32..100 {
            if filter.insert(&i.to_le_bytes()) {
                inserted += 1;
            } else {
                failed += 1;
            }
        }

        assert!(failed > 0);
        assert_eq!(filter.len(), inserted);
        assert_eq!(occupied_slots(&filter), filter.len());
        assert!(filter.len() <= filter.capacity());
        assert!(filter.load_factor() <= 1.0);
    }

    #[test]
    fn test_failed_insert_drops_earlier_item() {
        let filter = seeded_filter(8);
        let mut inserted = Vec::new();
        let mut failed = 0;
        for i in 0u32..100 {
            let len = filter.len();
            if filter.insert(&i.to_le_bytes()) {
                inserted.push(i);
                assert_eq!(filter.len(), len + 1);
            } else {
                failed += 1;
                assert_eq!(filter.len(), len);
            }
        }

        assert!(failed > 0);
        assert_eq!(filter.len(), inserted.len());
        // a failed kickout chain discards the last displaced fingerprint, which belonged to an
        // item whose insertion had succeeded
        let missing = inserted
            .iter()
            .filter(|i| !filter.contains(&i.to_le_bytes()))
            .count();
        assert!(missing > 0);
    }

    #[test]
    fn test_remove_colliding_item_clears_other_entry() {
        let filter = CuckooFilter::with_hasher_and_rng(
            100,
            ConstantHasherBuilder,
            XorShiftRng::seed_from_u64(0),
        );
        assert!(filter.insert(b"foo"));

        // same bucket and fingerprint as "foo"
        assert!(filter.contains(b"bar"));
        assert!(filter.remove(b"bar"));
        assert_eq!(filter.len(), 0);
        assert!(!filter.contains(b"foo"));
        assert!(!filter.remove(b"foo"));
    }

    #[test]
    fn test_false_positive_rate_near_estimate() {
        let filter = seeded_filter(1000);
        for i in 0u32..1000 {
            assert!(filter.insert(&i.to_le_bytes()));
        }

        let lookups = 200_000u32;
        let false_positives = (1_000_000u32..1_000_000 + lookups)
            .filter(|i| filter.contains(&i.to_le_bytes()))
            .count();
        let observed_fpp = false_positives as f64 / f64::from(lookups);
        let estimated_fpp = filter.estimated_fpp();

        assert!(estimated_fpp > 0.0);
        assert!(observed_fpp < estimated_fpp * 3.0);
    }

    #[test]
    fn test_count_matches_slots_after_mixed_operations() {
        let filter = seeded_filter(256);
        for i in 0u32..300 {
            filter.insert(&i.to_le_bytes());
            if i % 3 == 0 {
                filter.remove(&(i / 2).to_le_bytes());
            }
            assert_eq!(occupied_slots(&filter), filter.len());
        }
        for i in 1000u32..1100 {
            filter.remove(&i.to_le_bytes());
        }
        assert_eq!(occupied_slots(&filter), filter.len());
    }

    #[test]
    fn test_kickout_keeps_items_in_candidate_buckets() {
        // 2 buckets, 8 slots: later insertions displace resident fingerprints
        let filter = seeded_filter(4);
        let items: Vec<[u8; 4]> = (0u32..8).map(u32::to_le_bytes).collect();
        let mut inserted = Vec::new();
        for item in &items {
            if filter.insert(item) {
                inserted.push(item);
            } else {
                break;
            }
        }
        assert_eq!(filter.len(), inserted.len());
        for item in inserted {
            assert!(filter.contains(item));
        }
    }

    #[test]
    fn test_clear() {
        let filter = seeded_filter(100);
        for i in 0u32..50 {
            filter.insert(&i.to_le_bytes());
        }

        filter.clear();

        assert_eq!(filter.len(), 0);
        assert!(filter.is_empty());
        assert_eq!(occupied_slots(&filter), 0);
        for i in 0u32..50 {
            assert!(!filter.contains(&i.to_le_bytes()));
        }
    }

    #[test]
    fn test_load_factor() {
        let filter = seeded_filter(100);
        assert!(filter.load_factor() < std::f64::EPSILON);

        for i in 0u32..64 {
            filter.insert(&i.to_le_bytes());
        }
        assert!((filter.load_factor() - 0.5).abs() < std::f64::EPSILON);
    }

    #[test]
    fn test_estimated_fpp() {
        let filter = seeded_filter(100);
        assert!(filter.estimated_fpp() < std::f64::EPSILON);

        filter.insert(b"foo");

        let expected_fpp = 1.0 - ((2f64.powi(16) - 2.0) / (2f64.powi(16) - 1.0)).powf(8.0 / 128.0);
        assert!((filter.estimated_fpp() - expected_fpp).abs() < std::f64::EPSILON);
    }

    #[test]
    fn test_hasher() {
        let filter = seeded_filter(100);
        assert_eq!(filter.hasher(), &hash_builder_1());
    }
}
