//! Flat little-endian encoding of a cuckoo filter's buckets.
//!
//! The default layout has no header: every slot of every bucket is written in order as a
//! little-endian `u16`, so a reader has to know the bucket size and fingerprint width out of
//! band. The versioned layout prefixes the same payload with
//! `[version, bucket_size, fingerprint_bits, 0]`.

use crate::cuckoo::bucket::Bucket;
use crate::cuckoo::{
    CuckooFilter, Fingerprint, BUCKET_SIZE, FINGERPRINT_BIT_COUNT, FINGERPRINT_BYTE_COUNT,
};
use crate::SipHasherBuilder;
use byteorder::{ByteOrder, LittleEndian};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
#[cfg(feature = "serde")]
use serde_crate::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::hash::BuildHasher;
use thiserror::Error;
use tracing::debug;

const BUCKET_BYTE_COUNT: usize = BUCKET_SIZE * FINGERPRINT_BYTE_COUNT;
const FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = 4;

/// Errors returned when rebuilding a cuckoo filter from bytes.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// The payload does not split into whole buckets.
    #[error("expected bytes to be multiple of {expected}, got {len}")]
    InvalidLength {
        /// Number of bytes in one encoded bucket.
        expected: usize,
        /// Length of the payload.
        len: usize,
    },

    /// The payload holds no buckets.
    #[error("expected at least one bucket, got an empty payload")]
    Empty,

    /// The input is shorter than the versioned header.
    #[error("expected a 4-byte header, got {len} bytes")]
    TruncatedHeader {
        /// Length of the input.
        len: usize,
    },

    /// The header names a format version this crate cannot read.
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),

    /// The header describes a bucket layout other than the one this crate uses.
    #[error(
        "incompatible layout: {bucket_size} slots of {fingerprint_bits} bits, expected 4 slots \
         of 16 bits"
    )]
    IncompatibleLayout {
        /// Slots per bucket recorded in the header.
        bucket_size: u8,
        /// Fingerprint width recorded in the header.
        fingerprint_bits: u8,
    },
}

impl<B, R> CuckooFilter<B, R> {
    /// Returns the filter's buckets as a flat byte buffer: one little-endian `u16` per slot,
    /// bucket by bucket. The original items are not recoverable from the output, only their
    /// fingerprints.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    /// assert_eq!(filter.encode().len(), 32 * 4 * 2);
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let inner = self.inner.read();
        let mut bytes = vec![0; inner.buckets.len() * BUCKET_BYTE_COUNT];
        for (bucket, chunk) in inner
            .buckets
            .iter()
            .zip(bytes.chunks_exact_mut(BUCKET_BYTE_COUNT))
        {
            LittleEndian::write_u16_into(bucket.slots(), chunk);
        }
        bytes
    }

    /// Returns [`encode`](CuckooFilter::encode)'s payload prefixed with a header recording the
    /// format version, bucket size, and fingerprint width.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    /// let bytes = filter.encode_versioned();
    /// assert_eq!(&bytes[..4], &[1, 4, 16, 0]);
    /// ```
    pub fn encode_versioned(&self) -> Vec<u8> {
        let payload = self.encode();
        let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
        bytes.extend_from_slice(&[
            FORMAT_VERSION,
            BUCKET_SIZE as u8,
            FINGERPRINT_BIT_COUNT as u8,
            0,
        ]);
        bytes.extend_from_slice(&payload);
        bytes
    }
}

impl CuckooFilter {
    /// Rebuilds a cuckoo filter from bytes produced by [`encode`](CuckooFilter::encode). The
    /// number of occupied slots is recounted from the payload, and the filter gets a fresh lock
    /// and random number generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty or its length is not a multiple of the encoded
    /// bucket size.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    ///
    /// let filter = CuckooFilter::new(100);
    /// filter.insert(b"foo");
    ///
    /// let decoded = CuckooFilter::decode(&filter.encode()).unwrap();
    /// assert!(decoded.contains(b"foo"));
    /// assert_eq!(decoded.len(), 1);
    ///
    /// assert!(CuckooFilter::decode(&[0; 7]).is_err());
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_hasher(bytes, SipHasherBuilder::default())
    }

    /// Rebuilds a cuckoo filter from bytes produced by
    /// [`encode_versioned`](CuckooFilter::encode_versioned).
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing, names an unknown version, or describes a
    /// different bucket layout, or if the payload is malformed.
    pub fn decode_versioned(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_LEN {
            return Err(DecodeError::TruncatedHeader { len: bytes.len() });
        }
        let (header, payload) = bytes.split_at(HEADER_LEN);
        if header[0] != FORMAT_VERSION {
            return Err(DecodeError::UnsupportedVersion(header[0]));
        }
        if header[1] as usize != BUCKET_SIZE || header[2] as usize != FINGERPRINT_BIT_COUNT {
            return Err(DecodeError::IncompatibleLayout {
                bucket_size: header[1],
                fingerprint_bits: header[2],
            });
        }
        Self::decode(payload)
    }
}

impl<B> CuckooFilter<B>
where
    B: BuildHasher,
{
    /// Rebuilds a cuckoo filter from bytes produced by [`encode`](CuckooFilter::encode) on a
    /// filter that hashed with an identically keyed `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty or its length is not a multiple of the encoded
    /// bucket size.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoofilter::cuckoo::CuckooFilter;
    /// use cuckoofilter::SipHasherBuilder;
    ///
    /// let hash_builder = SipHasherBuilder::from_seed(1, 2);
    /// let filter = CuckooFilter::with_hasher(100, hash_builder);
    /// filter.insert(b"foo");
    ///
    /// let decoded = CuckooFilter::decode_with_hasher(&filter.encode(), hash_builder).unwrap();
    /// assert!(decoded.contains(b"foo"));
    /// ```
    pub fn decode_with_hasher(bytes: &[u8], hash_builder: B) -> Result<Self, DecodeError> {
        if bytes.len() % BUCKET_BYTE_COUNT != 0 {
            return Err(DecodeError::InvalidLength {
                expected: BUCKET_BYTE_COUNT,
                len: bytes.len(),
            });
        }
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let buckets: Vec<Bucket> = bytes
            .chunks_exact(BUCKET_BYTE_COUNT)
            .map(|chunk| {
                let mut slots: [Fingerprint; BUCKET_SIZE] = [0; BUCKET_SIZE];
                LittleEndian::read_u16_into(chunk, &mut slots);
                Bucket::from_slots(slots)
            })
            .collect();

        let filter = Self::from_buckets(buckets, hash_builder, XorShiftRng::from_entropy());
        debug!(
            bucket_len = filter.bucket_len(),
            count = filter.len(),
            "decoded cuckoo filter"
        );
        Ok(filter)
    }
}

#[cfg(feature = "serde")]
impl<B, R> Serialize for CuckooFilter<B, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CuckooFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        CuckooFilter::decode(&bytes).map_err(de::Error::custom)
    }
}
