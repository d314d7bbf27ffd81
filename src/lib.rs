//! # cuckoofilter
//!
//! `cuckoofilter` is a concurrent cuckoo filter over byte strings: a compact set representation
//! that answers "is this item probably in the set?" with a bounded false positive rate and, unlike
//! a Bloom filter, supports removing items. It is meant to sit in front of expensive existence
//! checks such as disk lookups, cache misses, or deduplication.
//!
//! The filter stores 16-bit fingerprints in buckets of four slots. Each fingerprint has two
//! candidate buckets; when both are full, resident fingerprints are displaced to their alternate
//! bucket, up to 500 times, before an insertion is reported as failed. A single reader/writer lock
//! guards the whole table, so a filter can be shared between threads through an `Arc`.
//!
//! Filters serialize to a flat buffer of little-endian fingerprints and can be rebuilt from it.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! cuckoofilter = "*"
//! ```
//!
//! ```rust
//! use cuckoofilter::cuckoo::CuckooFilter;
//!
//! let filter = CuckooFilter::new(1000);
//! filter.insert(b"a");
//! assert!(filter.contains(b"a"));
//!
//! let decoded = CuckooFilter::decode(&filter.encode()).unwrap();
//! assert!(decoded.contains(b"a"));
//! ```
//!
//! ## References
//!
//!  - [Cuckoo Filter: Practically Better Than Bloom](https://dl.acm.org/citation.cfm?id=2674994)
//!  > Fan, Bin, Dave G. Andersen, Michael Kaminsky, and Michael D. Mitzenmacher. 2014. “Cuckoo Filter: Practically Better Than Bloom.” In *Proceedings of the 10th Acm International on Conference on Emerging Networking Experiments and Technologies*, 75–88. CoNEXT ’14. New York, NY, USA: ACM. doi:[10.1145/2674005.2674994](https://doi.org/10.1145/2674005.2674994).

#![warn(missing_docs)]

pub mod cuckoo;
mod util;

pub use self::util::SipHasherBuilder;
