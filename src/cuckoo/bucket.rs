//! Fixed-size group of fingerprint slots.

use crate::cuckoo::{Fingerprint, BUCKET_SIZE};

const EMPTY_FINGERPRINT: Fingerprint = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(super) struct Bucket {
    slots: [Fingerprint; BUCKET_SIZE],
}

impl Bucket {
    pub fn from_slots(slots: [Fingerprint; BUCKET_SIZE]) -> Self {
        Bucket { slots }
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        fingerprint != EMPTY_FINGERPRINT && self.slots.contains(&fingerprint)
    }

    /// Stores `fingerprint` in the first empty slot. Returns `false` if the bucket is full.
    pub fn insert(&mut self, fingerprint: Fingerprint) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == EMPTY_FINGERPRINT) {
            Some(slot) => {
                *slot = fingerprint;
                true
            }
            None => false,
        }
    }

    /// Clears one slot holding `fingerprint`. Returns `false` if no slot holds it.
    pub fn delete(&mut self, fingerprint: Fingerprint) -> bool {
        if fingerprint == EMPTY_FINGERPRINT {
            return false;
        }
        match self.slots.iter_mut().find(|slot| **slot == fingerprint) {
            Some(slot) => {
                *slot = EMPTY_FINGERPRINT;
                true
            }
            None => false,
        }
    }

    /// Puts `fingerprint` into slot `slot_index` and returns whatever was there before.
    #[inline]
    pub fn swap(&mut self, slot_index: usize, fingerprint: Fingerprint) -> Fingerprint {
        std::mem::replace(&mut self.slots[slot_index], fingerprint)
    }

    pub fn reset(&mut self) {
        self.slots = [EMPTY_FINGERPRINT; BUCKET_SIZE];
    }

    pub fn occupied_len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| **slot != EMPTY_FINGERPRINT)
            .count()
    }

    pub fn slots(&self) -> &[Fingerprint; BUCKET_SIZE] {
        &self.slots
    }
}
