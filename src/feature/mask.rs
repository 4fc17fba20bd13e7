//! One-hot bucket masks used by the order and length scores.
//!
//! A mask depends only on `(full_name_length, char_idx)`, so [`MaskCache`] can
//! memoize it forever without changing any score.

use crate::stats::{LENGTH_BUCKETS, ORDER_BUCKETS};
use fnv::FnvHashMap;
use std::sync::{PoisonError, RwLock};

pub type OrderMask = [bool; ORDER_BUCKETS];
pub type LengthMask = [bool; LENGTH_BUCKETS];

/// Longest bucketed length; anything longer falls into the "4 or more" bucket.
const LENGTH_CLAMP: usize = 4;

/// Order buckets compatible with a character at `char_idx` of a name.
///
/// The first and last character of a full name carry no order information,
/// so they have no mask.
pub fn order_mask(full_name_length: usize, char_idx: usize) -> Option<OrderMask> {
    if char_idx == 0 || char_idx + 1 >= full_name_length {
        return None;
    }

    let mask = if full_name_length == 3 {
        [false, false, true, true, false, false]
    } else if char_idx == 1 {
        [false, true, true, true, false, false]
    } else if char_idx == full_name_length - 2 {
        [false, false, true, true, true, false]
    } else {
        [false, true, true, true, true, false]
    };
    Some(mask)
}

/// Length buckets compatible with a character at `char_idx`: the range of
/// family/given lengths that could still contain it.
pub fn length_mask(full_name_length: usize, char_idx: usize) -> LengthMask {
    let mut mask = [false; LENGTH_BUCKETS];
    if char_idx >= full_name_length {
        return mask;
    }

    let min_family = char_idx + 1;
    let max_family = full_name_length - 1;
    if min_family <= max_family {
        for bucket in (clamp(min_family) - 1)..clamp(max_family) {
            mask[bucket] = true;
        }
    }

    let min_given = full_name_length - char_idx;
    let max_given = full_name_length - 1;
    if min_given <= max_given {
        for bucket in (clamp(min_given) - 1)..clamp(max_given) {
            mask[LENGTH_CLAMP + bucket] = true;
        }
    }

    mask
}

#[inline]
fn clamp(length: usize) -> usize {
    length.min(LENGTH_CLAMP)
}

/// Thread-safe memo of order/length masks.
///
/// Short names are precomputed on construction, longer ones are filled on
/// first use.
#[derive(Debug)]
pub struct MaskCache {
    order: RwLock<FnvHashMap<(usize, usize), OrderMask>>,
    length: RwLock<FnvHashMap<(usize, usize), LengthMask>>,
    max_length: usize,
}

impl Default for MaskCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskCache {
    pub const DEFAULT_MAX_LENGTH: usize = 10;

    pub fn new() -> Self {
        Self::with_max_length(Self::DEFAULT_MAX_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        let mut order = FnvHashMap::default();
        let mut length = FnvHashMap::default();
        for full_len in 3..=max_length {
            for idx in 1..full_len - 1 {
                if let Some(mask) = order_mask(full_len, idx) {
                    order.insert((full_len, idx), mask);
                }
                length.insert((full_len, idx), length_mask(full_len, idx));
            }
        }
        Self {
            order: RwLock::new(order),
            length: RwLock::new(length),
            max_length,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn order_mask(&self, full_name_length: usize, char_idx: usize) -> Option<OrderMask> {
        let key = (full_name_length, char_idx);
        if let Some(mask) = read_cached(&self.order, &key) {
            return Some(mask);
        }
        let mask = order_mask(full_name_length, char_idx)?;
        write_cached(&self.order, key, mask);
        Some(mask)
    }

    pub fn length_mask(&self, full_name_length: usize, char_idx: usize) -> LengthMask {
        let key = (full_name_length, char_idx);
        if let Some(mask) = read_cached(&self.length, &key) {
            return mask;
        }
        let mask = length_mask(full_name_length, char_idx);
        write_cached(&self.length, key, mask);
        mask
    }

    /// `(order, length)` entry counts.
    pub fn cached_entries(&self) -> (usize, usize) {
        let order = self.order.read().unwrap_or_else(PoisonError::into_inner);
        let length = self.length.read().unwrap_or_else(PoisonError::into_inner);
        (order.len(), length.len())
    }
}

// Masks are pure values, so a poisoned lock still holds valid data.
fn read_cached<V: Copy>(
    map: &RwLock<FnvHashMap<(usize, usize), V>>,
    key: &(usize, usize),
) -> Option<V> {
    map.read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .copied()
}

fn write_cached<V: Copy>(map: &RwLock<FnvHashMap<(usize, usize), V>>, key: (usize, usize), value: V) {
    map.write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(key)
        .or_insert(value);
}
