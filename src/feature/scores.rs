use super::mask::{self, LengthMask, MaskCache, OrderMask};
use crate::stats::CharacterStatisticsStore;

/// Order-count bucket a character falls into for the candidate split.
#[inline]
fn order_bucket(piece_len: usize, idx_in_piece: usize, is_family: bool) -> usize {
    let base = if is_family { 0 } else { 3 };
    if idx_in_piece == 0 {
        base
    } else if idx_in_piece == piece_len - 1 {
        base + 2
    } else {
        base + 1
    }
}

/// Length-count bucket of a family/given part of `piece_len` characters.
#[inline]
fn length_bucket(piece_len: usize, is_family: bool) -> usize {
    let clamped = piece_len.min(4);
    if is_family {
        clamped - 1
    } else {
        clamped - 1 + 4
    }
}

/// `counts[bucket] / sum(counts under mask)`, or `None` when nothing is masked in.
#[inline]
fn masked_ratio(counts: &[u32], mask: &[bool], bucket: usize) -> Option<f64> {
    let total: u64 = counts
        .iter()
        .zip(mask)
        .filter(|&(_, &m)| m)
        .map(|(&c, _)| u64::from(c))
        .sum();
    if total == 0 {
        return None;
    }
    let matched = if mask[bucket] { counts[bucket] } else { 0 };
    Some(f64::from(matched) / total as f64)
}

fn resolve_order_mask(cache: Option<&MaskCache>, full_len: usize, idx: usize) -> Option<OrderMask> {
    match cache {
        Some(cache) => cache.order_mask(full_len, idx),
        None => mask::order_mask(full_len, idx),
    }
}

fn resolve_length_mask(cache: Option<&MaskCache>, full_len: usize, idx: usize) -> LengthMask {
    match cache {
        Some(cache) => cache.length_mask(full_len, idx),
        None => mask::length_mask(full_len, idx),
    }
}

/// Sums, over the characters of one part, how often each character was seen
/// at its current slot relative to every slot it could occupy.
///
/// `start_index` is the position of `piece[0]` in the full name; a piece
/// starting at 0 is the family name.
pub fn calc_order_score(
    store: &CharacterStatisticsStore,
    piece: &[char],
    full_name_length: usize,
    start_index: usize,
    cache: Option<&MaskCache>,
) -> f64 {
    let is_family = start_index == 0;
    let mut score = 0.0;
    for (idx_in_piece, &ch) in piece.iter().enumerate() {
        let current_idx = start_index + idx_in_piece;
        let Some(mask) = resolve_order_mask(cache, full_name_length, current_idx) else {
            continue;
        };
        let bucket = order_bucket(piece.len(), idx_in_piece, is_family);
        if let Some(ratio) = masked_ratio(&store.get(ch).order_counts, &mask, bucket) {
            score += ratio;
        }
    }
    score
}

/// Like [`calc_order_score`], but over the length of the containing part.
pub fn calc_length_score(
    store: &CharacterStatisticsStore,
    piece: &[char],
    full_name_length: usize,
    start_index: usize,
    cache: Option<&MaskCache>,
) -> f64 {
    let is_family = start_index == 0;
    let mut score = 0.0;
    for (idx_in_piece, &ch) in piece.iter().enumerate() {
        let current_idx = start_index + idx_in_piece;
        let mask = resolve_length_mask(cache, full_name_length, current_idx);
        let bucket = length_bucket(piece.len(), is_family);
        if let Some(ratio) = masked_ratio(&store.get(ch).length_counts, &mask, bucket) {
            score += ratio;
        }
    }
    score
}
