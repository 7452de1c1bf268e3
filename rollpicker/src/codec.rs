//! Conversions between scroll offsets and row indexes.
//!
//! Offsets are measured from the top of the first row, so the row at index `i` rests at
//! `i * item_height`. The spacer above the first row is not part of the offset.

use crate::Geometry;

/// Offset at which row `index` is centered in the viewport.
///
/// No bounds checking: callers clamp `index` against the item count first.
pub fn index_to_offset(index: usize, geometry: &Geometry) -> f64 {
    index as f64 * geometry.item_height()
}

/// Nearest row for a raw scroll offset (round half away from zero).
///
/// The result is unclamped and may be negative (overscroll) or past the last row. Non-finite
/// offsets saturate.
pub fn offset_to_index(offset: f64, geometry: &Geometry) -> i64 {
    (offset / geometry.item_height()).round() as i64
}

/// Clamps an unbounded index into `[0, count - 1]`.
///
/// Returns `None` for an empty list.
pub fn clamp_index(index: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    if index <= 0 {
        return Some(0);
    }
    Some(usize::try_from(index).map_or(last, |i| i.min(last)))
}

/// Rounds an offset to the nearest snap point.
pub fn snap_offset(offset: f64, geometry: &Geometry) -> f64 {
    offset_to_index(offset, geometry) as f64 * geometry.item_height()
}

/// Resting offsets of every row, in ascending order.
pub fn snap_offsets(count: usize, geometry: &Geometry) -> impl Iterator<Item = f64> + use<> {
    let geometry = *geometry;
    (0..count).map(move |i| index_to_offset(i, &geometry))
}
