//! Scrollbar geometry.
//!
//! The scrollbar is one column as tall as the list. Row 0 and row
//! `height - 1` are the scroll arrows; rows `1..=height - 2` form the track.
//! The single-cell thumb is a projection of the selection onto the track:
//! the first item maps to the top track row and the last item to the bottom
//! track row.

/// Track row of the thumb, relative to the top of the scrollbar.
///
/// `None` when nothing is selected or the scrollbar is too short to have a
/// track (fewer than 3 rows).
pub fn thumb_row(selection: Option<usize>, len: usize, height: u16) -> Option<u16> {
    let selection = selection?;
    if height < 3 {
        return None;
    }
    if len <= 1 {
        return Some(1);
    }

    let span = f64::from(height - 3);
    let offset = (selection as f64 / (len - 1) as f64 * span).round();
    let row = offset as u16 + 1;
    Some(row.clamp(1, height - 2))
}

/// Item selected by a click or drag on track row `row`.
///
/// Inverse of [`thumb_row`]. `None` when `row` is not a track row or the
/// geometry has no usable span: fewer than two items, or a track of a single
/// row (`height <= 3`).
pub fn selection_at_row(row: u16, len: usize, height: u16) -> Option<usize> {
    if len < 2 || height <= 3 || row < 1 || row > height - 2 {
        return None;
    }

    let span = f64::from(height - 3);
    let index = ((len - 1) as f64 * f64::from(row - 1) / span).round() as usize;
    Some(index.min(len - 1))
}
