//! Geometry helpers: cell widths + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{CELL_PADDING, DIGIT_GAP, FALLBACK_TERMINAL_WIDTH};

/// Columns taken by one digit cell, edges included.
#[inline]
#[must_use]
pub const fn cell_width(height: usize) -> usize {
    height + CELL_PADDING
}

/// Columns taken by one digit including the gap that follows it.
#[inline]
#[must_use]
pub const fn digit_stride(height: usize) -> usize {
    cell_width(height) + DIGIT_GAP
}

/// Width of a full rendered line for `digits` digits.
#[inline]
#[must_use]
pub const fn line_width(digits: usize, height: usize) -> usize {
    digits * digit_stride(height)
}

/// Current terminal width in columns (80 fallback when not a tty).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(FALLBACK_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
}

/// How many digits fit side by side in `columns`.  Never less than one, so
/// an over-sized digit still gets printed on its own.
#[inline]
#[must_use]
pub fn digits_per_block(columns: usize, height: usize) -> usize {
    (columns / digit_stride(height)).max(1)
}
