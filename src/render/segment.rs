//! Digit → glyph lookup.
//!
//! A seven-segment digit is drawn in five logical rows: three horizontal
//! bands (top, middle, bottom) that hold at most one bar, and two vertical
//! bands that hold a left upright, a right upright, both, or neither.  Each
//! digit therefore contributes exactly one [`GlyphKind`] per row, and the
//! whole font fits in a 10 × 5 table.

use crate::core::{constants::LOGICAL_ROWS, digit::Digit};

/// Line-drawing shape a digit contributes to one logical row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    Blank,
    HorizontalBar,
    LeftUpright,
    RightUpright,
    BothUprights,
}

/// One of the five bands of a digit, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalRow {
    Top,
    UpperUprights,
    Middle,
    LowerUprights,
    Bottom,
}

impl LogicalRow {
    pub const ALL: [LogicalRow; LOGICAL_ROWS] = [
        Self::Top,
        Self::UpperUprights,
        Self::Middle,
        Self::LowerUprights,
        Self::Bottom,
    ];

    /// 1-based row number, top to bottom.
    #[inline]
    #[must_use]
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    /// Inverse of [`number`](Self::number).
    #[inline]
    #[must_use]
    pub const fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(Self::Top),
            2 => Some(Self::UpperUprights),
            3 => Some(Self::Middle),
            4 => Some(Self::LowerUprights),
            5 => Some(Self::Bottom),
            _ => None,
        }
    }

    /// Upright rows are stretched vertically; bar rows are not.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::UpperUprights | Self::LowerUprights)
    }

    /// Text lines this row occupies at `height`.
    #[inline]
    #[must_use]
    pub const fn repeat(self, height: usize) -> usize {
        if self.is_vertical() { height } else { 1 }
    }
}

// --- Segment Table ---

use GlyphKind::{
    Blank as NO, BothUprights as LR, HorizontalBar as HB, LeftUpright as L_, RightUpright as _R,
};

/// Indexed by digit value, then by `LogicalRow as usize`.
const SEGMENTS: [[GlyphKind; LOGICAL_ROWS]; 10] = [
    [HB, LR, NO, LR, HB], // 0
    [NO, _R, NO, _R, NO], // 1
    [HB, _R, HB, L_, HB], // 2
    [HB, _R, HB, _R, HB], // 3
    [NO, LR, HB, _R, NO], // 4
    [HB, L_, HB, _R, HB], // 5
    [HB, L_, HB, LR, HB], // 6
    [HB, _R, NO, _R, NO], // 7
    [HB, LR, HB, LR, HB], // 8
    [HB, LR, HB, _R, HB], // 9
];

/// Glyph `digit` contributes to `row`.  Total: every pair has an entry.
#[inline]
#[must_use]
pub const fn resolve(digit: Digit, row: LogicalRow) -> GlyphKind {
    SEGMENTS[digit.value() as usize][row as usize]
}
