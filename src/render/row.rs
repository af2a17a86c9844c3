//! Glyph sequence → one line of text.
//!
//! Every cell is `height + 2` columns wide whatever its glyph, so columns
//! line up across rows, and is followed by a single space.  The space after
//! the last cell is kept: lines end in `' '` before the newline.

use crate::{
    core::{
        bounds::line_width,
        config::Height,
        constants::{BAR, SPACE, UPRIGHT},
    },
    render::segment::GlyphKind,
};

impl GlyphKind {
    /// `(left edge, fill, right edge)` characters of the cell.
    #[inline]
    const fn parts(self) -> (char, char, char) {
        match self {
            Self::Blank => (SPACE, SPACE, SPACE),
            Self::HorizontalBar => (SPACE, BAR, SPACE),
            Self::LeftUpright => (UPRIGHT, SPACE, SPACE),
            Self::RightUpright => (SPACE, SPACE, UPRIGHT),
            Self::BothUprights => (UPRIGHT, SPACE, UPRIGHT),
        }
    }
}

/// Append one cell of `glyph` at `height` to `buf`, without the gap.
#[inline]
pub fn push_cell(buf: &mut String, glyph: GlyphKind, height: Height) {
    let (left, fill, right) = glyph.parts();
    buf.push(left);
    buf.extend(std::iter::repeat_n(fill, height.get()));
    buf.push(right);
}

/// Render one logical row: each glyph's cell in order, each followed by a
/// space.
pub fn render_row<I>(glyphs: I, height: Height) -> String
where
    I: IntoIterator<Item = GlyphKind>,
    I::IntoIter: ExactSizeIterator,
{
    let glyphs = glyphs.into_iter();
    let mut line = String::with_capacity(line_width(glyphs.len(), height.get()));
    for glyph in glyphs {
        push_cell(&mut line, glyph, height);
        line.push(SPACE);
    }
    line
}
