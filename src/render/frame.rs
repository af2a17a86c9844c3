//! Digit string → complete text block, and the writer that emits it.
//!
//! - five logical rows, upright rows repeated `height` times
//! - optional wrapping into stacked blocks of at most N digits
//! - optional per-line colouring
//! - the whole block is assembled first and written with one `write_all`

use std::io::Write;

use crate::{
    core::{
        bounds::{digits_per_block, line_width},
        color::colorize,
        config::{Config, Height},
        digit::{Digit, parse_digits},
        error::LcdError,
    },
    render::{
        row::render_row,
        segment::{LogicalRow, resolve},
    },
};

/// Every line of `digits` drawn at `height`, top to bottom.
///
/// Each logical row is resolved and rendered once; upright rows then reuse
/// that same line `height` times.  Yields `3 + 2 * height` lines.
#[must_use]
pub fn render(digits: &[Digit], height: Height) -> Vec<String> {
    let mut lines = Vec::with_capacity(3 + 2 * height.get());
    for row in LogicalRow::ALL {
        let line = render_row(digits.iter().map(|&d| resolve(d, row)), height);
        let reps = row.repeat(height.get());
        lines.extend(std::iter::repeat_n(line, reps));
    }
    lines
}

pub struct Renderer {
    config: Config,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validate `input` and build the full output text, newline-terminated.
    ///
    /// Nothing is produced unless every character is a digit.
    pub fn render_str(&self, input: &str) -> Result<String, LcdError> {
        let digits = parse_digits(input)?;
        Ok(self.render_text(&digits))
    }

    /// Build the full output text for already validated digits.
    #[must_use]
    pub fn render_text(&self, digits: &[Digit]) -> String {
        let height = self.config.height;
        let h = height.get();
        let per_block = self
            .config
            .wrap
            .map_or(digits.len(), |cols| digits_per_block(cols, h))
            .max(1);

        let blocks = digits.len().div_ceil(per_block);
        let mut out =
            String::with_capacity((line_width(per_block, h) + 1) * (3 + 2 * h) * blocks);

        for (i, chunk) in digits.chunks(per_block).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in render(chunk, height) {
                match &self.config.color {
                    Some(c) => out.push_str(&colorize(c, &line)),
                    None => out.push_str(&line),
                }
                out.push('\n');
            }
        }
        out
    }

    /// Render `input` and write it to `out` in a single write.
    pub fn write_to<W: Write>(&self, out: &mut W, input: &str) -> Result<(), LcdError> {
        let text = self.render_str(input)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
