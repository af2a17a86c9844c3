//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder, Height},
    constants::DEFAULT_HEIGHT,
    digit::{Digit, parse_digits},
    error::LcdError,
};

pub use render::{GlyphKind, LogicalRow, Renderer, render, render_row, resolve};

/// Draw `digits` at `height` and return the whole block, one
/// newline-terminated line per row.
///
/// Both inputs are validated before anything is drawn.
pub fn render_digits(digits: &str, height: usize) -> Result<String, LcdError> {
    let height = Height::try_from(height)?;
    let digits = parse_digits(digits)?;
    let cfg = Config {
        height,
        ..Config::default()
    };
    Ok(Renderer::new(cfg).render_text(&digits))
}
