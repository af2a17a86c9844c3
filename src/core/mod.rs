//! Aggregates the input-handling layer: validation, configuration, errors.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod digit;
pub mod error;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder, Height};
pub use constants::{CELL_PADDING, DEFAULT_HEIGHT, DIGIT_GAP, LOGICAL_ROWS};
pub use digit::{Digit, parse_digits};
pub use error::LcdError;
