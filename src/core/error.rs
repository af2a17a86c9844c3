//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, constants::MAX_HEIGHT};

/// Top-level error type bubbled up by public APIs.
///
/// Every variant except `Io` is an input-validation failure: it is raised
/// before the first line is produced, so callers never see partial output.
#[derive(Error, Debug)]
pub enum LcdError {
    /// A character outside `0..=9` in the digit string.
    #[error("invalid digit '{ch}' at position {index}: only 0-9 can be displayed")]
    InvalidDigit { ch: char, index: usize },

    /// Size argument that is not an integer in `1..=MAX_HEIGHT`.
    #[error("invalid size '{0}': expected a whole number from 1 to {max}", max = MAX_HEIGHT)]
    InvalidHeight(String),

    #[error("nothing to display: the digit string is empty")]
    EmptyInput,

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LcdError {
    /// True for errors the user can fix by re-running with different input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
