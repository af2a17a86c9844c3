//! ANSI colour for the rendered digits: name / `#rrggbb` parsing and escapes.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("unknown colour '{0}' (run `lcd colors` for the list)")]
    UnknownName(String),
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// The eight basic terminal colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basic {
    Black = 30,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Foreground colour escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Basic(Basic),
    /// True-colour `ESC[38;2;R;G;Bm`.
    Rgb(u8, u8, u8),
}

/// Names accepted by `from_name`, in the order `lcd colors` lists them.
pub const COLOR_NAMES: [&str; 10] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "amber", "lcd",
];

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Basic(Basic::Black)
    }
    pub const fn red() -> Self {
        Self::Basic(Basic::Red)
    }
    pub const fn green() -> Self {
        Self::Basic(Basic::Green)
    }
    pub const fn yellow() -> Self {
        Self::Basic(Basic::Yellow)
    }
    pub const fn blue() -> Self {
        Self::Basic(Basic::Blue)
    }
    pub const fn magenta() -> Self {
        Self::Basic(Basic::Magenta)
    }
    pub const fn cyan() -> Self {
        Self::Basic(Basic::Cyan)
    }
    pub const fn white() -> Self {
        Self::Basic(Basic::White)
    }
    /// Vacuum-fluorescent amber.
    pub const fn amber() -> Self {
        Self::Rgb(255, 176, 0)
    }
    /// Backlit liquid-crystal green.
    pub const fn lcd() -> Self {
        Self::Rgb(120, 200, 80)
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on a
    /// leading `#`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            "amber" => Ok(Self::amber()),
            "lcd" => Ok(Self::lcd()),
            _ => Err(ColorError::UnknownName(s.to_owned())),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        // from_str_radix would accept a sign
        if !h.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(b) => write!(f, "\x1b[{}m", *b as u8),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{RESET}")
}
