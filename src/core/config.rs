//! Run-time configuration object + fluent builder.

use std::{fmt, num::NonZeroUsize, str::FromStr};

use crate::core::{
    color::AnsiCode,
    constants::{DEFAULT_HEIGHT, MAX_HEIGHT},
    error::LcdError,
};

/// Scale factor: bar length inside a cell and repeat count of upright rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(NonZeroUsize);

impl Height {
    /// `None` for zero or anything above [`MAX_HEIGHT`].
    #[inline]
    #[must_use]
    pub const fn new(h: usize) -> Option<Self> {
        match NonZeroUsize::new(h) {
            Some(n) if h <= MAX_HEIGHT => Some(Self(n)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Height {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_HEIGHT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl FromStr for Height {
    type Err = LcdError;

    /// Plain decimal only: no sign, no whitespace, `1..=MAX_HEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LcdError::InvalidHeight(s.to_owned());
        if !s.as_bytes().first().is_some_and(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let n = lexical_core::parse::<usize>(s.as_bytes()).map_err(|_| invalid())?;
        Self::new(n).ok_or_else(invalid)
    }
}

impl TryFrom<usize> for Height {
    type Error = LcdError;

    fn try_from(h: usize) -> Result<Self, Self::Error> {
        Self::new(h).ok_or_else(|| LcdError::InvalidHeight(h.to_string()))
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub height: Height,
    pub color: Option<AnsiCode>,
    /// Maximum line width in columns; `None` renders everything in one block.
    pub wrap: Option<usize>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Fluent builder; values are validated in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    height: Option<String>,
    color: Option<String>,
    wrap: Option<usize>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Raw size text as typed by the user.
    #[inline]
    #[must_use]
    pub fn height(mut self, h: impl Into<String>) -> Self {
        self.height = Some(h.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: impl Into<String>) -> Self {
        self.color = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color_opt(mut self, c: Option<&str>) -> Self {
        if let Some(c) = c {
            self.color = Some(c.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn wrap(mut self, width: usize) -> Self {
        self.wrap = Some(width);
        self
    }

    pub fn build(self) -> Result<Config, LcdError> {
        let height = match self.height {
            Some(h) => h.parse()?,
            None => Height::default(),
        };
        let color = self.color.as_deref().map(AnsiCode::from_name).transpose()?;
        Ok(Config {
            height,
            color,
            wrap: self.wrap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_height_is_two() {
        assert_eq!(Height::default().get(), DEFAULT_HEIGHT);
        assert_eq!(Config::builder().build().unwrap().height.get(), 2);
    }

    #[test]
    fn parses_positive_height() {
        assert_eq!("1".parse::<Height>().unwrap().get(), 1);
        assert_eq!("12".parse::<Height>().unwrap().get(), 12);
    }

    #[test]
    fn zero_height_is_rejected() {
        let err = "0".parse::<Height>().unwrap_err();
        assert!(matches!(err, LcdError::InvalidHeight(ref s) if s == "0"));
    }

    #[test]
    fn negative_height_is_rejected() {
        assert!(matches!(
            "-3".parse::<Height>(),
            Err(LcdError::InvalidHeight(_))
        ));
    }

    #[test]
    fn garbage_height_is_rejected() {
        for text in ["", "two", "2.5", " 2", "2x", "+2", "+0"] {
            assert!(
                matches!(text.parse::<Height>(), Err(LcdError::InvalidHeight(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn height_above_max_is_rejected() {
        assert_eq!(Height::new(MAX_HEIGHT).map(Height::get), Some(MAX_HEIGHT));
        assert!(Height::new(MAX_HEIGHT + 1).is_none());
        for text in ["1001", "100000000000", "18446744073709551615", "99999999999999999999999"] {
            assert!(
                matches!(text.parse::<Height>(), Err(LcdError::InvalidHeight(ref s)) if s == text),
                "{text:?} should not parse"
            );
        }
        assert!(matches!(
            Height::try_from(usize::MAX),
            Err(LcdError::InvalidHeight(_))
        ));
    }

    #[test]
    fn try_from_zero_fails() {
        assert!(Height::try_from(0).is_err());
        assert_eq!(Height::try_from(3).unwrap().get(), 3);
    }

    #[test]
    fn builder_propagates_bad_color() {
        let err = Config::builder().color("#12").build().unwrap_err();
        assert!(matches!(err, LcdError::Color(_)));
    }

    #[test]
    fn builder_keeps_wrap_and_color() {
        let cfg = Config::builder()
            .height("3")
            .color_opt(Some("red"))
            .wrap(40)
            .build()
            .unwrap();
        assert_eq!(cfg.height.get(), 3);
        assert_eq!(cfg.color, Some(AnsiCode::red()));
        assert_eq!(cfg.wrap, Some(40));
    }
}
