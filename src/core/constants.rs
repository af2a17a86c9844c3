//! A collection of constants.

/// Size used when `-s` is not given
pub const DEFAULT_HEIGHT: usize = 2;
/// Largest accepted size; one digit at this size is about 2 MB of text
pub const MAX_HEIGHT: usize = 1000;

/// Top bar, upper uprights, middle bar, lower uprights, bottom bar
pub const LOGICAL_ROWS: usize = 5;

/// One edge column on each side of the bar
pub const CELL_PADDING: usize = 2;
/// One column of space after every digit, the last one included
pub const DIGIT_GAP: usize = 1;

/// Terminal width assumed when the real one cannot be queried
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Segment glyphs
pub const BAR: char = '-';
pub const UPRIGHT: char = '|';
pub const SPACE: char = ' ';
