pub mod frame;
pub mod row;
pub mod segment;

pub use frame::{Renderer, render};
pub use row::{push_cell, render_row};
pub use segment::{GlyphKind, LogicalRow, resolve};
