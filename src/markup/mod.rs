//! Inline color markup shared by every consumer of entry text.
//!
//! The same parse serves two purposes: stripping tags down to their content
//! for plain sinks, and extracting `fg`/`bg` attributes to drive styled
//! rendering.

mod color;
mod tag;

pub use color::Color;
pub use tag::{Segment, Style, parse, render, render_plain, strip};
