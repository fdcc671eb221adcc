//! Immediate-mode UI helpers for the two scenes
//!
//! Everything is laid out on the virtual canvas and mapped to the window
//! through `ScreenFit`.

mod fit;
mod input;
mod rect;
mod text;
pub mod theme;
mod widgets;

pub use fit::*;
pub use input::*;
pub use rect::*;
pub use text::*;
pub use widgets::*;
