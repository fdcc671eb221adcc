//! Input handling
//!
//! Keyboard actions and the pointer (mouse, or touch which macroquad maps
//! to the mouse), collected once per frame into a `FrameInput` snapshot
//! that scenes read instead of polling macroquad themselves.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
