//! Input state management
//!
//! Polls the keyboard and pointer through macroquad and combines them
//! into a `FrameInput` snapshot. Pointer coordinates are mapped from window
//! pixels to the virtual canvas so scenes can hit-test in canvas space.

use macroquad::prelude::*;

use super::{Action, Controls};
use crate::ui::{MouseState, ScreenFit};

/// Everything a scene needs to know about input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub controls: Controls,
    /// Pointer in virtual canvas coordinates
    pub pointer: MouseState,
}

/// Polls macroquad once per frame
pub struct InputState {
    last: FrameInput,
}

impl InputState {
    pub fn new() -> Self {
        Self { last: FrameInput::default() }
    }

    /// Call once per frame before updating the active scene
    pub fn poll(&mut self, fit: &ScreenFit) -> FrameInput {
        let mut controls = Controls::default();
        for action in Action::ALL {
            controls.set(action, keyboard_down(action));
        }

        let (mx, my) = mouse_position();
        let (x, y) = fit.screen_to_virtual(mx, my);
        let pointer = MouseState {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        };

        self.last = FrameInput { controls, pointer };
        self.last
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn keyboard_down(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        Action::Jump => is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        Action::Shoot => is_key_down(KeyCode::Space),
    }
}
