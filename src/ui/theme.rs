//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Palette
// =============================================================================

/// Titles, names, score, frame strokes (#ffd700)
pub const GOLD: Color = Color::new(1.0, 0.843, 0.0, 1.0);

/// Portrait frame fill (#4a2810)
pub const FRAME_BROWN: Color = Color::new(0.290, 0.157, 0.063, 1.0);

/// Portrait frame fill under the pointer (#6a3810)
pub const FRAME_BROWN_HOVER: Color = Color::new(0.416, 0.220, 0.063, 1.0);

/// Button fill (#4a4a4a)
pub const BUTTON_GREY: Color = Color::new(0.290, 0.290, 0.290, 1.0);

/// Button fill under the pointer (#666666)
pub const BUTTON_GREY_HOVER: Color = Color::new(0.4, 0.4, 0.4, 1.0);

/// Hearts, game over title, "+1 Life!" (#ff0000)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Letterbox bars outside the canvas
pub const LETTERBOX: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Drop shadow under titles and names
pub const SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.8);

// =============================================================================
// Overlays
// =============================================================================

/// Dim layer over the selection background
pub const SELECTION_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.5);

/// Dim layer behind the game over panel
pub const GAME_OVER_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.7);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_TITLE: f32 = 32.0;
pub const FONT_SIZE_GAME_OVER: f32 = 48.0;
pub const FONT_SIZE_SCORE: f32 = 24.0;
pub const FONT_SIZE_BUTTON: f32 = 24.0;
pub const FONT_SIZE_NAME: f32 = 20.0;
pub const FONT_SIZE_LABEL: f32 = 16.0;

/// Convert `[r, g, b]` to an opaque color
pub fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}
