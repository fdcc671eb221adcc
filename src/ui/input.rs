//! Pointer state for UI interaction

use super::Rect;

/// Pointer state for one frame, in virtual canvas coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Check if the pointer is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if the pointer was just pressed inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_needs_press_inside() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut mouse = MouseState { x: 5.0, y: 5.0, ..Default::default() };
        assert!(mouse.inside(&rect));
        assert!(!mouse.clicked(&rect));

        mouse.left_pressed = true;
        assert!(mouse.clicked(&rect));

        mouse.x = 50.0;
        assert!(!mouse.clicked(&rect));
    }
}
