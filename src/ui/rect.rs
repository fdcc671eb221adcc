//! Rectangle type for UI layout

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of size `w`x`h` centred on (`cx`, `cy`)
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::from_origin(cx, cy, w, h, 0.5, 0.5)
    }

    /// Rect anchored at (`x`, `y`) by a normalized origin: (0, 0) is the
    /// top-left corner, (1, 0.5) the middle of the right edge
    pub fn from_origin(x: f32, y: f32, w: f32, h: f32, origin_x: f32, origin_y: f32) -> Self {
        Self::new(x - w * origin_x, y - h * origin_y, w, h)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(400.0, 300.0, 250.0, 50.0);
        assert_eq!(r, Rect::new(275.0, 275.0, 250.0, 50.0));
        assert_eq!(r.center_x(), 400.0);
        assert_eq!(r.center_y(), 300.0);
    }

    #[test]
    fn test_from_origin_right_middle() {
        // HUD button: right edge at 780, vertically centred on 30
        let r = Rect::from_origin(780.0, 30.0, 200.0, 40.0, 1.0, 0.5);
        assert_eq!(r.right(), 780.0);
        assert_eq!(r.x, 580.0);
        assert_eq!(r.y, 10.0);
    }
}
