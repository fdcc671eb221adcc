//! FIT scaling
//!
//! The game is laid out on a fixed virtual canvas. `ScreenFit` scales that
//! canvas uniformly to the largest size that fits the window and centres it,
//! leaving letterbox bars on the sides that don't match the aspect ratio.
//! Everything is drawn in virtual coordinates through `rect`/`point`, and
//! the pointer is mapped back with `screen_to_virtual`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFit {
    virtual_w: f32,
    virtual_h: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl ScreenFit {
    pub fn new(virtual_w: f32, virtual_h: f32) -> Self {
        let mut fit = Self { virtual_w, virtual_h, scale: 1.0, offset_x: 0.0, offset_y: 0.0 };
        fit.resize(virtual_w, virtual_h);
        fit
    }

    /// Recompute for a window of `screen_w`x`screen_h` pixels
    pub fn resize(&mut self, screen_w: f32, screen_h: f32) {
        let scale = (screen_w / self.virtual_w).min(screen_h / self.virtual_h);
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self.offset_x = ((screen_w - self.virtual_w * self.scale) * 0.5).max(0.0);
        self.offset_y = ((screen_h - self.virtual_h * self.scale) * 0.5).max(0.0);
    }

    /// Track the current macroquad window size
    pub fn update(&mut self) {
        self.resize(macroquad::window::screen_width(), macroquad::window::screen_height());
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn virtual_size(&self) -> (f32, f32) {
        (self.virtual_w, self.virtual_h)
    }

    pub fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }

    /// Scale a length (stroke width, font size)
    pub fn len(&self, l: f32) -> f32 {
        l * self.scale
    }

    /// Virtual rect to screen rect as (x, y, w, h)
    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
        let (sx, sy) = self.point(x, y);
        (sx, sy, w * self.scale, h * self.scale)
    }

    pub fn screen_to_virtual(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }

    /// Canvas area on screen as (x, y, w, h)
    pub fn canvas(&self) -> (f32, f32, f32, f32) {
        self.rect(0.0, 0.0, self.virtual_w, self.virtual_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_native_size() {
        let fit = ScreenFit::new(800.0, 600.0);
        assert_eq!(fit.scale(), 1.0);
        assert_eq!(fit.point(400.0, 300.0), (400.0, 300.0));
    }

    #[test]
    fn test_wide_window_gets_side_bars() {
        let mut fit = ScreenFit::new(800.0, 600.0);
        fit.resize(1600.0, 900.0);
        assert_eq!(fit.scale(), 1.5);
        // 800 * 1.5 = 1200, bars of 200 each side
        assert_eq!(fit.canvas(), (200.0, 0.0, 1200.0, 900.0));
        assert_eq!(fit.screen_to_virtual(800.0, 450.0), (400.0, 300.0));
    }

    #[test]
    fn test_tall_window_gets_top_and_bottom_bars() {
        let mut fit = ScreenFit::new(800.0, 600.0);
        fit.resize(400.0, 1000.0);
        assert_eq!(fit.scale(), 0.5);
        assert_eq!(fit.point(0.0, 0.0), (0.0, 350.0));
        assert_eq!(fit.len(48.0), 24.0);
    }

    #[test]
    fn test_zero_sized_window_does_not_divide_by_zero() {
        let mut fit = ScreenFit::new(800.0, 600.0);
        fit.resize(0.0, 0.0);
        assert_eq!(fit.scale(), 1.0);
    }
}
