//! Follow camera
//!
//! Keeps the player centred in the view, clamped so the view never leaves
//! the world bounds. Objects drawn with scroll factor 1 subtract `scroll`;
//! HUD elements ignore it.

use macroquad::math::{vec2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    view: Vec2,
    bounds_min: Vec2,
    bounds_max: Vec2,
    scroll: Vec2,
}

impl FollowCamera {
    /// `view` is the canvas size, bounds are (x, y, width, height) in world space
    pub fn new(view: Vec2, bounds: (f32, f32, f32, f32)) -> Self {
        Self {
            view,
            bounds_min: vec2(bounds.0, bounds.1),
            bounds_max: vec2(bounds.0 + bounds.2, bounds.1 + bounds.3),
            scroll: Vec2::ZERO,
        }
    }

    pub fn follow(&mut self, target: Vec2) {
        let desired = target - self.view * 0.5;
        let max_scroll = (self.bounds_max - self.view).max(self.bounds_min);
        self.scroll = desired.clamp(self.bounds_min, max_scroll).round();
    }

    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    pub fn world_to_view(&self, world: Vec2) -> Vec2 {
        world - self.scroll
    }

    /// Horizontal visible range in world space, for culling
    pub fn visible_x(&self) -> (f32, f32) {
        (self.scroll.x, self.scroll.x + self.view.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FollowCamera {
        FollowCamera::new(vec2(800.0, 600.0), (0.0, 0.0, 100_000.0, 600.0))
    }

    #[test]
    fn test_clamped_at_world_start() {
        let mut cam = camera();
        cam.follow(vec2(100.0, 425.0));
        assert_eq!(cam.scroll(), vec2(0.0, 0.0));
    }

    #[test]
    fn test_centres_player_mid_run() {
        let mut cam = camera();
        cam.follow(vec2(5000.0, 550.0));
        assert_eq!(cam.scroll(), vec2(4600.0, 0.0));
        assert_eq!(cam.world_to_view(vec2(5000.0, 550.0)), vec2(400.0, 550.0));
        assert_eq!(cam.visible_x(), (4600.0, 5400.0));
    }

    #[test]
    fn test_clamped_at_world_end() {
        let mut cam = camera();
        cam.follow(vec2(99_990.0, 425.0));
        assert_eq!(cam.scroll().x, 99_200.0);
    }
}
