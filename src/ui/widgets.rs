//! Basic UI widgets
//!
//! Buttons keep their hover flag between frames so they can report
//! pointer enter transitions once, not every frame the pointer sits
//! over them.

use macroquad::prelude::*;

use super::{draw_text_styled, theme, MouseState, Rect, ScreenFit, TextStyle};

/// What happened to a button this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEvents {
    pub entered: bool,
    pub clicked: bool,
}

/// A clickable area with retained hover state
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub font_size: f32,
    hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &str) -> Self {
        Self {
            rect,
            label: label.to_string(),
            font_size: theme::FONT_SIZE_BUTTON,
            hovered: false,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Feed this frame's pointer and get the transitions back
    pub fn update(&mut self, mouse: &MouseState) -> ButtonEvents {
        let inside = mouse.inside(&self.rect);
        let events = ButtonEvents {
            entered: inside && !self.hovered,
            clicked: mouse.clicked(&self.rect),
        };
        self.hovered = inside;
        events
    }

    /// Grey text button, lighter under the pointer
    pub fn draw(&self, fit: &ScreenFit, font: Option<&Font>) {
        let fill = if self.hovered { theme::BUTTON_GREY_HOVER } else { theme::BUTTON_GREY };
        let (x, y, w, h) = fit.rect(self.rect.x, self.rect.y, self.rect.w, self.rect.h);
        draw_rectangle(x, y, w, h, fill);

        let style = TextStyle::new(self.font_size, WHITE).centered();
        draw_text_styled(fit, font, &self.label, self.rect.center_x(), self.rect.center_y(), &style);
    }
}

/// Filled rect with a `thickness` stroke, in canvas coordinates
pub fn draw_framed_rect(fit: &ScreenFit, rect: &Rect, fill: Color, stroke: Color, thickness: f32) {
    let (x, y, w, h) = fit.rect(rect.x, rect.y, rect.w, rect.h);
    draw_rectangle(x, y, w, h, fill);
    let t = fit.len(thickness);
    draw_rectangle_lines(x, y, w, h, t, stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32, pressed: bool) -> MouseState {
        MouseState { x, y, left_pressed: pressed, ..Default::default() }
    }

    #[test]
    fn test_enter_fires_once_per_visit() {
        let mut button = Button::new(Rect::from_center(400.0, 300.0, 250.0, 50.0), "Tekrar Dene");

        let events = button.update(&at(400.0, 300.0, false));
        assert!(events.entered);
        assert!(button.is_hovered());

        let events = button.update(&at(410.0, 300.0, false));
        assert_eq!(events, ButtonEvents::default());

        let events = button.update(&at(0.0, 0.0, false));
        assert!(!events.entered);
        assert!(!button.is_hovered());

        assert!(button.update(&at(400.0, 300.0, false)).entered);
    }

    #[test]
    fn test_click_inside_only() {
        let mut button = Button::new(Rect::new(0.0, 0.0, 100.0, 40.0), "Karakterler");
        assert!(button.update(&at(50.0, 20.0, true)).clicked);
        assert!(!button.update(&at(150.0, 20.0, true)).clicked);
    }
}
