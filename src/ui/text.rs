//! Styled text
//!
//! Text blocks are placed like sprites: (`x`, `y`) is the anchor point and
//! `origin` says where in the block it sits ((0.5, 0.5) is the centre).
//! Blocks may span several lines separated by `\n`.

use macroquad::prelude::*;

use super::ScreenFit;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub origin: (f32, f32),
    pub shadow: Option<Shadow>,
    /// Extra space between lines
    pub line_spacing: f32,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            origin: (0.0, 0.0),
            shadow: None,
            line_spacing: 0.0,
        }
    }

    pub fn centered(mut self) -> Self {
        self.origin = (0.5, 0.5);
        self
    }

    pub fn with_shadow(mut self, offset_x: f32, offset_y: f32, color: Color) -> Self {
        self.shadow = Some(Shadow { offset_x, offset_y, color });
        self
    }

    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.a = alpha;
        if let Some(shadow) = &mut self.shadow {
            shadow.color.a *= alpha;
        }
        self
    }
}

/// Top-left corner of each line, given the measured line widths
pub fn layout_lines(widths: &[f32], x: f32, y: f32, style: &TextStyle) -> Vec<(f32, f32)> {
    let line_h = style.size;
    let count = widths.len() as f32;
    let block_h = (line_h * count + style.line_spacing * (count - 1.0)).max(0.0);
    let block_w = widths.iter().copied().fold(0.0, f32::max);

    let left = x - block_w * style.origin.0;
    let top = y - block_h * style.origin.1;

    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            // Lines are aligned within the block the same way the block is anchored
            let line_x = left + (block_w - w) * style.origin.0;
            let line_y = top + i as f32 * (line_h + style.line_spacing);
            (line_x, line_y)
        })
        .collect()
}

/// Draw `text` on the virtual canvas
pub fn draw_text_styled(fit: &ScreenFit, font: Option<&Font>, text: &str, x: f32, y: f32, style: &TextStyle) {
    let lines: Vec<&str> = text.split('\n').collect();
    let measure_size = style.size.round().max(1.0) as u16;
    let dims: Vec<TextDimensions> = lines.iter().map(|line| measure_text(line, font, measure_size, 1.0)).collect();
    let widths: Vec<f32> = dims.iter().map(|d| d.width).collect();

    let screen_size = fit.len(style.size).round().max(1.0) as u16;

    for ((line, (lx, ly)), dim) in lines.iter().zip(layout_lines(&widths, x, y, style)).zip(&dims) {
        // Baseline sits below the line top by the font's ascent
        let baseline = ly + dim.offset_y.max(style.size * 0.75);

        if let Some(shadow) = style.shadow {
            let (sx, sy) = fit.point(lx + shadow.offset_x, baseline + shadow.offset_y);
            draw_line_text(line, sx, sy, font, screen_size, shadow.color);
        }
        let (sx, sy) = fit.point(lx, baseline);
        draw_line_text(line, sx, sy, font, screen_size, style.color);
    }
}

fn draw_line_text(text: &str, x: f32, y: f32, font: Option<&Font>, size: u16, color: Color) {
    draw_text_ex(
        text,
        x.round(),
        y.round(),
        TextParams {
            font,
            font_size: size,
            color,
            ..Default::default()
        },
    );
}
