//! Gameplay Renderer
//!
//! Draws a `RunState` onto the virtual canvas: the scrolling wall, world
//! entities relative to the follow camera, floating labels, then the HUD
//! fixed to the canvas. Textures that failed to load are drawn as flat
//! placeholder boxes so a run stays playable without art.

use macroquad::prelude::*;

use super::components::{Body, Sprite};
use super::runtime::RunState;
use crate::assets::AssetStore;
use crate::ui::{draw_text_styled, theme, Button, ScreenFit, TextStyle};

pub const GAME_OVER_TEXT: &str = "Taşları yerine oturtamadık";

/// Wall colour when the backdrop texture is missing
const BACKGROUND_FALLBACK: Color = Color::new(0.24, 0.2, 0.18, 1.0);

const STONE_PLACEHOLDER: [u8; 3] = [0x80, 0x80, 0x80];

/// Left edges of the tiles covering `[0, view_w)` for a strip scrolled by
/// `offset`
pub fn tile_starts(offset: f32, tile_w: f32, view_w: f32) -> Vec<f32> {
    if tile_w <= 0.0 {
        return Vec::new();
    }
    let mut x = -offset.rem_euclid(tile_w);
    let mut starts = Vec::new();
    while x < view_w {
        starts.push(x);
        x += tile_w;
    }
    starts
}

/// Draw the whole run (world layer only, no HUD)
pub fn draw_run(fit: &ScreenFit, assets: &AssetStore, run: &RunState) {
    draw_background(fit, assets, run.background_offset());

    let camera = run.camera();
    let (view_left, view_right) = camera.visible_x();
    let on_screen = |body: &Body| body.right() >= view_left && body.left() <= view_right;
    let scroll = camera.scroll();

    // Ground first, then pickups and enemies, player on top
    let world = &run.world;
    let layers = [world.platform_entities(), world.pickup_entities(), world.enemy_entities()];
    for layer in layers {
        for entity in layer {
            let (Some(body), Some(sprite)) = (world.bodies.get(entity), world.sprites.get(entity)) else {
                continue;
            };
            if !on_screen(body) {
                continue;
            }
            let bob = world.pickups.get(entity).map(|p| p.bob_offset()).unwrap_or(0.0);
            draw_sprite(fit, assets, sprite, body.position - scroll + vec2(0.0, bob));
        }
    }

    for (_, bullet) in run.bullets().iter() {
        let mut sprite = Sprite::new("tas", bullet.body.size, STONE_PLACEHOLDER);
        sprite.angle = bullet.spin.value();
        draw_sprite(fit, assets, &sprite, bullet.body.position - scroll);
    }

    let player = run.player_body();
    if let Some(sprite) = world.sprites.get(run.player()) {
        draw_sprite(fit, assets, sprite, player.position - scroll);
    }

    // Name tag rides above the player's head
    let tag = TextStyle::new(theme::FONT_SIZE_LABEL, theme::GOLD)
        .centered()
        .with_shadow(1.0, 1.0, theme::SHADOW);
    let head = camera.world_to_view(vec2(player.position.x, player.top() - 14.0));
    draw_text_styled(fit, assets.font(), run.character().name, head.x, head.y, &tag);

    for entity in world.label_entities() {
        let Some(label) = world.labels.get(entity) else { continue };
        let at = camera.world_to_view(vec2(label.x, label.y.value()));
        let style = TextStyle::new(label.font_size, theme::rgb(label.color))
            .centered()
            .with_alpha(label.alpha.value().clamp(0.0, 1.0));
        draw_text_styled(fit, assets.font(), &label.text, at.x, at.y, &style);
    }
}

fn draw_background(fit: &ScreenFit, assets: &AssetStore, offset: f32) {
    let (view_w, view_h) = fit.virtual_size();

    let Some(texture) = assets.texture("background") else {
        let (x, y, w, h) = fit.canvas();
        draw_rectangle(x, y, w, h, BACKGROUND_FALLBACK);
        return;
    };

    // Tiles are scaled to fill the canvas height
    let scale = view_h / texture.height().max(1.0);
    let tile_w = texture.width() * scale;
    for start in tile_starts(offset, tile_w, view_w) {
        let (x, y, w, h) = fit.rect(start, 0.0, tile_w, view_h);
        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
    }
}

/// Draw `sprite` centred on `center` (view coordinates)
fn draw_sprite(fit: &ScreenFit, assets: &AssetStore, sprite: &Sprite, center: Vec2) {
    let top_left = center - sprite.size * 0.5;
    let (x, y, w, h) = fit.rect(top_left.x, top_left.y, sprite.size.x, sprite.size.y);

    match assets.texture(sprite.texture) {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            Color::new(1.0, 1.0, 1.0, sprite.alpha),
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                rotation: sprite.angle.to_radians(),
                flip_x: sprite.flip_x,
                ..Default::default()
            },
        ),
        None => {
            let mut color = theme::rgb(sprite.placeholder);
            color.a = sprite.alpha;
            draw_rectangle(x, y, w, h, color);
        }
    }
}

// =============================================================================
// HUD
// =============================================================================

/// Lives, score and the character select button, fixed to the canvas
pub fn draw_hud(fit: &ScreenFit, assets: &AssetStore, run: &RunState, score: u32, select_button: &Button) {
    for i in 0..run.lives() {
        draw_heart(fit, 16.0 + i as f32 * 34.0, 18.0, 28.0, theme::RED);
    }

    let score_style = TextStyle::new(theme::FONT_SIZE_SCORE, theme::GOLD);
    draw_text_styled(fit, assets.font(), &format!("Score: {}", score), 16.0, 56.0, &score_style);

    select_button.draw(fit, assets.font());
}

/// Heart made of two circles and a triangle, `size` wide, top-left at (x, y)
fn draw_heart(fit: &ScreenFit, x: f32, y: f32, size: f32, color: Color) {
    let r = size * 0.27;
    let (lx, ly) = fit.point(x + r, y + r);
    let (rx, ry) = fit.point(x + size - r, y + r);
    draw_circle(lx, ly, fit.len(r), color);
    draw_circle(rx, ry, fit.len(r), color);

    let (ax, ay) = fit.point(x, y + r * 1.3);
    let (bx, by) = fit.point(x + size, y + r * 1.3);
    let (cx, cy) = fit.point(x + size * 0.5, y + size * 0.95);
    draw_triangle(vec2(ax, ay), vec2(bx, by), vec2(cx, cy), color);
}

/// Dimmed canvas, red title and the two end-of-run buttons
pub fn draw_game_over(fit: &ScreenFit, assets: &AssetStore, retry: &Button, select: &Button) {
    let (x, y, w, h) = fit.canvas();
    draw_rectangle(x, y, w, h, theme::GAME_OVER_DIM);

    let (view_w, _) = fit.virtual_size();
    let title = TextStyle::new(theme::FONT_SIZE_GAME_OVER, theme::RED)
        .centered()
        .with_shadow(2.0, 2.0, BLACK);
    draw_text_styled(fit, assets.font(), GAME_OVER_TEXT, view_w * 0.5, 200.0, &title);

    retry.draw(fit, assets.font());
    select.draw(fit, assets.font());
}
