//! Character selection screen
//!
//! Seven portraits in a grid over the castle backdrop. Hovering a portrait
//! highlights its frame and plays the character's voice; clicking it
//! remembers the choice and starts a run.

use macroquad::prelude::*;

use super::{Registry, SceneCommand, SceneKey};
use crate::assets::AssetStore;
use crate::audio::SoundBank;
use crate::characters::{Character, ROSTER};
use crate::input::FrameInput;
use crate::ui::{draw_framed_rect, draw_text_styled, theme, Button, Rect, ScreenFit, TextStyle};

pub const TITLE: &str = "Bir karakter seç, BİM'in şaşkınlarını\npatakla ve zaferin tadını çıkar!";

const COLUMNS: usize = 4;
const SPACING: f32 = 180.0;
const GRID_TOP: f32 = 200.0;
const FRAME_SIZE: f32 = 120.0;
const PORTRAIT_SIZE: f32 = 100.0;
const NAME_OFFSET: f32 = 70.0;

/// Centre of grid slot `i` on an 800 wide canvas
pub fn slot_position(i: usize) -> (f32, f32) {
    let start_x = (800.0 - (COLUMNS as f32 - 1.0) * SPACING) / 2.0;
    let col = (i % COLUMNS) as f32;
    let row = (i / COLUMNS) as f32;
    (start_x + col * SPACING, GRID_TOP + row * SPACING)
}

struct Slot {
    character: Character,
    frame: Button,
}

pub struct SelectionScene {
    slots: Vec<Slot>,
}

impl SelectionScene {
    pub fn new() -> Self {
        let slots = ROSTER
            .iter()
            .enumerate()
            .map(|(i, &character)| {
                let (x, y) = slot_position(i);
                Slot {
                    character,
                    frame: Button::new(Rect::from_center(x, y, FRAME_SIZE, FRAME_SIZE), character.name),
                }
            })
            .collect();
        Self { slots }
    }

    pub fn update(&mut self, input: &FrameInput, sounds: &mut SoundBank, registry: &mut Registry) -> Option<SceneCommand> {
        let mut command = None;

        for slot in &mut self.slots {
            let events = slot.frame.update(&input.pointer);

            if events.entered {
                if let Some(voice) = slot.character.voice {
                    sounds.play(voice);
                }
            }

            if events.clicked && command.is_none() {
                registry.selected_character = Some(slot.character);
                command = Some(SceneCommand::Start(SceneKey::Gameplay));
            }
        }

        command
    }

    /// Character under the pointer, if any
    pub fn hovered(&self) -> Option<Character> {
        self.slots.iter().find(|s| s.frame.is_hovered()).map(|s| s.character)
    }

    pub fn draw(&self, fit: &ScreenFit, assets: &AssetStore) {
        let (view_w, _) = fit.virtual_size();
        let (x, y, w, h) = fit.canvas();

        match assets.texture("kale-bg") {
            Some(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(w, h)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(x, y, w, h, theme::FRAME_BROWN),
        }
        draw_rectangle(x, y, w, h, theme::SELECTION_DIM);

        let title = TextStyle::new(theme::FONT_SIZE_TITLE, theme::GOLD)
            .centered()
            .with_line_spacing(10.0)
            .with_shadow(2.0, 2.0, theme::SHADOW);
        draw_text_styled(fit, assets.font(), TITLE, view_w * 0.5, 80.0, &title);

        for slot in &self.slots {
            self.draw_slot(fit, assets, slot);
        }
    }

    fn draw_slot(&self, fit: &ScreenFit, assets: &AssetStore, slot: &Slot) {
        let frame = &slot.frame.rect;
        let (fill, stroke) = if slot.frame.is_hovered() {
            (theme::FRAME_BROWN_HOVER, 4.0)
        } else {
            (theme::FRAME_BROWN, 2.0)
        };
        draw_framed_rect(fit, frame, fill, theme::GOLD, stroke);

        let cx = frame.center_x();
        let cy = frame.center_y();
        let portrait = Rect::from_center(cx, cy, PORTRAIT_SIZE, PORTRAIT_SIZE);
        if let Some(texture) = assets.texture(slot.character.sprite) {
            let (x, y, w, h) = fit.rect(portrait.x, portrait.y, portrait.w, portrait.h);
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

        draw_text_styled(fit, assets.font(), slot.character.name, cx, cy + NAME_OFFSET, &name_style());
    }
}

/// Names under the portraits carry a lighter shadow than the title.
fn name_style() -> TextStyle {
    TextStyle::new(theme::FONT_SIZE_NAME, theme::GOLD)
        .centered()
        .with_shadow(1.0, 1.0, theme::SHADOW)
}

impl Default for SelectionScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;

    fn pointer(x: f32, y: f32, pressed: bool) -> FrameInput {
        FrameInput {
            pointer: MouseState { x, y, left_pressed: pressed, ..Default::default() },
            ..Default::default()
        }
    }

    #[test]
    fn test_name_shadow_is_one_pixel() {
        let shadow = name_style().shadow.map(|s| (s.offset_x, s.offset_y));
        assert_eq!(shadow, Some((1.0, 1.0)));
        assert_eq!(name_style().origin, (0.5, 0.5));
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(slot_position(0), (130.0, 200.0));
        assert_eq!(slot_position(3), (670.0, 200.0));
        assert_eq!(slot_position(4), (130.0, 380.0));
        assert_eq!(slot_position(6), (490.0, 380.0));
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut scene = SelectionScene::new();
        let mut sounds = SoundBank::new();
        let mut registry = Registry::default();

        scene.update(&pointer(310.0, 200.0, false), &mut sounds, &mut registry);
        assert_eq!(scene.hovered().map(|c| c.name), Some("Cigdem"));

        scene.update(&pointer(400.0, 500.0, false), &mut sounds, &mut registry);
        assert_eq!(scene.hovered(), None);
    }

    #[test]
    fn test_click_selects_and_starts_run() {
        let mut scene = SelectionScene::new();
        let mut sounds = SoundBank::new();
        let mut registry = Registry::default();

        let command = scene.update(&pointer(490.0, 380.0, true), &mut sounds, &mut registry);
        assert_eq!(command, Some(SceneCommand::Start(SceneKey::Gameplay)));
        assert_eq!(registry.character().name, "Zeynep");
    }

    #[test]
    fn test_click_between_frames_does_nothing() {
        let mut scene = SelectionScene::new();
        let mut sounds = SoundBank::new();
        let mut registry = Registry::default();

        // Between slot 0 (70..190) and slot 1 (250..370)
        let command = scene.update(&pointer(220.0, 200.0, true), &mut sounds, &mut registry);
        assert_eq!(command, None);
        assert_eq!(registry.selected_character, None);
    }
}
