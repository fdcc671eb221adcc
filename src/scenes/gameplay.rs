//! Gameplay screen
//!
//! Owns one `RunState` and wires it to the outside world: keyboard into the
//! simulation, background music, the HUD button and the game over buttons.

use macroquad::logging::info;

use super::{SceneCommand, SceneKey};
use crate::assets::{AssetStore, BACKGROUND_MUSIC};
use crate::audio::SoundBank;
use crate::characters::Character;
use crate::config::GameConfig;
use crate::game::renderer;
use crate::game::RunState;
use crate::input::FrameInput;
use crate::ui::{Button, Rect, ScreenFit};

pub struct GameplayScene {
    run: RunState,
    /// Score shown in the HUD, refreshed from score events
    hud_score: u32,
    /// "Karakterler" in the HUD
    select_button: Button,
    /// "Tekrar Dene" on the game over panel
    retry_button: Button,
    /// "Karakterler" on the game over panel
    game_over_select_button: Button,
}

impl GameplayScene {
    /// Create the scene and start the music
    pub fn new(config: &GameConfig, character: Character, seed: u64, sounds: &mut SoundBank) -> Self {
        sounds.play_looped(BACKGROUND_MUSIC, config.audio.music_volume);
        info!("Starting run as {} (seed {})", character.name, seed);

        Self {
            run: RunState::new(config, character, seed),
            hud_score: 0,
            select_button: Button::new(Rect::from_origin(780.0, 30.0, 200.0, 40.0, 1.0, 0.5), "Karakterler")
                .with_font_size(20.0),
            retry_button: Button::new(Rect::from_center(400.0, 300.0, 250.0, 50.0), "Tekrar Dene"),
            game_over_select_button: Button::new(Rect::from_center(400.0, 370.0, 250.0, 50.0), "Karakterler"),
        }
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn update(&mut self, input: &FrameInput, frame_dt: f32, sounds: &mut SoundBank) -> Option<SceneCommand> {
        self.run.update(input.controls, frame_dt);
        self.handle_events(sounds);

        let mut command = None;
        if self.select_button.update(&input.pointer).clicked {
            command = Some(SceneCommand::Start(SceneKey::Selection));
        }

        if self.run.is_game_over() {
            if self.retry_button.update(&input.pointer).clicked {
                command = Some(SceneCommand::Start(SceneKey::Gameplay));
            }
            if self.game_over_select_button.update(&input.pointer).clicked {
                command = Some(SceneCommand::Start(SceneKey::Selection));
            }
        }

        if command.is_some() {
            sounds.stop(BACKGROUND_MUSIC);
        }
        command
    }

    fn handle_events(&mut self, sounds: &mut SoundBank) {
        let events = &mut self.run.events;

        for hit in events.player_hit.drain() {
            info!("Player hit ({} lives left{})", hit.lives_left, if hit.in_void { ", in the void" } else { "" });
        }
        for kill in events.enemy_killed.drain() {
            info!("Knocked out {:?} at ({:.0}, {:.0})", kill.kind, kill.x, kill.y);
        }
        for gained in events.life_gained.drain() {
            info!("Life gained, now {}", gained.lives);
        }
        // Only the latest score matters
        if let Some(changed) = events.score_changed.drain().last() {
            self.hud_score = changed.score;
        }

        for over in events.game_over.drain() {
            info!("Game over, final score {}", over.score);
            sounds.stop(BACKGROUND_MUSIC);
        }
    }

    pub fn draw(&self, fit: &ScreenFit, assets: &AssetStore) {
        renderer::draw_run(fit, assets, &self.run);
        renderer::draw_hud(fit, assets, &self.run, self.hud_score, &self.select_button);

        if self.run.is_game_over() {
            renderer::draw_game_over(fit, assets, &self.retry_button, &self.game_over_select_button);
        }
    }

    /// Stop music, timers and enemies before the scene goes away
    pub fn shutdown(&mut self, sounds: &mut SoundBank) {
        sounds.stop(BACKGROUND_MUSIC);
        self.run.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;

    const DT: f32 = 1.0 / 60.0;

    fn scene() -> (GameplayScene, SoundBank) {
        let mut sounds = SoundBank::new();
        let scene = GameplayScene::new(&GameConfig::default(), Character::default(), 7, &mut sounds);
        (scene, sounds)
    }

    fn click(x: f32, y: f32) -> FrameInput {
        FrameInput {
            pointer: MouseState { x, y, left_pressed: true, ..Default::default() },
            ..Default::default()
        }
    }

    #[test]
    fn test_hud_button_goes_to_selection() {
        let (mut scene, mut sounds) = scene();
        let command = scene.update(&click(680.0, 30.0), DT, &mut sounds);
        assert_eq!(command, Some(SceneCommand::Start(SceneKey::Selection)));
    }

    #[test]
    fn test_game_over_buttons_only_when_over() {
        let mut config = GameConfig::default();
        config.player.start_lives = 1;
        let mut sounds = SoundBank::new();
        let mut scene = GameplayScene::new(&config, Character::default(), 7, &mut sounds);
        assert_eq!(scene.update(&click(400.0, 300.0), DT, &mut sounds), None);

        scene.run.hit_player(false);
        assert!(scene.run().is_game_over());

        assert_eq!(
            scene.update(&click(400.0, 300.0), DT, &mut sounds),
            Some(SceneCommand::Start(SceneKey::Gameplay))
        );
        assert_eq!(
            scene.update(&click(400.0, 370.0), DT, &mut sounds),
            Some(SceneCommand::Start(SceneKey::Selection))
        );
    }

    #[test]
    fn test_hud_score_follows_score_events() {
        let (mut scene, mut sounds) = scene();
        let run_right = FrameInput {
            controls: crate::input::Controls { right: true, ..Default::default() },
            ..Default::default()
        };
        for _ in 0..90 {
            scene.update(&run_right, DT, &mut sounds);
        }
        assert!(scene.run().score() > 0);
        assert_eq!(scene.hud_score, scene.run().score());
    }

    #[test]
    fn test_events_are_drained_each_frame() {
        let (mut scene, mut sounds) = scene();
        scene.update(&FrameInput::default(), DT, &mut sounds);
        assert!(scene.run().events.score_changed.is_empty());
        assert!(scene.run().events.player_hit.is_empty());
    }
}
