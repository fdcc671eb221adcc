//! Application state and scene management
//!
//! One scene is active at a time. Switching stops the old scene (which
//! stops its music), preloads the new scene's assets and creates it fresh,
//! so restarting gameplay always starts a clean run.

use macroquad::logging::info;

use crate::assets::{AssetManifest, AssetStore};
use crate::config::GameConfig;
use crate::input::{FrameInput, InputState};
use crate::scenes::{GameplayScene, Registry, Scene, SceneCommand, SceneKey, SelectionScene};
use crate::ui::ScreenFit;

impl SceneKey {
    /// Assets that must be loaded before this scene can be created
    pub fn manifest(&self) -> AssetManifest {
        match self {
            SceneKey::Selection => AssetManifest::selection(),
            SceneKey::Gameplay => AssetManifest::gameplay(),
        }
    }
}

/// Main application state
pub struct AppState {
    pub config: GameConfig,
    pub assets: AssetStore,
    pub registry: Registry,
    pub fit: ScreenFit,
    pub input: InputState,
    scene: Scene,
    /// Runs started this session, mixed into the seed of the next one
    runs_started: u64,
}

impl AppState {
    /// App sitting on the selection screen (its assets still need `preload`)
    pub fn new(config: GameConfig) -> Self {
        let fit = ScreenFit::new(config.canvas.width, config.canvas.height);
        Self {
            config,
            assets: AssetStore::new(),
            registry: Registry::default(),
            fit,
            input: InputState::new(),
            scene: Scene::Selection(SelectionScene::new()),
            runs_started: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[cfg(test)]
    pub fn scene_key(&self) -> SceneKey {
        self.scene.key()
    }

    /// Load whatever the current scene needs
    pub async fn preload_current(&mut self) {
        let manifest = self.scene.key().manifest();
        self.assets.preload(&manifest).await;
    }

    /// Advance the active scene by one rendered frame
    pub fn update(&mut self, input: &FrameInput, frame_dt: f32) -> Option<SceneCommand> {
        match &mut self.scene {
            Scene::Selection(scene) => scene.update(input, &mut self.assets.sounds, &mut self.registry),
            Scene::Gameplay(scene) => scene.update(input, frame_dt, &mut self.assets.sounds),
        }
    }

    pub fn draw(&self) {
        match &self.scene {
            Scene::Selection(scene) => scene.draw(&self.fit, &self.assets),
            Scene::Gameplay(scene) => scene.draw(&self.fit, &self.assets),
        }
    }

    /// Carry out a scene command, loading the next scene's assets first
    pub async fn apply(&mut self, command: SceneCommand, seed: u64) {
        let SceneCommand::Start(key) = command;
        self.assets.preload(&key.manifest()).await;
        self.switch_to(key, seed);
    }

    /// Shut the current scene down and create `key` with already loaded
    /// assets
    pub fn switch_to(&mut self, key: SceneKey, seed: u64) {
        self.shutdown_scene();

        info!("Scene {} -> {}", self.scene.key().name(), key.name());
        self.scene = match key {
            SceneKey::Selection => Scene::Selection(SelectionScene::new()),
            SceneKey::Gameplay => {
                self.runs_started += 1;
                let seed = seed ^ self.runs_started.wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let character = self.registry.character();
                Scene::Gameplay(GameplayScene::new(&self.config, character, seed, &mut self.assets.sounds))
            }
        };
    }

    fn shutdown_scene(&mut self) {
        match &mut self.scene {
            Scene::Selection(_) => {}
            Scene::Gameplay(scene) => scene.shutdown(&mut self.assets.sounds),
        }
    }

    /// Stop everything before the window closes
    pub fn shutdown(&mut self) {
        self.shutdown_scene();
        self.assets.sounds.stop_all();
    }
}
