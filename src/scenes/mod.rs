//! Scenes
//!
//! A scene is one screen of the game with its own create / update / draw /
//! shutdown lifecycle. Scenes never switch themselves: `update` returns a
//! `SceneCommand` and `AppState` performs the transition, shutting the old
//! scene down first.

mod gameplay;
mod selection;

pub use gameplay::GameplayScene;
pub use selection::{slot_position, SelectionScene};

use crate::characters::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Selection,
    Gameplay,
}

impl SceneKey {
    pub fn name(&self) -> &'static str {
        match self {
            SceneKey::Selection => "CharacterSelection",
            SceneKey::Gameplay => "Gameplay",
        }
    }
}

/// Requests a scene can make of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Stop the current scene and start this one (restarting it if it is
    /// the current one)
    Start(SceneKey),
}

/// Values shared between scenes for the whole session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub selected_character: Option<Character>,
}

impl Registry {
    /// The character picked on the selection screen, or the default one
    pub fn character(&self) -> Character {
        self.selected_character.unwrap_or_default()
    }
}

/// The active scene
pub enum Scene {
    Selection(SelectionScene),
    Gameplay(GameplayScene),
}

impl Scene {
    pub fn key(&self) -> SceneKey {
        match self {
            Scene::Selection(_) => SceneKey::Selection,
            Scene::Gameplay(_) => SceneKey::Gameplay,
        }
    }
}
