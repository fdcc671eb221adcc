//! Sound playback
//!
//! Thin wrapper over macroquad's audio keyed by asset name. Keys that never
//! loaded are silently ignored so a missing voice line never stops a scene.

use std::collections::HashMap;

use macroquad::audio::{play_sound, stop_sound, PlaySoundParams, Sound};

#[derive(Default)]
pub struct SoundBank {
    sounds: HashMap<String, Sound>,
    /// Keys started since the last `stop_all`
    playing: Vec<String>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, sound: Sound) {
        self.sounds.insert(key.to_string(), sound);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sounds.contains_key(key)
    }

    /// Play a one-shot from the start, cutting off the previous play of the
    /// same sound
    pub fn play(&mut self, key: &str) {
        self.start(key, false, 1.0);
    }

    pub fn play_looped(&mut self, key: &str, volume: f32) {
        self.start(key, true, volume);
    }

    fn start(&mut self, key: &str, looped: bool, volume: f32) {
        let Some(sound) = self.sounds.get(key) else { return };
        stop_sound(sound);
        play_sound(sound, PlaySoundParams { looped, volume: volume.clamp(0.0, 1.0) });
        if !self.playing.iter().any(|k| k == key) {
            self.playing.push(key.to_string());
        }
    }

    pub fn stop(&mut self, key: &str) {
        if let Some(sound) = self.sounds.get(key) {
            stop_sound(sound);
        }
        self.playing.retain(|k| k != key);
    }

    pub fn stop_all(&mut self) {
        for key in std::mem::take(&mut self.playing) {
            if let Some(sound) = self.sounds.get(&key) {
                stop_sound(sound);
            }
        }
    }
}
