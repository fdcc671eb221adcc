//! Asset loading
//!
//! Each scene declares what it needs in an `AssetManifest`; `AssetStore`
//! preloads it once and keeps it for the rest of the session, so the
//! character portraits loaded by the selection screen are still around
//! when gameplay draws the chosen one.
//!
//! Everything goes through macroquad's `load_file`, which reads from disk
//! natively and fetches over HTTP on WASM. Images are decoded with the
//! `image` crate (macroquad alone has no JPEG support). A missing or broken
//! file is logged and skipped: the renderer draws a placeholder instead and
//! the sound bank stays silent for that key.

use std::collections::HashMap;
use std::fmt;

use macroquad::audio::load_sound_from_bytes;
use macroquad::file::load_file;
use macroquad::logging::{info, warn};
use macroquad::text::{load_ttf_font_from_bytes, Font};
use macroquad::texture::{FilterMode, Texture2D};

use crate::audio::SoundBank;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum AssetError {
    /// File could not be read or fetched
    Io(String),
    /// File was read but is not a usable image/sound/font
    Decode(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "IO error: {}", msg),
            AssetError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e.to_string())
    }
}

// =============================================================================
// Manifest
// =============================================================================

/// One file to preload under a lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    pub key: &'static str,
    pub path: &'static str,
}

const fn entry(key: &'static str, path: &'static str) -> AssetEntry {
    AssetEntry { key, path }
}

pub const UI_FONT_PATH: &str = "assets/fonts/ui.ttf";

/// Portrait image for every character, keyed by sprite name
const PORTRAITS: [AssetEntry; 7] = [
    entry("sila", "assets/img/sila.png"),
    entry("cigdem", "assets/img/cigdem.png"),
    entry("ilker", "assets/img/ilker.png"),
    entry("eren", "assets/img/eren.png"),
    entry("beyza", "assets/img/beyza.png"),
    entry("ali", "assets/img/ali.png"),
    entry("zeynep", "assets/img/zeynep.png"),
];

const VOICES: [AssetEntry; 6] = [
    entry("zeynep-sound", "assets/audio/zeynep.ogg"),
    entry("cigdem-sound", "assets/audio/cigdem.ogg"),
    entry("sila-sound", "assets/audio/sila.ogg"),
    entry("eren-sound", "assets/audio/eren.ogg"),
    entry("ali-sound", "assets/audio/ali.ogg"),
    entry("ilker-sound", "assets/audio/ilker.ogg"),
];

const ENEMIES: [AssetEntry; 5] = [
    entry("ugur", "assets/img/ugur.png"),
    entry("hursit", "assets/img/hursit.png"),
    entry("muko", "assets/img/muko.png"),
    entry("kader", "assets/img/kader.png"),
    entry("zehra", "assets/img/zehra.png"),
];

pub const BACKGROUND_MUSIC: &str = "background-music";

/// What a scene needs loaded before it can start
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    pub textures: Vec<AssetEntry>,
    pub sounds: Vec<AssetEntry>,
    pub font: Option<&'static str>,
}

impl AssetManifest {
    /// Portraits, castle backdrop and character voices
    pub fn selection() -> Self {
        let mut textures = PORTRAITS.to_vec();
        textures.push(entry("kale-bg", "assets/img/kale.jpg"));
        Self {
            textures,
            sounds: VOICES.to_vec(),
            font: Some(UI_FONT_PATH),
        }
    }

    /// Wall backdrop, ground, enemies, heart, stone and music
    pub fn gameplay() -> Self {
        let mut textures = vec![
            entry("background", "assets/img/duvar.jpg"),
            entry("platform", "assets/img/sur.png"),
        ];
        textures.extend_from_slice(&ENEMIES);
        textures.push(entry("health", "assets/img/kalp.png"));
        textures.push(entry("tas", "assets/img/tas.png"));

        Self {
            textures,
            sounds: vec![entry(BACKGROUND_MUSIC, "assets/audio/oyunmuzik.ogg")],
            font: Some(UI_FONT_PATH),
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len() + self.sounds.len() + self.font.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Store
// =============================================================================

/// Decoded RGBA8 image ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u16,
    pub height: u16,
    pub rgba: Vec<u8>,
}

/// Decode PNG or JPEG bytes to RGBA8
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    let width = u16::try_from(w).map_err(|_| AssetError::Decode(format!("image too wide: {}", w)))?;
    let height = u16::try_from(h).map_err(|_| AssetError::Decode(format!("image too tall: {}", h)))?;
    Ok(DecodedImage { width, height, rgba: rgba.into_raw() })
}

async fn read(path: &str) -> Result<Vec<u8>, AssetError> {
    load_file(path).await.map_err(|e| AssetError::Io(format!("{}: {}", path, e)))
}

/// Everything loaded so far
#[derive(Default)]
pub struct AssetStore {
    textures: HashMap<String, Texture2D>,
    pub sounds: SoundBank,
    font: Option<Font>,
    font_tried: bool,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every entry not already loaded. Returns how many new assets
    /// were loaded; failures are logged and skipped.
    pub async fn preload(&mut self, manifest: &AssetManifest) -> usize {
        let mut loaded = 0;

        for asset in &manifest.textures {
            if self.textures.contains_key(asset.key) {
                continue;
            }
            match self.load_texture(asset.path).await {
                Ok(texture) => {
                    self.textures.insert(asset.key.to_string(), texture);
                    loaded += 1;
                }
                Err(e) => warn!("Texture '{}' unavailable, using placeholder: {}", asset.key, e),
            }
        }

        for asset in &manifest.sounds {
            if self.sounds.contains(asset.key) {
                continue;
            }
            match read(asset.path).await {
                Ok(bytes) => match load_sound_from_bytes(&bytes).await {
                    Ok(sound) => {
                        self.sounds.insert(asset.key, sound);
                        loaded += 1;
                    }
                    Err(e) => warn!("Sound '{}' could not be decoded: {}", asset.key, e),
                },
                Err(e) => warn!("Sound '{}' unavailable: {}", asset.key, e),
            }
        }

        if let Some(path) = manifest.font {
            if !self.font_tried {
                self.font_tried = true;
                match read(path).await {
                    Ok(bytes) => match load_ttf_font_from_bytes(&bytes) {
                        Ok(font) => {
                            self.font = Some(font);
                            loaded += 1;
                        }
                        Err(e) => warn!("Font {} could not be parsed: {}", path, e),
                    },
                    Err(e) => warn!("Font unavailable, using built-in font: {}", e),
                }
            }
        }

        info!("Preloaded {} of {} assets", loaded, manifest.len());
        loaded
    }

    async fn load_texture(&self, path: &str) -> Result<Texture2D, AssetError> {
        let bytes = read(path).await?;
        let image = decode_image(&bytes)?;
        let texture = Texture2D::from_rgba8(image.width, image.height, &image.rgba);
        texture.set_filter(FilterMode::Linear);
        Ok(texture)
    }

    pub fn texture(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }
}
