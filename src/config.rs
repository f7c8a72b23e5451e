//! Game Configuration
//!
//! Settings are read from JSON. The bundled `assets/config/game.json` is
//! loaded first, then `~/.petals/config.json` replaces it when it exists.
//! Missing fields fall back to [`GameConfig::default`].

use sdl2::pixels::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Bundled config shipped next to the assets
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/game.json";

/// RGB triple as written in the JSON file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::RGB(rgb.0, rgb.1, rgb.2)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub text_color: Rgb,
    pub input_color: Rgb,
    /// Root directory for `dice/` and `sounds/`
    pub asset_dir: PathBuf,
    pub target_fps: u32,
    /// SDL2_mixer volume, 0-128
    pub sound_volume: i32,
    /// Fixed dice seed; a random one is picked (and logged) when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Petals Around the Rose".to_string(),
            width: 800,
            height: 600,
            background: Rgb(255, 203, 203), // Pastel pink
            text_color: Rgb(255, 0, 0),
            input_color: Rgb(0, 0, 0),
            asset_dir: PathBuf::from("assets"),
            target_fps: 60,
            sound_volume: 64,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: GameConfig = serde_json::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Per-user override location
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".petals/config.json"))
    }

    /// Loads the user config, then the bundled one, then defaults.
    ///
    /// A file that exists but fails to parse is logged and skipped.
    pub fn load() -> Self {
        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(BUNDLED_CONFIG_PATH)));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        Self::default()
    }

    pub fn dice_image_path(&self, face: u8) -> PathBuf {
        self.asset_dir.join("dice").join(format!("{}.png", face))
    }

    pub fn sound_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join("sounds").join(format!("{}.mp3", name))
    }

    fn sanitized(mut self) -> Self {
        self.sound_volume = self.sound_volume.clamp(0, 128);
        self.target_fps = self.target_fps.clamp(1, 240);
        self
    }
}
