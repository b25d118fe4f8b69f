//! Asset cache.
//!
//! Loads the named texture/sound set once at startup and memoizes the
//! handles by file name. A file that fails to load becomes a `None` handle:
//! rendering branches on it to fall back to primitive shapes, and `play`
//! skips the cue. The game never touches storage after startup.

use std::collections::HashMap;

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use macroquad::texture::{load_texture, Texture2D};

const TEXTURE_FILES: &[&str] = &[
    "plane.png",
    "enemy_plane.png",
    "background_night.png",
    "cloud.png",
    "city.png",
];

const SOUND_FILES: &[&str] = &["shoot.wav", "explode.wav", "bomb.wav", "powerup.wav"];

pub struct Assets {
    textures: HashMap<String, Option<Texture2D>>,
    sounds: HashMap<String, Option<Sound>>,
}

impl Assets {
    /// Load every known asset, tolerating missing files.
    pub async fn load() -> Self {
        let mut assets = Self {
            textures: HashMap::new(),
            sounds: HashMap::new(),
        };
        for name in TEXTURE_FILES {
            assets.cache_texture(name).await;
        }
        for name in SOUND_FILES {
            assets.cache_sound(name).await;
        }
        assets
    }

    async fn cache_texture(&mut self, name: &str) {
        if self.textures.contains_key(name) {
            return;
        }
        let handle = match load_texture(name).await {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("texture {name:?} unavailable ({err:?}), falling back to shapes");
                None
            }
        };
        self.textures.insert(name.to_string(), handle);
    }

    async fn cache_sound(&mut self, name: &str) {
        if self.sounds.contains_key(name) {
            return;
        }
        let handle = match load_sound(name).await {
            Ok(sound) => Some(sound),
            Err(err) => {
                log::warn!("sound {name:?} unavailable ({err:?}), cue will be skipped");
                None
            }
        };
        self.sounds.insert(name.to_string(), handle);
    }

    /// The memoized texture handle, or `None` for unknown/missing files.
    pub fn texture(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name).and_then(|handle| handle.as_ref())
    }

    /// Play a sound once at the given volume; missing sounds are skipped.
    pub fn play(&self, name: &str, volume: f32) {
        if let Some(Some(sound)) = self.sounds.get(name) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }
}
