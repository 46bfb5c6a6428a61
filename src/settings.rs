//! Game settings and preferences
//!
//! Persisted in LocalStorage as JSON. Missing or unreadable data falls back
//! to defaults.

use serde::{Deserialize, Serialize};

use crate::input::InputState;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all sound
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Input ===
    /// Keep the pointer "pressed" after release, so the guide line stays
    /// visible once the player has clicked (classic behavior)
    pub sticky_press: bool,
    /// Follow the pointer while dragging, not only on press
    pub drag_steering: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,

            sticky_press: false,
            drag_steering: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bubble_pop_settings";

    /// Fresh pointer state honoring the input preferences
    pub fn input_state(&self) -> InputState {
        InputState::new(self.sticky_press, self.drag_steering)
    }

    /// Parse settings JSON, clamping volumes into range
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
                settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
                Some(settings)
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                None
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fix_release() {
        let settings = Settings::default();
        assert!(!settings.sticky_press);
        assert!(!settings.muted);
    }

    #[test]
    fn test_roundtrip_json() {
        let settings = Settings {
            sticky_press: true,
            muted: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), Some(settings));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"sticky_press": true}"#).unwrap();
        assert!(settings.sticky_press);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_volume_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 3.5, "sfx_volume": -1}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_input_state_follows_settings() {
        let settings = Settings {
            sticky_press: true,
            drag_steering: false,
            ..Default::default()
        };
        let input = settings.input_state();
        assert!(input.sticky_press);
        assert!(!input.drag_steering);
        assert!(!input.pressed);
    }

    #[test]
    fn test_corrupt_json() {
        assert_eq!(Settings::from_json("not json"), None);
    }
}
