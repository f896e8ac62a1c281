//! Persisted gesture settings.
//!
//! Settings are stored as TOML. Missing sections and fields fall back to
//! the same defaults a freshly constructed gesture config uses.

use crate::input::kinds::{RectEdge, SwipeDirection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Every gesture setting of a touchable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Master switch for all gesture recognition
    pub interaction_enabled: bool,
    pub tap: TapSettings,
    pub pan: PanSettings,
    pub pinch: ToggleSettings,
    pub rotation: ToggleSettings,
    pub long_press: LongPressSettings,
    pub swipe: SwipeSettings,
    pub edge_pan: EdgePanSettings,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            interaction_enabled: true,
            tap: TapSettings::default(),
            pan: PanSettings::default(),
            pinch: ToggleSettings::default(),
            rotation: ToggleSettings::default(),
            long_press: LongPressSettings::default(),
            swipe: SwipeSettings::default(),
            edge_pan: EdgePanSettings::default(),
        }
    }
}

/// Settings for kinds that only carry an enabled flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleSettings {
    pub enabled: bool,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Tap settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapSettings {
    pub enabled: bool,
    pub number_of_taps_required: i64,
    pub number_of_touches_required: i64,
}

impl Default for TapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            number_of_taps_required: 1,
            number_of_touches_required: 1,
        }
    }
}

/// Pan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanSettings {
    pub enabled: bool,
    pub minimum_number_of_touches: i64,
    pub maximum_number_of_touches: i64,
}

impl Default for PanSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum_number_of_touches: 1,
            maximum_number_of_touches: 1,
        }
    }
}

/// Long-press settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongPressSettings {
    pub enabled: bool,
    /// Seconds
    pub minimum_press_duration: f64,
    pub number_of_taps_required: i64,
    pub number_of_touches_required: i64,
    /// Points
    pub allowable_movement: f64,
}

impl Default for LongPressSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum_press_duration: 0.25,
            number_of_taps_required: 0,
            number_of_touches_required: 1,
            allowable_movement: 10.0,
        }
    }
}

/// Swipe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    pub enabled: bool,
    pub direction: SwipeDirection,
    pub number_of_touches_required: i64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: SwipeDirection::Left,
            number_of_touches_required: 1,
        }
    }
}

/// Edge-pan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgePanSettings {
    pub enabled: bool,
    pub edges: RectEdge,
}

impl Default for EdgePanSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            edges: RectEdge::Left,
        }
    }
}

/// Get the per-user configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "touchable", "Touchable")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default location of the gesture settings file.
pub fn default_settings_path() -> PathBuf {
    get_config_dir().join("gestures.toml")
}

/// Load gesture settings. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<GestureSettings, SettingsError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(GestureSettings::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| SettingsError::IoError(e.to_string()))?;

    let settings: GestureSettings =
        toml::from_str(&content).map_err(|e| SettingsError::ParseError(e.to_string()))?;

    tracing::info!(path = %path.display(), "loaded gesture settings");
    Ok(settings)
}

/// Save gesture settings, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &GestureSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| SettingsError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| SettingsError::IoError(e.to_string()))?;

    Ok(())
}

/// Settings file errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
