//! Storage module for gesture settings.

pub mod config;

pub use config::{
    default_settings_path, load_settings, save_settings, EdgePanSettings, GestureSettings,
    LongPressSettings, PanSettings, SettingsError, SwipeSettings, TapSettings, ToggleSettings,
};
