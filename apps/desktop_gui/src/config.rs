use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const WINDOW_TITLE: &str = "String Reverser";
pub const SETTINGS_FILE: &str = "reverser.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_file: String,
    pub log_filter: String,
    pub icon_file: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: "app.log".into(),
            log_filter: "debug".into(),
            icon_file: "icon.png".into(),
            window_width: 400.0,
            window_height: 300.0,
        }
    }
}

/// Shape of `reverser.toml`; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsOverlay {
    log_file: Option<String>,
    log_filter: Option<String>,
    icon_file: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

impl Settings {
    fn apply_overlay(&mut self, overlay: SettingsOverlay) {
        if let Some(v) = overlay.log_file {
            self.log_file = v;
        }
        if let Some(v) = overlay.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = overlay.icon_file {
            self.icon_file = v;
        }
        if let Some(v) = overlay.window_width {
            self.window_width = v;
        }
        if let Some(v) = overlay.window_height {
            self.window_height = v;
        }
    }
}

/// Defaults, overridden by `reverser.toml` when present, then by environment
/// variables. CLI flags are applied on top by `main`.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    match read_settings_file(Path::new(SETTINGS_FILE)) {
        Ok(Some(overlay)) => settings.apply_overlay(overlay),
        Ok(None) => {}
        // The subscriber is not installed yet at this point.
        Err(err) => eprintln!("ignoring {SETTINGS_FILE}: {err:#}"),
    }

    if let Ok(v) = std::env::var("REVERSER_LOG_FILE") {
        settings.log_file = v;
    }
    if let Ok(v) = std::env::var("APP__LOG_FILE") {
        settings.log_file = v;
    }
    if let Ok(v) = std::env::var("REVERSER_LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Ok(v) = std::env::var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Ok(v) = std::env::var("REVERSER_ICON_FILE") {
        settings.icon_file = v;
    }
    if let Ok(v) = std::env::var("APP__ICON_FILE") {
        settings.icon_file = v;
    }

    settings
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<SettingsOverlay>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };

    let overlay = toml::from_str(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    Ok(Some(overlay))
}
