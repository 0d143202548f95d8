//! Loader for the RON settings file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::data::UnboxSettings;
use super::validation::validate_settings;

pub const SETTINGS_PATH: &str = "assets/data/settings.ron";

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct SettingsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for SettingsLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse settings from RON text. Missing fields take their defaults.
pub fn parse_settings(contents: &str, file: &str) -> Result<UnboxSettings, SettingsLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| SettingsLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load settings from disk.
/// Returns `Ok(None)` when the file does not exist.
pub fn load_settings_file(path: &Path) -> Result<Option<UnboxSettings>, SettingsLoadError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SettingsLoadError {
                file: file_name,
                message: format!("IO error: {}", e),
            });
        }
    };

    parse_settings(&contents, &file_name).map(Some)
}

/// Resolve the settings to use: file contents when present and valid,
/// defaults otherwise. Invalid fields are corrected field by field.
pub fn resolve_settings(loaded: Result<Option<UnboxSettings>, SettingsLoadError>) -> UnboxSettings {
    let settings = match loaded {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            debug!("No settings file found, using defaults");
            UnboxSettings::default()
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            UnboxSettings::default()
        }
    };

    let (settings, issues) = validate_settings(settings);
    for issue in &issues {
        warn!("Settings: {}", issue);
    }
    settings
}

pub(crate) fn load_settings(mut commands: Commands) {
    let settings = resolve_settings(load_settings_file(Path::new(SETTINGS_PATH)));
    info!("Settings loaded: {:?}", settings);
    commands.insert_resource(settings);
}
