use std::{
    fs, io,
    path::{Path, PathBuf},
};

use egg_core::{ticker::MAX_TICK_HZ, TickerConfig};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "egg_timer.toml";
const ENV_PREFIX: &str = "EGG_TIMER__";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
    pub tick_hz: u32,
    pub tick_increment: f32,
    pub log_filter: String,
    pub title: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let ticker = TickerConfig::default();
        Self {
            window_width: 400.0,
            window_height: 600.0,
            min_window_width: 300.0,
            min_window_height: 300.0,
            tick_hz: ticker.hz,
            tick_increment: ticker.increment,
            log_filter: "info".into(),
            title: None,
        }
    }
}

impl Settings {
    pub fn ticker_config(&self) -> TickerConfig {
        TickerConfig {
            hz: self.tick_hz,
            increment: self.tick_increment,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    window_width: Option<f32>,
    window_height: Option<f32>,
    min_window_width: Option<f32>,
    min_window_height: Option<f32>,
    tick_hz: Option<u32>,
    tick_increment: Option<f32>,
    log_filter: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolved settings plus anything that was ignored on the way. Logging is not
/// up yet while settings load, so problems are reported afterwards.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

pub fn load_settings(config_path: Option<&Path>) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    match read_settings_file(path) {
        Ok(Some(file_cfg)) => apply_file_settings(&mut settings, file_cfg),
        Ok(None) if config_path.is_some() => {
            warnings.push(format!("config file '{}' not found", path.display()));
        }
        Ok(None) => {}
        Err(err) => warnings.push(format!("{err}; using defaults")),
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok(), &mut warnings);
    validate(&mut settings, &mut warnings);

    LoadedSettings { settings, warnings }
}

fn read_settings_file(path: &Path) -> Result<Option<FileSettings>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str::<FileSettings>(&raw)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file_cfg.min_window_width {
        settings.min_window_width = v;
    }
    if let Some(v) = file_cfg.min_window_height {
        settings.min_window_height = v;
    }
    if let Some(v) = file_cfg.tick_hz {
        settings.tick_hz = v;
    }
    if let Some(v) = file_cfg.tick_increment {
        settings.tick_increment = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.title {
        settings.title = Some(v);
    }
}

fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
) {
    let var = |name: &str| {
        let key = format!("{ENV_PREFIX}{name}");
        lookup(&key)
            .filter(|value| !value.trim().is_empty())
            .map(|value| (key, value))
    };

    if let Some((key, v)) = var("WINDOW_WIDTH") {
        parse_into(&key, &v, &mut settings.window_width, warnings);
    }
    if let Some((key, v)) = var("WINDOW_HEIGHT") {
        parse_into(&key, &v, &mut settings.window_height, warnings);
    }
    if let Some((key, v)) = var("TICK_HZ") {
        parse_into(&key, &v, &mut settings.tick_hz, warnings);
    }
    if let Some((key, v)) = var("TICK_INCREMENT") {
        parse_into(&key, &v, &mut settings.tick_increment, warnings);
    }
    if let Some((_, v)) = var("LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some((_, v)) = var("TITLE") {
        settings.title = Some(v);
    }
}

fn parse_into<T: std::str::FromStr>(
    key: &str,
    raw: &str,
    slot: &mut T,
    warnings: &mut Vec<String>,
) {
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(_) => warnings.push(format!("ignoring {key}={raw}: not a valid value")),
    }
}

fn validate(settings: &mut Settings, warnings: &mut Vec<String>) {
    let defaults = Settings::default();

    if settings.tick_hz == 0 {
        warnings.push(format!("tick_hz must be at least 1; using {}", defaults.tick_hz));
        settings.tick_hz = defaults.tick_hz;
    } else if settings.tick_hz > MAX_TICK_HZ {
        warnings.push(format!(
            "tick_hz {} above {MAX_TICK_HZ}; capping",
            settings.tick_hz
        ));
        settings.tick_hz = MAX_TICK_HZ;
    }
    if !(settings.tick_increment > 0.0 && settings.tick_increment <= 1.0) {
        warnings.push(format!(
            "tick_increment {} outside (0, 1]; using {}",
            settings.tick_increment, defaults.tick_increment
        ));
        settings.tick_increment = defaults.tick_increment;
    }

    for (name, value, default) in [
        ("window_width", &mut settings.window_width, defaults.window_width),
        ("window_height", &mut settings.window_height, defaults.window_height),
        (
            "min_window_width",
            &mut settings.min_window_width,
            defaults.min_window_width,
        ),
        (
            "min_window_height",
            &mut settings.min_window_height,
            defaults.min_window_height,
        ),
    ] {
        if !(value.is_finite() && *value > 0.0) {
            warnings.push(format!("{name} must be positive; using {default}"));
            *value = default;
        }
    }

    for (name, min, size) in [
        (
            "min_window_width",
            &mut settings.min_window_width,
            settings.window_width,
        ),
        (
            "min_window_height",
            &mut settings.min_window_height,
            settings.window_height,
        ),
    ] {
        if *min > size {
            warnings.push(format!("{name} {min} larger than the window; using {size}"));
            *min = size;
        }
    }

    if settings.log_filter.trim().is_empty() {
        settings.log_filter = defaults.log_filter;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
