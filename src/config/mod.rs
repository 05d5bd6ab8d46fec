use anyhow::{Context, Result};
use arcspin::indicator::{DEFAULT_CYCLE, DEFAULT_FADE, Style, Timing};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ui::theme::ThemeName;

const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub indicator: Style,
    pub cycle_secs: f64,
    pub fade_secs: f64,
    pub fps: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            indicator: Style::default(),
            cycle_secs: DEFAULT_CYCLE.as_secs_f64(),
            fade_secs: DEFAULT_FADE.as_secs_f64(),
            fps: 30,
            log_file: None,
        }
    }
}

impl Config {
    pub fn timing(&self) -> Timing {
        Timing::new(self.cycle_secs, self.fade_secs)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.clamp(1, MAX_FPS)))
    }
}

fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not find config directory")?
        .join("arcspin");

    Ok(config_dir.join("config.yml"))
}

pub fn load_or_create_config() -> Result<Config> {
    let config_path = get_config_path()?;
    load_or_create_config_at(&config_path)
}

pub fn load_or_create_config_at(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = Config::default();
        let yaml =
            serde_yaml::to_string(&default_config).context("Failed to serialize default config")?;

        fs::write(config_path, yaml).context("Failed to write default config file")?;

        eprintln!("Config file created at: {}", config_path.display());
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(config_path).context("Failed to read config file")?;

    let config: Config = serde_yaml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcspin::indicator::MIN_DURATION;
    use ratatui::style::Color;

    #[test]
    fn creates_default_config_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");

        let config = load_or_create_config_at(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = load_or_create_config_at(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "theme: tokyo_night\nindicator:\n  foreground: '#ff9e64'\ncycle_secs: 2.5\n",
        )
        .unwrap();

        let config = load_or_create_config_at(&path).unwrap();
        assert_eq!(config.theme, ThemeName::TokyoNight);
        assert_eq!(config.indicator.foreground, Color::Rgb(0xff, 0x9e, 0x64));
        assert_eq!(config.indicator.background, Color::Reset);
        assert_eq!(config.timing().cycle, Duration::from_millis(2500));
        assert_eq!(config.fps, 30);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "indicator:\n  background: '#12'\n").unwrap();

        let err = load_or_create_config_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("malformed hex color"));
    }

    #[test]
    fn durations_and_fps_are_clamped() {
        let config = Config {
            cycle_secs: -4.0,
            fade_secs: 0.0,
            fps: 0,
            ..Config::default()
        };
        assert_eq!(config.timing().cycle, MIN_DURATION);
        assert_eq!(config.timing().fade, MIN_DURATION);
        assert_eq!(config.frame_interval(), Duration::from_secs(1));

        let config = Config {
            fps: 10_000,
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(4));
    }
}
