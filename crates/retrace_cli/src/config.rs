//! Retrace configuration file handling

use anyhow::{Context, Result};
use retrace_core::KeyChord;
use retrace_recorder::{CaptureConfig, SessionCommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "retrace.toml";

/// Top-level Retrace configuration (retrace.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RetraceConfig {
    #[serde(default)]
    pub capture: CaptureSection,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub keys: KeysConfig,
}

/// Sampling configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct CaptureSection {
    /// Ticks that must pass between two recorded samples
    #[serde(default = "default_throttle")]
    pub throttle_frames: u64,
}

fn default_throttle() -> u64 {
    1
}

impl Default for CaptureSection {
    fn default() -> Self {
        Self {
            throttle_frames: default_throttle(),
        }
    }
}

/// Marker appearance
#[derive(Debug, Deserialize, Serialize)]
pub struct RenderSection {
    #[serde(default = "default_radius")]
    pub marker_radius: f32,
}

fn default_radius() -> f32 {
    50.0
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            marker_radius: default_radius(),
        }
    }
}

/// Key bindings for session commands, as `[ctrl+|shift+|alt+]<key>`
#[derive(Debug, Deserialize, Serialize)]
pub struct KeysConfig {
    #[serde(default = "default_reset_key")]
    pub reset: String,
    #[serde(default = "default_clear_key")]
    pub clear: String,
    #[serde(default = "default_replay_key")]
    pub replay: String,
    #[serde(default = "default_export_key")]
    pub export: String,
}

fn default_reset_key() -> String {
    "r".to_string()
}

fn default_clear_key() -> String {
    "c".to_string()
}

fn default_replay_key() -> String {
    "space".to_string()
}

fn default_export_key() -> String {
    "ctrl+c".to_string()
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            reset: default_reset_key(),
            clear: default_clear_key(),
            replay: default_replay_key(),
            export: default_export_key(),
        }
    }
}

impl KeysConfig {
    /// Parse every binding into a chord paired with its command
    pub fn chords(&self) -> Result<Vec<(KeyChord, SessionCommand)>> {
        [
            (&self.reset, SessionCommand::Reset),
            (&self.clear, SessionCommand::ClearVisible),
            (&self.replay, SessionCommand::StartReplay),
            (&self.export, SessionCommand::Export),
        ]
        .into_iter()
        .map(|(binding, command)| -> Result<(KeyChord, SessionCommand)> {
            let chord = binding
                .parse::<KeyChord>()
                .with_context(|| format!("Invalid binding for `{command}`"))?;
            Ok((chord, command))
        })
        .collect()
    }
}

impl RetraceConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `retrace.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = Path::new(CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                local.to_path_buf()
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RetraceConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Settings for the capture controller
    pub fn capture_config(&self) -> CaptureConfig {
        CaptureConfig::default()
            .with_throttle(self.capture.throttle_frames)
            .with_marker_radius(self.render.marker_radius)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the default config into `dir`, refusing to overwrite one
    /// that is already there.
    pub fn write_default(dir: &Path) -> Result<PathBuf> {
        let target = dir.join(CONFIG_FILE);
        if target.exists() {
            anyhow::bail!("{} already exists", target.display());
        }

        fs::write(&target, Self::default().to_toml()?)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = RetraceConfig::from_toml("").unwrap();
        assert_eq!(config.capture.throttle_frames, 1);
        assert_eq!(config.render.marker_radius, 50.0);
        assert_eq!(config.keys.replay, "space");
    }

    #[test]
    fn test_partial_sections() {
        let config = RetraceConfig::from_toml(
            r#"
            [capture]
            throttle_frames = 4

            [keys]
            replay = "p"
            "#,
        )
        .unwrap();

        let capture = config.capture_config();
        assert_eq!(capture.throttle_frames, 4);
        assert_eq!(capture.marker_radius, 50.0);
        assert_eq!(config.keys.replay, "p");
        assert_eq!(config.keys.export, "ctrl+c");
    }

    #[test]
    fn test_bad_binding_is_reported() {
        let mut config = RetraceConfig::default();
        config.keys.clear = "hyper+c".to_string();

        let err = config.keys.chords().unwrap_err();
        assert!(format!("{err:#}").contains("clear"));
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let text = RetraceConfig::default().to_toml().unwrap();
        let config = RetraceConfig::from_toml(&text).unwrap();
        assert_eq!(config.keys.export, "ctrl+c");
    }

    #[test]
    fn test_write_default_creates_loadable_file() {
        let dir = tempfile::tempdir().unwrap();

        let written = RetraceConfig::write_default(dir.path()).unwrap();
        assert_eq!(written, dir.path().join(CONFIG_FILE));

        let config = RetraceConfig::load(Some(&written)).unwrap();
        assert_eq!(config.capture.throttle_frames, 1);
        assert_eq!(config.keys.replay, "space");
    }

    #[test]
    fn test_write_default_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(CONFIG_FILE);
        fs::write(&target, "[capture]\nthrottle_frames = 9\n").unwrap();

        let err = RetraceConfig::write_default(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let config = RetraceConfig::load(Some(&target)).unwrap();
        assert_eq!(config.capture.throttle_frames, 9);
    }
}
