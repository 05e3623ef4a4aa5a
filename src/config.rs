//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/ecoscope/config.toml` (XDG) or platform config dir
//! 2. Project config: `.ecoscope.toml`
//! 3. Environment variables: `ECOSCOPE_*` (nested keys separated by `__`,
//!    e.g. `ECOSCOPE_CAMERA__HCP_DISTANCE=25`)
//!
//! Every field has a default, so an empty environment loads.
//!
//! ```toml
//! [camera]
//! ecosystem_distance = 180.0
//! campaign_distance = 90.0
//! hcp_distance = 40.0
//! height_offset = 30.0
//! reorient_duration = 0.5
//! zoom_duration = 0.8
//!
//! [campaigns]
//! C042 = "Custom Campaign"
//!
//! [window]
//! title = "Ecoscope"
//! ```

use std::collections::HashMap;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::navigation::{CameraSettings, DistanceTable};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    /// Extra campaign display names, merged over the built-in table.
    #[serde(default)]
    pub campaigns: HashMap<String, String>,
    #[serde(default)]
    pub window: WindowConfig,
}

/// Camera distances and animation timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance used at the ecosystem (L1) level.
    pub ecosystem_distance: f32,
    /// Distance used at the campaign (L2) level.
    pub campaign_distance: f32,
    /// Distance used at the hcp (L3) level.
    pub hcp_distance: f32,
    /// Vertical offset added above the look-at point.
    pub height_offset: f32,
    /// Seconds for a reorientation animation.
    pub reorient_duration: f32,
    /// Seconds for a zoom-level animation.
    pub zoom_duration: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = CameraSettings::default();
        Self {
            ecosystem_distance: settings.distances.ecosystem,
            campaign_distance: settings.distances.campaign,
            hcp_distance: settings.distances.hcp,
            height_offset: settings.height_offset,
            reorient_duration: settings.reorient_duration,
            zoom_duration: settings.zoom_duration,
        }
    }
}

impl CameraConfig {
    /// Build runtime camera settings, rejecting distances that are not
    /// strictly decreasing across the zoom levels.
    pub fn settings(&self) -> Result<CameraSettings, AppError> {
        let distances = DistanceTable::new(
            self.ecosystem_distance,
            self.campaign_distance,
            self.hcp_distance,
        )
        .ok_or(AppError::InvalidCameraDistances {
            ecosystem: self.ecosystem_distance,
            campaign: self.campaign_distance,
            hcp: self.hcp_distance,
        })?;

        Ok(CameraSettings {
            distances,
            height_offset: self.height_offset,
            reorient_duration: self.reorient_duration.max(0.0),
            zoom_duration: self.zoom_duration.max(0.0),
        })
    }
}

/// Explorer window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ecoscope".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::user_config_path(), Path::new(".ecoscope.toml"))
    }

    /// Load config from explicit user and project files, plus the environment.
    ///
    /// Missing files are skipped.
    pub fn load_from(user_config: &Path, project_config: &Path) -> Result<Self, ConfigError> {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("ECOSCOPE_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Validate the loaded values.
    pub fn validate(&self) -> Result<(), AppError> {
        self.camera.settings().map(|_| ())
    }

    /// User config path: ~/.config/ecoscope/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("ecoscope").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("ecoscope").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.toml"), &dir.path().join("x.toml"))
            .unwrap();

        assert_eq!(config.camera.ecosystem_distance, 180.0);
        assert_eq!(config.camera.height_offset, 30.0);
        assert_eq!(config.window.title, "Ecoscope");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_project_overrides_user() {
        let dir = tempfile::tempdir().unwrap();
        let user = write_toml(
            &dir,
            "user.toml",
            "[camera]\nhcp_distance = 20.0\ncampaign_distance = 70.0\n",
        );
        let project = write_toml(
            &dir,
            "project.toml",
            "[camera]\nhcp_distance = 25.0\n\n[campaigns]\nC042 = \"Custom Campaign\"\n",
        );

        let config = Config::load_from(&user, &project).unwrap();
        assert_eq!(config.camera.hcp_distance, 25.0);
        assert_eq!(config.camera.campaign_distance, 70.0);
        assert_eq!(
            config.campaigns.get("C042").map(String::as_str),
            Some("Custom Campaign")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(&dir, "project.toml", "[camera]\nhcp_distance = 25.0\n");

        std::env::set_var("ECOSCOPE_CAMERA__HCP_DISTANCE", "12.5");
        let config = Config::load_from(&dir.path().join("none.toml"), &project);
        std::env::remove_var("ECOSCOPE_CAMERA__HCP_DISTANCE");

        assert_eq!(config.unwrap().camera.hcp_distance, 12.5);
    }

    #[test]
    fn test_validate_rejects_non_decreasing_distances() {
        let config = Config {
            camera: CameraConfig {
                campaign_distance: 200.0,
                ..CameraConfig::default()
            },
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidCameraDistances { .. }));
    }
}
