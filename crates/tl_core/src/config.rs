use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::ViewExtent;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "torchlit.ron";

/// Error type for loading the demo configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Ron(ron::error::SpannedError),
    /// Parsed fine but a value is out of range.
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Ron(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON parse error: {}", e),
            Self::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Ron(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

/// Window settings. The window size is also the size of the camera view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Camera Following Player".into(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Player circle settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Circle radius in pixels, also the clamp margin against the map edge.
    pub radius: f32,
    /// Pixels per second along each pressed axis.
    pub speed: f32,
    /// Initial position in map space, clamped before the first frame.
    pub spawn: (f32, f32),
    /// Scale diagonal movement down to `speed`. Off by default.
    pub normalize_diagonal: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            speed: 200.0,
            spawn: (400.0, 300.0),
            normalize_diagonal: false,
        }
    }
}

/// Light overlay settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub radius: f32,
    /// Alpha of the darkness outside the light, 255 is pitch black.
    pub opacity: u8,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            opacity: 255,
        }
    }
}

/// Top-level demo configuration, read from [`CONFIG_FILE`] if present.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub map_path: PathBuf,
    pub player: PlayerConfig,
    pub light: LightConfig,
    /// Rate of the fixed simulation step.
    pub timestep_hz: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            map_path: PathBuf::from("map.png"),
            player: PlayerConfig::default(),
            light: LightConfig::default(),
            timestep_hz: 60.0,
        }
    }
}

impl DemoConfig {
    /// Parse a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: DemoConfig = ron::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the app cannot start with.
    ///
    /// Comparisons are written so that NaN fails them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep_hz.is_finite() && self.timestep_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "timestep_hz must be a positive number, got {}",
                self.timestep_hz
            )));
        }
        let window = &self.window;
        if !(window.width.is_finite() && window.width > 0.0)
            || !(window.height.is_finite() && window.height > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                window.width, window.height
            )));
        }
        for (name, value) in [
            ("player.radius", self.player.radius),
            ("player.speed", self.player.speed),
            ("light.radius", self.light.radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Like [`DemoConfig::load`], but a missing file yields the defaults.
    ///
    /// The boolean reports whether the file was found.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if !path.exists() {
            return Ok((Self::default(), false));
        }
        Self::load(path).map(|config| (config, true))
    }

    pub fn view_extent(&self) -> ViewExtent {
        ViewExtent::from_size(self.window.width, self.window.height)
    }

    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.player.spawn.0, self.player.spawn.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_original_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.view_extent(), ViewExtent::new(400.0, 300.0));
        assert_eq!(config.spawn_point(), Vec2::new(400.0, 300.0));
        assert_eq!(config.player.radius, 20.0);
        assert_eq!(config.player.speed, 200.0);
        assert!(!config.player.normalize_diagonal);
        assert_eq!(config.map_path, PathBuf::from("map.png"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let (config, found) = DemoConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert!(!found);
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn partial_file_fills_gaps_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "(player: (speed: 350.0), light: (opacity: 180))").unwrap();

        let (config, found) = DemoConfig::load_or_default(&path).unwrap();
        assert!(found);
        assert_eq!(config.player.speed, 350.0);
        assert_eq!(config.player.radius, 20.0);
        assert_eq!(config.light.opacity, 180);
        assert_eq!(config.light.radius, 200.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn malformed_file_is_a_ron_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "(player: (speed: \"fast\"))").unwrap();

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Ron(_)));
    }

    #[test]
    fn zero_timestep_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "(timestep_hz: 0.0)").unwrap();

        let err = DemoConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("timestep_hz"));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = DemoConfig::default();
        config.timestep_hz = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = DemoConfig::default();
        config.window.height = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = DemoConfig::default();
        config.player.speed = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = DemoConfig::default();
        config.light.radius = -5.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }
}
