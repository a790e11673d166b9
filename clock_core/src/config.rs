//! Clock configuration
//!
//! `ClockOptions` is the single value a clock is built from. It can be read
//! from a TOML file in the per-user config directory; every field falls back
//! to its default when missing.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::angles::SweepMode;
use crate::geometry::{ClockStyle, GeometryConfig, HandKind, HandSizes, Point, RectSize};
use crate::pointer::InteractionMode;
use crate::scene::SceneLayout;

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    NoConfigDir,
    /// IO error while reading config
    Io(io::Error),
    /// Failed to parse config file
    Parse(toml::de::Error),
    /// Values that cannot build a clock
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Logical size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Dial dimensions; the center comes from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialSettings {
    pub radius: f32,
    pub tick: RectSize,
    pub hands: HandSizes,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            radius: 300.0,
            tick: RectSize::new(16.0, 42.0),
            hands: HandSizes::default(),
        }
    }
}

/// Everything needed to construct a clock, passed once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockOptions {
    pub viewport: Viewport,
    /// Backing-store pixels per logical pixel
    pub resolution: f32,
    pub dial: DialSettings,
    pub style: ClockStyle,
    pub layout: SceneLayout,
    pub interaction: InteractionMode,
    pub sweep: SweepMode,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            resolution: 1.0,
            dial: DialSettings::default(),
            style: ClockStyle::default(),
            layout: SceneLayout::default(),
            interaction: InteractionMode::default(),
            sweep: SweepMode::default(),
        }
    }
}

impl ClockOptions {
    /// Defaults sized to a viewport
    pub fn for_viewport(width: f32, height: f32, resolution: f32) -> Self {
        Self {
            viewport: Viewport { width, height },
            resolution,
            ..Self::default()
        }
    }

    /// Default options that keep the window setup when it is still usable
    ///
    /// A positive viewport and resolution survive; everything else is reset.
    /// The result always passes [`ClockOptions::validate`].
    pub fn fallback(&self) -> Self {
        let defaults = Self::default();
        Self {
            viewport: if self.viewport.is_positive() {
                self.viewport
            } else {
                defaults.viewport
            },
            resolution: if self.resolution > 0.0 {
                self.resolution
            } else {
                defaults.resolution
            },
            ..defaults
        }
    }

    /// Dial geometry centered in the viewport
    pub fn geometry(&self) -> GeometryConfig {
        GeometryConfig::new(
            self.dial.radius,
            self.viewport.center(),
            self.dial.tick,
            self.dial.hands,
        )
    }

    /// Check the options can build a working clock
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.resolution > 0.0) {
            return Err(invalid(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if !self.viewport.is_positive() {
            return Err(invalid("viewport must have a positive size"));
        }
        if !(self.dial.radius > 0.0) {
            return Err(invalid(format!(
                "dial radius must be positive, got {}",
                self.dial.radius
            )));
        }
        if !self.dial.tick.is_positive() {
            return Err(invalid("tick size must be positive"));
        }
        for kind in HandKind::ALL {
            if !self.dial.hands.get(kind).is_positive() {
                return Err(invalid(format!("{} hand size must be positive", kind)));
            }
        }
        if self.interaction.parallax() && !self.layout.supports_group_offset() {
            return Err(invalid(format!(
                "{} interaction needs a layout with a hand group",
                self.interaction
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

/// Get the base configuration directory for the clock
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "analog-dial", "dial").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a named clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Load configuration for a named clock
///
/// Returns `None` if the config file doesn't exist.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(clock_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    parse_config(&contents).map(Some)
}

/// Parse configuration from TOML text
pub fn parse_config<T: DeserializeOwned>(contents: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        if let Some(path) = config_path("test_clock") {
            assert!(path.to_string_lossy().contains("test_clock.toml"));
        }
    }

    #[test]
    fn test_defaults_validate() {
        let options = ClockOptions::default();
        assert_eq!(options.resolution, 1.0);
        assert!(options.validate().is_ok());
        assert_eq!(options.geometry().center, Point::new(400.0, 300.0));
        assert_eq!(options.geometry().radius, 300.0);
    }

    #[test]
    fn test_parse_partial_file() {
        let options: ClockOptions = parse_config(
            r#"
            resolution = 2.0
            layout = "flat"
            interaction = "click_to_angle"
            sweep = "continuous"

            [viewport]
            width = 1280.0
            height = 720.0

            [dial]
            radius = 250.0

            [dial.hands.second]
            width = 4.0
            height = 300.0
            "#,
        )
        .unwrap();

        assert_eq!(options.resolution, 2.0);
        assert_eq!(options.layout, SceneLayout::Flat);
        assert_eq!(options.interaction, InteractionMode::ClickToAngle);
        assert_eq!(options.sweep, SweepMode::Continuous);
        assert_eq!(options.geometry().center, Point::new(640.0, 360.0));
        assert_eq!(options.dial.radius, 250.0);
        assert_eq!(options.dial.hands.second, RectSize::new(4.0, 300.0));
        assert_eq!(options.dial.hands.hour, RectSize::new(18.0, 160.0));
        assert_eq!(options.dial.tick, RectSize::new(16.0, 42.0));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let result: Result<ClockOptions, _> = parse_config("resolution = \"high\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parallax_needs_hand_group() {
        let options = ClockOptions {
            layout: SceneLayout::Flat,
            interaction: InteractionMode::Both,
            ..ClockOptions::default()
        };
        assert!(matches!(options.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        let mut options = ClockOptions::for_viewport(800.0, 600.0, 0.0);
        assert!(options.validate().is_err());
        options.resolution = 2.0;
        options.dial.radius = 0.0;
        assert!(options.validate().is_err());
        options.dial.radius = 300.0;
        options.dial.hands.minute.height = -1.0;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_viewport_fields_default_individually() {
        let options: ClockOptions = parse_config("[viewport]\nwidth = 1024.0").unwrap();
        assert_eq!(options.viewport.width, 1024.0);
        assert_eq!(options.viewport.height, 600.0);
    }

    #[test]
    fn test_fallback_replaces_unusable_viewport() {
        let options: ClockOptions =
            parse_config("resolution = 2.0\n[viewport]\nwidth = 0.0\nheight = 600.0").unwrap();
        assert!(options.validate().is_err());

        let fallback = options.fallback();
        assert!(fallback.validate().is_ok());
        assert_eq!(fallback.viewport, Viewport::default());
        assert_eq!(fallback.resolution, 2.0);
    }

    #[test]
    fn test_fallback_keeps_usable_window() {
        let options = ClockOptions {
            layout: SceneLayout::Flat,
            interaction: InteractionMode::Parallax,
            ..ClockOptions::for_viewport(1024.0, 768.0, f32::NAN)
        };
        let fallback = options.fallback();
        assert!(fallback.validate().is_ok());
        assert_eq!(fallback.viewport.center(), Point::new(512.0, 384.0));
        assert_eq!(fallback.resolution, 1.0);
        assert_eq!(fallback.layout, SceneLayout::Perspective);
    }
}
