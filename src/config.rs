//! Configuration for picker construction.
//!
//! Every option is an externally supplied constant consumed when a picker is
//! built. Configs serialize to JSON so hosts can ship them alongside their
//! own settings files.

use chromadrag_ui::Axis;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::color::ColorState;
use crate::constants::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_GAP_WIDTH, DEFAULT_HANDLE_PADDING, DEFAULT_HANDLE_SIZE,
    DEFAULT_HANDLE_STROKE_WIDTH, DEFAULT_HANDLE_TOUCH_TOLERANCE, DEFAULT_RING_WIDTH,
    DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH,
};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Complete picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Ring picker dimensions
    #[serde(default)]
    pub ring: RingConfig,

    /// Handle dimensions and touch tolerance
    #[serde(default)]
    pub handle: HandleConfig,

    /// Colour the picker starts with
    #[serde(default)]
    pub initial: ColorState,

    /// Snap animation settings
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Linear slider settings
    #[serde(default)]
    pub linear: LinearConfig,

    /// Whether circle/linear pickers confirm (fire `ColorPicked`) when a
    /// track-tap snap completes. Ring pickers never do.
    #[serde(default)]
    pub confirm_on_snap: bool,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Ring section of the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Width of the coloured ring
    #[serde(default = "default_ring_width")]
    pub ring_width: f32,

    /// Gap between the ring and the center disk
    #[serde(default = "default_gap_width")]
    pub gap_width: f32,

    /// Outline stroke around ring and disk
    #[serde(default)]
    pub stroke_width: f32,
}

fn default_ring_width() -> f32 {
    DEFAULT_RING_WIDTH
}

fn default_gap_width() -> f32 {
    DEFAULT_GAP_WIDTH
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            ring_width: DEFAULT_RING_WIDTH,
            gap_width: DEFAULT_GAP_WIDTH,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Handle section of the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleConfig {
    /// Maximum arc length (ring) between touch and handle for a grab
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f32,

    /// Visual handle size (circle diameter, linear handle width)
    #[serde(default = "default_handle_size")]
    pub size: f32,

    /// Outline stroke around the handle
    #[serde(default = "default_handle_stroke")]
    pub stroke_width: f32,

    /// Padding kept around the handle inside the widget
    #[serde(default = "default_handle_padding")]
    pub padding: f32,
}

fn default_touch_tolerance() -> f32 {
    DEFAULT_HANDLE_TOUCH_TOLERANCE
}

fn default_handle_size() -> f32 {
    DEFAULT_HANDLE_SIZE
}

fn default_handle_stroke() -> f32 {
    DEFAULT_HANDLE_STROKE_WIDTH
}

fn default_handle_padding() -> f32 {
    DEFAULT_HANDLE_PADDING
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            touch_tolerance: DEFAULT_HANDLE_TOUCH_TOLERANCE,
            size: DEFAULT_HANDLE_SIZE,
            stroke_width: DEFAULT_HANDLE_STROKE_WIDTH,
            padding: DEFAULT_HANDLE_PADDING,
        }
    }
}

/// Animation section of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Snap duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    DEFAULT_ANIMATION_DURATION_MS
}

impl AnimationConfig {
    /// Snap duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

/// Linear slider section of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinearConfig {
    /// Primary axis of the track
    #[serde(default)]
    pub orientation: Axis,
}

impl PickerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            ring: RingConfig::default(),
            handle: HandleConfig::default(),
            initial: ColorState::default(),
            animation: AnimationConfig::default(),
            linear: LinearConfig::default(),
            confirm_on_snap: false,
        }
    }

    /// Set the starting colour.
    pub fn with_initial(mut self, initial: ColorState) -> Self {
        self.initial = initial;
        self
    }

    /// Set the snap duration.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set whether non-ring pickers confirm at the end of a track-tap snap.
    pub fn with_confirm_on_snap(mut self, confirm: bool) -> Self {
        self.confirm_on_snap = confirm;
        self
    }

    /// Set the linear slider orientation.
    pub fn with_orientation(mut self, orientation: Axis) -> Self {
        self.linear.orientation = orientation;
        self
    }

    /// Return a copy with every value clamped into its legal range.
    pub fn validated(mut self) -> Self {
        let handle = &mut self.handle;
        handle.padding = non_negative("handle.padding", handle.padding);
        handle.size = non_negative("handle.size", handle.size);
        handle.stroke_width = non_negative("handle.stroke_width", handle.stroke_width);
        handle.touch_tolerance = non_negative("handle.touch_tolerance", handle.touch_tolerance);

        self.ring.ring_width = non_negative("ring.ring_width", self.ring.ring_width);
        self.ring.stroke_width = clamp_gap_or_stroke(
            "ring.stroke_width",
            self.ring.stroke_width,
            0.0,
            MAX_STROKE_WIDTH,
        );
        self.ring.gap_width = clamp_gap_or_stroke(
            "ring.gap_width",
            self.ring.gap_width,
            min_gap_width(self.handle.padding),
            f32::MAX,
        );

        if self.animation.duration_ms == 0 {
            log::warn!("animation.duration_ms must be at least 1, using 1");
            self.animation.duration_ms = 1;
        }

        self
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config.validated())
    }

    /// Load configuration from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json).inspect_err(|e| {
            log::warn!("Failed to parse config file {:?}: {}", path, e);
        })?;
        log::info!("Loaded picker configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a JSON file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved picker configuration to {:?}", path);
        Ok(())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest legal gap between ring and center disk for a handle padding.
pub fn min_gap_width(handle_padding: f32) -> f32 {
    handle_padding * 2.0
}

/// Clamp a stroke width into its legal range.
pub fn clamp_stroke_width(stroke_width: f32) -> f32 {
    clamp_gap_or_stroke("ring.stroke_width", stroke_width, 0.0, MAX_STROKE_WIDTH)
}

fn non_negative(name: &str, value: f32) -> f32 {
    clamp_gap_or_stroke(name, value, 0.0, f32::MAX)
}

fn clamp_gap_or_stroke(name: &str, value: f32, min: f32, max: f32) -> f32 {
    let clamped = crate::color::clamp(value, min, max);
    if clamped != value {
        log::warn!("{} = {} is out of range, clamped to {}", name, value, clamped);
    }
    clamped
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.ring.ring_width, 80.0);
        assert_eq!(config.ring.gap_width, 50.0);
        assert_eq!(config.initial, ColorState::RED);
        assert_eq!(config.animation.duration(), Duration::from_millis(300));
        assert!(!config.confirm_on_snap);
    }

    #[test]
    fn test_json_round_trip() {
        let config = PickerConfig::new()
            .with_initial(ColorState::new(200.0, 0.5, 0.75))
            .with_orientation(Axis::Vertical)
            .with_confirm_on_snap(true);
        let json = config.to_json().unwrap();
        let loaded = PickerConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = PickerConfig::from_json(r#"{"ring": {"ring_width": 60.0}}"#).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.ring.ring_width, 60.0);
        assert_eq!(config.ring.gap_width, DEFAULT_GAP_WIDTH);
        assert_eq!(config.handle, HandleConfig::default());
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{"version": {}}}"#, CONFIG_VERSION + 1);
        let err = PickerConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, ConfigError::VersionTooNew { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = PickerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validated_clamps() {
        let mut config = PickerConfig::new();
        config.ring.stroke_width = 25.0;
        config.ring.gap_width = 3.0;
        config.handle.size = -4.0;
        config.animation.duration_ms = 0;

        let config = config.validated();
        assert_eq!(config.ring.stroke_width, MAX_STROKE_WIDTH);
        assert_eq!(config.ring.gap_width, min_gap_width(DEFAULT_HANDLE_PADDING));
        assert_eq!(config.handle.size, 0.0);
        assert_eq!(config.animation.duration_ms, 1);
    }

    #[test]
    fn test_initial_color_is_sanitized_on_load() {
        let config =
            PickerConfig::from_json(r#"{"initial": {"hue": -90.0, "saturation": 0.5, "value": 3.0}}"#)
                .unwrap();
        assert_eq!(config.initial.hue(), 270.0);
        assert_eq!(config.initial.value(), 1.0);
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = std::env::temp_dir().join(format!("chromadrag-config-{}", std::process::id()));
        let path = dir.join("picker.json");
        let config = PickerConfig::new().with_animation_duration(Duration::from_millis(120));

        config.save_to_path(&path).unwrap();
        let loaded = PickerConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.animation.duration_ms, 120);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
