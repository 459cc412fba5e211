//! Configuration management for the head gesture detection application

use crate::{
    constants::{
        DEFAULT_HORIZONTAL_ADJUSTMENT, DEFAULT_NOD_SENSITIVITY, DEFAULT_REFERENCE_SPAN,
        DEFAULT_SHAKE_SENSITIVITY, DEFAULT_VERTICAL_ADJUSTMENT, DEFAULT_WINDOW_SIZE,
        MAX_WINDOW_SIZE,
    },
    landmark::LandmarkIndices,
    landmark_input::InputFormat,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture detection tuning
    pub gesture: GestureConfig,

    /// Face mesh indices of the tracked points
    pub landmarks: LandmarkIndices,

    /// Landmark input configuration
    pub input: InputConfig,
}

/// Gesture detection tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Number of frames analyzed per evaluation
    pub window_size: usize,

    /// Nod sensitivity at the reference distance
    pub nod_sensitivity_base: f64,

    /// Shake sensitivity at the reference distance
    pub shake_sensitivity_base: f64,

    /// Maximum vertical chin travel for a nod at the reference distance
    pub vertical_adjustment: f64,

    /// Maximum horizontal side-of-head travel for a shake at the reference distance
    pub horizontal_adjustment: f64,

    /// Top-to-bottom head span at the reference distance
    pub reference_span: f64,
}

/// Landmark input configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Line format of the landmark stream
    pub format: InputFormat,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            nod_sensitivity_base: DEFAULT_NOD_SENSITIVITY,
            shake_sensitivity_base: DEFAULT_SHAKE_SENSITIVITY,
            vertical_adjustment: DEFAULT_VERTICAL_ADJUSTMENT,
            horizontal_adjustment: DEFAULT_HORIZONTAL_ADJUSTMENT,
            reference_span: DEFAULT_REFERENCE_SPAN,
        }
    }
}

impl GestureConfig {
    /// Validate gesture parameters
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid parameter
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::ConfigError("Window size must be greater than 0".to_string()));
        }
        if self.window_size > MAX_WINDOW_SIZE {
            return Err(Error::ConfigError(format!(
                "Window size must be at most {MAX_WINDOW_SIZE}, got {}",
                self.window_size
            )));
        }

        let non_negative = [
            ("Nod sensitivity", self.nod_sensitivity_base),
            ("Shake sensitivity", self.shake_sensitivity_base),
            ("Vertical adjustment", self.vertical_adjustment),
            ("Horizontal adjustment", self.horizontal_adjustment),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ConfigError(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if !self.reference_span.is_finite() || self.reference_span <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Reference span must be greater than 0, got {}",
                self.reference_span
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        self.gesture.validate()?;

        let indices = &self.landmarks;
        let distinct = [indices.nod_point, indices.shake_point, indices.top_head, indices.bottom_head];
        for (i, a) in distinct.iter().enumerate() {
            if distinct[i + 1..].contains(a) {
                return Err(Error::ConfigError(format!(
                    "Landmark index {a} is used for more than one tracked point"
                )));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Gesture Detection Configuration

# Gesture detection tuning (values at the reference distance)
gesture:
  window_size: 10
  nod_sensitivity_base: 0.0125
  shake_sensitivity_base: 0.02
  vertical_adjustment: 0.2
  horizontal_adjustment: 0.12
  reference_span: 0.5

# Face mesh indices of the tracked points
landmarks:
  nod_point: 199
  shake_point: 447
  top_head: 10
  bottom_head: 152

# Landmark input
input:
  format: "points"
"#;
