//! Nod/shake decision over a full pair of sample windows.
//!
//! A nod rocks the chin in depth while the side of the head stays put in
//! depth; a shake does the opposite. The vertical and horizontal spread caps
//! keep the whole head sliding across the frame from passing as a gesture.
//! All thresholds are multiplied by the frame's distance factor.

use crate::{
    config::GestureConfig,
    constants::{NOD_LABEL, SHAKE_LABEL},
    direction::{axis_spread, direction_changes},
    landmark::{Axis, LandmarkSample},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected head gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Affirmative nod
    Nod,
    /// Negative head shake
    Shake,
}

impl GestureEvent {
    /// Console label of the event
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nod => NOD_LABEL,
            Self::Shake => SHAKE_LABEL,
        }
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base thresholds at the reference distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Minimum chin depth move counted as nodding
    pub nod_sensitivity: f64,
    /// Minimum side-of-head depth move counted as shaking
    pub shake_sensitivity: f64,
    /// Maximum vertical chin spread for a nod
    pub vertical_adjustment: f64,
    /// Maximum horizontal side-of-head spread for a shake
    pub horizontal_adjustment: f64,
}

impl From<&GestureConfig> for GestureThresholds {
    fn from(config: &GestureConfig) -> Self {
        Self {
            nod_sensitivity: config.nod_sensitivity_base,
            shake_sensitivity: config.shake_sensitivity_base,
            vertical_adjustment: config.vertical_adjustment,
            horizontal_adjustment: config.horizontal_adjustment,
        }
    }
}

impl GestureThresholds {
    /// Thresholds for a face at `distance_factor` times the reference span
    #[must_use]
    pub fn scaled(&self, distance_factor: f64) -> ScaledThresholds {
        ScaledThresholds {
            nod_sensitivity: self.nod_sensitivity * distance_factor,
            shake_sensitivity: self.shake_sensitivity * distance_factor,
            max_vertical_spread: self.vertical_adjustment * distance_factor,
            max_horizontal_spread: self.horizontal_adjustment * distance_factor,
        }
    }
}

/// Thresholds in effect for one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledThresholds {
    /// Sensitivity for the nod window
    pub nod_sensitivity: f64,
    /// Sensitivity for the shake window
    pub shake_sensitivity: f64,
    /// Cap on nod window vertical spread
    pub max_vertical_spread: f64,
    /// Cap on shake window horizontal spread
    pub max_horizontal_spread: f64,
}

/// Measurements taken from one pair of windows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    /// Depth direction changes of the nod point
    pub nod_changes: usize,
    /// Depth direction changes of the shake point
    pub shake_changes: usize,
    /// Vertical travel of the nod point
    pub nod_vertical_spread: f64,
    /// Horizontal travel of the shake point
    pub shake_horizontal_spread: f64,
    /// Distance factor the thresholds were scaled by
    pub distance_factor: f64,
}

/// Result of one classifier evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Detected gesture, if any
    pub event: Option<GestureEvent>,
    /// Metrics the decision was based on
    pub metrics: WindowMetrics,
    /// Thresholds the metrics were compared against
    pub thresholds: ScaledThresholds,
}

/// Decides between nod, shake and nothing
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
}

impl GestureClassifier {
    /// Create a classifier with the given base thresholds
    #[must_use]
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self { thresholds }
    }

    /// Base thresholds
    #[must_use]
    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    /// Measure both windows against thresholds scaled by `distance_factor`
    pub fn measure<'a, N, S>(&self, nod_window: N, shake_window: S, distance_factor: f64) -> (WindowMetrics, ScaledThresholds)
    where
        N: IntoIterator<Item = &'a LandmarkSample> + Clone,
        S: IntoIterator<Item = &'a LandmarkSample> + Clone,
    {
        let thresholds = self.thresholds.scaled(distance_factor);

        let metrics = WindowMetrics {
            nod_changes: direction_changes(nod_window.clone(), Axis::Z, thresholds.nod_sensitivity),
            shake_changes: direction_changes(shake_window.clone(), Axis::Z, thresholds.shake_sensitivity),
            nod_vertical_spread: axis_spread(nod_window, Axis::Y),
            shake_horizontal_spread: axis_spread(shake_window, Axis::X),
            distance_factor,
        };

        (metrics, thresholds)
    }

    /// Classify one pair of windows
    pub fn evaluate<'a, N, S>(&self, nod_window: N, shake_window: S, distance_factor: f64) -> Evaluation
    where
        N: IntoIterator<Item = &'a LandmarkSample> + Clone,
        S: IntoIterator<Item = &'a LandmarkSample> + Clone,
    {
        let (metrics, thresholds) = self.measure(nod_window, shake_window, distance_factor);
        let event = Self::decide(&metrics, &thresholds);

        log::debug!(
            "nod changes {} (sens {:.4}), shake changes {} (sens {:.4}), vertical spread {:.4}/{:.4}, horizontal spread {:.4}/{:.4} -> {:?}",
            metrics.nod_changes,
            thresholds.nod_sensitivity,
            metrics.shake_changes,
            thresholds.shake_sensitivity,
            metrics.nod_vertical_spread,
            thresholds.max_vertical_spread,
            metrics.shake_horizontal_spread,
            thresholds.max_horizontal_spread,
            event
        );

        Evaluation {
            event,
            metrics,
            thresholds,
        }
    }

    /// Apply the decision rules; nod is checked before shake
    #[must_use]
    pub fn decide(metrics: &WindowMetrics, thresholds: &ScaledThresholds) -> Option<GestureEvent> {
        if metrics.nod_changes > 0
            && metrics.shake_changes == 0
            && metrics.nod_vertical_spread <= thresholds.max_vertical_spread
        {
            Some(GestureEvent::Nod)
        } else if metrics.shake_changes > 0
            && metrics.nod_changes == 0
            && metrics.shake_horizontal_spread <= thresholds.max_horizontal_spread
        {
            Some(GestureEvent::Shake)
        } else {
            None
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureThresholds::from(&GestureConfig::default()))
    }
}
