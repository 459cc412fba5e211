//! Head gesture detection library for recognizing nods and head shakes.
//!
//! The library consumes facial landmarks produced by an external face mesh
//! detector, one frame at a time, and reports discrete gestures:
//! - A nod (yes) when the chin rocks in depth while the side of the head does not
//! - A shake (no) when the side of the head rocks in depth while the chin does not
//!
//! The detection pipeline consists of:
//! 1. Buffering the chin and side-of-head points in paired sliding windows
//! 2. Counting significant direction changes of each point's depth
//! 3. Scaling every threshold by the apparent head size (distance to camera)
//! 4. Deciding nod, shake or nothing, and clearing the windows after a gesture
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use head_gesture_detection::{
//!     config::GestureConfig,
//!     engine::GestureEngine,
//!     landmark::{FaceFrame, LandmarkSample},
//! };
//!
//! # fn main() -> head_gesture_detection::Result<()> {
//! let mut engine = GestureEngine::new(&GestureConfig::default())?;
//!
//! let frame = FaceFrame::new(
//!     LandmarkSample::new(0.50, 0.80, -0.05), // chin
//!     LandmarkSample::new(0.80, 0.50, 0.00),  // side of head
//!     LandmarkSample::new(0.50, 0.25, 0.00),  // top of head
//!     LandmarkSample::new(0.50, 0.75, 0.00),  // bottom of head
//! );
//!
//! if let Some(event) = engine.process(&frame)? {
//!     println!("{event}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Counting Direction Changes
//!
//! ```
//! use head_gesture_detection::{
//!     direction::direction_changes,
//!     landmark::{Axis, LandmarkSample},
//! };
//!
//! let samples: Vec<LandmarkSample> = [0.0, 0.05, 0.0, 0.05]
//!     .iter()
//!     .map(|&z| LandmarkSample::new(0.5, 0.5, z))
//!     .collect();
//!
//! assert_eq!(direction_changes(&samples, Axis::Z, 0.02), 1);
//! ```
//!
//! ## Reading Landmark Text
//!
//! ```
//! use head_gesture_detection::landmark_input::LandmarkParser;
//!
//! let parser = LandmarkParser::default();
//! let frame = parser
//!     .parse_line(1, "0.5 0.8 -0.05  0.8 0.5 0.0  0.5 0.25 0.0  0.5 0.75 0.0")
//!     .unwrap();
//! assert!(frame.is_some());
//! ```

/// Landmark samples, axes and per-frame tracked points
pub mod landmark;

/// Direction-change counting and spread over sample windows
pub mod direction;

/// Paired sliding windows of tracked samples
pub mod sample_buffer;

/// Nod/shake decision logic
pub mod gesture_classifier;

/// Frame-by-frame gesture engine
pub mod engine;

/// Text input of landmark frames
pub mod landmark_input;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use engine::GestureEngine;
pub use error::{Error, Result};
pub use gesture_classifier::GestureEvent;
