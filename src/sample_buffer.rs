//! Sliding windows of tracked landmark samples.
//!
//! The buffer keeps one window for the nod point and one for the shake point.
//! Both are appended, evicted and cleared together so they always hold the
//! same number of samples.

use crate::{
    constants::{MAX_WINDOW_SIZE, NOMINAL_DISTANCE_FACTOR},
    landmark::{FaceFrame, LandmarkSample},
    Error, Result,
};
use std::collections::VecDeque;

/// Paired nod/shake windows plus the latest distance factor
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    window_size: usize,
    reference_span: f64,
    nod_window: VecDeque<LandmarkSample>,
    shake_window: VecDeque<LandmarkSample>,
    distance_factor: f64,
}

impl SampleBuffer {
    /// Create an empty buffer analyzing `window_size` samples at a time
    ///
    /// `reference_span` is the top-to-bottom head span at the reference distance.
    #[must_use]
    pub fn new(window_size: usize, reference_span: f64) -> Self {
        // One extra slot for the sample that is evicted before evaluation
        let capacity = window_size.min(MAX_WINDOW_SIZE).saturating_add(1);

        Self {
            window_size,
            reference_span,
            nod_window: VecDeque::with_capacity(capacity),
            shake_window: VecDeque::with_capacity(capacity),
            distance_factor: NOMINAL_DISTANCE_FACTOR,
        }
    }

    /// Append one sample to each window and record this frame's distance factor
    pub fn push(
        &mut self,
        nod_point: LandmarkSample,
        shake_point: LandmarkSample,
        top_head: LandmarkSample,
        bottom_head: LandmarkSample,
    ) {
        self.nod_window.push_back(nod_point);
        self.shake_window.push_back(shake_point);
        self.distance_factor = (bottom_head.y - top_head.y) / self.reference_span;

        log::trace!(
            "Buffered frame {} of {}, distance factor {:.3}",
            self.len(),
            self.window_size.saturating_add(1),
            self.distance_factor
        );
    }

    /// Append all four points of `frame`
    pub fn push_frame(&mut self, frame: &FaceFrame) {
        self.push(frame.nod_point, frame.shake_point, frame.top_head, frame.bottom_head);
    }

    /// Whether both windows hold more than `window_size` samples
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.nod_window.len() > self.window_size && self.shake_window.len() > self.window_size
    }

    /// Drop the oldest sample from both windows
    pub fn evict_oldest(&mut self) {
        self.nod_window.pop_front();
        self.shake_window.pop_front();
    }

    /// Clear both windows
    pub fn reset(&mut self) {
        self.nod_window.clear();
        self.shake_window.clear();
    }

    /// Head span of the latest frame relative to the reference span
    ///
    /// Returns 1.0 until the first frame is pushed.
    #[must_use]
    pub fn distance_factor(&self) -> f64 {
        self.distance_factor
    }

    /// Number of samples in the nod window
    #[must_use]
    pub fn len(&self) -> usize {
        self.nod_window.len()
    }

    /// Whether the windows are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nod_window.is_empty() && self.shake_window.is_empty()
    }

    /// Number of samples analyzed per evaluation
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Samples of the nod point, oldest first
    #[must_use]
    pub fn nod_window(&self) -> &VecDeque<LandmarkSample> {
        &self.nod_window
    }

    /// Samples of the shake point, oldest first
    #[must_use]
    pub fn shake_window(&self) -> &VecDeque<LandmarkSample> {
        &self.shake_window
    }

    /// Check that both windows hold the same number of samples
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowMismatch`] if the windows differ in length
    pub fn ensure_lockstep(&self) -> Result<()> {
        if self.nod_window.len() == self.shake_window.len() {
            Ok(())
        } else {
            Err(Error::WindowMismatch {
                nod: self.nod_window.len(),
                shake: self.shake_window.len(),
            })
        }
    }
}
