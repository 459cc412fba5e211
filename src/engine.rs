//! Frame-by-frame gesture engine.
//!
//! [`GestureEngine::process`] is the single entry point per frame: it
//! buffers the frame, evaluates the windows once they are full and clears
//! them after a detection, so each physical gesture is reported once.

use crate::{
    config::GestureConfig,
    gesture_classifier::{Evaluation, GestureClassifier, GestureEvent, GestureThresholds},
    landmark::FaceFrame,
    sample_buffer::SampleBuffer,
    Result,
};

/// Running counters of an engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Frames accepted
    pub frames: u64,
    /// Classifier evaluations run
    pub evaluations: u64,
    /// Nods detected
    pub nods: u64,
    /// Shakes detected
    pub shakes: u64,
}

impl EngineStats {
    fn record(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Nod => self.nods += 1,
            GestureEvent::Shake => self.shakes += 1,
        }
    }
}

/// Owns the sample windows and classifier for one tracked face
#[derive(Debug, Clone)]
pub struct GestureEngine {
    buffer: SampleBuffer,
    classifier: GestureClassifier,
    stats: EngineStats,
    last_evaluation: Option<Evaluation>,
}

impl GestureEngine {
    /// Create an engine from gesture configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: &GestureConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            buffer: SampleBuffer::new(config.window_size, config.reference_span),
            classifier: GestureClassifier::new(GestureThresholds::from(config)),
            stats: EngineStats::default(),
            last_evaluation: None,
        })
    }

    /// Feed one frame and return the gesture it completes, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the frame has non-finite coordinates (the frame is
    /// not buffered) or if the windows are found out of lockstep.
    pub fn process(&mut self, frame: &FaceFrame) -> Result<Option<GestureEvent>> {
        frame.validate()?;

        self.buffer.push_frame(frame);
        self.stats.frames += 1;

        if !self.buffer.is_ready() {
            return Ok(None);
        }

        self.buffer.evict_oldest();
        self.buffer.ensure_lockstep()?;

        let evaluation = self.classifier.evaluate(
            self.buffer.nod_window(),
            self.buffer.shake_window(),
            self.buffer.distance_factor(),
        );
        self.stats.evaluations += 1;
        self.last_evaluation = Some(evaluation);

        if let Some(event) = evaluation.event {
            log::info!("Detected {:?} after {} frames", event, self.stats.frames);
            self.stats.record(event);
            self.buffer.reset();
        }

        Ok(evaluation.event)
    }

    /// Discard all buffered samples
    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Sample windows
    #[must_use]
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Classifier
    #[must_use]
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Counters since creation
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Most recent classifier evaluation
    #[must_use]
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last_evaluation.as_ref()
    }
}
