//! Edge case tests for the sample buffer, classifier and gesture engine


use head_gesture_detection::{
    config::GestureConfig,
    engine::GestureEngine,
    gesture_classifier::GestureClassifier,
    landmark::LandmarkSample,
    sample_buffer::SampleBuffer,
    GestureEvent,
};
use test_helpers::{feed, frame, frame_at, nod_frame, shake_frame, CHIN, SIDE};

#[test]
fn test_window_of_one_never_fires() {
    let config = GestureConfig {
        window_size: 1,
        ..GestureConfig::default()
    };
    let mut engine = GestureEngine::new(&config).unwrap();

    let events = feed(&mut engine, (0..40).map(|i| nod_frame(i, 0.1))).unwrap();

    assert!(events.is_empty(), "A single sample has no direction changes");
    assert_eq!(engine.stats().evaluations, 39);
}

#[test]
fn test_zero_sensitivity_counts_any_motion() {
    let config = GestureConfig {
        nod_sensitivity_base: 0.0,
        shake_sensitivity_base: 0.0,
        ..GestureConfig::default()
    };
    let mut engine = GestureEngine::new(&config).unwrap();

    let events = feed(&mut engine, (0..11).map(|i| nod_frame(i, 1e-6))).unwrap();
    assert_eq!(events, vec![(10, GestureEvent::Nod)]);
}

#[test]
fn test_extreme_coordinates_do_not_panic() {
    let mut engine = GestureEngine::new(&GestureConfig::default()).unwrap();

    let extreme_values = vec![f64::MAX, f64::MIN, 1e100, -1e100, 0.0, f64::MIN_POSITIVE];

    for _ in 0..3 {
        for &value in &extreme_values {
            let f = frame_at((value, value, value), (value, -value, value), -value, value);
            // Finite input is always accepted; the outcome itself is not meaningful
            let _ = engine.process(&f).unwrap();
        }
    }
}

#[test]
fn test_inverted_head_span_blocks_gestures() {
    let mut engine = GestureEngine::new(&GestureConfig::default()).unwrap();

    // Bottom of the head above the top gives a negative distance factor,
    // so the spread caps can never be met
    let frames = (0..30).map(|i| {
        let f = nod_frame(i, 0.03);
        frame_at(
            (f.nod_point.x, f.nod_point.y, f.nod_point.z),
            SIDE,
            0.75,
            0.25,
        )
    });
    let events = feed(&mut engine, frames).unwrap();

    assert!(events.is_empty());
    assert!(engine.buffer().distance_factor() < 0.0);
}

#[test]
fn test_gesture_then_opposite_gesture() {
    let mut engine = GestureEngine::new(&GestureConfig::default()).unwrap();

    let frames = (0..11)
        .map(|i| shake_frame(i, 0.03))
        .chain((0..11).map(|i| nod_frame(i, 0.03)))
        .chain((0..11).map(|i| shake_frame(i, 0.03)));
    let events = feed(&mut engine, frames).unwrap();

    assert_eq!(
        events,
        vec![
            (10, GestureEvent::Shake),
            (21, GestureEvent::Nod),
            (32, GestureEvent::Shake),
        ]
    );
}

#[test]
fn test_nod_tail_does_not_retrigger() {
    let mut engine = GestureEngine::new(&GestureConfig::default()).unwrap();

    // A nod followed by the head settling: the settling frames alone never
    // accumulate enough motion for a second event
    let frames = (0..11)
        .map(|i| nod_frame(i, 0.03))
        .chain((0..30).map(|_| frame(CHIN, SIDE)));
    let events = feed(&mut engine, frames).unwrap();

    assert_eq!(events, vec![(10, GestureEvent::Nod)]);
}

#[test]
fn test_buffer_reset_behavior() {
    let mut buffer = SampleBuffer::new(3, 0.5);
    let p = LandmarkSample::new(0.5, 0.5, 0.0);

    for _ in 0..4 {
        buffer.push(p, p, LandmarkSample::new(0.5, 0.2, 0.0), LandmarkSample::new(0.5, 0.8, 0.0));
    }
    assert!(buffer.is_ready());

    buffer.reset();
    assert!(!buffer.is_ready());
    assert_eq!(buffer.len(), 0);
    assert!(buffer.ensure_lockstep().is_ok());

    // Refill needs the whole window again
    for _ in 0..3 {
        buffer.push(p, p, p, p);
        assert!(!buffer.is_ready());
    }
    buffer.push(p, p, p, p);
    assert!(buffer.is_ready());
}

#[test]
fn test_classifier_on_empty_windows() {
    let classifier = GestureClassifier::default();
    let empty: Vec<LandmarkSample> = Vec::new();

    let evaluation = classifier.evaluate(&empty, &empty, 1.0);

    assert_eq!(evaluation.event, None);
    assert_eq!(evaluation.metrics.nod_changes, 0);
    assert_eq!(evaluation.metrics.nod_vertical_spread, 0.0);
}
