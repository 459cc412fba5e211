//! Direction-change counting over a window of landmark samples.
//!
//! A nod or a shake shows up as one coordinate of a tracked point swinging
//! back against its initial trend. [`direction_changes`] counts those swings,
//! ignoring any movement smaller than a sensitivity threshold, so that a still
//! head or a slow drift in one direction counts as zero.

use crate::landmark::{Axis, LandmarkSample};

/// Trend of a coordinate relative to the current anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Increasing,
    Decreasing,
}

/// Count how often the `axis` coordinate of `samples` moves against its
/// initial direction by more than `sensitivity`.
///
/// The first significant move away from the first sample fixes the initial
/// direction. Every later significant move in the opposite direction counts
/// as one change and re-anchors at that value. The initial direction itself
/// never changes, and moves that continue a trend leave the anchor in place.
///
/// Sequences with fewer than two samples have no changes.
pub fn direction_changes<'a, I>(samples: I, axis: Axis, sensitivity: f64) -> usize
where
    I: IntoIterator<Item = &'a LandmarkSample>,
{
    let mut values = samples.into_iter().map(|sample| sample.axis_value(axis));
    let Some(mut anchor) = values.next() else {
        return 0;
    };

    let mut initial_direction: Option<Direction> = None;
    let mut changes = 0;

    for current in values {
        // Noise
        if (anchor - current).abs() <= sensitivity {
            continue;
        }

        let direction = if current < anchor {
            Direction::Decreasing
        } else {
            Direction::Increasing
        };

        match initial_direction {
            None => {
                initial_direction = Some(direction);
                anchor = current;
            }
            Some(initial) if initial != direction => {
                changes += 1;
                anchor = current;
            }
            Some(_) => {}
        }
    }

    changes
}

/// Distance between the largest and smallest `axis` coordinate of `samples`
///
/// Returns 0.0 for an empty sequence.
pub fn axis_spread<'a, I>(samples: I, axis: Axis) -> f64
where
    I: IntoIterator<Item = &'a LandmarkSample>,
{
    let (min, max) = samples
        .into_iter()
        .map(|sample| sample.axis_value(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });

    if min > max {
        0.0
    } else {
        (max - min).abs()
    }
}
