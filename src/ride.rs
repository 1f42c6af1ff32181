//! Ride-progress advancement policy.
//!
//! The store never advances time itself: an external frame driver calls
//! [`advance`] once per frame and writes the result back through
//! `set_ride_progress`, calling `stop_ride` when the step reports
//! `finished`. Packaging the policy here keeps wraparound and stop-at-end
//! behavior in one tested place instead of in every collaborator.

/// Result of one frame's advancement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RideStep {
    pub progress: f32,
    /// True once a non-looped ride reaches the end of the track. Looped
    /// rides never finish.
    pub finished: bool,
}

/// Advances a normalized progress value by one frame.
///
/// `speed` is the user-set scalar multiplier in track units per second,
/// `dt` the frame time in seconds, `track_length` the polyline length
/// from [`crate::track::length`]. A zero-length track cannot be traversed
/// and reports finished immediately.
pub fn advance(progress: f32, speed: f32, dt: f32, track_length: f32, looped: bool) -> RideStep {
    if track_length <= 0.0 {
        return RideStep {
            progress,
            finished: true,
        };
    }

    let next = progress + speed * dt / track_length;

    if looped {
        RideStep {
            progress: next.rem_euclid(1.0),
            finished: false,
        }
    } else if next >= 1.0 {
        RideStep {
            progress: 1.0,
            finished: true,
        }
    } else {
        RideStep {
            progress: next,
            finished: false,
        }
    }
}
