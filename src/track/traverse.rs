//! Arc-length parameterized sampling of the control polyline.
//!
//! Read-side companion to the store's ride progress: the render
//! collaborator feeds the current progress in and gets the train's
//! position, facing direction, and banking back out. Honors the looped
//! flag by closing the polyline with a final segment back to the start.

use crate::math::Float3;

use super::point::TrackPoint;

/// A sampled location along the track.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackSample {
    pub position: Float3,
    /// Normalized direction of the containing segment.
    pub direction: Float3,
    /// Banking angle, linearly interpolated between the segment's points.
    pub tilt: f32,
}

/// Total polyline length over the control points, including the closing
/// segment when `looped`. Zero for tracks with fewer than 2 points.
pub fn length(points: &[TrackPoint], looped: bool) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    cumulative_arcs(points, looped)
        .last()
        .copied()
        .unwrap_or(0.0)
}

/// Samples the track at a normalized `progress`.
///
/// Progress is clamped to [0, 1] at this read-side layer only; the store
/// itself keeps the unclamped value the driver wrote. Returns `None` when
/// fewer than 2 points exist (no path to traverse). A degenerate track
/// whose points all coincide yields the first point.
pub fn sample(points: &[TrackPoint], progress: f32, looped: bool) -> Option<TrackSample> {
    if points.len() < 2 {
        return None;
    }

    let arcs = cumulative_arcs(points, looped);
    let total = *arcs.last().unwrap_or(&0.0);
    if total <= 0.0 {
        let first = &points[0];
        return Some(TrackSample {
            position: first.position,
            direction: Float3::RIGHT,
            tilt: first.tilt,
        });
    }

    let target = progress.clamp(0.0, 1.0) * total;

    // Bracketing segment: arcs[i] <= target <= arcs[i + 1].
    let i = arcs
        .partition_point(|&arc| arc <= target)
        .saturating_sub(1)
        .min(arcs.len() - 2);

    let a = point_at(points, i);
    let b = point_at(points, i + 1);
    let seg_len = arcs[i + 1] - arcs[i];
    let t = if seg_len > 0.0 {
        (target - arcs[i]) / seg_len
    } else {
        0.0
    };

    let direction = match (b.position - a.position).normalize() {
        d if d == Float3::ZERO => Float3::RIGHT,
        d => d,
    };

    Some(TrackSample {
        position: a.position.lerp(b.position, t),
        direction,
        tilt: a.tilt + (b.tilt - a.tilt) * t,
    })
}

/// Segment endpoint lookup that wraps the closing segment back to the
/// first point.
fn point_at(points: &[TrackPoint], index: usize) -> &TrackPoint {
    if index == points.len() {
        &points[0]
    } else {
        &points[index]
    }
}

fn cumulative_arcs(points: &[TrackPoint], looped: bool) -> Vec<f32> {
    let segment_count = if looped {
        points.len()
    } else {
        points.len() - 1
    };

    let mut arcs = Vec::with_capacity(segment_count + 1);
    arcs.push(0.0);
    let mut total = 0.0;
    for i in 0..segment_count {
        let a = point_at(points, i).position;
        let b = point_at(points, i + 1).position;
        total += (b - a).magnitude();
        arcs.push(total);
    }
    arcs
}
