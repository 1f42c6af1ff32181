//! Procedural synthesis of a vertical loop anchored to the local track
//! direction.
//!
//! The loop is emitted as explicit control points rather than a parametric
//! curve so that editing, traversal, and rendering all share the track's
//! single representation: path = ordered control points.

use std::f32::consts::PI;

use crate::math::Float3;

use super::point::TrackPoint;

pub const LOOP_RADIUS: f32 = 10.0;
/// Angular subdivisions of the full circle.
pub const LOOP_SUBDIVISIONS: usize = 16;
/// Forward advance and rise of the lead-in/lead-out ramp points.
pub const LEAD_ADVANCE: f32 = 3.0;
pub const LEAD_RISE: f32 = 2.0;
/// Entry direction used when no usable predecessor direction exists.
pub const DEFAULT_DIRECTION: Float3 = Float3::RIGHT;

/// Horizontal magnitude below which the predecessor segment counts as
/// near-vertical and the default direction is used instead. Normalizing
/// near-zero noise would produce a NaN or arbitrary direction.
const MIN_HORIZONTAL_MAGNITUDE: f32 = 0.1;

/// Derives the horizontal entry direction for a loop anchored at `index`.
///
/// The first point has no predecessor and gets the default direction.
/// Otherwise the predecessor segment direction is flattened onto the XZ
/// plane and re-normalized, falling back to the default when the segment
/// is nearly vertical.
pub fn entry_direction(points: &[TrackPoint], index: usize) -> Float3 {
    if index == 0 {
        return DEFAULT_DIRECTION;
    }

    let delta = points[index].position - points[index - 1].position;
    let flat = delta.normalize().flattened();
    if flat.magnitude() < MIN_HORIZONTAL_MAGNITUDE {
        return DEFAULT_DIRECTION;
    }
    flat.normalize()
}

/// Emits the positions of one full vertical loop run: a lead-in ramp
/// point, the loop body, and two lead-out points descending back to the
/// anchor's grade.
///
/// `direction` must be a horizontal unit vector (y = 0). Pure over its
/// inputs; the caller mints ids and splices the run into the sequence.
pub fn loop_positions(pos: Float3, direction: Float3) -> Vec<Float3> {
    let mut positions = Vec::with_capacity(LOOP_SUBDIVISIONS + 2);

    // Loop center sits one radius ahead of and above the anchor.
    let center = pos + direction * LOOP_RADIUS + Float3::UP * LOOP_RADIUS;

    positions.push(pos + direction * LEAD_ADVANCE + Float3::UP * LEAD_RISE);

    // Parametrize from the back-bottom of the circle, sweeping a full
    // revolution. The i == 0 and i == LOOP_SUBDIVISIONS samples coincide
    // with the lead-in/lead-out anchors and are skipped.
    for i in 0..=LOOP_SUBDIVISIONS {
        if i == 0 || i == LOOP_SUBDIVISIONS {
            continue;
        }
        let angle = -PI / 2.0 + (i as f32 / LOOP_SUBDIVISIONS as f32) * 2.0 * PI;
        let forward_offset = angle.cos() * LOOP_RADIUS;
        let height_offset = angle.sin() * LOOP_RADIUS;
        positions.push(center + direction * forward_offset + Float3::UP * height_offset);
    }

    // Exit one full diameter ahead of the anchor, past the loop's far side.
    let exit_forward = 2.0 * LOOP_RADIUS;
    positions.push(pos + direction * (exit_forward + LEAD_ADVANCE) + Float3::UP * LEAD_RISE);
    positions.push(pos + direction * (exit_forward + 8.0));

    positions
}
