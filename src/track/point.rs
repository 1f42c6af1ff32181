use std::fmt;

use crate::math::Float3;

/// Stable identifier for a track point.
///
/// Minted once at creation by the store's [`IdGen`], never reused or
/// mutated for the lifetime of the track.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointId(String);

impl PointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A control vertex of the coaster path.
///
/// Sequence order in the owning track defines traversal order;
/// consumers must not re-sort by spatial proximity.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub id: PointId,
    pub position: Float3,
    pub tilt: f32,
}

impl TrackPoint {
    pub fn new(id: PointId, position: Float3) -> Self {
        Self {
            id,
            position,
            tilt: 0.0,
        }
    }
}

/// Monotonic id generator owned by a single store.
///
/// Scoping the counter to the store (rather than a process-wide global)
/// keeps ids collision-free when multiple stores coexist, e.g. in tests.
#[derive(Debug, Default)]
pub(crate) struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self) -> PointId {
        let id = PointId::new(format!("tp-{}", self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_distinct() {
        let mut ids = IdGen::new();
        let a = ids.mint();
        let b = ids.mint();
        let c = ids.mint();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn separate_generators_do_not_share_state() {
        let mut a = IdGen::new();
        let mut b = IdGen::new();

        // Counters are independent; uniqueness is per-store.
        assert_eq!(a.mint(), b.mint());
    }

    #[test]
    fn new_point_has_zero_tilt() {
        let point = TrackPoint::new(PointId::new("tp-0"), Float3::new(1.0, 2.0, 3.0));
        assert_eq!(point.tilt, 0.0);
        assert_eq!(point.position, Float3::new(1.0, 2.0, 3.0));
    }
}
