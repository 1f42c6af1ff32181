//! Track data model: control points, the owning store, loop synthesis,
//! and traversal sampling.

mod events;
mod loop_gen;
mod point;
mod store;
mod traverse;

pub use events::{StoreEvent, Subscriber, SubscriberId};
pub use loop_gen::{
    entry_direction, loop_positions, DEFAULT_DIRECTION, LEAD_ADVANCE, LEAD_RISE, LOOP_RADIUS,
    LOOP_SUBDIVISIONS,
};
pub use point::{PointId, TrackPoint};
pub use store::{EditorMode, TrackStore};
pub use traverse::{length, sample, TrackSample};
