//! Looptrack - interactive roller coaster track authoring and ride
//! traversal core.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **math**: `Float3` vector primitive
//! - **track**: control points, the owning store, loop synthesis,
//!   traversal sampling
//! - **ride**: frame-driver advancement policy
//!
//! The crate is a library-level state core: rendering, camera, and UI
//! collaborators read store state each frame and feed mutations back
//! through the store's operations. Diagnostics go through the `log`
//! facade; the host installs a logger.

pub mod math;
pub mod ride;
pub mod track;

// Re-export commonly used types at crate root
pub use math::Float3;
pub use ride::{advance, RideStep};
pub use track::{EditorMode, PointId, StoreEvent, TrackPoint, TrackStore};
