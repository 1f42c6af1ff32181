//! The track store: single source of truth for the point sequence and
//! all editing/ride session state.
//!
//! Every operation is total: unknown ids are silently ignored and guarded
//! transitions refuse by doing nothing. There is deliberately no error
//! channel, which keeps UI wiring tolerant and idempotent.

use log::{debug, trace};

use crate::math::Float3;

use super::events::{StoreEvent, Subscriber, SubscriberId, Subscribers};
use super::loop_gen;
use super::point::{IdGen, PointId, TrackPoint};

/// Editing session mode.
///
/// `Preview` is a declared non-interactive viewing mode, reachable only
/// via [`TrackStore::set_mode`]; for data-model purposes it behaves like
/// `Build`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Build,
    Ride,
    Preview,
}

/// Owner of the track and all session state.
///
/// All mutation goes through the operations below; readers get shared
/// borrows only, so position/tilt updates cannot bypass the store.
pub struct TrackStore {
    points: Vec<TrackPoint>,
    mode: EditorMode,
    selected_point_id: Option<PointId>,
    ride_progress: f32,
    is_riding: bool,
    ride_speed: f32,
    is_dragging_point: bool,
    is_adding_points: bool,
    is_looped: bool,
    has_chain_lift: bool,
    show_wood_supports: bool,
    is_night_mode: bool,
    camera_target: Option<Float3>,
    ids: IdGen,
    revision: u64,
    subscribers: Subscribers,
}

impl TrackStore {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            mode: EditorMode::Build,
            selected_point_id: None,
            ride_progress: 0.0,
            is_riding: false,
            ride_speed: 1.0,
            is_dragging_point: false,
            is_adding_points: false,
            is_looped: false,
            has_chain_lift: false,
            show_wood_supports: false,
            is_night_mode: false,
            camera_target: None,
            ids: IdGen::new(),
            revision: 0,
            subscribers: Subscribers::new(),
        }
    }

    // --- read access -----------------------------------------------------

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn point(&self, id: &PointId) -> Option<&TrackPoint> {
        self.points.iter().find(|p| &p.id == id)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn selected_point_id(&self) -> Option<&PointId> {
        self.selected_point_id.as_ref()
    }

    pub fn ride_progress(&self) -> f32 {
        self.ride_progress
    }

    pub fn is_riding(&self) -> bool {
        self.is_riding
    }

    pub fn ride_speed(&self) -> f32 {
        self.ride_speed
    }

    pub fn is_dragging_point(&self) -> bool {
        self.is_dragging_point
    }

    pub fn is_adding_points(&self) -> bool {
        self.is_adding_points
    }

    pub fn is_looped(&self) -> bool {
        self.is_looped
    }

    pub fn has_chain_lift(&self) -> bool {
        self.has_chain_lift
    }

    pub fn show_wood_supports(&self) -> bool {
        self.show_wood_supports
    }

    pub fn is_night_mode(&self) -> bool {
        self.is_night_mode
    }

    pub fn camera_target(&self) -> Option<Float3> {
        self.camera_target
    }

    /// Monotonic change counter: bumps once per effective mutation.
    /// Poll-style collaborators compare it between frames.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // --- change notification ---------------------------------------------

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriberId {
        self.subscribers.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.unsubscribe(id);
    }

    fn emit(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.subscribers.notify(&event);
    }

    // --- track editing ---------------------------------------------------

    /// Appends a new point at `position` with zero tilt and returns its
    /// freshly minted id. Always succeeds.
    pub fn add_track_point(&mut self, position: Float3) -> PointId {
        let id = self.ids.mint();
        self.points.push(TrackPoint::new(id.clone(), position));
        debug!("added track point {id}");
        self.emit(StoreEvent::PointAdded(id.clone()));
        id
    }

    /// Replaces the position of the matching point; no-op on unknown id.
    pub fn update_track_point(&mut self, id: &PointId, position: Float3) {
        let Some(point) = self.points.iter_mut().find(|p| &p.id == id) else {
            return;
        };
        point.position = position;
        trace!("moved track point {id}");
        self.emit(StoreEvent::PointUpdated(id.clone()));
    }

    /// Replaces the tilt of the matching point; no-op on unknown id.
    pub fn update_track_point_tilt(&mut self, id: &PointId, tilt: f32) {
        let Some(point) = self.points.iter_mut().find(|p| &p.id == id) else {
            return;
        };
        point.tilt = tilt;
        trace!("tilted track point {id}");
        self.emit(StoreEvent::PointUpdated(id.clone()));
    }

    /// Deletes the matching point, clearing the selection if it pointed at
    /// the removed point (no separate selection event is emitted). No-op
    /// on unknown id. Other points are untouched.
    pub fn remove_track_point(&mut self, id: &PointId) {
        let Some(index) = self.points.iter().position(|p| &p.id == id) else {
            return;
        };
        self.points.remove(index);
        if self.selected_point_id.as_ref() == Some(id) {
            self.selected_point_id = None;
        }
        debug!("removed track point {id}");
        self.emit(StoreEvent::PointRemoved(id.clone()));
    }

    /// Synthesizes a vertical loop anchored at the matching point and
    /// splices the run immediately after it. Existing points keep their
    /// relative order; loop synthesis only inserts. No-op on unknown id.
    pub fn create_loop_at_point(&mut self, id: &PointId) {
        let Some(index) = self.points.iter().position(|p| &p.id == id) else {
            debug!("create_loop_at_point ignored: unknown id {id}");
            return;
        };

        let anchor = self.points[index].position;
        let direction = loop_gen::entry_direction(&self.points, index);
        let run: Vec<TrackPoint> = loop_gen::loop_positions(anchor, direction)
            .into_iter()
            .map(|position| TrackPoint::new(self.ids.mint(), position))
            .collect();
        let added = run.len();

        self.points.splice(index + 1..index + 1, run);
        debug!("created loop at {id}: {added} points inserted");
        self.emit(StoreEvent::LoopCreated {
            anchor: id.clone(),
            added,
        });
    }

    /// Sets or clears the selection without existence validation; a
    /// dangling selection is tolerated transiently.
    pub fn select_point(&mut self, id: Option<PointId>) {
        if self.selected_point_id == id {
            return;
        }
        self.selected_point_id = id.clone();
        self.emit(StoreEvent::SelectionChanged(id));
    }

    /// Empties the track, clears the selection, and resets the ride.
    /// `mode` is left unchanged.
    pub fn clear_track(&mut self) {
        let already_clear = self.points.is_empty()
            && self.selected_point_id.is_none()
            && self.ride_progress == 0.0
            && !self.is_riding;
        if already_clear {
            return;
        }
        self.points.clear();
        self.selected_point_id = None;
        self.ride_progress = 0.0;
        self.is_riding = false;
        debug!("track cleared");
        self.emit(StoreEvent::TrackCleared);
    }

    // --- mode and ride ---------------------------------------------------

    /// Unconditional mode change. Entering a ride properly goes through
    /// [`Self::start_ride`], which is the guarded path.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.emit(StoreEvent::ModeChanged(mode));
    }

    /// Guarded transition into the ride: requires at least 2 points,
    /// otherwise the state is left unchanged. This is the authoritative
    /// guard against riding a degenerate path; UI-level duplicates of it
    /// are cosmetic.
    pub fn start_ride(&mut self) {
        if self.points.len() < 2 {
            debug!("start_ride refused: {} point(s)", self.points.len());
            return;
        }
        self.mode = EditorMode::Ride;
        self.is_riding = true;
        self.ride_progress = 0.0;
        debug!("ride started");
        self.emit(StoreEvent::RideStarted);
    }

    /// Unconditional transition back to build mode with the ride reset.
    pub fn stop_ride(&mut self) {
        let already_stopped =
            self.mode == EditorMode::Build && !self.is_riding && self.ride_progress == 0.0;
        if already_stopped {
            return;
        }
        self.mode = EditorMode::Build;
        self.is_riding = false;
        self.ride_progress = 0.0;
        debug!("ride stopped");
        self.emit(StoreEvent::RideStopped);
    }

    /// Stores the traversal fraction as given, without clamping: the
    /// frame driver owns range and wraparound policy.
    pub fn set_ride_progress(&mut self, value: f32) {
        if self.ride_progress == value {
            return;
        }
        self.ride_progress = value;
        trace!("ride progress {value}");
        self.emit(StoreEvent::RideProgress(value));
    }

    pub fn set_is_riding(&mut self, value: bool) {
        if self.is_riding == value {
            return;
        }
        self.is_riding = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    /// Stores the speed multiplier as given, without clamping. Persists
    /// across ride start/stop.
    pub fn set_ride_speed(&mut self, value: f32) {
        if self.ride_speed == value {
            return;
        }
        self.ride_speed = value;
        self.emit(StoreEvent::RideSpeedChanged(value));
    }

    // --- display/editing toggles -----------------------------------------

    pub fn set_is_dragging_point(&mut self, value: bool) {
        if self.is_dragging_point == value {
            return;
        }
        self.is_dragging_point = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    pub fn set_is_adding_points(&mut self, value: bool) {
        if self.is_adding_points == value {
            return;
        }
        self.is_adding_points = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    pub fn set_is_looped(&mut self, value: bool) {
        if self.is_looped == value {
            return;
        }
        self.is_looped = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    pub fn set_has_chain_lift(&mut self, value: bool) {
        if self.has_chain_lift == value {
            return;
        }
        self.has_chain_lift = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    pub fn set_show_wood_supports(&mut self, value: bool) {
        if self.show_wood_supports == value {
            return;
        }
        self.show_wood_supports = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    pub fn set_is_night_mode(&mut self, value: bool) {
        if self.is_night_mode == value {
            return;
        }
        self.is_night_mode = value;
        self.emit(StoreEvent::FlagsChanged);
    }

    /// Opaque to the core; passed through for the camera collaborator.
    pub fn set_camera_target(&mut self, target: Option<Float3>) {
        if self.camera_target == target {
            return;
        }
        self.camera_target = target;
        self.emit(StoreEvent::CameraChanged);
    }
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}
