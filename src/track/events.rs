//! Change notification for store collaborators.
//!
//! The store emits a [`StoreEvent`] synchronously inside each effective
//! mutation. Poll-style collaborators can ignore subscriptions and watch
//! the store's revision counter instead.

use super::point::PointId;
use super::store::EditorMode;

/// Description of a state change that already happened.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    PointAdded(PointId),
    /// Position or tilt of an existing point changed.
    PointUpdated(PointId),
    PointRemoved(PointId),
    LoopCreated { anchor: PointId, added: usize },
    TrackCleared,
    SelectionChanged(Option<PointId>),
    ModeChanged(EditorMode),
    RideStarted,
    RideStopped,
    RideProgress(f32),
    RideSpeedChanged(f32),
    /// One of the boolean display/editing toggles flipped.
    FlagsChanged,
    CameraChanged,
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubscriberId(u64);

pub type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Registry of event subscribers, owned by the store.
#[derive(Default)]
pub(crate) struct Subscribers {
    next: u64,
    entries: Vec<(SubscriberId, Subscriber)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriberId {
        let id = SubscriberId(self.next);
        self.next += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn notify(&mut self, event: &StoreEvent) {
        for (_, subscriber) in &mut self.entries {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_receive_events_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::new();

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            subs.subscribe(Box::new(move |_| seen.borrow_mut().push(tag)));
        }

        subs.notify(&StoreEvent::TrackCleared);
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subs = Subscribers::new();

        let counter = Rc::clone(&count);
        let id = subs.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        subs.notify(&StoreEvent::TrackCleared);
        subs.unsubscribe(id);
        subs.notify(&StoreEvent::TrackCleared);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn unsubscribe_unknown_id_is_harmless() {
        let mut subs = Subscribers::new();
        let id = subs.subscribe(Box::new(|_| {}));
        subs.unsubscribe(id);
        // Second removal of the same id is a no-op.
        subs.unsubscribe(id);
    }
}
