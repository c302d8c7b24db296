//! Session state
//!
//! Owned, injectable container for the two pieces of process-wide state the
//! client touches: whether we believe we hold a session, and the display unit.
//! Clones share the same state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

use crate::units::MassUnit;

/// Buffered session events per subscriber
const EVENT_CAPACITY: usize = 16;

/// Session transitions published to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Login or signup succeeded
    Started,
    /// Logout finished; the caller should route to its login view
    Ended,
}

#[derive(Debug)]
struct Inner {
    logged_in: AtomicBool,
    unit: RwLock<MassUnit>,
    events: broadcast::Sender<SessionEvent>,
}

/// Shared session flag, display unit and event channel
#[derive(Debug, Clone)]
pub struct SessionState {
    inner: Arc<Inner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_unit(MassUnit::default())
    }

    pub fn with_unit(unit: MassUnit) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                logged_in: AtomicBool::new(false),
                unit: RwLock::new(unit),
                events,
            }),
        }
    }

    /// Whether the client currently believes it is logged in
    pub fn is_logged_in(&self) -> bool {
        self.inner.logged_in.load(Ordering::SeqCst)
    }

    /// Currently selected display unit
    pub fn unit(&self) -> MassUnit {
        match self.inner.unit.read() {
            Ok(unit) => *unit,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_unit(&self, unit: MassUnit) {
        match self.inner.unit.write() {
            Ok(mut guard) => *guard = unit,
            Err(poisoned) => *poisoned.into_inner() = unit,
        }
    }

    /// Receive session events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    pub(crate) fn set_logged_in(&self, logged_in: bool) {
        self.inner.logged_in.store(logged_in, Ordering::SeqCst);
    }

    pub(crate) fn start(&self) {
        self.set_logged_in(true);
        self.publish(SessionEvent::Started);
    }

    pub(crate) fn end(&self) {
        self.set_logged_in(false);
        self.publish(SessionEvent::Ended);
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.inner.events.send(event);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SessionState::new();
        assert!(!state.is_logged_in());
        assert_eq!(state.unit(), MassUnit::Kg);
    }

    #[test]
    fn test_clones_share_state() {
        let state = SessionState::new();
        let other = state.clone();
        other.set_unit(MassUnit::Lbs);
        other.set_logged_in(true);
        assert_eq!(state.unit(), MassUnit::Lbs);
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_events_reach_subscribers() {
        let state = SessionState::new();
        let mut rx = state.subscribe();

        state.start();
        state.end();

        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Started);
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Ended);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let state = SessionState::with_unit(MassUnit::Lbs);
        state.start();
        assert!(state.is_logged_in());
    }
}
