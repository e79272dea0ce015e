//! Synchronization status broadcasting.
//!
//! The storage layer announces whether a background sync is in flight.
//! Observers register through [`SyncStatusSource::subscribe`] and receive
//! every published boolean until their [`Subscription`] is dropped.
//!
//! There is no replay: a subscriber registered while a sync is already
//! running sees nothing until the next transition.

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Callback invoked with the new "is syncing" flag.
pub type SyncCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Anything observers can subscribe to for sync status.
pub trait SyncStatusSource: Send + Sync {
    /// Register `callback`. It stays registered until the returned handle
    /// is dropped or explicitly unsubscribed.
    fn subscribe(&self, callback: SyncCallback) -> Subscription;
}

#[derive(Default)]
struct HubState {
    next_id: u64,
    subscribers: Vec<(u64, SyncCallback)>,
    active: usize,
    syncing: bool,
}

impl HubState {
    fn remove(&mut self, id: u64) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }
}

/// Multi-subscriber publisher of the sync flag.
///
/// Cloning yields another handle to the same hub.
#[derive(Clone, Default)]
pub struct SyncStatusHub {
    state: Arc<Mutex<HubState>>,
}

impl SyncStatusHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `syncing` to every live subscriber.
    ///
    /// Callbacks run after the internal lock is released, so a callback
    /// may subscribe, unsubscribe or publish without deadlocking.
    pub fn publish(&self, syncing: bool) {
        let callbacks: Vec<SyncCallback> = {
            let mut state = self.lock();
            state.syncing = syncing;
            state.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };

        for callback in callbacks {
            callback(syncing);
        }
    }

    /// Mark the start of one sync operation.
    ///
    /// The hub publishes `true` when the first operation starts and
    /// `false` when the last outstanding [`SyncGuard`] is dropped.
    pub fn begin(&self) -> SyncGuard {
        let first = {
            let mut state = self.lock();
            state.active += 1;
            state.active == 1
        };
        if first {
            self.publish(true);
        }
        SyncGuard { hub: self.clone() }
    }

    /// Last published value.
    pub fn is_syncing(&self) -> bool {
        self.lock().syncing
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn finish(&self) {
        let last = {
            let mut state = self.lock();
            state.active = state.active.saturating_sub(1);
            state.active == 0
        };
        if last {
            self.publish(false);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SyncStatusSource for SyncStatusHub {
    fn subscribe(&self, callback: SyncCallback) -> Subscription {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push((id, callback));

        Subscription {
            hub: Arc::downgrade(&self.state),
            id,
        }
    }
}

/// Registration handle returned by [`SyncStatusSource::subscribe`].
///
/// Dropping the handle deregisters the callback. Outliving the hub is fine.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    hub: Weak<Mutex<HubState>>,
    id: u64,
}

impl Subscription {
    /// Deregister now instead of at drop.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.hub.upgrade() {
            state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(self.id);
        }
    }
}

/// One in-flight sync operation. See [`SyncStatusHub::begin`].
#[must_use = "the sync is considered finished as soon as the guard is dropped"]
pub struct SyncGuard {
    hub: SyncStatusHub,
}

impl Drop for SyncGuard {
    fn drop(&mut self) {
        self.hub.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, SyncCallback) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: SyncCallback = Arc::new(move |v: bool| sink.lock().unwrap().push(v));
        (seen, callback)
    }

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let hub = SyncStatusHub::new();
        let (a, cb_a) = recorder();
        let (b, cb_b) = recorder();
        let _sa = hub.subscribe(cb_a);
        let _sb = hub.subscribe(cb_b);

        hub.publish(true);
        hub.publish(false);

        assert_eq!(*a.lock().unwrap(), vec![true, false]);
        assert_eq!(*b.lock().unwrap(), vec![true, false]);
        assert!(!hub.is_syncing());
    }

    #[test]
    fn test_no_replay_on_subscribe() {
        let hub = SyncStatusHub::new();
        hub.publish(true);

        let (seen, cb) = recorder();
        let _sub = hub.subscribe(cb);
        assert!(seen.lock().unwrap().is_empty());
        assert!(hub.is_syncing());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let hub = SyncStatusHub::new();
        let (seen, cb) = recorder();
        let sub = hub.subscribe(cb);
        assert_eq!(hub.subscriber_count(), 1);

        hub.publish(true);
        sub.unsubscribe();
        hub.publish(false);

        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_subscription_outlives_hub() {
        let (_, cb) = recorder();
        let sub = {
            let hub = SyncStatusHub::new();
            hub.subscribe(cb)
        };
        drop(sub);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself() {
        let hub = SyncStatusHub::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let slot_cb = slot.clone();
        let sub = hub.subscribe(Arc::new(move |_: bool| {
            slot_cb.lock().unwrap().take();
        }));
        *slot.lock().unwrap() = Some(sub);

        hub.publish(true);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_guards_publish_edges_only() {
        let hub = SyncStatusHub::new();
        let (seen, cb) = recorder();
        let _sub = hub.subscribe(cb);

        let first = hub.begin();
        let second = hub.begin();
        drop(first);
        assert!(hub.is_syncing());
        drop(second);

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
        assert!(!hub.is_syncing());
    }
}
