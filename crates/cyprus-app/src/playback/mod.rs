//! # Playback State
//!
//! One shared `playing` flag, read and flipped by views that otherwise know nothing
//! about each other (the player page, a header indicator, ...).
//!
//! [`PlaybackState`] is an explicitly constructed service: create one with
//! [`PlaybackState::new`] and hand clones to every view that needs it. Clones share
//! the same value; separate instances do not.
//!
//! ```rust
//! use cyprus_app::playback::PlaybackState;
//! use std::sync::{Arc, Mutex};
//!
//! let playback = PlaybackState::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let log = seen.clone();
//! let subscription = playback.subscribe(move |playing| log.lock().unwrap().push(playing));
//!
//! playback.toggle();
//! subscription.unsubscribe();
//! playback.toggle();
//!
//! // Current value on subscribe, then one notification per change while subscribed.
//! assert_eq!(*seen.lock().unwrap(), vec![false, true]);
//! ```
//!
//! ## Delivery
//!
//! Observers are called synchronously, in subscription order, before `toggle` (or
//! `subscribe`) returns. They are never called with the internal lock held, so an
//! observer may itself toggle, subscribe or unsubscribe. Such re-entrant changes are
//! queued and delivered by the outermost call once the current notification returns,
//! which keeps every observer's sequence of values in chronological order.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use tracing::debug;

/// Callback invoked with the current `playing` value.
pub type PlaybackObserver = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Paused,
    Playing,
}

impl PlaybackStatus {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackStatus::Paused => PlaybackStatus::Playing,
            PlaybackStatus::Playing => PlaybackStatus::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackStatus::Playing
    }
}

struct Registry {
    status: PlaybackStatus,
    next_id: u64,
    /// Keyed by subscription id, which increases monotonically: iteration order is
    /// subscription order.
    observers: BTreeMap<u64, PlaybackObserver>,
    /// Notifications not yet delivered, oldest first.
    pending: VecDeque<(u64, bool)>,
    /// The thread currently draining `pending`, if any.
    draining_on: Option<ThreadId>,
}

struct Shared {
    registry: Mutex<Registry>,
    /// Serializes draining across threads.
    delivery: Mutex<()>,
}

impl Shared {
    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delivers every pending notification, unless this thread is already doing so
    /// further up the stack.
    fn drain(&self) {
        let me = thread::current().id();
        if self.registry().draining_on == Some(me) {
            return;
        }

        let _delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        self.registry().draining_on = Some(me);
        let _reset = DrainReset(self);

        loop {
            let next = {
                let mut registry = self.registry();
                match registry.pending.pop_front() {
                    Some((id, playing)) => registry
                        .observers
                        .get(&id)
                        .cloned()
                        .map(|observer| (observer, playing)),
                    None => break,
                }
            };
            // Lock released: the observer may re-enter.
            if let Some((observer, playing)) = next {
                observer(playing);
            }
        }
    }
}

/// Clears the draining marker even if an observer panics.
struct DrainReset<'a>(&'a Shared);

impl Drop for DrainReset<'_> {
    fn drop(&mut self) {
        self.0.registry().draining_on = None;
    }
}

/// The shared playback flag. Cheap to clone; clones observe the same value.
#[derive(Clone)]
pub struct PlaybackState {
    shared: Arc<Shared>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.shared.registry();
        f.debug_struct("PlaybackState")
            .field("status", &registry.status)
            .field("subscribers", &registry.observers.len())
            .finish()
    }
}

impl PlaybackState {
    /// A new, independent state, initially paused.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                registry: Mutex::new(Registry {
                    status: PlaybackStatus::default(),
                    next_id: 0,
                    observers: BTreeMap::new(),
                    pending: VecDeque::new(),
                    draining_on: None,
                }),
                delivery: Mutex::new(()),
            }),
        }
    }

    /// Registers `observer` and calls it right away with the current value, then on
    /// every change until the returned [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = self.shared.registry();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.observers.insert(id, Arc::new(observer));
            let playing = registry.status.is_playing();
            registry.pending.push_back((id, playing));
            debug!(
                subscription = id,
                playing,
                subscribers = registry.observers.len(),
                "Subscribed"
            );
            id
        };

        self.shared.drain();

        Subscription {
            id,
            shared: self.shared.clone(),
        }
    }

    /// Flips the flag and notifies every subscriber before returning.
    pub fn toggle(&self) {
        {
            let mut registry = self.shared.registry();
            registry.status = registry.status.toggled();
            let playing = registry.status.is_playing();
            let ids: Vec<u64> = registry.observers.keys().copied().collect();
            registry
                .pending
                .extend(ids.into_iter().map(|id| (id, playing)));
            debug!(playing, subscribers = registry.observers.len(), "Toggled");
        }

        self.shared.drain();
    }
}

/// Handle to a registered observer. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    shared: Arc<Shared>,
}

impl Subscription {
    /// Removes the observer. Notifications queued for it and not yet delivered are
    /// discarded.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut registry = self.shared.registry();
        let removed = registry.observers.remove(&self.id);
        let id = self.id;
        registry.pending.retain(|(pending, _)| *pending != id);
        debug!(
            subscription = id,
            subscribers = registry.observers.len(),
            "Unsubscribed"
        );
        // The observer may own subscriptions of its own; drop it unlocked.
        drop(registry);
        drop(removed);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
