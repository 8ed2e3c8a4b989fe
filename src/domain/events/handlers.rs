//! Observer registration and synchronous dispatch

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::args::{CancellableEventArgs, EventArgs};

/// Handle returned by [`EventHandlers::subscribe`], used to detach the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<A> = Arc<dyn Fn(&mut A) + Send + Sync>;

/// Ordered list of observers for one named event.
///
/// Observers run synchronously on the caller's task, in registration order.
pub struct EventHandlers<A> {
    name: &'static str,
    handlers: RwLock<Vec<(SubscriptionId, Handler<A>)>>,
    next_id: AtomicU64,
}

impl<A> EventHandlers<A> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&mut A) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(handler)));
        debug!(event = self.name, subscription = id.0, "Observer subscribed");
        id
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(sid, _)| *sid != id);
        handlers.len() != before
    }

    pub fn clear(&self) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every observer in registration order.
    ///
    /// The list is snapshotted first so an observer may (un)subscribe
    /// without deadlocking the dispatch.
    pub fn raise(&self, args: &mut A) {
        let snapshot: Vec<Handler<A>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, h)| h.clone())
            .collect();

        for handler in snapshot {
            handler(args);
        }
    }
}

impl EventHandlers<CancellableEventArgs> {
    /// Raise the event and report whether any observer cancelled it.
    ///
    /// All observers run even after a cancellation.
    pub fn is_raised_event_cancelled(&self, args: &mut CancellableEventArgs) -> bool {
        self.raise(args);
        args.is_cancelled()
    }
}

/// The four observable points around domain mutations.
///
/// Owned by a [`crate::application::services::DomainService`] instance, so
/// every service (and every test) has its own observer lists.
pub struct DomainEvents {
    /// Before save; cancellable
    pub saving: EventHandlers<CancellableEventArgs>,
    /// After a committed save
    pub saved: EventHandlers<EventArgs>,
    /// Before delete; cancellable
    pub deleting: EventHandlers<CancellableEventArgs>,
    /// After a committed delete
    pub deleted: EventHandlers<EventArgs>,
}

impl DomainEvents {
    pub fn new() -> Self {
        Self {
            saving: EventHandlers::new("saving"),
            saved: EventHandlers::new("saved"),
            deleting: EventHandlers::new("deleting"),
            deleted: EventHandlers::new("deleted"),
        }
    }

    pub fn clear(&self) {
        self.saving.clear();
        self.saved.clear();
        self.deleting.clear();
        self.deleted.clear();
    }
}

impl Default for DomainEvents {
    fn default() -> Self {
        Self::new()
    }
}
