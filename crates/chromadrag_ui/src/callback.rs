//! Listener abstraction for picker output events
//!
//! Pickers never call back into the host synchronously while they mutate their
//! own state. Instead, hosts register listeners into a bounded `ListenerList`
//! and the owner publishes events once its state is consistent again.
//!
//! # Examples
//!
//! ```ignore
//! use chromadrag_ui::{Listener, ListenerList};
//!
//! let mut listeners: ListenerList<f32> = ListenerList::with_capacity(4);
//! let id = listeners.subscribe(Listener::new(|value: &f32| println!("{value}")))?;
//! listeners.publish(&0.5);
//! listeners.unsubscribe(id)?;
//! ```

use std::fmt;

/// Default number of subscribers a list accepts.
pub const DEFAULT_LISTENER_CAPACITY: usize = 8;

/// Errors raised by listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListenerError {
    /// The list already holds its maximum number of subscribers
    #[error("listener list is full (capacity {capacity})")]
    Full { capacity: usize },

    /// No subscriber is registered under this id
    #[error("no listener registered with id {0:?}")]
    NotFound(ListenerId),
}

/// Handle returned by [`ListenerList::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A boxed event handler.
///
/// Listeners receive events by reference and may keep their own state.
pub struct Listener<T> {
    f: Box<dyn FnMut(&T)>,
}

impl<T> Listener<T> {
    /// Create a new listener from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Invoke the listener.
    pub fn notify(&mut self, value: &T) {
        (self.f)(value);
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").finish_non_exhaustive()
    }
}

/// A bounded list of subscribers, notified in registration order.
pub struct ListenerList<T> {
    entries: Vec<(ListenerId, Listener<T>)>,
    capacity: usize,
    next_id: u64,
}

impl<T> ListenerList<T> {
    /// Create an empty list with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LISTENER_CAPACITY)
    }

    /// Create an empty list accepting at most `capacity` subscribers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: Listener<T>) -> Result<ListenerId, ListenerError> {
        if self.entries.len() >= self.capacity {
            log::warn!(
                "Rejecting listener: list already holds {} subscribers",
                self.capacity
            );
            return Err(ListenerError::Full {
                capacity: self.capacity,
            });
        }

        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        log::debug!("Listener {:?} subscribed", id);
        Ok(id)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        let index = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(ListenerError::NotFound(id))?;
        self.entries.remove(index);
        log::debug!("Listener {:?} unsubscribed", id);
        Ok(())
    }

    /// Deliver an event to every listener, in registration order.
    pub fn publish(&mut self, value: &T) {
        for (_, listener) in &mut self.entries {
            listener.notify(value);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of listeners.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for ListenerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
