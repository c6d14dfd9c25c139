//! Picker sessions: several linked pickers showing one colour.
//!
//! `SyncHub` owns the canonical colour and every attached picker. A
//! user-driven change on one picker is pushed to all others through their
//! external entry point, which never emits events, so an update travels
//! exactly one hop and is never echoed back to its source.

use std::fmt;
use std::time::Duration;

use chromadrag_ui::{Event, Listener, ListenerId, ListenerList};
use serde::Serialize;

use crate::color::{ColorInput, ColorState};
use crate::constants::SESSION_LISTENER_CAPACITY;
use crate::drag::PickerEvent;
use crate::error::PickerError;
use crate::picker::Picker;

/// Identifies a picker inside one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PickerId(u64);

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "picker#{}", self.0)
    }
}

/// A picker event tagged with the picker that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionEvent {
    pub source: PickerId,
    pub event: PickerEvent,
}

/// Owner of a session's colour and linked pickers.
pub struct SyncHub {
    color: ColorState,
    pickers: Vec<(PickerId, Picker)>,
    next_id: u64,
    listeners: ListenerList<SessionEvent>,
}

impl SyncHub {
    /// Create an empty session.
    pub fn new(initial: ColorState) -> Self {
        Self {
            color: initial,
            pickers: Vec::new(),
            next_id: 0,
            listeners: ListenerList::with_capacity(SESSION_LISTENER_CAPACITY),
        }
    }

    /// The session's canonical colour.
    pub fn color(&self) -> ColorState {
        self.color
    }

    /// Number of attached pickers.
    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }

    /// Ids of attached pickers in attach order.
    pub fn ids(&self) -> impl Iterator<Item = PickerId> + '_ {
        self.pickers.iter().map(|(id, _)| *id)
    }

    pub fn picker(&self, id: PickerId) -> Option<&Picker> {
        self.pickers
            .iter()
            .find(|(picker_id, _)| *picker_id == id)
            .map(|(_, picker)| picker)
    }

    fn picker_mut(&mut self, id: PickerId) -> Result<&mut Picker, PickerError> {
        self.pickers
            .iter_mut()
            .find(|(picker_id, _)| *picker_id == id)
            .map(|(_, picker)| picker)
            .ok_or(PickerError::UnknownPicker(id))
    }

    // =========================================================================
    // Linking
    // =========================================================================

    /// Link a picker. It immediately takes on the session colour.
    pub fn attach(&mut self, mut picker: Picker) -> PickerId {
        let id = PickerId(self.next_id);
        self.next_id += 1;
        picker.apply_external(self.color);
        log::debug!("Attached {:?} picker as {}", picker.kind(), id);
        self.pickers.push((id, picker));
        id
    }

    /// Unlink a picker and hand it back.
    pub fn detach(&mut self, id: PickerId) -> Result<Picker, PickerError> {
        let index = self
            .pickers
            .iter()
            .position(|(picker_id, _)| *picker_id == id)
            .ok_or(PickerError::UnknownPicker(id))?;
        let (_, picker) = self.pickers.remove(index);
        log::debug!("Detached {}", id);
        Ok(picker)
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a listener for every session event.
    pub fn subscribe<F>(&mut self, f: F) -> Result<ListenerId, PickerError>
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        Ok(self.listeners.subscribe(Listener::new(f))?)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> Result<(), PickerError> {
        Ok(self.listeners.unsubscribe(id)?)
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Route one platform event to a picker and propagate its result.
    ///
    /// A press starts a new gesture, so snaps still running on the other
    /// pickers are stopped first: the newest gesture owns the session colour.
    pub fn dispatch(&mut self, id: PickerId, event: &Event) -> Result<Vec<SessionEvent>, PickerError> {
        self.picker_mut(id)?;
        if matches!(event, Event::PointerDown { .. }) {
            self.cancel_animations_except(id);
        }
        let events = self.picker_mut(id)?.handle_event(event);
        Ok(self.route(id, events))
    }

    fn cancel_animations_except(&mut self, owner: PickerId) {
        for (id, picker) in &mut self.pickers {
            if *id != owner && picker.cancel_animation() {
                log::debug!("{} took over the session from {}'s snap", owner, id);
            }
        }
    }

    /// Advance every running animation by `dt`.
    pub fn on_frame(&mut self, dt: Duration) -> Vec<SessionEvent> {
        let mut out = Vec::new();
        let ids: Vec<PickerId> = self.ids().collect();
        for id in ids {
            let events = match self.picker_mut(id) {
                Ok(picker) => picker.on_frame(dt),
                Err(_) => continue,
            };
            out.extend(self.route(id, events));
        }
        out
    }

    /// Set the session colour programmatically. No events are produced.
    pub fn set_color(&mut self, input: impl Into<ColorInput>) {
        self.color = input.into().resolve();
        log::debug!("Session colour set to {}", self.color);
        for (_, picker) in &mut self.pickers {
            picker.apply_external(self.color);
        }
    }

    fn route(&mut self, source: PickerId, events: Vec<PickerEvent>) -> Vec<SessionEvent> {
        let mut out = Vec::with_capacity(events.len());
        for event in events {
            if event.is_user_change() {
                if let Some(color) = event.color() {
                    self.propagate(source, color);
                }
            } else if let PickerEvent::ColorPicked(color) = event {
                self.color = color;
            }

            let session_event = SessionEvent { source, event };
            self.listeners.publish(&session_event);
            out.push(session_event);
        }
        out
    }

    fn propagate(&mut self, source: PickerId, color: ColorState) {
        self.color = color;
        let mut reached = 0;
        for (id, picker) in &mut self.pickers {
            if *id != source {
                picker.apply_external(color);
                reached += 1;
            }
        }
        log::trace!("{} propagated {} to {} pickers", source, color, reached);
    }
}

impl Default for SyncHub {
    fn default() -> Self {
        Self::new(ColorState::default())
    }
}

impl fmt::Debug for SyncHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHub")
            .field("color", &self.color)
            .field("pickers", &self.pickers.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
