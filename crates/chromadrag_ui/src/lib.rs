//! chromadrag_ui - platform boundary types for the chromadrag picker engine
//!
//! The platform layer (view system, event loop, renderer) talks to the picker
//! core exclusively through the types in this crate: widget-local layout
//! primitives, single-pointer input events and bounded listener lists.

mod callback;
mod event;
mod layout;

pub use callback::{Listener, ListenerError, ListenerId, ListenerList, DEFAULT_LISTENER_CAPACITY};
pub use event::Event;
pub use layout::{Axis, Bounds, Padding, Point, Size};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::{Listener, ListenerId, ListenerList};
    pub use crate::event::Event;
    pub use crate::layout::{Axis, Bounds, Padding, Point, Size};
}
