use crate::layout::{Padding, Point, Size};

/// Events a picker responds to.
///
/// Positions are already translated into widget-local coordinates by the
/// platform layer. Only a single pointer is tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer pressed.
    PointerDown { position: Point },
    /// Pointer moved while pressed.
    PointerMove { position: Point },
    /// Pointer released.
    PointerUp { position: Point },
    /// Gesture taken away, e.g. a parent intercepted the touch stream.
    PointerCancel,
    /// Widget bounds changed.
    Resized { size: Size, padding: Padding },
}

impl Event {
    /// Convenience constructor for a pointer press.
    pub fn down(x: f32, y: f32) -> Self {
        Event::PointerDown {
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a pointer move.
    pub fn move_to(x: f32, y: f32) -> Self {
        Event::PointerMove {
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a pointer release.
    pub fn up(x: f32, y: f32) -> Self {
        Event::PointerUp {
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a resize without padding.
    pub fn resized(width: f32, height: f32) -> Self {
        Event::Resized {
            size: Size::new(width, height),
            padding: Padding::ZERO,
        }
    }

    /// Pointer position carried by this event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::PointerDown { position }
            | Event::PointerMove { position }
            | Event::PointerUp { position } => Some(*position),
            Event::PointerCancel | Event::Resized { .. } => None,
        }
    }

    /// True for the pointer family of events.
    pub fn is_pointer(&self) -> bool {
        !matches!(self, Event::Resized { .. })
    }
}
