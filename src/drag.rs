//! Per-picker gesture state machine.
//!
//! The controller only tracks the gesture. It tells its owner what to do with
//! each pointer event through a [`DragAction`]; the owner applies the colour
//! change and emits the matching [`PickerEvent`]s.

use chromadrag_ui::Point;
use serde::Serialize;

use crate::color::ColorState;
use crate::geometry::{HandlePosition, PickerGeometry, TrackCoordinate};
use crate::hit_test::HitResult;

/// Who caused a colour change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOrigin {
    /// Drag, tap or track snap on this picker
    User,
    /// Programmatic set or animation
    External,
}

/// Output events of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PickerEvent {
    /// Fired on every intermediate update during a drag or animation
    ColorChanged {
        color: ColorState,
        origin: UpdateOrigin,
    },
    /// Fired when the user confirms a colour
    ColorPicked(ColorState),
    /// The renderer should play its confirmation feedback (click sound)
    ConfirmFeedback,
}

impl PickerEvent {
    /// Colour carried by the event, if any.
    pub fn color(&self) -> Option<ColorState> {
        match *self {
            PickerEvent::ColorChanged { color, .. } | PickerEvent::ColorPicked(color) => {
                Some(color)
            }
            PickerEvent::ConfirmFeedback => None,
        }
    }

    /// True for user-driven colour changes, the only ones a session propagates.
    pub fn is_user_change(&self) -> bool {
        matches!(
            self,
            PickerEvent::ColorChanged {
                origin: UpdateOrigin::User,
                ..
            }
        )
    }
}

/// State of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Where the handle was grabbed
    pub origin: Point,
    /// Track coordinate under the grab point, if the shape maps it
    pub start: Option<TrackCoordinate>,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What the owner must do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    /// Nothing changes
    None,
    /// Move the colour to this coordinate
    Update(TrackCoordinate),
    /// Center disk tapped: confirm the current colour
    Confirm,
    /// Handle released; `confirm` says whether the release picks the colour
    Release { confirm: bool },
    /// Track tapped and released: animate the handle to `target`
    Snap { target: TrackCoordinate },
    /// Gesture taken away; keep the colour, emit nothing
    Cancelled,
}

/// Idle / Dragging state machine with a pending track jump.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    pending_jump: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// True between a track press and its release.
    pub fn has_pending_jump(&self) -> bool {
        self.pending_jump
    }

    /// Handle a pointer press.
    pub fn pointer_down<G>(&mut self, geometry: &G, handle: &HandlePosition, point: Point) -> DragAction
    where
        G: PickerGeometry + ?Sized,
    {
        self.state = DragState::Idle;
        self.pending_jump = false;

        match geometry.hit_test(point, handle) {
            HitResult::HandleGrab => {
                log::debug!("Handle grabbed at ({:.1}, {:.1})", point.x, point.y);
                self.state = DragState::Dragging(DragSession {
                    origin: point,
                    start: geometry.coordinate_at(point),
                });
                DragAction::None
            }
            HitResult::TrackJump => {
                log::debug!("Track pressed at ({:.1}, {:.1}), jump pending", point.x, point.y);
                self.pending_jump = true;
                DragAction::None
            }
            HitResult::CenterConfirm => {
                log::debug!("Center confirm at ({:.1}, {:.1})", point.x, point.y);
                DragAction::Confirm
            }
            HitResult::Ignore => {
                log::trace!("Press at ({:.1}, {:.1}) ignored", point.x, point.y);
                DragAction::None
            }
        }
    }

    /// Handle a pointer move.
    pub fn pointer_move<G>(&mut self, geometry: &G, point: Point) -> DragAction
    where
        G: PickerGeometry + ?Sized,
    {
        if !self.is_dragging() {
            return DragAction::None;
        }

        match geometry.coordinate_at(point) {
            Some(coordinate) => {
                log::trace!("Drag to ({:.1}, {:.1}): {:?}", point.x, point.y, coordinate);
                DragAction::Update(coordinate)
            }
            None => {
                log::trace!("Drag to ({:.1}, {:.1}) outside the track", point.x, point.y);
                DragAction::None
            }
        }
    }

    /// Handle a pointer release.
    pub fn pointer_up<G>(&mut self, geometry: &G, handle: &HandlePosition, point: Point) -> DragAction
    where
        G: PickerGeometry + ?Sized,
    {
        let state = std::mem::take(&mut self.state);
        let pending_jump = std::mem::take(&mut self.pending_jump);

        if let DragState::Dragging(_) = state {
            let confirm = geometry.confirms_release(point);
            log::debug!("Handle released (confirm: {})", confirm);
            return DragAction::Release { confirm };
        }

        if !pending_jump {
            return DragAction::None;
        }

        if !geometry.hit_test(point, handle).is_on_track() {
            log::debug!("Track jump abandoned: release left the track");
            return DragAction::None;
        }

        match geometry.coordinate_at(point) {
            Some(target) => {
                log::debug!("Track jump to {:?}", target);
                DragAction::Snap { target }
            }
            None => DragAction::None,
        }
    }

    /// Handle a cancelled gesture.
    pub fn cancel(&mut self) -> DragAction {
        let was_active = self.is_dragging() || self.pending_jump;
        self.reset();
        if was_active {
            log::debug!("Gesture cancelled");
            DragAction::Cancelled
        } else {
            DragAction::None
        }
    }

    /// Forget any gesture in progress.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.pending_jump = false;
    }
}
