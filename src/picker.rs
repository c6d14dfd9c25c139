//! A single picker widget's interaction core.
//!
//! `Picker` ties one shape's geometry to a colour, a drag controller and a
//! snap animation slot. The platform feeds it [`Event`]s and frame deltas and
//! receives [`PickerEvent`]s back.

use std::time::Duration;

use chromadrag_ui::{Axis, Event, Padding, Point, Size};
use serde::Serialize;

use crate::color::{ColorInput, ColorState, HsvComponent, Rgb};
use crate::config::{clamp_stroke_width, min_gap_width, PickerConfig};
use crate::drag::{DragAction, DragController, PickerEvent, UpdateOrigin};
use crate::error::PickerError;
use crate::geometry::{
    CircleGeometry, HandlePosition, LinearGeometry, PickerGeometry, RingGeometry, TrackCoordinate,
    TrackGeometry,
};
use crate::gradient::{picker_gradient, Gradient};
use crate::snap::{AnimationSlot, SnapAnimation, SnapTrigger};

/// Shape of a picker, chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerKind {
    /// Hue ring with a confirming center disk
    Ring,
    /// Hue/saturation wheel
    Circle,
    /// Slider over one HSV component
    Linear(HsvComponent),
}

/// Serializable view of a picker for renderers and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerSnapshot {
    pub kind: PickerKind,
    pub color: ColorState,
    pub rgb: Rgb,
    pub handle: Option<HandlePosition>,
    pub geometry: Option<TrackGeometry>,
    pub gradient: Option<Gradient>,
    pub dragging: bool,
    pub animating: bool,
}

/// Interaction core of one picker widget.
#[derive(Debug)]
pub struct Picker {
    kind: PickerKind,
    config: PickerConfig,
    color: ColorState,
    size: Size,
    padding: Padding,
    geometry: Option<TrackGeometry>,
    controller: DragController,
    animation: AnimationSlot,
    external_revision: u64,
}

impl Picker {
    /// Create a picker. The geometry stays unset until the first resize.
    pub fn new(kind: PickerKind, config: PickerConfig) -> Self {
        let config = config.validated();
        log::debug!("Creating {:?} picker at {}", kind, config.initial);
        Self {
            kind,
            color: config.initial,
            config,
            size: Size::ZERO,
            padding: Padding::ZERO,
            geometry: None,
            controller: DragController::new(),
            animation: AnimationSlot::new(),
            external_revision: 0,
        }
    }

    pub fn ring(config: PickerConfig) -> Self {
        Self::new(PickerKind::Ring, config)
    }

    pub fn circle(config: PickerConfig) -> Self {
        Self::new(PickerKind::Circle, config)
    }

    pub fn linear(component: HsvComponent, config: PickerConfig) -> Self {
        Self::new(PickerKind::Linear(component), config)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn color(&self) -> ColorState {
        self.color
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn geometry(&self) -> Option<&TrackGeometry> {
        self.geometry.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Number of external updates applied so far.
    pub fn external_revision(&self) -> u64 {
        self.external_revision
    }

    pub fn ring_width(&self) -> f32 {
        self.config.ring.ring_width
    }

    pub fn gap_width(&self) -> f32 {
        self.config.ring.gap_width
    }

    pub fn stroke_width(&self) -> f32 {
        self.config.ring.stroke_width
    }

    /// Current handle, derived from the colour. `None` until measured.
    pub fn handle_position(&self) -> Option<HandlePosition> {
        self.geometry
            .map(|geometry| geometry.handle_at(self.coordinate_for(self.color)))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed one platform event.
    pub fn handle_event(&mut self, event: &Event) -> Vec<PickerEvent> {
        match *event {
            Event::Resized { size, padding } => {
                if let Err(e) = self.resize(size, padding) {
                    log::debug!("{:?} picker not laid out: {}", self.kind, e);
                }
                Vec::new()
            }
            Event::PointerCancel => {
                self.controller.cancel();
                Vec::new()
            }
            Event::PointerDown { position } => {
                let Some(geometry) = self.geometry else {
                    log::trace!("Ignoring press on unmeasured {:?} picker", self.kind);
                    return Vec::new();
                };
                if self.animation.cancel().is_some() {
                    log::debug!("Press interrupted a running snap");
                }
                let handle = geometry.handle_at(self.coordinate_for(self.color));
                let action = self.controller.pointer_down(&geometry, &handle, position);
                self.apply(&geometry, &handle, action)
            }
            Event::PointerMove { position } => {
                let Some(geometry) = self.geometry else {
                    return Vec::new();
                };
                let handle = geometry.handle_at(self.coordinate_for(self.color));
                let action = self.controller.pointer_move(&geometry, position);
                self.apply(&geometry, &handle, action)
            }
            Event::PointerUp { position } => {
                let Some(geometry) = self.geometry else {
                    self.controller.reset();
                    return Vec::new();
                };
                let handle = geometry.handle_at(self.coordinate_for(self.color));
                let action = self.controller.pointer_up(&geometry, &handle, position);
                self.apply(&geometry, &handle, action)
            }
        }
    }

    fn apply(
        &mut self,
        geometry: &TrackGeometry,
        handle: &HandlePosition,
        action: DragAction,
    ) -> Vec<PickerEvent> {
        match action {
            DragAction::None | DragAction::Cancelled => Vec::new(),
            DragAction::Update(coordinate) => {
                self.color = self.color_at(self.color, coordinate);
                vec![PickerEvent::ColorChanged {
                    color: self.color,
                    origin: UpdateOrigin::User,
                }]
            }
            DragAction::Confirm => vec![
                PickerEvent::ConfirmFeedback,
                PickerEvent::ColorPicked(self.color),
            ],
            DragAction::Release { confirm } => {
                if confirm {
                    vec![PickerEvent::ColorPicked(self.color)]
                } else {
                    Vec::new()
                }
            }
            DragAction::Snap { target } => {
                let path = geometry.snap_path(handle, target);
                self.animation.start(SnapAnimation::new(
                    path,
                    SnapTrigger::TrackTap,
                    self.config.animation.duration(),
                ));
                Vec::new()
            }
        }
    }

    /// Advance a running snap by `dt`.
    pub fn on_frame(&mut self, dt: Duration) -> Vec<PickerEvent> {
        let Some(frame) = self.animation.tick(dt) else {
            return Vec::new();
        };
        let Some(geometry) = self.geometry else {
            return Vec::new();
        };
        let coordinate = geometry.coordinate_of(frame.value);

        match frame.trigger {
            SnapTrigger::TrackTap => {
                if let Some(coordinate) = coordinate {
                    self.color = self.color_at(self.color, coordinate);
                }
                let mut events = vec![PickerEvent::ColorChanged {
                    color: self.color,
                    origin: UpdateOrigin::User,
                }];
                if frame.finished && self.confirms_snap() {
                    log::debug!("Snap finished, confirming {}", self.color);
                    events.push(PickerEvent::ColorPicked(self.color));
                }
                events
            }
            SnapTrigger::Programmatic { target } => {
                self.color = match (frame.finished, coordinate) {
                    (false, Some(coordinate)) => self.color_at(target, coordinate),
                    _ => target,
                };
                vec![PickerEvent::ColorChanged {
                    color: self.color,
                    origin: UpdateOrigin::External,
                }]
            }
        }
    }

    /// Stop a running snap. A programmatic snap lands on its target colour.
    ///
    /// Returns true if an animation was running.
    pub fn cancel_animation(&mut self) -> bool {
        let Some(animation) = self.animation.cancel() else {
            return false;
        };
        if let SnapTrigger::Programmatic { target } = animation.trigger() {
            self.color = target;
        }
        true
    }

    fn confirms_snap(&self) -> bool {
        self.kind != PickerKind::Ring && self.config.confirm_on_snap
    }

    // =========================================================================
    // Colour entry points
    // =========================================================================

    /// Set the colour programmatically. Silent: no events are produced.
    pub fn set_color(&mut self, input: impl Into<ColorInput>) {
        self.animation.cancel();
        self.color = input.into().resolve();
        log::debug!("{:?} picker set to {}", self.kind, self.color);
    }

    /// Apply a colour that changed elsewhere in the session. Silent.
    pub fn apply_external(&mut self, color: ColorState) {
        self.animation.cancel();
        self.color = color;
        self.external_revision += 1;
        log::trace!(
            "{:?} picker received external {} (revision {})",
            self.kind,
            color,
            self.external_revision
        );
    }

    /// Apply a single component that changed elsewhere in the session. Silent.
    pub fn on_color_component_changed(&mut self, component: HsvComponent, value: f32) {
        let color = self.color.with_component(component, value);
        self.apply_external(color);
    }

    /// Animate the handle to an externally chosen colour.
    ///
    /// Frames are reported with `UpdateOrigin::External`. Without a geometry
    /// the colour is applied at once.
    pub fn animate_to_color(&mut self, input: impl Into<ColorInput>) -> Vec<PickerEvent> {
        let target = input.into().resolve();
        let Some(geometry) = self.geometry else {
            self.animation.cancel();
            self.color = target;
            return vec![PickerEvent::ColorChanged {
                color: target,
                origin: UpdateOrigin::External,
            }];
        };

        let handle = geometry.handle_at(self.coordinate_for(self.color));
        let path = geometry.snap_path(&handle, self.coordinate_for(target));
        self.animation.start(SnapAnimation::new(
            path,
            SnapTrigger::Programmatic { target },
            self.config.animation.duration(),
        ));
        Vec::new()
    }

    // =========================================================================
    // Colour <-> track
    // =========================================================================

    fn coordinate_for(&self, color: ColorState) -> TrackCoordinate {
        match self.kind {
            PickerKind::Ring => TrackCoordinate::Angle {
                degrees: color.hue(),
            },
            PickerKind::Circle => TrackCoordinate::Polar {
                hue: color.hue(),
                saturation: color.saturation(),
            },
            PickerKind::Linear(component) => TrackCoordinate::Fraction {
                fraction: component.fraction_of(color.component(component)),
            },
        }
    }

    fn color_at(&self, base: ColorState, coordinate: TrackCoordinate) -> ColorState {
        match self.kind {
            PickerKind::Ring => base.with_hue(coordinate.hue()),
            PickerKind::Circle => {
                let saturation = coordinate.saturation();
                if saturation <= 0.0 {
                    // The center has no hue; keep the previous one
                    base.with_saturation(0.0)
                } else {
                    ColorState::new(coordinate.hue(), saturation, base.value())
                }
            }
            PickerKind::Linear(component) => {
                base.with_component(component, component.value_at_fraction(coordinate.fraction()))
            }
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Recompute the geometry for new widget bounds.
    ///
    /// Any gesture in progress is dropped and a running snap is cancelled.
    pub fn resize(&mut self, size: Size, padding: Padding) -> Result<(), PickerError> {
        self.size = size;
        self.padding = padding;
        self.controller.reset();
        self.cancel_animation();

        match self.compute_geometry() {
            Ok(geometry) => {
                log::debug!("{:?} picker laid out: {:?}", self.kind, geometry);
                self.geometry = Some(geometry);
                Ok(())
            }
            Err(e) => {
                self.geometry = None;
                Err(e)
            }
        }
    }

    /// Replace the computed geometry, e.g. with a hand-built track.
    pub fn set_track_geometry(&mut self, geometry: impl Into<TrackGeometry>) {
        let geometry = geometry.into();
        self.controller.reset();
        self.cancel_animation();
        log::debug!("{:?} picker geometry overridden: {:?}", self.kind, geometry);
        self.geometry = Some(geometry);
    }

    fn compute_geometry(&self) -> Result<TrackGeometry, PickerError> {
        let handle = &self.config.handle;
        let geometry = match self.kind {
            PickerKind::Ring => {
                RingGeometry::compute(self.size, self.padding, &self.config.ring, handle)?.into()
            }
            PickerKind::Circle => CircleGeometry::compute(self.size, self.padding, handle)?.into(),
            PickerKind::Linear(_) => LinearGeometry::compute(
                self.size,
                self.padding,
                handle,
                self.config.linear.orientation,
            )?
            .into(),
        };
        Ok(geometry)
    }

    fn relayout(&mut self) {
        if self.size.is_degenerate() {
            return;
        }
        match self.compute_geometry() {
            Ok(geometry) => self.geometry = Some(geometry),
            Err(e) => {
                log::debug!("{:?} picker lost its layout: {}", self.kind, e);
                self.geometry = None;
            }
        }
    }

    /// Change the ring width. The hue is preserved.
    pub fn set_ring_width(&mut self, ring_width: f32) {
        self.config.ring.ring_width = ring_width.max(0.0);
        log::debug!("Ring width set to {}", self.config.ring.ring_width);
        self.relayout();
    }

    /// Change the ring/disk gap, never below twice the handle padding.
    pub fn set_gap_width(&mut self, gap_width: f32) {
        let min = min_gap_width(self.config.handle.padding);
        if gap_width < min {
            log::warn!("Gap width {} below minimum, using {}", gap_width, min);
        }
        self.config.ring.gap_width = gap_width.max(min);
        self.relayout();
    }

    /// Change the outline stroke, clamped to its legal range.
    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        self.config.ring.stroke_width = clamp_stroke_width(stroke_width);
        self.relayout();
    }

    /// Preferred size for the offered space.
    ///
    /// Ring and wheel are square; sliders ask for room for a few handle widths.
    pub fn desired_size(&self, available: Size, padding: Padding) -> Size {
        match self.kind {
            PickerKind::Ring | PickerKind::Circle => {
                let side = available.width.min(available.height);
                Size::new(side, side)
            }
            PickerKind::Linear(_) => {
                let handle = &self.config.handle;
                let long = 4.0 * handle.size + 2.0 * handle.padding;
                let short = handle.size + 2.0 * handle.padding;
                match self.config.linear.orientation {
                    Axis::Horizontal => {
                        Size::new(long + padding.horizontal(), short + padding.vertical())
                    }
                    Axis::Vertical => {
                        Size::new(short + padding.horizontal(), long + padding.vertical())
                    }
                }
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Capture everything a renderer needs.
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            kind: self.kind,
            color: self.color,
            rgb: self.color.to_rgb(),
            handle: self.handle_position(),
            geometry: self.geometry,
            gradient: self
                .geometry
                .map(|geometry| picker_gradient(self.kind, &geometry, self.color)),
            dragging: self.is_dragging(),
            animating: self.is_animating(),
        }
    }

    /// Handle center, convenient for hosts that only draw a dot.
    pub fn handle_point(&self) -> Option<Point> {
        self.handle_position().map(|handle| handle.point())
    }
}
