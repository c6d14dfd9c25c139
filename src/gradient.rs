//! Draw geometry handed to the rendering layer.
//!
//! The core does not draw. It describes the gradients a renderer needs to
//! paint each track so that the visuals always match the current colour.

use chromadrag_ui::{Axis, Point};
use serde::Serialize;

use crate::color::{clamp, ColorState, HsvComponent, Rgb};
use crate::constants::HUE_GRADIENT_STOPS;
use crate::geometry::{LinearGeometry, TrackGeometry};
use crate::picker::PickerKind;

/// A colour at an offset in `[0, 1]` along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
}

impl GradientStop {
    pub fn new(offset: f32, color: Rgb) -> Self {
        Self { offset, color }
    }
}

/// Everything a renderer needs to paint one track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Gradient {
    /// Angular gradient around `center` (ring and wheel)
    Sweep {
        center: Point,
        stops: Vec<GradientStop>,
        /// Ring center disk fill
        center_fill: Option<Rgb>,
        /// Black overlay alpha darkening the wheel to the current value
        value_overlay_alpha: Option<u8>,
    },
    /// Straight gradient from `start` to `end` (sliders)
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Sweep { stops, .. } | Gradient::Linear { stops, .. } => stops,
        }
    }
}

/// Hue stops from red around to red at the given saturation and value.
pub fn hue_stops(saturation: f32, value: f32) -> Vec<GradientStop> {
    let last = (HUE_GRADIENT_STOPS - 1) as f32;
    (0..HUE_GRADIENT_STOPS)
        .map(|i| {
            let offset = i as f32 / last;
            let color = ColorState::new(offset * 360.0, saturation, value);
            GradientStop::new(offset, color.to_rgb())
        })
        .collect()
}

/// Fully saturated, full value hue sweep.
pub fn sweep_stops() -> Vec<GradientStop> {
    hue_stops(1.0, 1.0)
}

/// Stops for a slider over one component, other components taken from `color`.
pub fn component_stops(component: HsvComponent, color: ColorState) -> Vec<GradientStop> {
    match component {
        HsvComponent::Hue => hue_stops(color.saturation(), color.value()),
        HsvComponent::Saturation => vec![
            GradientStop::new(0.0, color.with_saturation(0.0).to_rgb()),
            GradientStop::new(1.0, color.with_saturation(1.0).to_rgb()),
        ],
        HsvComponent::Value => vec![
            GradientStop::new(0.0, color.with_value(0.0).to_rgb()),
            GradientStop::new(1.0, color.with_value(1.0).to_rgb()),
        ],
    }
}

/// Alpha of the black overlay that dims a wheel to `color`'s value.
pub fn value_overlay_alpha(color: ColorState) -> u8 {
    (clamp(1.0 - color.value(), 0.0, 1.0) * 255.0).round() as u8
}

fn slider_endpoints(linear: &LinearGeometry) -> (Point, Point) {
    let track = linear.track;
    let center = track.center();
    match linear.axis {
        Axis::Horizontal => (
            Point::new(track.x, center.y),
            Point::new(track.right(), center.y),
        ),
        Axis::Vertical => (
            Point::new(center.x, track.y),
            Point::new(center.x, track.bottom()),
        ),
    }
}

/// Gradient for a picker in its current state.
pub fn picker_gradient(kind: PickerKind, geometry: &TrackGeometry, color: ColorState) -> Gradient {
    match geometry {
        TrackGeometry::Ring(ring) => Gradient::Sweep {
            center: ring.center,
            stops: sweep_stops(),
            center_fill: Some(color.to_rgb()),
            value_overlay_alpha: None,
        },
        TrackGeometry::Circle(circle) => Gradient::Sweep {
            center: circle.center,
            stops: sweep_stops(),
            center_fill: None,
            value_overlay_alpha: Some(value_overlay_alpha(color)),
        },
        TrackGeometry::Linear(linear) => {
            let component = match kind {
                PickerKind::Linear(component) => component,
                PickerKind::Ring | PickerKind::Circle => HsvComponent::Hue,
            };
            let (start, end) = slider_endpoints(linear);
            Gradient::Linear {
                start,
                end,
                stops: component_stops(component, color),
            }
        }
    }
}
