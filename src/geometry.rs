//! Screen-space to colour-space mapping for every picker shape.
//!
//! The free functions are the raw mapping primitives. `RingGeometry`,
//! `CircleGeometry` and `LinearGeometry` are immutable snapshots computed from
//! the widget bounds on every resize, and `TrackGeometry` is the closed set of
//! shapes a picker can take.
//!
//! Angles follow screen coordinates (y grows downwards): 0° points right and
//! increasing angles sweep clockwise on screen, the same direction the hue
//! gradient is drawn.

use std::f32::consts::FRAC_PI_2;

use chromadrag_ui::{Axis, Bounds, Padding, Point, Size};
use serde::Serialize;

use crate::color::{clamp, normalize_angle};
use crate::config::{HandleConfig, RingConfig};
use crate::constants::{CIRCLE_HANDLE_GRAB_FACTOR, MIN_TRACK_FRACTION};
use crate::error::PickerError;
use crate::hit_test::{self, HitResult};
use crate::snap::{SnapPath, SnapValue};

// ============================================================================
// Mapping primitives
// ============================================================================

/// Angle in degrees `[0, 360)` of `point` as seen from `center`.
///
/// Exact inverse of [`point_from_angle`].
pub fn angle_from_point(center: Point, point: Point) -> f32 {
    let radians = -(center.x - point.x).atan2(center.y - point.y) - FRAC_PI_2;
    normalize_angle(radians.to_degrees())
}

/// Point at `radius` from `center` in direction `degrees`.
pub fn point_from_angle(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radians.cos() * radius,
        center.y + radians.sin() * radius,
    )
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance_to(b)
}

/// Project `point` onto the primary axis of `track`, clamped into `[0, 1]`.
///
/// Returns `None` when the track has no length along `axis`.
pub fn fraction_from_point(track: Bounds, axis: Axis, point: Point) -> Option<f32> {
    let length = track.length(axis);
    if !(length.is_finite() && length > 0.0) {
        return None;
    }
    let fraction = (point.along(axis) - track.start(axis)) / length;
    Some(clamp(fraction, 0.0, 1.0))
}

/// Correct an angle difference into `(-180, 180]`.
///
/// Used for every angular animation delta so the handle always takes the
/// short way around the ring.
pub fn wrap_angle_delta(diff: f32) -> f32 {
    if !diff.is_finite() {
        return 0.0;
    }
    let wrapped = (diff + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Hue and saturation of `point` on a wheel of `radius` around `center`.
///
/// Saturation is the normalized distance from the center, clamped to 1.
pub fn polar_from_point(center: Point, radius: f32, point: Point) -> Option<(f32, f32)> {
    if !(radius.is_finite() && radius > 0.0) {
        return None;
    }
    let hue = angle_from_point(center, point);
    let saturation = clamp(distance(center, point) / radius, 0.0, 1.0);
    Some((hue, saturation))
}

/// Inverse of [`polar_from_point`].
pub fn point_from_polar(center: Point, radius: f32, hue: f32, saturation: f32) -> Point {
    point_from_angle(center, radius * clamp(saturation, 0.0, 1.0), hue)
}

// ============================================================================
// Coordinates and handles
// ============================================================================

/// A position in colour space along a picker's track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TrackCoordinate {
    /// Ring: hue angle in degrees
    Angle { degrees: f32 },
    /// Circle: hue angle and saturation
    Polar { hue: f32, saturation: f32 },
    /// Linear: position along the slider, `[0, 1]`
    Fraction { fraction: f32 },
}

impl TrackCoordinate {
    /// Hue angle this coordinate designates.
    pub fn hue(&self) -> f32 {
        match *self {
            TrackCoordinate::Angle { degrees } => normalize_angle(degrees),
            TrackCoordinate::Polar { hue, .. } => normalize_angle(hue),
            TrackCoordinate::Fraction { fraction } => normalize_angle(fraction * 360.0),
        }
    }

    /// Radial saturation; angle-only coordinates lie on the rim.
    pub fn saturation(&self) -> f32 {
        match *self {
            TrackCoordinate::Polar { saturation, .. } => clamp(saturation, 0.0, 1.0),
            TrackCoordinate::Angle { .. } => 1.0,
            TrackCoordinate::Fraction { fraction } => clamp(fraction, 0.0, 1.0),
        }
    }

    /// Fraction along a linear track.
    pub fn fraction(&self) -> f32 {
        match *self {
            TrackCoordinate::Fraction { fraction } => clamp(fraction, 0.0, 1.0),
            TrackCoordinate::Angle { .. } | TrackCoordinate::Polar { .. } => self.hue() / 360.0,
        }
    }
}

/// Where the handle is drawn, derived from the colour and the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HandlePosition {
    /// Ring handle: angle on the ring and its center point
    Angle { degrees: f32, point: Point },
    /// Circle handle center
    Point { point: Point },
    /// Linear handle: fraction along the track and the handle rectangle
    Offset { fraction: f32, rect: Bounds },
}

impl HandlePosition {
    /// Visual center of the handle.
    pub fn point(&self) -> Point {
        match *self {
            HandlePosition::Angle { point, .. } | HandlePosition::Point { point } => point,
            HandlePosition::Offset { rect, .. } => rect.center(),
        }
    }
}

// ============================================================================
// PickerGeometry
// ============================================================================

/// Shape-specific capabilities shared by every track geometry.
pub trait PickerGeometry {
    /// Map a drag position onto the track.
    ///
    /// Returns `None` when the shape ignores the point (ring center hole).
    /// Shapes that clamp instead always return a coordinate.
    fn coordinate_at(&self, point: Point) -> Option<TrackCoordinate>;

    /// Project a track coordinate to a handle.
    fn handle_at(&self, coordinate: TrackCoordinate) -> HandlePosition;

    /// Classify a pointer press.
    fn hit_test(&self, point: Point, handle: &HandlePosition) -> HitResult;

    /// Whether releasing a handle drag at `point` confirms the colour.
    fn confirms_release(&self, point: Point) -> bool;

    /// Interpolation path from the current handle to `target`.
    fn snap_path(&self, from: &HandlePosition, target: TrackCoordinate) -> SnapPath;

    /// Map an interpolated snap sample back onto the track.
    fn coordinate_of(&self, value: SnapValue) -> Option<TrackCoordinate>;
}

// ============================================================================
// Ring
// ============================================================================

/// Geometry of a hue ring with a confirming center disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGeometry {
    pub center: Point,
    /// Radius of the ring's center line
    pub outer_radius: f32,
    /// Radius of the center disk
    pub inner_radius: f32,
    /// Ring width including its outline strokes
    pub band_width: f32,
    /// Extra touch slack around the ring band
    pub handle_padding: f32,
    /// Arc-length tolerance for grabbing the handle
    pub touch_tolerance: f32,
}

impl RingGeometry {
    /// Create a ring geometry directly.
    pub fn new(
        center: Point,
        outer_radius: f32,
        inner_radius: f32,
        band_width: f32,
        handle_padding: f32,
        touch_tolerance: f32,
    ) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius: inner_radius.max(0.0),
            band_width,
            handle_padding,
            touch_tolerance,
        }
    }

    /// Lay the ring out inside a widget.
    pub fn compute(
        size: Size,
        padding: Padding,
        ring: &RingConfig,
        handle: &HandleConfig,
    ) -> Result<Self, PickerError> {
        if size.is_degenerate() {
            return Err(PickerError::invalid_geometry(size));
        }

        let band_width = ring.ring_width + 2.0 * ring.stroke_width;
        let outer_radius =
            size.min_half() - band_width / 2.0 - padding.max_side() - handle.padding;
        let inner_radius = outer_radius - band_width / 2.0 - ring.gap_width;

        if !(outer_radius.is_finite() && outer_radius > 0.0) {
            return Err(PickerError::invalid_geometry(size));
        }

        Ok(Self::new(
            size.center(),
            outer_radius,
            inner_radius,
            band_width,
            handle.padding,
            handle.touch_tolerance,
        ))
    }

    /// Inner edge of the touchable band.
    pub fn band_min(&self) -> f32 {
        self.outer_radius - self.band_width / 2.0 - self.handle_padding
    }

    /// Outer edge of the touchable band.
    pub fn band_max(&self) -> f32 {
        self.outer_radius + self.band_width / 2.0 + self.handle_padding
    }

    /// True if a distance from the center lies inside the touchable band.
    pub fn in_band(&self, distance: f32) -> bool {
        distance > self.band_min() && distance < self.band_max()
    }

    /// True if a distance from the center lies on the confirming center disk.
    pub fn in_center(&self, distance: f32) -> bool {
        distance < self.inner_radius
    }
}

impl PickerGeometry for RingGeometry {
    fn coordinate_at(&self, point: Point) -> Option<TrackCoordinate> {
        let dist = distance(self.center, point);
        if dist <= self.inner_radius || dist <= 0.0 {
            return None;
        }
        Some(TrackCoordinate::Angle {
            degrees: angle_from_point(self.center, point),
        })
    }

    fn handle_at(&self, coordinate: TrackCoordinate) -> HandlePosition {
        let degrees = coordinate.hue();
        HandlePosition::Angle {
            degrees,
            point: point_from_angle(self.center, self.outer_radius, degrees),
        }
    }

    fn hit_test(&self, point: Point, handle: &HandlePosition) -> HitResult {
        let handle_degrees = match *handle {
            HandlePosition::Angle { degrees, .. } => degrees,
            other => angle_from_point(self.center, other.point()),
        };
        hit_test::hit_test_ring(self, point, handle_degrees)
    }

    fn confirms_release(&self, point: Point) -> bool {
        self.in_center(distance(self.center, point))
    }

    fn snap_path(&self, from: &HandlePosition, target: TrackCoordinate) -> SnapPath {
        let from_degrees = match *from {
            HandlePosition::Angle { degrees, .. } => degrees,
            other => angle_from_point(self.center, other.point()),
        };
        SnapPath::angular(from_degrees, target.hue())
    }

    fn coordinate_of(&self, value: SnapValue) -> Option<TrackCoordinate> {
        match value {
            SnapValue::Angle(degrees) => Some(TrackCoordinate::Angle {
                degrees: normalize_angle(degrees),
            }),
            SnapValue::Point(point) => self.coordinate_at(point),
            SnapValue::Fraction(_) => None,
        }
    }
}

// ============================================================================
// Circle
// ============================================================================

/// Geometry of a 2-D hue/saturation wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleGeometry {
    pub center: Point,
    pub radius: f32,
    /// Visual handle radius
    pub handle_radius: f32,
}

impl CircleGeometry {
    pub fn new(center: Point, radius: f32, handle_radius: f32) -> Self {
        Self {
            center,
            radius,
            handle_radius,
        }
    }

    /// Lay the wheel out inside a widget.
    pub fn compute(
        size: Size,
        padding: Padding,
        handle: &HandleConfig,
    ) -> Result<Self, PickerError> {
        if size.is_degenerate() {
            return Err(PickerError::invalid_geometry(size));
        }

        let radius =
            size.min_half() - padding.max_side() - handle.size / 2.0 - handle.stroke_width / 2.0;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PickerError::invalid_geometry(size));
        }

        Ok(Self::new(size.center(), radius, handle.size / 2.0))
    }

    /// Distance within which a press grabs the handle.
    pub fn grab_radius(&self) -> f32 {
        self.handle_radius * CIRCLE_HANDLE_GRAB_FACTOR
    }

    /// True if the point lies on the wheel.
    pub fn contains(&self, point: Point) -> bool {
        distance(self.center, point) <= self.radius
    }
}

impl PickerGeometry for CircleGeometry {
    fn coordinate_at(&self, point: Point) -> Option<TrackCoordinate> {
        polar_from_point(self.center, self.radius, point)
            .map(|(hue, saturation)| TrackCoordinate::Polar { hue, saturation })
    }

    fn handle_at(&self, coordinate: TrackCoordinate) -> HandlePosition {
        HandlePosition::Point {
            point: point_from_polar(
                self.center,
                self.radius,
                coordinate.hue(),
                coordinate.saturation(),
            ),
        }
    }

    fn hit_test(&self, point: Point, handle: &HandlePosition) -> HitResult {
        hit_test::hit_test_circle(self, point, handle.point())
    }

    fn confirms_release(&self, _point: Point) -> bool {
        true
    }

    fn snap_path(&self, from: &HandlePosition, target: TrackCoordinate) -> SnapPath {
        SnapPath::Planar {
            from: from.point(),
            to: self.handle_at(target).point(),
        }
    }

    fn coordinate_of(&self, value: SnapValue) -> Option<TrackCoordinate> {
        match value {
            SnapValue::Point(point) => self.coordinate_at(point),
            SnapValue::Angle(degrees) => Some(TrackCoordinate::Polar {
                hue: normalize_angle(degrees),
                saturation: 1.0,
            }),
            SnapValue::Fraction(_) => None,
        }
    }
}

// ============================================================================
// Linear
// ============================================================================

/// Geometry of a straight slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearGeometry {
    /// Rectangle the handle center travels along
    pub track: Bounds,
    pub axis: Axis,
    /// Handle extent along the primary axis
    pub handle_width: f32,
}

impl LinearGeometry {
    pub fn new(track: Bounds, axis: Axis, handle_width: f32) -> Self {
        Self {
            track,
            axis,
            handle_width: handle_width.max(0.0),
        }
    }

    /// Lay the slider out inside a widget.
    ///
    /// The track is the padded content box, inset by half a handle along the
    /// primary axis and by the handle padding across it.
    pub fn compute(
        size: Size,
        padding: Padding,
        handle: &HandleConfig,
        axis: Axis,
    ) -> Result<Self, PickerError> {
        if size.is_degenerate() {
            return Err(PickerError::invalid_geometry(size));
        }

        let content = Bounds::from_edges(
            padding.left,
            padding.top,
            size.width - padding.right,
            size.height - padding.bottom,
        );
        let along = handle.size / 2.0;
        let across = handle.padding;
        let track = match axis {
            Axis::Horizontal => Bounds::from_edges(
                content.x + along,
                content.y + across,
                content.right() - along,
                content.bottom() - across,
            ),
            Axis::Vertical => Bounds::from_edges(
                content.x + across,
                content.y + along,
                content.right() - across,
                content.bottom() - along,
            ),
        };

        if track.is_empty() {
            return Err(PickerError::invalid_geometry(size));
        }

        Ok(Self::new(track, axis, handle.size - handle.stroke_width))
    }

    /// Fraction of `point` along the track, never below `MIN_TRACK_FRACTION`.
    pub fn fraction_at(&self, point: Point) -> f32 {
        fraction_from_point(self.track, self.axis, point)
            .unwrap_or(MIN_TRACK_FRACTION)
            .max(MIN_TRACK_FRACTION)
    }

    /// Coordinate of a fraction along the primary axis.
    pub fn coordinate_for(&self, fraction: f32) -> f32 {
        self.track.start(self.axis) + clamp(fraction, 0.0, 1.0) * self.track.length(self.axis)
    }

    /// Handle rectangle at a fraction.
    pub fn handle_rect(&self, fraction: f32) -> Bounds {
        let template = match self.axis {
            Axis::Horizontal => Bounds::new(0.0, self.track.y, self.handle_width, self.track.height),
            Axis::Vertical => Bounds::new(self.track.x, 0.0, self.track.width, self.handle_width),
        };
        template.centered_at(self.axis, self.coordinate_for(fraction))
    }
}

impl PickerGeometry for LinearGeometry {
    fn coordinate_at(&self, point: Point) -> Option<TrackCoordinate> {
        Some(TrackCoordinate::Fraction {
            fraction: self.fraction_at(point),
        })
    }

    fn handle_at(&self, coordinate: TrackCoordinate) -> HandlePosition {
        let fraction = coordinate.fraction();
        HandlePosition::Offset {
            fraction,
            rect: self.handle_rect(fraction),
        }
    }

    fn hit_test(&self, point: Point, handle: &HandlePosition) -> HitResult {
        let rect = match *handle {
            HandlePosition::Offset { rect, .. } => rect,
            other => self.handle_rect(self.fraction_at(other.point())),
        };
        hit_test::hit_test_linear(self, point, rect)
    }

    fn confirms_release(&self, _point: Point) -> bool {
        true
    }

    fn snap_path(&self, from: &HandlePosition, target: TrackCoordinate) -> SnapPath {
        let from_fraction = match *from {
            HandlePosition::Offset { fraction, .. } => fraction,
            other => self.fraction_at(other.point()),
        };
        SnapPath::Linear {
            from: from_fraction,
            to: target.fraction(),
        }
    }

    fn coordinate_of(&self, value: SnapValue) -> Option<TrackCoordinate> {
        match value {
            SnapValue::Fraction(fraction) => Some(TrackCoordinate::Fraction {
                fraction: clamp(fraction, MIN_TRACK_FRACTION, 1.0),
            }),
            SnapValue::Point(point) => self.coordinate_at(point),
            SnapValue::Angle(_) => None,
        }
    }
}

// ============================================================================
// TrackGeometry
// ============================================================================

/// The geometry of whichever shape a picker has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum TrackGeometry {
    Ring(RingGeometry),
    Circle(CircleGeometry),
    Linear(LinearGeometry),
}

impl TrackGeometry {
    fn inner(&self) -> &dyn PickerGeometry {
        match self {
            TrackGeometry::Ring(ring) => ring,
            TrackGeometry::Circle(circle) => circle,
            TrackGeometry::Linear(linear) => linear,
        }
    }
}

impl PickerGeometry for TrackGeometry {
    fn coordinate_at(&self, point: Point) -> Option<TrackCoordinate> {
        self.inner().coordinate_at(point)
    }

    fn handle_at(&self, coordinate: TrackCoordinate) -> HandlePosition {
        self.inner().handle_at(coordinate)
    }

    fn hit_test(&self, point: Point, handle: &HandlePosition) -> HitResult {
        self.inner().hit_test(point, handle)
    }

    fn confirms_release(&self, point: Point) -> bool {
        self.inner().confirms_release(point)
    }

    fn snap_path(&self, from: &HandlePosition, target: TrackCoordinate) -> SnapPath {
        self.inner().snap_path(from, target)
    }

    fn coordinate_of(&self, value: SnapValue) -> Option<TrackCoordinate> {
        self.inner().coordinate_of(value)
    }
}

impl From<RingGeometry> for TrackGeometry {
    fn from(ring: RingGeometry) -> Self {
        TrackGeometry::Ring(ring)
    }
}

impl From<CircleGeometry> for TrackGeometry {
    fn from(circle: CircleGeometry) -> Self {
        TrackGeometry::Circle(circle)
    }
}

impl From<LinearGeometry> for TrackGeometry {
    fn from(linear: LinearGeometry) -> Self {
        TrackGeometry::Linear(linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn angle_approx_eq(a: f32, b: f32) -> bool {
        wrap_angle_delta(a - b).abs() < EPSILON
    }

    fn default_ring() -> RingGeometry {
        RingGeometry::compute(
            Size::new(400.0, 400.0),
            Padding::ZERO,
            &RingConfig::default(),
            &HandleConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_angle_reference_directions() {
        let c = Point::new(100.0, 100.0);
        assert!(angle_approx_eq(angle_from_point(c, Point::new(150.0, 100.0)), 0.0));
        assert!(angle_approx_eq(angle_from_point(c, Point::new(100.0, 150.0)), 90.0));
        assert!(angle_approx_eq(angle_from_point(c, Point::new(50.0, 100.0)), 180.0));
        assert!(angle_approx_eq(angle_from_point(c, Point::new(100.0, 50.0)), 270.0));
    }

    #[test]
    fn test_angle_round_trip() {
        let center = Point::new(37.0, -12.5);
        let mut angle = -725.0;
        while angle < 725.0 {
            for radius in [5.0, 42.0, 150.0] {
                let point = point_from_angle(center, radius, angle);
                let back = angle_from_point(center, point);
                assert!((0.0..360.0).contains(&back));
                assert!(
                    angle_approx_eq(back, normalize_angle(angle)),
                    "angle {} came back as {}",
                    angle,
                    back
                );
            }
            angle += 7.25;
        }
    }

    #[test]
    fn test_wrap_angle_delta_range() {
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let d = wrap_angle_delta(a - b);
                assert!(d > -180.0 && d <= 180.0, "{} - {} -> {}", a, b, d);
                b += 15.0;
            }
            a += 15.0;
        }
        assert_eq!(wrap_angle_delta(-180.0), 180.0);
        assert_eq!(wrap_angle_delta(180.0), 180.0);
        assert_eq!(wrap_angle_delta(350.0), -10.0);
        assert_eq!(wrap_angle_delta(-350.0), 10.0);
        assert_eq!(wrap_angle_delta(f32::NAN), 0.0);
    }

    #[test]
    fn test_fraction_from_point() {
        let track = Bounds::new(10.0, 0.0, 100.0, 20.0);
        assert_eq!(
            fraction_from_point(track, Axis::Horizontal, Point::new(60.0, 5.0)),
            Some(0.5)
        );
        assert_eq!(
            fraction_from_point(track, Axis::Horizontal, Point::new(-40.0, 5.0)),
            Some(0.0)
        );
        assert_eq!(
            fraction_from_point(track, Axis::Horizontal, Point::new(500.0, 5.0)),
            Some(1.0)
        );
        assert_eq!(
            fraction_from_point(track, Axis::Vertical, Point::new(0.0, 15.0)),
            Some(0.75)
        );
        let flat = Bounds::new(10.0, 0.0, 0.0, 20.0);
        assert_eq!(
            fraction_from_point(flat, Axis::Horizontal, Point::new(10.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_polar_mapping() {
        let center = Point::new(100.0, 100.0);
        let (hue, sat) = polar_from_point(center, 80.0, Point::new(180.0, 100.0)).unwrap();
        assert!(angle_approx_eq(hue, 0.0));
        assert!(approx_eq(sat, 1.0));

        let (_, sat) = polar_from_point(center, 80.0, Point::new(100.0, 300.0)).unwrap();
        assert_eq!(sat, 1.0);

        let (hue, sat) = polar_from_point(center, 80.0, Point::new(100.0, 140.0)).unwrap();
        assert!(angle_approx_eq(hue, 90.0));
        assert!(approx_eq(sat, 0.5));

        assert!(polar_from_point(center, 0.0, Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_ring_layout() {
        let ring = default_ring();
        assert_eq!(ring.center, Point::new(200.0, 200.0));
        assert!(approx_eq(ring.outer_radius, 150.0));
        assert!(approx_eq(ring.inner_radius, 60.0));
        assert!(approx_eq(ring.band_min(), 100.0));
        assert!(approx_eq(ring.band_max(), 200.0));
    }

    #[test]
    fn test_ring_layout_with_stroke_and_padding() {
        let ring_config = RingConfig {
            stroke_width: 5.0,
            ..RingConfig::default()
        };
        let ring = RingGeometry::compute(
            Size::new(400.0, 300.0),
            Padding::new(4.0, 8.0, 0.0, 0.0),
            &ring_config,
            &HandleConfig::default(),
        )
        .unwrap();
        // band = 90, outer = 150 - 45 - 8 - 10
        assert!(approx_eq(ring.band_width, 90.0));
        assert!(approx_eq(ring.outer_radius, 87.0));
        assert!(approx_eq(ring.inner_radius, 0.0));
    }

    #[test]
    fn test_degenerate_sizes_are_rejected() {
        let handle = HandleConfig::default();
        assert!(matches!(
            RingGeometry::compute(Size::ZERO, Padding::ZERO, &RingConfig::default(), &handle),
            Err(PickerError::InvalidGeometry { .. })
        ));
        assert!(CircleGeometry::compute(Size::new(20.0, 20.0), Padding::ZERO, &handle).is_err());
        assert!(LinearGeometry::compute(
            Size::new(200.0, 10.0),
            Padding::ZERO,
            &handle,
            Axis::Horizontal
        )
        .is_err());
    }

    #[test]
    fn test_ring_ignores_center_hole_moves() {
        let ring = default_ring();
        assert!(ring.coordinate_at(Point::new(230.0, 200.0)).is_none());
        assert!(ring.coordinate_at(ring.center).is_none());
        let coordinate = ring.coordinate_at(Point::new(200.0, 390.0)).unwrap();
        assert!(angle_approx_eq(coordinate.hue(), 90.0));
    }

    #[test]
    fn test_ring_handle_follows_hue() {
        let ring = default_ring();
        let handle = ring.handle_at(TrackCoordinate::Angle { degrees: 180.0 });
        assert!(approx_eq(handle.point().x, 50.0));
        assert!(approx_eq(handle.point().y, 200.0));
    }

    #[test]
    fn test_circle_layout() {
        let circle =
            CircleGeometry::compute(Size::new(300.0, 200.0), Padding::uniform(5.0), &HandleConfig::default())
                .unwrap();
        // 100 - 5 - 15 - 2
        assert!(approx_eq(circle.radius, 78.0));
        assert_eq!(circle.center, Point::new(150.0, 100.0));
        assert!(approx_eq(circle.grab_radius(), 22.5));
    }

    #[test]
    fn test_circle_clamps_outside_points() {
        let circle = CircleGeometry::new(Point::new(100.0, 100.0), 80.0, 15.0);
        let coordinate = circle.coordinate_at(Point::new(400.0, 100.0)).unwrap();
        assert_eq!(coordinate.saturation(), 1.0);
        assert!(angle_approx_eq(coordinate.hue(), 0.0));
        let handle = circle.handle_at(coordinate);
        assert!(approx_eq(handle.point().x, 180.0));
    }

    #[test]
    fn test_linear_layout() {
        let handle = HandleConfig::default();
        let linear =
            LinearGeometry::compute(Size::new(200.0, 50.0), Padding::ZERO, &handle, Axis::Horizontal)
                .unwrap();
        assert_eq!(linear.track, Bounds::from_edges(15.0, 10.0, 185.0, 40.0));
        assert_eq!(linear.handle_width, 26.0);

        let rect = linear.handle_rect(0.5);
        assert!(approx_eq(rect.center().x, 100.0));
        assert!(approx_eq(rect.width, 26.0));
        assert_eq!(rect.height, linear.track.height);
    }

    #[test]
    fn test_linear_vertical_layout() {
        let handle = HandleConfig::default();
        let linear =
            LinearGeometry::compute(Size::new(50.0, 200.0), Padding::ZERO, &handle, Axis::Vertical)
                .unwrap();
        assert_eq!(linear.track, Bounds::from_edges(10.0, 15.0, 40.0, 185.0));
        let rect = linear.handle_rect(1.0);
        assert!(approx_eq(rect.center().y, 185.0));
        assert!(approx_eq(rect.height, 26.0));
    }

    #[test]
    fn test_linear_minimum_fraction() {
        let linear = LinearGeometry::new(Bounds::new(10.0, 0.0, 100.0, 30.0), Axis::Horizontal, 26.0);
        assert_eq!(linear.fraction_at(Point::new(0.0, 10.0)), MIN_TRACK_FRACTION);
        assert!(approx_eq(linear.fraction_at(Point::new(60.0, 10.0)), 0.5));
        assert_eq!(linear.fraction_at(Point::new(900.0, 10.0)), 1.0);

        assert_eq!(
            linear.coordinate_of(SnapValue::Fraction(0.0)),
            Some(TrackCoordinate::Fraction {
                fraction: MIN_TRACK_FRACTION
            })
        );
    }

    #[test]
    fn test_ring_snap_path_takes_short_way() {
        let ring = default_ring();
        let from = ring.handle_at(TrackCoordinate::Angle { degrees: 350.0 });
        let path = ring.snap_path(&from, TrackCoordinate::Angle { degrees: 10.0 });
        assert_eq!(
            path,
            SnapPath::Angular {
                from: 350.0,
                delta: 20.0
            }
        );
    }

    #[test]
    fn test_track_geometry_delegates() {
        let geometry = TrackGeometry::from(CircleGeometry::new(Point::new(100.0, 100.0), 80.0, 15.0));
        let handle = geometry.handle_at(TrackCoordinate::Polar {
            hue: 0.0,
            saturation: 1.0,
        });
        assert_eq!(
            geometry.hit_test(Point::new(175.0, 100.0), &handle),
            HitResult::HandleGrab
        );
        assert!(geometry.confirms_release(Point::new(0.0, 0.0)));
    }
}
