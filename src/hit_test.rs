//! Pointer-down classification.
//!
//! Each shape has its own zones; the result decides whether a press starts a
//! drag, schedules a jump for pointer-up, confirms the colour, or is ignored.

use chromadrag_ui::{Bounds, Point};
use serde::Serialize;

use crate::geometry::{
    angle_from_point, distance, wrap_angle_delta, CircleGeometry, LinearGeometry, RingGeometry,
};

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitResult {
    /// Close enough to the handle to drag it
    HandleGrab,
    /// On the track away from the handle
    TrackJump,
    /// On the ring's center disk
    CenterConfirm,
    /// Nowhere interactive
    Ignore,
}

impl HitResult {
    /// True for zones that lie on the track itself.
    pub fn is_on_track(self) -> bool {
        matches!(self, HitResult::HandleGrab | HitResult::TrackJump)
    }
}

/// Classify a press on a ring whose handle sits at `handle_degrees`.
///
/// The handle zone is measured as arc length at the touch radius, so the grab
/// area stays the same physical size across the band.
pub fn hit_test_ring(ring: &RingGeometry, point: Point, handle_degrees: f32) -> HitResult {
    let dist = distance(ring.center, point);
    if !dist.is_finite() {
        return HitResult::Ignore;
    }

    if ring.in_center(dist) {
        return HitResult::CenterConfirm;
    }

    if !ring.in_band(dist) {
        return HitResult::Ignore;
    }

    let angle = angle_from_point(ring.center, point);
    let arc = wrap_angle_delta(angle - handle_degrees).abs().to_radians() * dist;
    if arc < ring.touch_tolerance {
        HitResult::HandleGrab
    } else {
        HitResult::TrackJump
    }
}

/// Classify a press on a wheel whose handle is centered on `handle`.
pub fn hit_test_circle(circle: &CircleGeometry, point: Point, handle: Point) -> HitResult {
    if distance(handle, point) < circle.grab_radius() {
        HitResult::HandleGrab
    } else if circle.contains(point) {
        HitResult::TrackJump
    } else {
        HitResult::Ignore
    }
}

/// Classify a press on a slider whose handle covers `handle_rect`.
pub fn hit_test_linear(linear: &LinearGeometry, point: Point, handle_rect: Bounds) -> HitResult {
    if handle_rect.contains(point) {
        HitResult::HandleGrab
    } else if linear.track.contains(point) {
        HitResult::TrackJump
    } else {
        HitResult::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromadrag_ui::{Axis, Padding, Size};

    use crate::config::{HandleConfig, RingConfig};

    fn ring() -> RingGeometry {
        RingGeometry::compute(
            Size::new(400.0, 400.0),
            Padding::ZERO,
            &RingConfig::default(),
            &HandleConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_ring_zones() {
        let ring = ring();
        // Handle at hue 0 sits at (350, 200)
        assert_eq!(
            hit_test_ring(&ring, Point::new(350.0, 200.0), 0.0),
            HitResult::HandleGrab
        );
        assert_eq!(
            hit_test_ring(&ring, Point::new(200.0, 350.0), 0.0),
            HitResult::TrackJump
        );
        assert_eq!(
            hit_test_ring(&ring, Point::new(200.0, 200.0), 0.0),
            HitResult::CenterConfirm
        );
        // The gap between disk and band
        assert_eq!(
            hit_test_ring(&ring, Point::new(280.0, 200.0), 0.0),
            HitResult::Ignore
        );
        // Outside the band
        assert_eq!(
            hit_test_ring(&ring, Point::new(390.0, 390.0), 0.0),
            HitResult::Ignore
        );
    }

    #[test]
    fn test_ring_handle_tolerance_is_arc_length() {
        let ring = ring();
        // 10 degrees at radius 150 is ~26px of arc
        let near = crate::geometry::point_from_angle(ring.center, 150.0, 10.0);
        assert_eq!(hit_test_ring(&ring, near, 0.0), HitResult::HandleGrab);
        // 20 degrees is ~52px
        let far = crate::geometry::point_from_angle(ring.center, 150.0, 20.0);
        assert_eq!(hit_test_ring(&ring, far, 0.0), HitResult::TrackJump);
    }

    #[test]
    fn test_ring_handle_across_zero() {
        let ring = ring();
        let point = crate::geometry::point_from_angle(ring.center, 150.0, 355.0);
        assert_eq!(hit_test_ring(&ring, point, 5.0), HitResult::HandleGrab);
    }

    #[test]
    fn test_circle_zones() {
        let circle = CircleGeometry::new(Point::new(100.0, 100.0), 80.0, 15.0);
        let handle = Point::new(180.0, 100.0);
        assert_eq!(
            hit_test_circle(&circle, Point::new(160.0, 100.0), handle),
            HitResult::HandleGrab
        );
        assert_eq!(
            hit_test_circle(&circle, Point::new(100.0, 100.0), handle),
            HitResult::TrackJump
        );
        assert_eq!(
            hit_test_circle(&circle, Point::new(10.0, 10.0), handle),
            HitResult::Ignore
        );
    }

    #[test]
    fn test_linear_zones() {
        let linear = LinearGeometry::new(Bounds::new(10.0, 0.0, 100.0, 30.0), Axis::Horizontal, 26.0);
        let handle_rect = linear.handle_rect(1.0);
        assert_eq!(
            hit_test_linear(&linear, Point::new(105.0, 15.0), handle_rect),
            HitResult::HandleGrab
        );
        assert_eq!(
            hit_test_linear(&linear, Point::new(60.0, 15.0), handle_rect),
            HitResult::TrackJump
        );
        assert_eq!(
            hit_test_linear(&linear, Point::new(60.0, 45.0), handle_rect),
            HitResult::Ignore
        );
    }

    #[test]
    fn test_is_on_track() {
        assert!(HitResult::HandleGrab.is_on_track());
        assert!(HitResult::TrackJump.is_on_track());
        assert!(!HitResult::CenterConfirm.is_on_track());
        assert!(!HitResult::Ignore.is_on_track());
    }
}
