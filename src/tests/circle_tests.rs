//! Tests for the hue/saturation wheel picker.

use chromadrag_ui::{Event, Padding, Point, Size};

use super::{approx_eq, picked, run_to_completion};
use crate::color::ColorState;
use crate::config::PickerConfig;
use crate::drag::PickerEvent;
use crate::geometry::{CircleGeometry, TrackGeometry};
use crate::picker::Picker;

/// Wheel centered on (100, 100) with radius 80.
fn wheel(config: PickerConfig) -> Picker {
    let mut picker = Picker::circle(config);
    picker.set_track_geometry(CircleGeometry::new(Point::new(100.0, 100.0), 80.0, 15.0));
    picker
}

#[test]
fn test_drag_to_rim_gives_full_saturation() {
    let mut picker = wheel(PickerConfig::default());
    picker.set_color(ColorState::new(0.0, 0.5, 1.0));

    // Handle sits at (140, 100)
    assert!(picker.handle_event(&Event::down(140.0, 100.0)).is_empty());
    assert!(picker.is_dragging());

    let events = picker.handle_event(&Event::move_to(180.0, 100.0));
    assert_eq!(events.len(), 1);
    let color = events[0].color().unwrap();
    assert!(approx_eq(color.hue(), 0.0) || approx_eq(color.hue(), 360.0));
    assert_eq!(color.saturation(), 1.0);
}

#[test]
fn test_drag_outside_wheel_clamps() {
    let mut picker = wheel(PickerConfig::default());
    picker.handle_event(&Event::down(180.0, 100.0));

    let events = picker.handle_event(&Event::move_to(100.0, 400.0));
    let color = events[0].color().unwrap();
    assert!(approx_eq(color.hue(), 90.0));
    assert_eq!(color.saturation(), 1.0);
}

#[test]
fn test_release_after_drag_picks() {
    let mut picker = wheel(PickerConfig::default());
    picker.set_color(ColorState::new(0.0, 1.0, 0.4));

    picker.handle_event(&Event::down(180.0, 100.0));
    picker.handle_event(&Event::move_to(140.0, 100.0));
    let released = picker.handle_event(&Event::up(140.0, 100.0));

    assert_eq!(released.len(), 1);
    let PickerEvent::ColorPicked(color) = released[0] else {
        panic!("expected a pick, got {:?}", released[0]);
    };
    assert!(approx_eq(color.saturation(), 0.5));
    assert_eq!(color.value(), 0.4, "dragging never changes value");
}

#[test]
fn test_track_tap_snaps_through_the_plane() {
    let mut picker = wheel(PickerConfig::default());

    assert!(picker.handle_event(&Event::down(100.0, 140.0)).is_empty());
    assert!(picker.handle_event(&Event::up(100.0, 140.0)).is_empty());

    let frames = run_to_completion(&mut picker);
    assert_eq!(picked(&frames), 0);

    // The handle travels the straight line from (180, 100) to (100, 140),
    // so the saturation dips below the end value on the way
    let saturations: Vec<f32> = frames
        .iter()
        .filter_map(|event| event.color())
        .map(|color| color.saturation())
        .collect();
    assert!(saturations.iter().any(|&s| s < 0.5));

    assert!(approx_eq(picker.color().hue(), 90.0));
    assert!(approx_eq(picker.color().saturation(), 0.5));
}

#[test]
fn test_track_tap_confirms_when_configured() {
    let mut picker = wheel(PickerConfig::default().with_confirm_on_snap(true));
    picker.handle_event(&Event::down(100.0, 140.0));
    picker.handle_event(&Event::up(100.0, 140.0));

    let frames = run_to_completion(&mut picker);
    assert_eq!(picked(&frames), 1);
    assert!(matches!(frames.last(), Some(PickerEvent::ColorPicked(_))));
}

#[test]
fn test_tap_on_center_keeps_hue() {
    let mut picker = wheel(PickerConfig::default());
    picker.set_color(ColorState::new(120.0, 1.0, 1.0));

    picker.handle_event(&Event::down(100.0, 100.0));
    picker.handle_event(&Event::up(100.0, 100.0));
    run_to_completion(&mut picker);

    assert!(approx_eq(picker.color().saturation(), 0.0));
    assert!(approx_eq(picker.color().hue(), 120.0));
}

#[test]
fn test_press_outside_wheel_is_ignored() {
    let mut picker = wheel(PickerConfig::default());
    assert!(picker.handle_event(&Event::down(5.0, 5.0)).is_empty());
    assert!(picker.handle_event(&Event::up(100.0, 100.0)).is_empty());
    assert!(!picker.is_animating());
}

#[test]
fn test_layout_from_resize() {
    let mut picker = Picker::circle(PickerConfig::default());
    picker
        .resize(Size::new(200.0, 200.0), Padding::ZERO)
        .unwrap();
    let Some(TrackGeometry::Circle(circle)) = picker.geometry() else {
        panic!("wheel geometry expected");
    };
    // 100 - 15 - 2
    assert!(approx_eq(circle.radius, 83.0));

    // Red sits on the rim at angle 0
    let handle = picker.handle_point().unwrap();
    assert!(approx_eq(handle.x, 183.0));
    assert!(approx_eq(handle.y, 100.0));
}
