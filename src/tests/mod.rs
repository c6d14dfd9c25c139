//! Gesture scenarios exercised end to end through `Picker` and `SyncHub`.

mod circle_tests;

use std::time::Duration;

use crate::drag::PickerEvent;
use crate::picker::Picker;

const EPSILON: f32 = 0.01;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// One 60 Hz frame.
const FRAME: Duration = Duration::from_millis(16);

/// Drive a picker's animation to completion, collecting every frame's events.
fn run_to_completion(picker: &mut Picker) -> Vec<PickerEvent> {
    let mut events = Vec::new();
    for _ in 0..1000 {
        if !picker.is_animating() {
            break;
        }
        events.extend(picker.on_frame(FRAME));
    }
    events
}

fn picked(events: &[PickerEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, PickerEvent::ColorPicked(_)))
        .count()
}
