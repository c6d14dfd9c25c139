//! chromadrag - interaction core for HSV colour pickers
//!
//! Converts pointer input on ring, wheel and slider pickers into colour
//! updates, animates track taps, and keeps linked pickers showing one colour.
//! Rendering and platform plumbing stay outside: the host feeds
//! [`chromadrag_ui::Event`]s in and draws from [`PickerSnapshot`]s.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chromadrag::{HsvComponent, Picker, PickerConfig, SyncHub};
//! use chromadrag_ui::Event;
//!
//! let mut hub = SyncHub::default();
//! let ring = hub.attach(Picker::ring(PickerConfig::default()));
//! let value = hub.attach(Picker::linear(HsvComponent::Value, PickerConfig::default()));
//!
//! hub.dispatch(ring, &Event::resized(400.0, 400.0))?;
//! for event in hub.dispatch(ring, &Event::down(350.0, 200.0))? {
//!     println!("{:?}", event);
//! }
//! ```

mod color;
mod config;
mod constants;
mod drag;
mod error;
mod geometry;
mod gradient;
mod hit_test;
mod picker;
mod snap;
mod sync;

#[cfg(test)]
mod tests;

pub use color::{
    clamp, hsv_to_rgb, normalize_angle, rgb_to_hsv, ColorInput, ColorState, HsvComponent, Rgb,
};
pub use config::{
    AnimationConfig, ConfigError, HandleConfig, LinearConfig, PickerConfig, RingConfig,
    CONFIG_VERSION,
};
pub use drag::{DragAction, DragController, DragSession, DragState, PickerEvent, UpdateOrigin};
pub use error::PickerError;
pub use geometry::{
    angle_from_point, distance, fraction_from_point, point_from_angle, point_from_polar,
    polar_from_point, wrap_angle_delta, CircleGeometry, HandlePosition, LinearGeometry,
    PickerGeometry, RingGeometry, TrackCoordinate, TrackGeometry,
};
pub use gradient::{Gradient, GradientStop};
pub use hit_test::HitResult;
pub use picker::{Picker, PickerKind, PickerSnapshot};
pub use snap::{
    accelerate_decelerate, AnimationSlot, FrameClock, SnapAnimation, SnapFrame, SnapPath,
    SnapTrigger, SnapValue,
};
pub use sync::{PickerId, SessionEvent, SyncHub};
