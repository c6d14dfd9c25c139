//! Centralized constants for the picker engine
//!
//! Defaults for every configurable dimension live here so `PickerConfig` and
//! the layout code agree on them.

// =============================================================================
// Ring
// =============================================================================

/// Default width of the hue ring stroke
pub const DEFAULT_RING_WIDTH: f32 = 80.0;

/// Default gap between the ring and the center disk
pub const DEFAULT_GAP_WIDTH: f32 = 50.0;

/// Default outline stroke around the ring and center disk
pub const DEFAULT_STROKE_WIDTH: f32 = 0.0;

/// Largest allowed outline stroke
pub const MAX_STROKE_WIDTH: f32 = 10.0;

// =============================================================================
// Handle
// =============================================================================

/// Arc-length (ring) tolerance for grabbing the handle, in pixels
pub const DEFAULT_HANDLE_TOUCH_TOLERANCE: f32 = 40.0;

/// Visual handle size: circle diameter, linear handle width
pub const DEFAULT_HANDLE_SIZE: f32 = 30.0;

/// Outline stroke drawn around the handle
pub const DEFAULT_HANDLE_STROKE_WIDTH: f32 = 4.0;

/// Breathing room around the handle inside the widget
pub const DEFAULT_HANDLE_PADDING: f32 = 10.0;

/// Circle handle grab radius as a multiple of the visual handle radius
pub const CIRCLE_HANDLE_GRAB_FACTOR: f32 = 1.5;

// =============================================================================
// Tracks
// =============================================================================

/// Smallest fraction a linear slider stores, so a drag never yields exactly zero
pub const MIN_TRACK_FRACTION: f32 = 0.01;

/// Largest hue a hue slider stores; 360 would wrap to 0 and send the handle back to the start
pub const MAX_SLIDER_HUE: f32 = 359.99;

/// Number of colour stops in a hue gradient (red to red)
pub const HUE_GRADIENT_STOPS: usize = 7;

// =============================================================================
// Animation
// =============================================================================

/// Default snap animation duration in milliseconds
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

// =============================================================================
// Sync
// =============================================================================

/// Maximum subscribers on a session's listener list
pub const SESSION_LISTENER_CAPACITY: usize = 8;
