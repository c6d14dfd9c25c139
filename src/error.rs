//! Error types for picker construction, linking and configuration.
//!
//! Gesture handling never fails: degenerate geometry, out-of-range colours and
//! conflicting animations are all recovered locally. These errors only surface
//! at the boundaries where a caller can act on them.

use chromadrag_ui::{ListenerError, Size};
use thiserror::Error;

use crate::sync::PickerId;

/// Errors that can occur when building or linking pickers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    /// Track has no usable area (view not measured yet, or padding eats everything)
    #[error("Invalid geometry: {width}x{height} leaves no usable track")]
    InvalidGeometry {
        /// Widget width
        width: f32,
        /// Widget height
        height: f32,
    },

    /// Picker id is not owned by this session
    #[error("Unknown picker: {0}")]
    UnknownPicker(PickerId),

    /// Listener registration failed
    #[error("Listener error: {0}")]
    Listener(#[from] ListenerError),
}

impl PickerError {
    /// Create an invalid geometry error for a widget size.
    pub fn invalid_geometry(size: Size) -> Self {
        Self::InvalidGeometry {
            width: size.width,
            height: size.height,
        }
    }
}
