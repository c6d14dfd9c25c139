//! The canonical colour value shared by every picker in a session.
//!
//! `ColorState` stores HSV only. RGB is always derived on demand so the two
//! representations can never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_SLIDER_HUE;

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = normalize_angle(h);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert RGB (each 0.0-1.0) to HSV.
///
/// Achromatic colours report hue 0. Black reports saturation 0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= f32::EPSILON {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };

    (normalize_angle(hue), saturation, max)
}

/// Normalize an angle in degrees into `[0, 360)`.
///
/// Non-finite input maps to 0.
pub fn normalize_angle(deg: f32) -> f32 {
    if !deg.is_finite() {
        return 0.0;
    }
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative number rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp `value` into `[min, max]`. NaN maps to `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    min.max(max.min(value))
}

// =============================================================================
// Rgb
// =============================================================================

/// An 8-bit-per-channel RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from `0xAARRGGBB`. Alpha is ignored.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Pack into `0xFFRRGGBB` (fully opaque).
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels as floats in 0.0-1.0.
    pub fn to_f32(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    fn from_f32(r: f32, g: f32, b: f32) -> Self {
        let channel = |c: f32| (clamp(c, 0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// =============================================================================
// ColorState
// =============================================================================

/// One HSV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HsvComponent {
    Hue,
    Saturation,
    Value,
}

impl HsvComponent {
    /// All components in H, S, V order.
    pub const ALL: [HsvComponent; 3] = [
        HsvComponent::Hue,
        HsvComponent::Saturation,
        HsvComponent::Value,
    ];

    /// Map a track fraction (0-1) onto this component's range.
    pub fn value_at_fraction(self, fraction: f32) -> f32 {
        match self {
            HsvComponent::Hue => (fraction * 360.0).min(MAX_SLIDER_HUE),
            HsvComponent::Saturation | HsvComponent::Value => fraction,
        }
    }

    /// Map a component value back onto a track fraction (0-1).
    pub fn fraction_of(self, component: f32) -> f32 {
        match self {
            HsvComponent::Hue => component / 360.0,
            HsvComponent::Saturation | HsvComponent::Value => component,
        }
    }
}

/// Plain serde mirror of `ColorState`; deserialized values are sanitized on conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawHsv {
    hue: f32,
    saturation: f32,
    value: f32,
}

/// Canonical HSV colour.
///
/// Invariants: `hue` is in `[0, 360)`, `saturation` and `value` are in `[0, 1]`.
/// Every constructor and setter enforces them, so out-of-range input is
/// sanitized rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHsv", into = "RawHsv")]
pub struct ColorState {
    hue: f32,
    saturation: f32,
    value: f32,
}

impl ColorState {
    /// Pure red, the default for a freshly created picker.
    pub const RED: Self = Self {
        hue: 0.0,
        saturation: 1.0,
        value: 1.0,
    };

    /// Create a colour, normalizing hue and clamping saturation/value.
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        let state = Self {
            hue: normalize_angle(hue),
            saturation: clamp(saturation, 0.0, 1.0),
            value: clamp(value, 0.0, 1.0),
        };
        if state.hue != hue || state.saturation != saturation || state.value != value {
            log::trace!(
                "Sanitized HSV ({}, {}, {}) -> ({}, {}, {})",
                hue,
                saturation,
                value,
                state.hue,
                state.saturation,
                state.value
            );
        }
        state
    }

    /// Convert from 8-bit RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_f32();
        let (h, s, v) = rgb_to_hsv(r, g, b);
        Self::new(h, s, v)
    }

    /// Convert from a packed `0xAARRGGBB` colour.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgb(Rgb::from_argb(argb))
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation, `[0, 1]`.
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Value (brightness), `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Read one component.
    pub fn component(&self, component: HsvComponent) -> f32 {
        match component {
            HsvComponent::Hue => self.hue,
            HsvComponent::Saturation => self.saturation,
            HsvComponent::Value => self.value,
        }
    }

    /// Copy with a single component replaced (sanitized).
    pub fn with_component(self, component: HsvComponent, value: f32) -> Self {
        match component {
            HsvComponent::Hue => self.with_hue(value),
            HsvComponent::Saturation => self.with_saturation(value),
            HsvComponent::Value => self.with_value(value),
        }
    }

    pub fn with_hue(self, hue: f32) -> Self {
        Self::new(hue, self.saturation, self.value)
    }

    pub fn with_saturation(self, saturation: f32) -> Self {
        Self::new(self.hue, saturation, self.value)
    }

    pub fn with_value(self, value: f32) -> Self {
        Self::new(self.hue, self.saturation, value)
    }

    /// Derived 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = hsv_to_rgb(self.hue, self.saturation, self.value);
        Rgb::from_f32(r, g, b)
    }

    /// Derived packed `0xFFRRGGBB`.
    pub fn to_argb(&self) -> u32 {
        self.to_rgb().to_argb()
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::RED
    }
}

impl From<RawHsv> for ColorState {
    fn from(raw: RawHsv) -> Self {
        Self::new(raw.hue, raw.saturation, raw.value)
    }
}

impl From<ColorState> for RawHsv {
    fn from(state: ColorState) -> Self {
        Self {
            hue: state.hue,
            saturation: state.saturation,
            value: state.value,
        }
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({:.1}, {:.3}, {:.3})",
            self.hue, self.saturation, self.value
        )
    }
}

/// Colour supplied to a programmatic `set_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    Hsv { hue: f32, saturation: f32, value: f32 },
    Rgb(Rgb),
    /// Packed `0xAARRGGBB`, alpha ignored
    Argb(u32),
}

impl ColorInput {
    /// Resolve into a sanitized `ColorState`.
    pub fn resolve(self) -> ColorState {
        match self {
            ColorInput::Hsv {
                hue,
                saturation,
                value,
            } => ColorState::new(hue, saturation, value),
            ColorInput::Rgb(rgb) => ColorState::from_rgb(rgb),
            ColorInput::Argb(argb) => ColorState::from_argb(argb),
        }
    }
}

impl From<ColorState> for ColorInput {
    fn from(state: ColorState) -> Self {
        ColorInput::Hsv {
            hue: state.hue,
            saturation: state.saturation,
            value: state.value,
        }
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Rgb(rgb)
    }
}
