//! Snap-to-position animation.
//!
//! The core never owns a timer. The host drives animations by feeding frame
//! deltas (usually from a [`FrameClock`]) and the active [`SnapAnimation`]
//! reports the interpolated track value for each frame.
//!
//! Angles are interpolated along the shortest arc, fractions linearly, and
//! wheel positions component-wise in screen space.

use std::f32::consts::PI;
use std::time::Duration;
use web_time::Instant;

use chromadrag_ui::Point;

use crate::color::{normalize_angle, ColorState};
use crate::geometry::wrap_angle_delta;

/// Accelerate-decelerate easing: slow start, fast middle, slow end.
pub fn accelerate_decelerate(t: f32) -> f32 {
    let t = crate::color::clamp(t, 0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// The value space an animation moves through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapPath {
    /// Ring angle: start and signed shortest delta, both in degrees
    Angular { from: f32, delta: f32 },
    /// Linear slider fraction
    Linear { from: f32, to: f32 },
    /// Wheel handle position, x and y interpolated independently
    Planar { from: Point, to: Point },
}

impl SnapPath {
    /// Shortest angular path between two angles.
    pub fn angular(from: f32, to: f32) -> Self {
        let from = normalize_angle(from);
        SnapPath::Angular {
            from,
            delta: wrap_angle_delta(normalize_angle(to) - from),
        }
    }

    /// Value at an eased progress in `[0, 1]`.
    pub fn sample(&self, progress: f32) -> SnapValue {
        let t = crate::color::clamp(progress, 0.0, 1.0);
        match *self {
            SnapPath::Angular { from, delta } => SnapValue::Angle(normalize_angle(from + delta * t)),
            SnapPath::Linear { from, to } => SnapValue::Fraction(from + (to - from) * t),
            SnapPath::Planar { from, to } => SnapValue::Point(from.lerp(to, t)),
        }
    }

    /// Final value of the path, exact rather than interpolated.
    pub fn end(&self) -> SnapValue {
        match *self {
            SnapPath::Angular { from, delta } => SnapValue::Angle(normalize_angle(from + delta)),
            SnapPath::Linear { to, .. } => SnapValue::Fraction(to),
            SnapPath::Planar { to, .. } => SnapValue::Point(to),
        }
    }
}

/// One interpolated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapValue {
    Angle(f32),
    Fraction(f32),
    Point(Point),
}

/// Why an animation was started; decides event origin and completion policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapTrigger {
    /// The user tapped the track away from the handle
    TrackTap,
    /// `animate_to_color` was called; frames settle on `target`
    Programmatic { target: ColorState },
}

/// A single animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapFrame {
    pub value: SnapValue,
    pub trigger: SnapTrigger,
    /// True for the last frame of the animation
    pub finished: bool,
}

/// A finite, non-restartable tween along a [`SnapPath`].
#[derive(Debug, Clone)]
pub struct SnapAnimation {
    path: SnapPath,
    trigger: SnapTrigger,
    duration: Duration,
    elapsed: Duration,
    finished: bool,
}

impl SnapAnimation {
    pub fn new(path: SnapPath, trigger: SnapTrigger, duration: Duration) -> Self {
        Self {
            path,
            trigger,
            duration,
            elapsed: Duration::ZERO,
            finished: false,
        }
    }

    pub fn path(&self) -> &SnapPath {
        &self.path
    }

    pub fn trigger(&self) -> SnapTrigger {
        self.trigger
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Advance by `dt` and return the new frame.
    ///
    /// Returns `None` once the final frame has been delivered.
    pub fn advance(&mut self, dt: Duration) -> Option<SnapFrame> {
        if self.finished {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let progress = self.progress();
        let finished = progress >= 1.0;
        self.finished = finished;

        let value = if finished {
            self.path.end()
        } else {
            self.path.sample(accelerate_decelerate(progress))
        };

        log::trace!("Snap frame at {:.3}: {:?}", progress, value);
        Some(SnapFrame {
            value,
            trigger: self.trigger,
            finished,
        })
    }
}

/// Holds at most one animation per picker.
///
/// Starting a new animation supersedes the previous one; its remaining frames
/// are never delivered.
#[derive(Debug, Default)]
pub struct AnimationSlot {
    current: Option<SnapAnimation>,
    generation: u64,
}

impl AnimationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new animation, returning its generation.
    pub fn start(&mut self, animation: SnapAnimation) -> u64 {
        if self.current.take().is_some() {
            log::debug!("Snap animation {} superseded", self.generation);
        }
        self.generation += 1;
        log::debug!(
            "Snap animation {} started ({:?}, {:?})",
            self.generation,
            animation.path(),
            animation.duration
        );
        self.current = Some(animation);
        self.generation
    }

    /// Drop the running animation, returning it if there was one.
    pub fn cancel(&mut self) -> Option<SnapAnimation> {
        let cancelled = self.current.take();
        if cancelled.is_some() {
            log::debug!("Snap animation {} cancelled", self.generation);
        }
        cancelled
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Generation of the most recently started animation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<&SnapAnimation> {
        self.current.as_ref()
    }

    /// Advance the running animation, clearing the slot after its last frame.
    pub fn tick(&mut self, dt: Duration) -> Option<SnapFrame> {
        let animation = self.current.as_mut()?;
        let frame = animation.advance(dt);
        if animation.is_finished() {
            self.current = None;
        }
        frame
    }
}

/// Turns wall-clock ticks into frame deltas.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous tick (zero on the first).
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Delta between `now` and the previous tick.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        dt
    }

    /// Forget the previous tick, e.g. after the animation loop went idle.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
