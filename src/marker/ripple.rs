use crate::animation::{AnimatedValue, EasingFunction, LoopSpec, Transition};
use crate::core::constants::{RIPPLE_OUTER_RADIUS, RIPPLE_PERIOD_MS};
use crate::marker::scale::scale;

/// The pulsing ripple around a landmark marker.
///
/// Two correlated forever-loops: the radius grows from the group-derived
/// base towards a fixed outer bound while the opacity fades from 1 to 0.
/// Both restart from their base value each cycle (no ping-pong) and share
/// one cycle start, so a single `now_ms` sample per frame keeps radius and
/// opacity at the same fractional position within the pulse.
///
/// Larger groups start closer to the fixed outer bound, so their pulse
/// travels less; that asymmetry is intentional.
#[derive(Debug, Clone)]
pub struct RippleGenerator {
    radius: AnimatedValue,
    opacity: AnimatedValue,
}

impl RippleGenerator {
    pub fn new(group_size: u32, now_ms: f64) -> Self {
        let base = scale(group_size);
        let mut radius = AnimatedValue::new(base);
        radius.set(
            &[Transition::new(
                base,
                RIPPLE_OUTER_RADIUS,
                RIPPLE_PERIOD_MS,
                EasingFunction::EaseOut,
            )],
            LoopSpec::forever(),
            now_ms,
        );

        let mut opacity = AnimatedValue::new(1.0);
        opacity.set(
            &[Transition::new(
                1.0,
                0.0,
                RIPPLE_PERIOD_MS,
                EasingFunction::EaseOut,
            )],
            LoopSpec::forever(),
            now_ms,
        );

        Self { radius, opacity }
    }

    /// Advance both loops with one shared time sample and return
    /// `(radius, opacity)` for this frame.
    pub fn advance(&mut self, now_ms: f64) -> (f64, f64) {
        (self.radius.advance(now_ms), self.opacity.advance(now_ms))
    }

    /// Re-derive the pulse for a new group size, restarting both loops on
    /// the same cycle start. Cheap: two playback installs, no allocation
    /// beyond the transition buffers.
    pub fn retarget(&mut self, group_size: u32, now_ms: f64) {
        log::debug!("retargeting ripple for group_size={}", group_size);
        *self = Self::new(group_size, now_ms);
    }

    /// Halt both loops, freezing the ripple where it rests.
    pub fn stop(&mut self) {
        self.radius.stop();
        self.opacity.stop();
    }

    pub fn radius(&self) -> &AnimatedValue {
        &self.radius
    }

    pub fn opacity(&self) -> &AnimatedValue {
        &self.opacity
    }
}
