use crate::animation::easing::EasingFunction;
use crate::animation::looping::{LoopSpec, Playback};
use serde::{Deserialize, Serialize};

/// A single timed interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Starting value. When `None`, the owning value's current reading is
    /// captured at install time.
    pub from: Option<f64>,
    pub to: f64,
    /// A duration of zero or less means "apply the target instantly".
    pub duration_ms: f64,
    pub easing: EasingFunction,
}

impl Transition {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: EasingFunction) -> Self {
        Self {
            from: Some(from),
            to,
            duration_ms,
            easing,
        }
    }

    /// Transition towards `to` from wherever the value currently rests.
    pub fn towards(to: f64, duration_ms: f64, easing: EasingFunction) -> Self {
        Self {
            from: None,
            to,
            duration_ms,
            easing,
        }
    }
}

/// A mutable scalar advanced once per render tick.
///
/// Each animated value is exclusively owned by the component that created
/// it and is only ever mutated through [`AnimatedValue::advance`].
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f64,
    playback: Option<Playback>,
    advances: u64,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            current: value,
            playback: None,
            advances: 0,
        }
    }

    /// The value as of the last advance (or the resting value).
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Number of advance calls made against this value. Lets owners assert
    /// that teardown really halted the render loop.
    pub fn advance_count(&self) -> u64 {
        self.advances
    }

    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// Install a looped transition sequence, replacing any in-flight
    /// playback. Retargeting is abrupt: the old timeline is discarded,
    /// not blended into the new one.
    pub fn set(&mut self, transitions: &[Transition], spec: LoopSpec, now_ms: f64) {
        log::trace!(
            "retargeting animated value at {:.1}ms ({} transition(s))",
            now_ms,
            transitions.len()
        );
        self.playback = Some(Playback::new(transitions, self.current, spec, now_ms));
    }

    /// Sample the active playback at `now_ms` and store the result.
    /// With no active playback the resting value is returned unchanged.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        self.advances += 1;
        if let Some(playback) = &self.playback {
            self.current = playback.sample(now_ms);
            if playback.is_finished(now_ms) {
                self.playback = None;
            }
        }
        self.current
    }

    /// Halt any active playback, freezing the value where it rests.
    pub fn stop(&mut self) {
        self.playback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_value_unchanged_without_playback() {
        let mut value = AnimatedValue::new(7.5);
        assert_eq!(value.advance(0.0), 7.5);
        assert_eq!(value.advance(123_456.0), 7.5);
    }

    #[test]
    fn test_advance_samples_installed_transition() {
        let mut value = AnimatedValue::new(0.0);
        value.set(
            &[Transition::new(0.0, 10.0, 1000.0, EasingFunction::Linear)],
            LoopSpec::once(),
            0.0,
        );

        assert_eq!(value.advance(0.0), 0.0);
        assert_eq!(value.advance(500.0), 5.0);
        assert_eq!(value.advance(1000.0), 10.0);
    }

    #[test]
    fn test_towards_captures_current_as_from() {
        let mut value = AnimatedValue::new(4.0);
        value.set(
            &[Transition::towards(8.0, 1000.0, EasingFunction::Linear)],
            LoopSpec::once(),
            0.0,
        );
        assert_eq!(value.advance(500.0), 6.0);
    }

    #[test]
    fn test_retarget_is_abrupt() {
        let mut value = AnimatedValue::new(0.0);
        value.set(
            &[Transition::new(0.0, 10.0, 1000.0, EasingFunction::Linear)],
            LoopSpec::once(),
            0.0,
        );
        value.advance(500.0);

        // Replace mid-flight: new playback starts from the sampled 5.0,
        // with no blending against the old target.
        value.set(
            &[Transition::towards(0.0, 500.0, EasingFunction::Linear)],
            LoopSpec::once(),
            500.0,
        );
        assert_eq!(value.advance(500.0), 5.0);
        assert_eq!(value.advance(750.0), 2.5);
        assert_eq!(value.advance(1000.0), 0.0);
    }

    #[test]
    fn test_zero_duration_applies_target_instantly() {
        let mut value = AnimatedValue::new(1.0);
        value.set(
            &[Transition::towards(9.0, 0.0, EasingFunction::Linear)],
            LoopSpec::once(),
            0.0,
        );
        assert_eq!(value.advance(0.0), 9.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_finished_playback_is_released() {
        let mut value = AnimatedValue::new(0.0);
        value.set(
            &[Transition::new(0.0, 10.0, 100.0, EasingFunction::Linear)],
            LoopSpec::once(),
            0.0,
        );
        value.advance(50.0);
        assert!(value.is_animating());
        value.advance(100.0);
        assert!(!value.is_animating());
        assert_eq!(value.current(), 10.0);
    }

    #[test]
    fn test_forever_playback_never_finishes() {
        let mut value = AnimatedValue::new(0.0);
        value.set(
            &[Transition::new(0.0, 10.0, 100.0, EasingFunction::Linear)],
            LoopSpec::forever(),
            0.0,
        );
        value.advance(1_000_000.0);
        assert!(value.is_animating());
    }

    #[test]
    fn test_advance_count_tracks_calls() {
        let mut value = AnimatedValue::new(0.0);
        assert_eq!(value.advance_count(), 0);
        value.advance(0.0);
        value.advance(16.0);
        assert_eq!(value.advance_count(), 2);
    }

    #[test]
    fn test_stop_freezes_value() {
        let mut value = AnimatedValue::new(0.0);
        value.set(
            &[Transition::new(0.0, 10.0, 1000.0, EasingFunction::Linear)],
            LoopSpec::forever(),
            0.0,
        );
        value.advance(250.0);
        value.stop();
        assert_eq!(value.advance(750.0), 2.5);
    }
}
