use crate::animation::easing::lerp;
use crate::animation::value::Transition;
use serde::{Deserialize, Serialize};

/// Repeat policy wrapped around a sequence of transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopSpec {
    /// Restart the sequence indefinitely once it completes.
    pub repeat_forever: bool,
    /// Replay the sequence mirrored in time after each forward pass,
    /// so a forward ease-out leg retraces as an ease-in leg.
    pub auto_reverse: bool,
    /// Hold the starting value this long before the first cycle.
    /// Applied once; later cycles start immediately.
    pub initial_delay_ms: f64,
}

impl LoopSpec {
    /// Play the sequence a single time.
    pub fn once() -> Self {
        Self {
            repeat_forever: false,
            auto_reverse: false,
            initial_delay_ms: 0.0,
        }
    }

    /// Restart from the beginning every cycle (no reverse pass).
    pub fn forever() -> Self {
        Self {
            repeat_forever: true,
            auto_reverse: false,
            initial_delay_ms: 0.0,
        }
    }

    /// Bounce between the sequence endpoints indefinitely.
    pub fn ping_pong() -> Self {
        Self {
            repeat_forever: true,
            auto_reverse: true,
            initial_delay_ms: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }
}

/// One fully resolved step of a playback timeline.
#[derive(Debug, Clone, Copy)]
struct Segment {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: crate::animation::easing::EasingFunction,
}

/// An installed, repeating timeline over one animated value.
///
/// Sampling is purely positional: the value at any `now_ms` is computed
/// from the offset into the cycle, never from accumulated per-frame
/// deltas. Irregular or gapped clocks therefore re-sync exactly.
#[derive(Debug, Clone)]
pub struct Playback {
    segments: Vec<Segment>,
    spec: LoopSpec,
    start_ms: f64,
}

impl Playback {
    /// Build a playback from a transition sequence, resolving each missing
    /// `from` to the previous segment's target (or `resting` for the first).
    pub fn new(transitions: &[Transition], resting: f64, spec: LoopSpec, start_ms: f64) -> Self {
        let mut segments = Vec::with_capacity(transitions.len());
        let mut cursor = resting;
        for transition in transitions {
            let from = transition.from.unwrap_or(cursor);
            segments.push(Segment {
                from,
                to: transition.to,
                duration_ms: transition.duration_ms,
                easing: transition.easing,
            });
            cursor = transition.to;
        }
        Self {
            segments,
            spec,
            start_ms,
        }
    }

    /// Total forward duration of one pass over the sequence.
    fn forward_ms(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.duration_ms.max(0.0))
            .sum()
    }

    /// Duration of one full cycle (doubled when auto-reversing).
    fn cycle_ms(&self) -> f64 {
        let forward = self.forward_ms();
        if self.spec.auto_reverse {
            forward * 2.0
        } else {
            forward
        }
    }

    fn value_at_start(&self) -> f64 {
        self.segments.first().map(|s| s.from).unwrap_or(0.0)
    }

    fn value_at_end(&self) -> f64 {
        if self.spec.auto_reverse {
            self.value_at_start()
        } else {
            self.segments.last().map(|s| s.to).unwrap_or(0.0)
        }
    }

    /// Whether a non-repeating playback has run its course.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        if self.spec.repeat_forever {
            return false;
        }
        now_ms - self.start_ms - self.spec.initial_delay_ms >= self.cycle_ms()
    }

    /// Sample the timeline value at the given clock reading.
    pub fn sample(&self, now_ms: f64) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }

        let mut elapsed = now_ms - self.start_ms;
        if elapsed < self.spec.initial_delay_ms {
            return self.value_at_start();
        }
        elapsed -= self.spec.initial_delay_ms;

        let cycle = self.cycle_ms();
        if self.spec.repeat_forever {
            if cycle > 0.0 {
                elapsed %= cycle;
            } else {
                elapsed = 0.0;
            }
        } else if elapsed >= cycle {
            return self.value_at_end();
        }

        let forward = self.forward_ms();
        let position = if self.spec.auto_reverse && elapsed >= forward {
            // Reverse pass: mirror the offset back into the forward leg.
            cycle - elapsed
        } else {
            elapsed
        };

        self.sample_forward(position)
    }

    fn sample_forward(&self, mut position: f64) -> f64 {
        for segment in &self.segments {
            let duration = segment.duration_ms.max(0.0);
            if duration <= 0.0 {
                // Zero-duration step: jumps straight to its target and the
                // walk continues within the same sample.
                continue;
            }
            if position < duration {
                let fraction = segment.easing.apply(position / duration);
                return lerp(segment.from, segment.to, fraction);
            }
            position -= duration;
        }
        // Past the last segment: rest on its target.
        self.segments.last().map(|s| s.to).unwrap_or(0.0)
    }
}
