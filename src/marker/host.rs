use crate::core::geo::LatLng;
use crate::marker::composite::MarkerVisual;
use instant::Instant;

/// Consumer of per-frame marker visuals.
///
/// The host owns screen-space projection and compositing; this crate only
/// hands it a coordinate and the frame's transform/opacity snapshot.
pub trait MarkerHost {
    fn place(&mut self, coordinate: LatLng, visual: &MarkerVisual);
}

/// Source of the frame clock driving all `advance`/`render` calls.
///
/// Implementations must be monotonically non-decreasing; frequency and
/// jitter are otherwise unconstrained.
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// Default clock: milliseconds since construction, monotonic and
/// wasm-friendly via the `instant` crate.
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
