use crate::animation::{AnimatedValue, EasingFunction, LoopSpec, Transition};
use crate::core::constants::{
    PARTICLE_BOB_HEIGHT, PARTICLE_BOB_LEG_MS, PARTICLE_COUNT, PARTICLE_DRIFT_EXTENT,
    PARTICLE_DRIFT_LEG_MS, PARTICLE_SCALE_MAX, PARTICLE_SCALE_MIN, PARTICLE_STAGGER_MS,
};
use serde::{Deserialize, Serialize};

/// Per-frame snapshot of one confetti particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub vertical_offset: f64,
    pub horizontal_offset: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl ParticleSnapshot {
    /// A particle at rest, before its staggered loops have kicked in.
    pub fn at_rest() -> Self {
        Self {
            vertical_offset: 0.0,
            horizontal_offset: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

/// One confetti particle: four animated values sharing a phase delay.
///
/// The four loops are installed with the same stagger and sampled with the
/// same `now_ms` each frame, so a particle's bob, drift, fade and pulse
/// stay visually coherent while different particles run out of phase.
#[derive(Debug, Clone)]
pub struct Particle {
    phase_index: usize,
    vertical: AnimatedValue,
    horizontal: AnimatedValue,
    opacity: AnimatedValue,
    scale: AnimatedValue,
}

impl Particle {
    pub fn new(phase_index: usize, now_ms: f64) -> Self {
        let spec = LoopSpec::ping_pong().with_delay(Self::stagger_ms(phase_index));

        let mut vertical = AnimatedValue::new(0.0);
        vertical.set(
            &[Transition::new(
                0.0,
                -PARTICLE_BOB_HEIGHT,
                PARTICLE_BOB_LEG_MS,
                EasingFunction::EaseOut,
            )],
            spec,
            now_ms,
        );

        // Even indices drift right, odd drift left.
        let direction = if phase_index % 2 == 0 { 1.0 } else { -1.0 };
        let mut horizontal = AnimatedValue::new(0.0);
        horizontal.set(
            &[Transition::new(
                0.0,
                PARTICLE_DRIFT_EXTENT * direction,
                PARTICLE_DRIFT_LEG_MS,
                EasingFunction::Linear,
            )],
            spec,
            now_ms,
        );

        let mut opacity = AnimatedValue::new(1.0);
        opacity.set(
            &[Transition::new(
                1.0,
                0.0,
                PARTICLE_BOB_LEG_MS,
                EasingFunction::Linear,
            )],
            spec,
            now_ms,
        );

        // Starts by growing past the rest scale of 1.0, then pulses
        // between the asymmetric bounds.
        let mut scale = AnimatedValue::new(1.0);
        scale.set(
            &[
                Transition::new(
                    1.0,
                    PARTICLE_SCALE_MAX,
                    PARTICLE_BOB_LEG_MS,
                    EasingFunction::Linear,
                ),
                Transition::new(
                    PARTICLE_SCALE_MAX,
                    PARTICLE_SCALE_MIN,
                    PARTICLE_BOB_LEG_MS,
                    EasingFunction::Linear,
                ),
            ],
            spec,
            now_ms,
        );

        Self {
            phase_index,
            vertical,
            horizontal,
            opacity,
            scale,
        }
    }

    /// Deterministic stagger, strictly increasing with the phase index.
    pub fn stagger_ms(phase_index: usize) -> f64 {
        phase_index as f64 * PARTICLE_STAGGER_MS
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Advance all four loops with one shared time sample.
    pub fn advance(&mut self, now_ms: f64) -> ParticleSnapshot {
        ParticleSnapshot {
            vertical_offset: self.vertical.advance(now_ms),
            horizontal_offset: self.horizontal.advance(now_ms),
            opacity: self.opacity.advance(now_ms),
            scale: self.scale.advance(now_ms),
        }
    }

    pub fn stop(&mut self) {
        self.vertical.stop();
        self.horizontal.stop();
        self.opacity.stop();
        self.scale.stop();
    }

    pub fn vertical(&self) -> &AnimatedValue {
        &self.vertical
    }

    pub fn horizontal(&self) -> &AnimatedValue {
        &self.horizontal
    }

    pub fn opacity(&self) -> &AnimatedValue {
        &self.opacity
    }

    pub fn scale(&self) -> &AnimatedValue {
        &self.scale
    }
}

/// Fixed-size cluster of independently phased confetti particles.
#[derive(Debug, Clone)]
pub struct ConfettiField {
    particles: [Particle; PARTICLE_COUNT],
}

impl ConfettiField {
    pub fn new(now_ms: f64) -> Self {
        Self {
            particles: std::array::from_fn(|i| Particle::new(i, now_ms)),
        }
    }

    /// Advance every particle with the same time sample.
    pub fn advance(&mut self, now_ms: f64) -> [ParticleSnapshot; PARTICLE_COUNT] {
        std::array::from_fn(|i| self.particles[i].advance(now_ms))
    }

    pub fn stop(&mut self) {
        for particle in &mut self.particles {
            particle.stop();
        }
    }

    pub fn particles(&self) -> &[Particle; PARTICLE_COUNT] {
        &self.particles
    }
}
