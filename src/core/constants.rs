//! Engine-wide magic numbers for the marker animation system.
//! Keeping them in a single place makes it easier to tweak visuals.

/// Base drawn size of a marker's ripple disc in pixels.
pub const MARKER_BASE_SIZE: f64 = 20.0;

/// Outer bound the ripple radius grows towards (4x the base drawn size).
pub const RIPPLE_OUTER_RADIUS: f64 = MARKER_BASE_SIZE * 4.0;

/// One full ripple pulse: radius growth and opacity fade share this period.
pub const RIPPLE_PERIOD_MS: f64 = 2000.0;

/// Confetti particles per marker.
pub const PARTICLE_COUNT: usize = 5;

/// Per-index stagger between particle phases.
pub const PARTICLE_STAGGER_MS: f64 = 400.0;

/// Peak upward travel of a particle's bob, in pixels.
pub const PARTICLE_BOB_HEIGHT: f64 = 30.0;

/// One leg of the vertical bob (and of the opacity/scale pulses).
pub const PARTICLE_BOB_LEG_MS: f64 = 1000.0;

/// Peak sideways drift of a particle, in pixels. Sign alternates by index.
pub const PARTICLE_DRIFT_EXTENT: f64 = 20.0;

/// One leg of the horizontal drift.
pub const PARTICLE_DRIFT_LEG_MS: f64 = 1500.0;

/// Particle scale pulse bounds, asymmetric about the rest scale of 1.0.
pub const PARTICLE_SCALE_MAX: f64 = 1.2;
pub const PARTICLE_SCALE_MIN: f64 = 0.8;
