//! # Pulsemark
//!
//! Animated map markers for landmarks whose visual intensity scales with a
//! population count.
//!
//! Each marker composes a pulsing ripple (radius growth plus opacity decay,
//! derived from the group size) with a cluster of five staggered confetti
//! particles. Everything is driven by an explicit per-frame clock supplied
//! by the render surface: the engine holds no threads and performs no I/O,
//! and every animated value is sampled purely from `now_ms`, so irregular
//! frame clocks re-sync exactly.
//!
//! Map tile rendering, projection and compositing live on the host side of
//! the [`MarkerHost`] seam.

pub mod animation;
pub mod core;
pub mod marker;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::geo::LatLng;

pub use animation::{AnimatedValue, EasingFunction, LoopSpec, Playback, Transition};

pub use marker::{
    scale, ConfettiField, FrameClock, MarkerComposite, MarkerHost, MarkerVisual, Particle,
    ParticleSnapshot, RippleGenerator, SystemClock,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MarkerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MarkerError;
