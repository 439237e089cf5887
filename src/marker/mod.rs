pub mod composite;
pub mod confetti;
pub mod host;
pub mod ripple;
pub mod scale;

// Re-export commonly used types and functions for convenience
pub use composite::{MarkerComposite, MarkerVisual};
pub use confetti::{ConfettiField, Particle, ParticleSnapshot};
pub use host::{FrameClock, MarkerHost, SystemClock};
pub use ripple::RippleGenerator;
pub use scale::scale;
