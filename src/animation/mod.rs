pub mod easing;
pub mod looping;
pub mod value;

// Re-export commonly used types and functions for convenience
pub use easing::EasingFunction;
pub use looping::{LoopSpec, Playback};
pub use value::{AnimatedValue, Transition};
