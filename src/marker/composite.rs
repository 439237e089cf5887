use crate::core::constants::PARTICLE_COUNT;
use crate::core::geo::LatLng;
use crate::marker::confetti::{ConfettiField, ParticleSnapshot};
use crate::marker::host::MarkerHost;
use crate::marker::ripple::RippleGenerator;
use crate::marker::scale::scale;
use crate::{MarkerError, Result};
use serde::{Deserialize, Serialize};

/// Immutable per-frame render output of one marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerVisual {
    pub ripple_radius: f64,
    pub ripple_opacity: f64,
    pub particles: [ParticleSnapshot; PARTICLE_COUNT],
}

impl MarkerVisual {
    /// The visual a freshly created marker presents before its first tick:
    /// ripple at the group-derived base radius, particles at rest.
    fn initial(group_size: u32) -> Self {
        Self {
            ripple_radius: scale(group_size),
            ripple_opacity: 1.0,
            particles: [ParticleSnapshot::at_rest(); PARTICLE_COUNT],
        }
    }
}

/// A landmark marker: ripple plus confetti, anchored at a coordinate.
///
/// All animated values are created with the composite and torn down
/// together by [`MarkerComposite::destroy`]; none outlives its owner.
/// `group_size` is fixed for the marker's lifetime — changing it means
/// either building a new composite or explicitly re-deriving via
/// [`MarkerComposite::set_group_size`].
#[derive(Debug, Clone)]
pub struct MarkerComposite {
    coordinate: LatLng,
    group_size: u32,
    ripple: RippleGenerator,
    confetti: ConfettiField,
    destroyed: bool,
    last_visual: MarkerVisual,
}

impl MarkerComposite {
    /// Create a marker and start its loops at `now_ms`.
    ///
    /// The coordinate is validated; `group_size` is a caller contract
    /// (`>= 1`) and deliberately is not — a bad count yields a visually
    /// wrong marker, never an error.
    pub fn new(coordinate: LatLng, group_size: u32, now_ms: f64) -> Result<Self> {
        if !coordinate.is_valid() {
            return Err(MarkerError::InvalidCoordinates(format!(
                "lat={}, lng={}",
                coordinate.lat, coordinate.lng
            )));
        }
        log::debug!(
            "creating marker at ({:.5}, {:.5}) group_size={}",
            coordinate.lat,
            coordinate.lng,
            group_size
        );
        Ok(Self {
            coordinate,
            group_size,
            ripple: RippleGenerator::new(group_size, now_ms),
            confetti: ConfettiField::new(now_ms),
            destroyed: false,
            last_visual: MarkerVisual::initial(group_size),
        })
    }

    pub fn coordinate(&self) -> LatLng {
        self.coordinate
    }

    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Advance the ripple and every particle with one shared `now_ms` and
    /// snapshot the result. A destroyed composite returns its frozen last
    /// snapshot without touching any animated value.
    pub fn render(&mut self, now_ms: f64) -> MarkerVisual {
        if self.destroyed {
            return self.last_visual;
        }
        let (ripple_radius, ripple_opacity) = self.ripple.advance(now_ms);
        let particles = self.confetti.advance(now_ms);
        self.last_visual = MarkerVisual {
            ripple_radius,
            ripple_opacity,
            particles,
        };
        self.last_visual
    }

    /// Render one frame and hand `(coordinate, visual)` to the host.
    pub fn present(&mut self, now_ms: f64, host: &mut dyn MarkerHost) {
        let visual = self.render(now_ms);
        host.place(self.coordinate, &visual);
    }

    /// Re-derive the ripple for a new population count, restarting its
    /// loops at `now_ms`. Confetti phases are unaffected.
    pub fn set_group_size(&mut self, group_size: u32, now_ms: f64) {
        if self.destroyed {
            return;
        }
        self.group_size = group_size;
        self.ripple.retarget(group_size, now_ms);
    }

    /// Synchronously halt every owned loop. Idempotent; after this no
    /// further advance call reaches any of the marker's animated values.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        log::debug!(
            "destroying marker at ({:.5}, {:.5})",
            self.coordinate.lat,
            self.coordinate.lng
        );
        self.ripple.stop();
        self.confetti.stop();
        self.destroyed = true;
    }

    pub fn ripple(&self) -> &RippleGenerator {
        &self.ripple
    }

    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }
}

impl Drop for MarkerComposite {
    fn drop(&mut self) {
        self.destroy();
    }
}
