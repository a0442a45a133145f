//! Core state types for the fireworks particle field.
//!
//! Defines the particle record and the population snapshot:
//! - `Particle` using `NVec2` (position, velocity, lazily-assigned mass/color)
//! - `Population` holding the ordered particle list and the current time `t`
//!
//! Order in the population is meaningful: insertion order determines both
//! removal order (oldest first) and the default color-assignment index.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: Option<f64>, // mass, None until first integration pass
    pub color: Option<usize>, // palette index, None until first integration pass
}

impl Particle {
    /// A freshly spawned particle at `x`: zero velocity, mass and color
    /// not yet assigned (the integrator assigns them on its next pass)
    pub fn spawned_at(x: NVec2) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            m: None,
            color: None,
        }
    }
}

/// One snapshot of the particle field: the FIFO-ordered particle list plus
/// the simulated time it corresponds to
///
/// The integrator never mutates a snapshot once published; it produces a new
/// one each tick, so a renderer may keep reading an old snapshot safely
#[derive(Debug, Clone)]
pub struct Population {
    pub particles: Vec<Particle>, // ordered collection, oldest first
    pub t: f64, // time
}

impl Population {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
