//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimConfig` (YAML-facing) and produces the runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - the seeded population (particles at t = 0)
//! - the active impulse set (`ImpulseSet` with pairwise gravity)
//! - the random source (`StdRng`, seeded or from entropy)
//!
//! The scenario then drives itself one `tick` at a time: population advance
//! followed by one physics step, with the tick duration handed back so a
//! caller can record and display it.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::SimConfig;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ImpulseSet, PairwiseGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::population;
use crate::simulation::states::{NVec2, Particle, Population};

/// A fully-initialized fireworks scenario
///
/// This is the main runtime bundle constructed from a [`SimConfig`]: it owns
/// the current population snapshot, the parameters, the force terms, and the
/// injectable random source used for mass sampling, anchor picks, burst
/// offsets, and burst-probability draws
pub struct Scenario {
    pub parameters: Parameters,
    pub population: Population,
    pub forces: ImpulseSet,
    pub rng: StdRng,
}

impl Scenario {
    /// Validate `cfg` and build the runtime scenario with its initial
    /// population seeded uniformly in `[-0.5, 0.5)^2`, zero velocity,
    /// mass and color left for the first integration pass to assign
    pub fn build(cfg: SimConfig) -> Result<Self, SimError> {
        cfg.validate()?;

        let p = cfg.parameters;
        let parameters = Parameters {
            g: p.g,
            mass_min: p.mass_min,
            mass_max: p.mass_max,
            initial_count: p.initial_count,
            fireworks_probability: p.fireworks_probability,
            fireworks_count: p.fireworks_count,
            fireworks_range: p.fireworks_range,
            decay_fraction: p.decay_fraction,
            min_count: p.min_count,
            replenish_at_floor: p.replenish_at_floor,
            bounce: p.bounce_coefficient,
            dt: p.dt,
            epsilon: p.epsilon,
            palette: cfg.palette,
            seed: p.seed,
        };

        let mut rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Initial population: particles scattered over the unit square
        let particles: Vec<Particle> = (0..parameters.initial_count)
            .map(|_| {
                Particle::spawned_at(NVec2::new(
                    rng.random::<f64>() - 0.5,
                    rng.random::<f64>() - 0.5,
                ))
            })
            .collect();
        let population = Population { particles, t: 0.0 };

        // Forces: one exact pairwise gravity term
        let forces = ImpulseSet::new().with(PairwiseGravity { g: parameters.g });

        Ok(Self {
            parameters,
            population,
            forces,
            rng,
        })
    }

    /// Run one tick: population advance, then one physics step
    ///
    /// The tick is staged on a working copy: on success the new snapshot
    /// replaces the current one and the measured wall-clock duration of the
    /// tick is returned. On failure nothing is installed, not even the
    /// same-tick population changes, so the pre-tick snapshot stays the
    /// last valid state and remains available for rendering.
    pub fn tick(&mut self) -> Result<Duration, SimError> {
        let start = Instant::now();
        let mut working = self.population.clone();
        population::advance(&mut working, &self.parameters, &mut self.rng)?;
        self.population = euler_step(&working, &self.forces, &self.parameters, &mut self.rng)?;
        Ok(start.elapsed())
    }

    /// Read-only view of the current snapshot, for a renderer
    pub fn snapshot(&self) -> &Population {
        &self.population
    }
}
