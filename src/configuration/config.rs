//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! fireworks scenario:
//!
//! - [`ParametersConfig`] – physical constants and population policy knobs
//! - [`SimConfig`]        – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 1.0e-4                  # gravitational constant
//!   mass_min: 1.0              # mass sampling range
//!   mass_max: 5.0
//!   initial_count: 100         # seed population size
//!   fireworks_probability: 0.1 # per-tick chance of a random burst
//!   fireworks_count: 10        # particles per burst
//!   fireworks_range: 0.1       # max burst offset from the anchor
//!   decay_fraction: 1.0e-10    # fraction culled per tick when above floor
//!   min_count: 100             # population floor
//!   replenish_at_floor: true   # burst instead of culling at/under the floor
//!   bounce_coefficient: 0.0    # 0 disables boundary reflection
//!   dt: 0.0333333              # fixed physics timestep
//!   epsilon: 1.0e-8            # anti-collision nudge
//!   seed: 42                   # optional; omit for entropy
//!
//! palette: [ "#3cf", "#3fc", "#c3f", "#cf3", "#f3c", "#fc3" ]
//! ```
//!
//! Validation happens once, when the runtime scenario is built; invalid
//! combinations are rejected before any tick runs.

use serde::Deserialize;

use crate::simulation::error::SimError;

/// Physical constants and population policy for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,                     // gravitational constant
    pub mass_min: f64,              // mass sampling range, lower bound
    pub mass_max: f64,              // mass sampling range, upper bound
    pub initial_count: usize,       // seed population size
    pub fireworks_probability: f64, // per-tick chance of a random burst
    pub fireworks_count: usize,     // particles created per burst
    pub fireworks_range: f64,       // max positional offset from the anchor
    pub decay_fraction: f64,        // fraction culled per tick when above floor
    pub min_count: usize,           // population floor
    pub replenish_at_floor: bool,   // burst instead of culling at/under the floor
    pub bounce_coefficient: f64,    // 0 disables boundary reflection
    pub dt: f64,                    // fixed physics timestep
    pub epsilon: f64,               // anti-collision / boundary nudge constant
    #[serde(default)]
    pub seed: Option<u64>,          // deterministic seed, None draws from entropy
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct SimConfig {
    pub parameters: ParametersConfig, // physics and population policy
    pub palette: Vec<String>,         // ordered display color tags
}

impl SimConfig {
    /// Reject parameter combinations the core cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        let p = &self.parameters;
        let fail = |msg: &str| Err(SimError::InvalidConfiguration(msg.to_string()));

        if p.dt <= 0.0 {
            return fail("dt must be positive");
        }
        if p.mass_min <= 0.0 {
            return fail("mass_min must be positive");
        }
        if p.mass_max < p.mass_min {
            return fail("mass_max must be >= mass_min");
        }
        if p.fireworks_probability < 0.0 || p.fireworks_probability > 1.0 {
            return fail("fireworks_probability must lie in [0, 1]");
        }
        if p.fireworks_count == 0 {
            return fail("fireworks_count must be at least 1");
        }
        if p.fireworks_range < 0.0 {
            return fail("fireworks_range must not be negative");
        }
        // 1.0 is excluded: floor(len * 1.0) would drain the whole population
        // in one tick, and the next burst would have no anchor left to pick.
        // Any fraction below 1.0 always leaves at least one particle.
        if !(0.0..1.0).contains(&p.decay_fraction) {
            return fail("decay_fraction must lie in [0, 1)");
        }
        if p.bounce_coefficient < 0.0 {
            return fail("bounce_coefficient must not be negative");
        }
        if p.epsilon <= 0.0 {
            return fail("epsilon must be positive");
        }
        if p.initial_count == 0 {
            return fail("initial_count must be at least 1");
        }
        if self.palette.is_empty() {
            return fail("palette must contain at least one color");
        }
        Ok(())
    }
}
