//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and mass sampling range,
//! - fireworks burst / culling policy knobs,
//! - boundary bounce coefficient, timestep, anti-collision epsilon,
//! - color palette and optional random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub mass_min: f64, // lower bound of the mass sampling range
    pub mass_max: f64, // upper bound of the mass sampling range
    pub initial_count: usize, // seed population size
    pub fireworks_probability: f64, // per-tick chance of a random burst
    pub fireworks_count: usize, // particles created per burst
    pub fireworks_range: f64, // max positional offset of burst particles from anchor
    pub decay_fraction: f64, // fraction of population culled per tick when above floor
    pub min_count: usize, // population floor
    pub replenish_at_floor: bool, // burst instead of culling when at/under the floor
    pub bounce: f64, // 0 disables boundary reflection, otherwise damping factor
    pub dt: f64, // fixed physics timestep
    pub epsilon: f64, // anti-collision / boundary nudge constant
    pub palette: Vec<String>, // ordered display color tags
    pub seed: Option<u64>, // deterministic seed; None draws from entropy
}
