pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Particle, Population, NVec2};
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::forces::{Impulse, ImpulseSet, PairwiseGravity};
pub use simulation::integrator::euler_step;
pub use simulation::population::{advance, spawn_burst};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, SimConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
