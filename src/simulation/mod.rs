pub mod error;
pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod population;
pub mod scenario;
