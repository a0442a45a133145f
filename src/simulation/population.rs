//! Population dynamics: fireworks bursts and oldest-first culling
//!
//! Runs once per tick, before the physics step. Sub-steps compose in order
//! and each condition is checked against the size left by the previous one:
//! a random burst can lift the population over the floor and make culling
//! fire in the same tick.

use rand::Rng;

use super::error::SimError;
use super::params::Parameters;
use super::states::{NVec2, Particle, Population};

/// Evolve the population size for one tick, in place
///
/// 1. with probability `fireworks_probability`, spawn one burst
/// 2. if the size is above `min_count`, cull the oldest
///    `floor(size * decay_fraction)` particles
/// 3. otherwise, if `replenish_at_floor` is set, spawn one burst so the
///    population cannot collapse toward zero
pub fn advance(
    pop: &mut Population,
    params: &Parameters,
    rng: &mut impl Rng,
) -> Result<(), SimError> {
    if rng.random::<f64>() < params.fireworks_probability {
        spawn_burst(pop, params, rng)?;
    }

    if pop.len() > params.min_count {
        let cull = (pop.len() as f64 * params.decay_fraction).floor() as usize;
        // Oldest first: lowest insertion index. Bulk drain instead of
        // removing the head one particle at a time.
        pop.particles.drain(..cull);
    } else if params.replenish_at_floor {
        spawn_burst(pop, params, rng)?;
    }

    Ok(())
}

/// Append one fireworks burst: `fireworks_count` new particles clustered
/// near an anchor picked uniformly from the existing population
///
/// Each offset is `fireworks_range * U[0,1) + epsilon` per axis; the strictly
/// positive epsilon guarantees no newcomer lands exactly on its anchor, which
/// would be a coincident-position fault on the very next force evaluation.
pub fn spawn_burst(
    pop: &mut Population,
    params: &Parameters,
    rng: &mut impl Rng,
) -> Result<(), SimError> {
    if pop.is_empty() {
        return Err(SimError::EmptyPopulationAnchorPick);
    }

    let anchor = pop.particles[rng.random_range(0..pop.len())].x;
    for _ in 0..params.fireworks_count {
        let offset = NVec2::new(
            params.fireworks_range * rng.random::<f64>() + params.epsilon,
            params.fireworks_range * rng.random::<f64>() + params.epsilon,
        );
        pop.particles.push(Particle::spawned_at(anchor + offset));
    }
    Ok(())
}
