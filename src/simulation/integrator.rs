//! Fixed-step time integrator for the particle field
//!
//! One `euler_step` call advances the whole population by `dt` using
//! semi-implicit Euler: all pairwise impulses are accumulated against the
//! pre-step positions, added onto the velocities, and only then are
//! positions advanced with the updated velocities.

use rand::Rng;

use super::error::SimError;
use super::forces::ImpulseSet;
use super::params::Parameters;
use super::states::{NVec2, Particle, Population};

/// Advance the population by one step of `params.dt`
///
/// Produces a brand-new snapshot; `pop` itself is never mutated, so a
/// renderer holding it keeps seeing a consistent state. Particles still
/// missing a mass or color get them assigned here, once:
/// - mass: uniform in `[mass_min, mass_max]`
/// - color: palette index `i % palette.len()` for sequence position `i`
///
/// Fails with [`SimError::CoincidentPositions`] if any two particles sit at
/// the exact same position; no partially updated snapshot is returned.
pub fn euler_step(
    pop: &Population,
    forces: &ImpulseSet,
    params: &Parameters,
    rng: &mut impl Rng,
) -> Result<Population, SimError> {
    let n = pop.len();
    let dt = params.dt;

    // Copy the particles forward, resolving any unassigned mass/color.
    // Masses are also collected into a dense buffer for the force terms.
    let mut particles = Vec::with_capacity(n);
    let mut masses = Vec::with_capacity(n);
    for (i, p) in pop.particles.iter().enumerate() {
        let m = match p.m {
            Some(m) => m,
            None => params.mass_min + (params.mass_max - params.mass_min) * rng.random::<f64>(),
        };
        let color = match p.color {
            Some(c) => c,
            None => i % params.palette.len(),
        };
        masses.push(m);
        particles.push(Particle {
            x: p.x,
            v: p.v,
            m: Some(m),
            color: Some(color),
        });
    }

    let mut next = Population {
        particles,
        t: pop.t,
    };

    // Accumulate all pairwise impulses against the pre-step positions.
    // A fault here aborts the whole step before any kinematic update.
    let mut dv = vec![NVec2::zeros(); n];
    forces.accumulate_impulses(dt, &next, &masses, &mut dv)?;

    // Kick then drift: v_n+1 = v_n + dv, x_n+1 = x_n + dt v_n+1
    for (p, dv) in next.particles.iter_mut().zip(dv.iter()) {
        p.v += *dv;
        p.x += dt * p.v;

        if params.bounce != 0.0 {
            reflect(p, params.bounce, params.epsilon);
        }
    }

    // Increment the system time by one full step
    next.t += dt;

    Ok(next)
}

/// Reflect a particle off the unit square boundary
///
/// Per axis: flip and damp the velocity component, clamp the coordinate back
/// onto the bound, then nudge it by `epsilon` along the reflected velocity so
/// the same boundary check cannot re-trigger on the immediately next step.
fn reflect(p: &mut Particle, bounce: f64, epsilon: f64) {
    if p.x.x.abs() > 1.0 {
        p.v.x *= -bounce;
        p.x.x = p.x.x.signum();
        p.x.x += p.v.x * epsilon;
    }
    if p.x.y.abs() > 1.0 {
        p.v.y *= -bounce;
        p.x.y = p.x.y.signum();
        p.x.y += p.v.y * epsilon;
    }
}
