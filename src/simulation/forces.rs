//! Pairwise interaction terms for the particle field
//!
//! Terms produce per-particle velocity impulses (dv already scaled by the
//! timestep and the receiving particle's mass) rather than raw forces, so
//! the integrator only has to add them onto the velocities.

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec2, Population};

/// Collection of impulse terms
/// Each term implements [`Impulse`] and their contributions are summed
/// into a single velocity impulse per particle
pub struct ImpulseSet {
    terms: Vec<Box<dyn Impulse + Send + Sync>>,
}

impl ImpulseSet {
    /// Create an empty impulse set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an impulse term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Impulse + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total velocity impulses for one step of length `dt`
    /// - `masses[i]` is the (already assigned) mass of particle i
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - positions read from `pop` are the pre-step positions; no term may
    ///   observe a partially updated state
    ///
    /// Fails on the first term that reports a fault, leaving `out`
    /// unusable; the caller must abort the whole step
    pub fn accumulate_impulses(
        &self,
        dt: f64,
        pop: &Population,
        masses: &[f64],
        out: &mut [NVec2],
    ) -> Result<(), SimError> {
        // Zero buffer
        for dv in out.iter_mut() {
            *dv = NVec2::zeros();
        }
        // Iterate over all impulse contributors
        for term in &self.terms {
            term.impulses(dt, pop, masses, out)?;
        }
        Ok(())
    }
}

impl Default for ImpulseSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for impulse sources operating on a [`Population`] snapshot
/// Implementations add their contribution into `out[i]` for each particle
pub trait Impulse {
    fn impulses(
        &self,
        dt: f64,
        pop: &Population,
        masses: &[f64],
        out: &mut [NVec2],
    ) -> Result<(), SimError>;
}

/// Inverse-square pairwise interaction, exact direct summation
///
/// Like charges: the pair repels along the line joining it. There is no
/// softening; two particles at the exact same position are a hard error
/// rather than a silently produced NaN
pub struct PairwiseGravity {
    pub g: f64, // gravitational constant
}

impl Impulse for PairwiseGravity {
    fn impulses(
        &self,
        dt: f64,
        pop: &Population,
        masses: &[f64],
        out: &mut [NVec2],
    ) -> Result<(), SimError> {
        let n = pop.len();
        if n < 2 {
            // nothing to pair up
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = pop.particles[i].x; // position of particle i
            let mi = masses[i]; // mass of particle i

            for j in (i + 1)..n {
                let xj = pop.particles[j].x; // position of particle j
                let mj = masses[j]; // mass of particle j

                // r points from i to j
                let r = xj - xi;

                // Squared separation distance |r|^2
                let r2 = r.dot(&r);
                if r2 == 0.0 {
                    return Err(SimError::CoincidentPositions { i, j, at: xi });
                }

                // Force magnitude f = G m_i m_j / |r|^2, applied along the
                // unit vector r / |r|
                let f = self.g * mi * mj / r2;
                let dv = (dt * f / r2.sqrt()) * r;

                // Equal and opposite: i is pushed away from j, j away
                // from i, each impulse scaled by the receiver's own mass
                out[i] -= dv / mi;
                out[j] += dv / mj;
            }
        }
        Ok(())
    }
}
