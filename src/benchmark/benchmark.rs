use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::forces::{Impulse, ImpulseSet, PairwiseGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, Population};

/// Helper to build a manual population of size `n`
/// Deterministic positions, no rand needed
fn make_population(n: usize) -> Population {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 0.5, (i_f * 0.13).cos() * 0.5);

        particles.push(Particle {
            x,
            v: NVec2::zeros(),
            m: Some(1.0),
            color: Some(0),
        });
    }

    Population { particles, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        g: 1e-4,
        mass_min: 1.0,
        mass_max: 5.0,
        initial_count: 0,
        fireworks_probability: 0.0,
        fireworks_count: 10,
        fireworks_range: 0.1,
        decay_fraction: 0.0,
        min_count: 0,
        replenish_at_floor: false,
        bounce: 0.0,
        dt: 1.0 / 30.0,
        epsilon: 1e-8,
        palette: vec!["#fff".to_string()],
        seed: Some(42),
    }
}

/// Time the raw pairwise impulse accumulation for a range of n
pub fn bench_gravity() {
    // Different population sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let pop = make_population(n);
        let params = make_params();

        let gravity = PairwiseGravity { g: params.g };
        let masses = vec![1.0; n];
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity
            .impulses(params.dt, &pop, &masses, &mut out)
            .expect("bench population has no coincident positions");

        let t0 = Instant::now();
        gravity
            .impulses(params.dt, &pop, &masses, &mut out)
            .expect("bench population has no coincident positions");
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Benchmark the full euler_step for a range of n
/// Paste output directly into a spreadsheet to graph the O(n^2) curve
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 200 to give a smoother graph
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let mut pop = make_population(n);
        let params = make_params();
        let forces = ImpulseSet::new().with(PairwiseGravity { g: params.g });
        let mut rng = StdRng::seed_from_u64(42);

        let t0 = Instant::now();
        for _ in 0..steps {
            pop = euler_step(&pop, &forces, &params, &mut rng)
                .expect("bench population has no coincident positions");
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
