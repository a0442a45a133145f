use fwsim::{bench_gravity, bench_step_curve, Scenario, SimConfig};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

// Rolling window of tick durations kept for the average, as samples
const PERF_WINDOW: usize = 200;

#[derive(ValueEnum, Debug, Clone)]
enum Bench {
    /// Time the raw pairwise impulse accumulation over a range of n
    Gravity,
    /// CSV per-tick step timings, for graphing the n^2 curve
    Curve,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of ticks to run before exiting
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Run a benchmark instead of a scenario
    #[arg(long, value_enum)]
    bench: Option<Bench>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<SimConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let cfg: SimConfig = serde_yaml::from_reader(reader)?;

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(bench) = args.bench {
        match bench {
            Bench::Gravity => bench_gravity(),
            Bench::Curve => bench_step_curve(),
        }
        return Ok(());
    }

    let cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(cfg)?;

    log::info!(
        "seeded {} particles, running {} ticks",
        scenario.snapshot().len(),
        args.ticks
    );

    let mut samples: VecDeque<Duration> = VecDeque::with_capacity(PERF_WINDOW);
    for tick in 1..=args.ticks {
        match scenario.tick() {
            Ok(elapsed) => {
                if samples.len() == PERF_WINDOW {
                    samples.pop_front();
                }
                samples.push_back(elapsed);
            }
            Err(e) => {
                // The last good snapshot stays available; stop advancing
                log::error!("tick {tick} failed: {e}");
                break;
            }
        }

        if tick % 100 == 0 {
            let avg_ms = samples.iter().map(Duration::as_secs_f64).sum::<f64>()
                / samples.len() as f64
                * 1000.0;
            log::info!(
                "tick {tick}: {} particles, t = {:.2}, avg physics {avg_ms:.3} ms",
                scenario.snapshot().len(),
                scenario.snapshot().t
            );
        }
    }

    Ok(())
}
