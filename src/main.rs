use gravsim::{bench_step, total_energy, write_trajectories_file, DistanceEnvelope, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Headless direct-summation gravity simulation")]
struct Args {
    /// Scenario YAML. Names that do not exist as given are looked up in scenarios/.
    /// Without it the built-in inner solar system runs.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of ticks, overrides the scenario
    #[arg(short = 'n', long)]
    steps: Option<u64>,

    /// Write all trajectories to this CSV file after the run
    #[arg(long)]
    csv: Option<String>,

    /// Time the integrator instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &Path) -> Result<Scenario> {
    let config_path = if file_name.exists() {
        file_name.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(Scenario::build_scenario(scenario_cfg)?)
}

fn run(mut scenario: Scenario, steps: u64) -> Result<Scenario> {
    let Scenario { engine, parameters, system } = &mut scenario;
    let g = parameters.G;

    let e0 = total_energy(&system.bodies, g);
    let mut envelopes = vec![DistanceEnvelope::default(); system.bodies.len()];

    info!(bodies = system.bodies.len(), steps, dt = parameters.dt, order = ?engine.order, "running scenario");

    for tick in 0..steps {
        system
            .advance(parameters, engine)
            .with_context(|| format!("step {} failed", tick + 1))?;

        for (env, b) in envelopes.iter_mut().zip(&system.bodies) {
            env.observe(b);
        }

        if system.steps % 30 == 0 {
            debug!(step = system.steps, t = system.t, "progress");
        }
    }

    let e1 = total_energy(&system.bodies, g);
    for (i, (b, env)) in system.bodies.iter().zip(&envelopes).enumerate() {
        let name = b.name().map_or_else(|| format!("#{}", i), str::to_owned);
        let p = b.position();
        match (env.min, env.max) {
            (Some(lo), Some(hi)) => info!("{name:>8}: x = ({:+.4e}, {:+.4e}) m, anchor distance {:.4e}..{:.4e} m", p.x, p.y, lo, hi),
            _ => info!("{name:>8}: x = ({:+.4e}, {:+.4e}) m", p.x, p.y),
        }
    }
    if e0 != 0.0 {
        info!("elapsed {:.3e} s, relative energy drift {:.3e}", system.t, (e1 - e0) / e0.abs());
    }

    Ok(scenario)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let scenario = match &args.file {
        Some(path) => load_scenario_from_yaml(path)?,
        None => Scenario::inner_solar_system()?,
    };
    let steps = args.steps.unwrap_or(scenario.parameters.steps);

    let scenario = run(scenario, steps)?;

    if let Some(path) = &args.csv {
        write_trajectories_file(path, &scenario.system.bodies)
            .with_context(|| format!("failed to write {}", path))?;
        info!("trajectories written to {}", path);
    }

    Ok(())
}
