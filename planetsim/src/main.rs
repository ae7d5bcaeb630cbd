use planetsim::{ScenarioConfig, Scenario};
use planetsim::run_console;
use planetsim::bench_direct_sum;

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` when not found as given
    #[arg(short, default_value = "inner_solar.yaml")]
    file_name: String,

    /// Override the number of steps
    #[arg(long)]
    steps: Option<u64>,

    /// Override the time step
    #[arg(long)]
    dt: Option<f64>,

    /// Report every n-th step
    #[arg(long)]
    every: Option<u64>,

    /// Time the direct-sum step instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = scenario_path(&args.file_name);
    let mut scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = Some(steps);
    }
    if let Some(dt) = args.dt {
        scenario_cfg.parameters.dt = dt;
    }
    if let Some(every) = args.every {
        scenario_cfg.output.every = every;
    }

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_direct_sum();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let p0 = scenario.system.total_momentum();
    let e0 = scenario.gravity.total_energy(&scenario.system);

    let stdout = io::stdout();
    let engine = run_console(scenario, BufWriter::new(stdout.lock()))?;

    let gravity = engine.scenario().gravity;
    let sys = engine.system();
    let e1 = gravity.total_energy(sys);
    info!(
        "{} steps, t = {:e}, |dp| = {:e}, relative energy drift = {:e}",
        engine.steps_taken(),
        sys.t,
        (sys.total_momentum() - p0).norm(),
        ((e1 - e0) / e0).abs()
    );

    Ok(())
}
