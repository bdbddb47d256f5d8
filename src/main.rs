use solsim::{Scenario, ScenarioConfig, TrajectoryWriter};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Direct N-body solar system simulator")]
struct Args {
    /// Path to a scenario YAML file
    #[arg(default_value = "scenarios/solar_system.yaml")]
    scenario: PathBuf,
}

// load here to keep main clean
fn load_scenario(path: &PathBuf) -> Result<ScenarioConfig> {
    let file =
        File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cfg = load_scenario(&args.scenario)?;
    let mut scenario = Scenario::build(cfg)?;

    let steps = scenario.parameters.steps();
    log::info!(
        "running {} bodies for {} steps ({:?}, dt = {} yr, t_end = {} yr)",
        scenario.system.body_count(),
        steps,
        scenario.integrator.method(),
        scenario.integrator.dt(),
        scenario.parameters.t_end,
    );

    let mut writer = match &scenario.trajectory {
        Some(path) => {
            log::info!("writing trajectory to {}", path.display());
            Some(TrajectoryWriter::create(path)?)
        }
        None => None,
    };

    for _ in 0..steps {
        scenario.integrator.step(&mut scenario.system)?;
        if let Some(w) = writer.as_mut() {
            w.write_frame(&scenario.system)?;
        }
    }

    if let Some(w) = writer.as_mut() {
        w.flush()?;
    }

    // Refresh the aggregates so the closing report reflects the final state
    scenario.system.compute_forces()?;
    log::info!(
        "finished at t = {:.6} yr: E_kin = {:.9e}, E_pot = {:.9e}, E_tot = {:.9e}, |L| = {:.9e}",
        scenario.system.t,
        scenario.system.kinetic_energy,
        scenario.system.potential_energy,
        scenario.system.total_energy(),
        scenario.system.angular_momentum.norm(),
    );

    Ok(())
}
