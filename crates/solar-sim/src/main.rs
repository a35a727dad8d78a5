use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use solar_rk::Method;
use solar_sim::cli::{self, BodySource, Overrides};
use solar_sim::Simulator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "solar-sim", about = "Newtonian n-body simulator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate a body set and write report.json and energy.csv.
    Run(RunArgs),
    /// Validate the inputs and print the initial energy without integrating.
    Check(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// YAML configuration; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON array of body descriptors.
    #[arg(long, conflicts_with = "preset")]
    bodies: Option<PathBuf>,
    /// Built-in body set.
    #[arg(long, default_value = "solar-system")]
    preset: String,
    /// Overrides `duration_hours`.
    #[arg(long)]
    duration_hours: Option<f64>,
    /// Overrides `step_hours`.
    #[arg(long)]
    step_hours: Option<f64>,
    /// Overrides `method` (euler, heun, rk4, three_eighths).
    #[arg(long)]
    method: Option<Method>,
    /// Overrides `name_seed`.
    #[arg(long)]
    seed: Option<u64>,
}

impl InputArgs {
    fn source(&self) -> BodySource {
        match &self.bodies {
            Some(path) => BodySource::File(path.clone()),
            None => BodySource::Preset(self.preset.clone()),
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            duration_hours: self.duration_hours,
            step_hours: self.step_hours,
            method: self.method,
            seed: self.seed,
        }
    }

    fn prepare(&self) -> Result<Simulator, Box<dyn Error>> {
        Ok(cli::prepare(
            self.config.as_deref(),
            &self.source(),
            &self.overrides(),
        )?)
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Output directory for run artefacts.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Run(args) => run_simulation(&args),
        Command::Check(args) => check_inputs(&args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_inputs(args: &InputArgs) -> Result<(), Box<dyn Error>> {
    let simulator = args.prepare()?;
    let summary = cli::check_summary(&simulator)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_simulation(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let mut simulator = args.input.prepare()?;
    let steps = simulator.config().steps();
    let stride = (steps / 10).max(1);
    simulator.run(
        |index| {
            if index % stride == 0 {
                debug!(index, steps, "progress");
            }
        },
        || info!("integration complete"),
    )?;

    let report = simulator.report()?;
    let paths = cli::write_artifacts(&args.out, &report)?;
    info!(
        report = %paths.report.display(),
        report_hash = %report.report_hash,
        "artefacts written"
    );
    Ok(())
}
