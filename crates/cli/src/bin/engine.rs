use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use rocket_engine_studio::catalog::Catalog;
use rocket_engine_studio::config::{InjectorType, OperatingParameters, load_operating_parameters};
use rocket_engine_studio::export::{self, json::Metadata, plot::PlotOptions};
use rocket_engine_studio::session::{EngineSession, compare};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Rocket engine performance analysis with synthetic test data"
)]
struct Cli {
    /// Directory holding propellants/materials/cycles/nozzles tables (defaults to built-ins)
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse one operating point and print an engineering summary
    Analyze(AnalyzeArgs),
    /// List catalog entries
    Catalog {
        #[arg(value_enum)]
        table: Table,
    },
    /// Analyse several parameter files and print one line per configuration
    Compare {
        /// Parameter file (TOML or YAML); repeat for each configuration
        #[arg(long = "params", required = true)]
        params: Vec<PathBuf>,
    },
}

#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Base parameter file (TOML or YAML); individual flags override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Propellant combination (catalog key, case-insensitive)
    #[arg(long)]
    propellant: Option<String>,

    /// Target thrust in newtons
    #[arg(long)]
    thrust: Option<f64>,

    /// Chamber pressure in bar
    #[arg(long)]
    pc: Option<f64>,

    /// Oxidizer-to-fuel mass ratio
    #[arg(long)]
    of: Option<f64>,

    /// Burn duration in seconds
    #[arg(long)]
    burn_time: Option<f64>,

    /// Nozzle area ratio
    #[arg(long)]
    expansion: Option<f64>,

    /// Chamber wall material (catalog key)
    #[arg(long)]
    material: Option<String>,

    /// Injector element type (coaxial, like-on-like, impinging, swirl)
    #[arg(long)]
    injector: Option<String>,

    /// Engine cycle (catalog key)
    #[arg(long)]
    cycle: Option<String>,

    /// Nozzle design (catalog key)
    #[arg(long)]
    nozzle: Option<String>,

    /// Seed for the synthetic measurement noise
    #[arg(long)]
    seed: Option<u64>,

    /// Write the results bundle as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the time series as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Render thrust and pressure traces to a PNG
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Skip the text summary on stdout
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Table {
    Propellants,
    Materials,
    Cycles,
    Nozzles,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog_dir.as_deref())?;

    match cli.command {
        Command::Analyze(args) => analyze(&catalog, args),
        Command::Catalog { table } => {
            list_catalog(&catalog, table);
            Ok(())
        }
        Command::Compare { params } => compare_files(&catalog, &params),
    }
}

fn load_catalog(dir: Option<&Path>) -> anyhow::Result<Catalog> {
    let catalog = match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading catalog directory");
            Catalog::load_dir(dir)?
        }
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

fn analyze(catalog: &Catalog, args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut params = match &args.params {
        Some(path) => load_operating_parameters(path)?,
        None => OperatingParameters::default(),
    };
    if let Some(v) = args.propellant {
        params.propellant = v;
    }
    if let Some(v) = args.thrust {
        params.thrust_n = v;
    }
    if let Some(v) = args.pc {
        params.chamber_pressure_bar = v;
    }
    if let Some(v) = args.of {
        params.of_ratio = v;
    }
    if let Some(v) = args.burn_time {
        params.burn_time_s = v;
    }
    if let Some(v) = args.expansion {
        params.expansion_ratio = v;
    }
    if let Some(v) = args.material {
        params.material = v;
    }
    if let Some(v) = args.injector {
        params.injector = InjectorType::from(v);
    }
    if let Some(v) = args.cycle {
        params.cycle = v;
    }
    if let Some(v) = args.nozzle {
        params.nozzle = v;
    }
    if let Some(v) = args.seed {
        params.noise_seed = v;
    }

    let session = EngineSession::new(catalog, params)?;

    if !args.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        export::report::write_summary(&mut out, &session)?;
    }

    if let Some(path) = &args.json {
        let meta = Metadata {
            generator: "engine",
            version: rocket_engine_studio::version(),
            params: session.params(),
        };
        export::json::write_results(path, &session.results(), &meta)?;
        info!(path = %path.display(), "wrote JSON results");
    }

    if let Some(path) = &args.csv {
        let writer = export::writer_for_path(path)?;
        export::csv::write_series(writer, session.series())?;
        info!(path = %path.display(), "wrote CSV series");
    }

    if let Some(path) = &args.plot {
        let options = PlotOptions {
            title: format!("{} test record", session.propellant().name),
            ..PlotOptions::default()
        };
        export::plot::render_series(path, session.series(), &options)?;
        info!(path = %path.display(), "rendered plot");
    }

    Ok(())
}

fn list_catalog(catalog: &Catalog, table: Table) {
    match table {
        Table::Propellants => {
            for p in catalog.propellants() {
                println!(
                    "{:<24} {:<14} O/F {:>4.1}  c* {:>5.0} m/s",
                    p.name,
                    p.family.label(),
                    p.optimal_of,
                    p.c_star
                );
            }
        }
        Table::Materials => {
            for m in catalog.materials() {
                println!(
                    "{:<24} yield {:>6.0} MPa  max {:>5.0} K",
                    m.name,
                    m.yield_strength_pa / 1.0e6,
                    m.max_temp_k
                );
            }
        }
        Table::Cycles => {
            for c in catalog.cycles() {
                println!("{:<24} efficiency {:.2}  {}", c.name, c.efficiency, c.examples);
            }
        }
        Table::Nozzles => {
            for n in catalog.nozzles() {
                println!(
                    "{:<28} divergence {:.3}  {}",
                    n.name, n.divergence_efficiency, n.application
                );
            }
        }
    }
}

fn compare_files(catalog: &Catalog, paths: &[PathBuf]) -> anyhow::Result<()> {
    let params = paths
        .iter()
        .map(load_operating_parameters)
        .collect::<Result<Vec<_>, _>>()?;

    println!(
        "{:<28} {:>10} {:>9} {:>9} {:>9}  grade",
        "configuration", "thrust kN", "Isp s", "dF %", "dIsp %"
    );
    for (path, result) in paths.iter().zip(compare(catalog, &params)) {
        let session = result?;
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("params");
        let bundle = session.results();
        println!(
            "{:<28} {:>10.2} {:>9.1} {:>+9.2} {:>+9.2}  {}",
            label,
            bundle.performance.experimental_thrust_kn,
            bundle.performance.experimental_isp_s,
            bundle.deviations.thrust,
            bundle.deviations.isp,
            bundle.assessment.grade
        );
    }
    Ok(())
}
