//! prepare — builds the DRT inputs of a scenario.
//!
//! 1. Loads a population CSV, converts a seeded random share of the
//!    `person` subpopulation to the target mode and writes it back.
//! 2. Loads a network CSV and writes a fleet descriptor with N vehicles on
//!    links allowing the placement mode.
//!
//! Both steps draw from their own generator, seeded from the scenario config,
//! so either step can be re-run alone with identical output.
//!
//! ```text
//! prepare --config data/scenario.json \
//!         --population data/population.csv --network data/network.csv \
//!         --population-out output/population_drt.csv --fleet-out output/fleet.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use dp_core::{DemandConfig, FleetConfig, Mode, PersonId, ScenarioRng};
use dp_demand::{DemandObserver, DemandSummary, DemandTransformer};
use dp_fleet::{synthesize_fleet, CsvFleetSink, FleetObserver, FleetSink, FleetSummary, VehicleSpecification};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum FleetFormat {
    #[default]
    Csv,
    #[cfg(feature = "sqlite")]
    Sqlite,
    #[cfg(feature = "parquet")]
    Parquet,
}

#[derive(Debug, Parser)]
#[command(version, about = "Prepare DRT demand and fleet inputs for a scenario")]
struct Args {
    /// JSON file with `demand` and `fleet` sections; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Population plan file (CSV).
    #[arg(long)]
    population: PathBuf,

    /// Network link table (CSV).
    #[arg(long)]
    network: PathBuf,

    #[arg(long, default_value = "output/population_drt.csv")]
    population_out: PathBuf,

    #[arg(long, default_value = "output/fleet.csv")]
    fleet_out: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    fleet_format: FleetFormat,

    /// Print one line per selected person and placed vehicle.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioConfig {
    demand: DemandConfig,
    fleet:  FleetConfig,
}

fn load_config(path: Option<&Path>) -> Result<ScenarioConfig> {
    let Some(path) = path else {
        return Ok(ScenarioConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}

/// Every sink defers touching `path` until the fleet is written.
fn fleet_sink(format: FleetFormat, path: &Path) -> Box<dyn FleetSink> {
    match format {
        FleetFormat::Csv => Box::new(CsvFleetSink::new(path)),
        #[cfg(feature = "sqlite")]
        FleetFormat::Sqlite => Box::new(dp_fleet::SqliteFleetSink::new(path)),
        #[cfg(feature = "parquet")]
        FleetFormat::Parquet => Box::new(dp_fleet::ParquetFleetSink::new(path)),
    }
}

// ── Console reporting ─────────────────────────────────────────────────────────

struct ConsoleReporter {
    verbose: bool,
}

impl DemandObserver for ConsoleReporter {
    fn on_person_selected(&mut self, person: &PersonId, draw: f64) {
        if self.verbose {
            println!("  selected {person:<16} (u = {draw:.5})");
        }
    }

    fn on_demand_end(&mut self, s: &DemandSummary) {
        println!(
            "Demand: {} persons, {} eligible, {} selected, {} plans / {} trips rewritten",
            s.persons, s.eligible, s.selected, s.plans_rewritten, s.trips_collapsed
        );
    }
}

impl FleetObserver for ConsoleReporter {
    fn on_eligible_links(&mut self, mode: &Mode, count: usize) {
        println!("Fleet: {count} links allow \"{mode}\"");
    }

    fn on_vehicle_placed(&mut self, v: &VehicleSpecification) {
        if self.verbose {
            println!("  {:<10} on {:<16} seats {}", v.id, v.start_link, v.capacity);
        }
    }

    fn on_fleet_end(&mut self, s: &FleetSummary) {
        println!("Fleet: {} vehicles on {} distinct links", s.vehicles, s.distinct_start_links);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario = load_config(args.config.as_deref())?;
    let mut reporter = ConsoleReporter { verbose: args.verbose };

    println!("=== prepare — DRT scenario inputs ===");
    println!(
        "Demand: mode \"{}\", p = {}, subpopulation \"{}\", seed {}",
        scenario.demand.target_mode,
        scenario.demand.selection_probability,
        scenario.demand.subpopulation,
        scenario.demand.seed,
    );
    println!(
        "Fleet:  {} vehicles, {} seats, window {}, seed {}",
        scenario.fleet.vehicle_count,
        scenario.fleet.capacity,
        scenario.fleet.service_window,
        scenario.fleet.seed,
    );
    println!();

    // 1. Demand.
    let t0 = Instant::now();
    let mut population = dp_population::load_population_csv(&args.population)
        .with_context(|| format!("loading {}", args.population.display()))?;
    println!("Loaded {} persons from {}", population.len(), args.population.display());

    let transformer = DemandTransformer::new(scenario.demand)?;
    let mut rng = ScenarioRng::new(transformer.config().seed);
    transformer.run(&mut population, &mut rng, &mut reporter);

    ensure_parent(&args.population_out)?;
    dp_population::write_population_csv(&args.population_out, &population)?;
    println!("Wrote {} ({:.3} s)", args.population_out.display(), t0.elapsed().as_secs_f64());
    println!();

    // 2. Fleet.
    let t1 = Instant::now();
    let network = dp_network::load_network_csv(&args.network)
        .with_context(|| format!("loading {}", args.network.display()))?;
    println!(
        "Road network: {} nodes, {} links",
        network.node_count(),
        network.link_count()
    );

    ensure_parent(&args.fleet_out)?;
    let mut sink = fleet_sink(args.fleet_format, &args.fleet_out);
    let mut rng = ScenarioRng::new(scenario.fleet.seed);
    synthesize_fleet(sink.as_mut(), &network, &scenario.fleet, &mut rng, &mut reporter)?;
    println!("Wrote {} ({:.3} s)", args.fleet_out.display(), t1.elapsed().as_secs_f64());

    Ok(())
}
