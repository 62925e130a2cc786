//! Seeded vehicle placement.

use std::path::Path;

use dp_core::{FleetConfig, ScenarioRng, VehicleId};
use dp_network::{Link, Network};
use rustc_hash::FxHashSet;

use crate::observer::{FleetObserver, FleetSummary, NoopFleetObserver};
use crate::sink::FleetSink;
use crate::{CsvFleetSink, FleetError, FleetResult, VehicleSpecification};

/// Place `config.vehicle_count` vehicles and hand them to `sink`.
///
/// 1. Filter: links allowing `config.link_mode`, in network order.
/// 2. Sample: vehicle `i` starts on a link drawn uniformly from that list,
///    with replacement (one draw from `rng` per vehicle).
/// 3. Construct: id `{id_prefix}{i}`, the configured capacity and window.
/// 4. Persist: the whole fleet is passed to `sink` in index order.
///
/// Configuration errors are returned before the sink is touched.  With zero
/// vehicles an empty eligible list is fine and an empty fleet is written.
pub fn synthesize_fleet<S, O>(
    sink: &mut S,
    network: &Network,
    config: &FleetConfig,
    rng: &mut ScenarioRng,
    observer: &mut O,
) -> FleetResult<FleetSummary>
where
    S: FleetSink + ?Sized,
    O: FleetObserver + ?Sized,
{
    config.validate()?;

    let eligible: Vec<&Link> = network.links_allowing(config.link_mode.as_str()).collect();
    observer.on_eligible_links(&config.link_mode, eligible.len());

    let mut vehicles = Vec::with_capacity(config.vehicle_count);
    for i in 0..config.vehicle_count {
        let Some(link) = rng.choose(&eligible) else {
            return Err(FleetError::NoEligibleLinks { mode: config.link_mode.clone() });
        };
        let vehicle = VehicleSpecification::new(
            VehicleId::indexed(&config.id_prefix, i),
            link.id.clone(),
            config.capacity,
            config.service_window,
        );
        observer.on_vehicle_placed(&vehicle);
        vehicles.push(vehicle);
    }

    sink.write_fleet(&vehicles)?;

    let distinct: FxHashSet<_> = vehicles.iter().map(|v| &v.start_link).collect();
    let summary = FleetSummary {
        vehicles:             vehicles.len(),
        eligible_links:       eligible.len(),
        distinct_start_links: distinct.len(),
    };
    observer.on_fleet_end(&summary);
    Ok(summary)
}

/// Synthesize with a fresh generator seeded from `config.seed` and write the
/// fleet atomically to the CSV file at `path`.
pub fn write_fleet(path: &Path, network: &Network, config: &FleetConfig) -> FleetResult<FleetSummary> {
    let mut sink = CsvFleetSink::new(path);
    let mut rng = ScenarioRng::new(config.seed);
    synthesize_fleet(&mut sink, network, config, &mut rng, &mut NoopFleetObserver)
}
