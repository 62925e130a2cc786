//! Observer trait for progress reporting during fleet synthesis.

use dp_core::Mode;

use crate::VehicleSpecification;

/// Counters reported once the fleet has been persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetSummary {
    /// Vehicles written.
    pub vehicles: usize,
    /// Links allowing the placement mode.
    pub eligible_links: usize,
    /// Distinct links hosting at least one vehicle.
    pub distinct_start_links: usize,
}

/// Callbacks invoked by [`synthesize_fleet`][crate::synthesize_fleet].
///
/// All methods have default no-op implementations.
pub trait FleetObserver {
    /// The eligible link list has been built; `count` may be zero.
    fn on_eligible_links(&mut self, _mode: &Mode, _count: usize) {}

    /// A vehicle has been placed.  Called in index order, before persisting.
    fn on_vehicle_placed(&mut self, _vehicle: &VehicleSpecification) {}

    /// Called once after the sink accepted the fleet.
    fn on_fleet_end(&mut self, _summary: &FleetSummary) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopFleetObserver;

impl FleetObserver for NoopFleetObserver {}
