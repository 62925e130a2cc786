//! Pipeline configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to `dp_demand::transform_demand` and
//! `dp_fleet::synthesize_fleet`.  Missing fields fall back to the defaults
//! below, which reproduce the reference Berlin DRT setup.

use crate::mode::{CAR, DRT};
use crate::{Mode, PrepError, ServiceWindow};

/// Subpopulation tag of regular residents.
pub const DEFAULT_SUBPOPULATION: &str = "person";

// ── DemandConfig ──────────────────────────────────────────────────────────────

/// Options for the demand selector/transformer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemandConfig {
    /// Mode assigned to every leg of a selected person.
    pub target_mode: Mode,

    /// Probability in `[0, 1]` that an eligible person is selected.
    pub selection_probability: f64,

    /// Only persons carrying this subpopulation tag are eligible.
    pub subpopulation: String,

    /// Seed of the selection stream.  The same seed always selects the same
    /// persons for the same population order.
    pub seed: u64,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            target_mode:           Mode::new(DRT),
            selection_probability: 0.01,
            subpopulation:         DEFAULT_SUBPOPULATION.to_owned(),
            seed:                  0,
        }
    }
}

impl DemandConfig {
    pub fn validate(&self) -> Result<(), PrepError> {
        if self.target_mode.is_empty() {
            return Err(PrepError::Config("target mode must not be empty".into()));
        }
        // Written so that NaN fails too.
        if !(0.0..=1.0).contains(&self.selection_probability) {
            return Err(PrepError::Config(format!(
                "selection probability must be in [0, 1], got {}",
                self.selection_probability
            )));
        }
        Ok(())
    }
}

// ── FleetConfig ───────────────────────────────────────────────────────────────

/// Options for the fleet synthesizer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Number of vehicles N.
    pub vehicle_count: usize,

    /// Only links allowing this mode can host a vehicle's start position.
    pub link_mode: Mode,

    /// Passenger seats per vehicle.
    pub capacity: u32,

    pub service_window: ServiceWindow,

    /// Vehicle ids are `{id_prefix}{index}`.
    pub id_prefix: String,

    /// Seed of the placement stream.
    pub seed: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            vehicle_count:  100,
            link_mode:      Mode::new(CAR),
            capacity:       4,
            service_window: ServiceWindow::DEFAULT,
            id_prefix:      DRT.to_owned(),
            seed:           0,
        }
    }
}

impl FleetConfig {
    pub fn validate(&self) -> Result<(), PrepError> {
        if self.link_mode.is_empty() {
            return Err(PrepError::Config("link mode must not be empty".into()));
        }
        if self.capacity == 0 {
            return Err(PrepError::Config("vehicle capacity must be positive".into()));
        }
        self.service_window.validate()
    }
}
