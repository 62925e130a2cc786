//! The persisted vehicle record.

use dp_core::{LinkId, ServiceWindow, VehicleId};

/// One DRT vehicle as handed to the external simulation.
///
/// Created once per synthesis run and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSpecification {
    pub id:            VehicleId,
    pub start_link:    LinkId,
    /// Passenger seats.
    pub capacity:      u32,
    /// Seconds after midnight.
    pub service_begin: f64,
    /// Seconds after midnight; always greater than `service_begin`.
    pub service_end:   f64,
}

impl VehicleSpecification {
    pub fn new(id: VehicleId, start_link: LinkId, capacity: u32, window: ServiceWindow) -> Self {
        Self {
            id,
            start_link,
            capacity,
            service_begin: window.begin,
            service_end:   window.end,
        }
    }

    pub fn service_window(&self) -> ServiceWindow {
        ServiceWindow { begin: self.service_begin, end: self.service_end }
    }
}
