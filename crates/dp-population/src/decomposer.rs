//! `TripDecomposer` — how a plan is cut into trips.
//!
//! Consumers that rewrite trips (the demand transformer) only call through
//! this trait, so scenarios with their own stage-activity conventions or
//! main-mode rules can plug in a custom implementation.

use dp_core::Mode;

use crate::{Activity, Plan, Trip};

/// Suffix marking stage activities, e.g. `"pt interaction"`.
pub const STAGE_SUFFIX: &str = " interaction";

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Splits plans into trips and identifies each trip's main mode.
///
/// # Contract
///
/// - Must be deterministic and side-effect free.
/// - `trips` returns trips in plan order and never overlapping.
pub trait TripDecomposer {
    /// `true` if `activity` only connects two legs of the same trip.
    fn is_stage_activity(&self, activity: &Activity) -> bool;

    /// The mode the trip as a whole is performed with.
    fn main_mode(&self, trip: &Trip<'_>) -> Mode;

    /// All trips of `plan`, i.e. every leg-carrying span between two
    /// consecutive main activities.
    fn trips<'p>(&self, plan: &'p Plan) -> Vec<Trip<'p>> {
        let mut trips = Vec::new();
        let mut origin: Option<usize> = None;

        for (i, element) in plan.elements.iter().enumerate() {
            let Some(activity) = element.as_activity() else {
                continue;
            };
            if self.is_stage_activity(activity) {
                continue;
            }
            if let Some(o) = origin {
                if let Some(trip) = Trip::new(plan, o, i) {
                    trips.push(trip);
                }
            }
            origin = Some(i);
        }
        trips
    }
}

// ── Default implementation ────────────────────────────────────────────────────

/// Treats activities ending in [`STAGE_SUFFIX`] as stages and takes the main
/// mode from the routing mode of the trip's legs.
///
/// The main mode is the first routing mode found on any leg of the trip;
/// trips whose legs carry no routing mode fall back to the execution mode of
/// the first leg.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageActivityDecomposer;

impl TripDecomposer for StageActivityDecomposer {
    #[inline]
    fn is_stage_activity(&self, activity: &Activity) -> bool {
        activity.kind.ends_with(STAGE_SUFFIX)
    }

    fn main_mode(&self, trip: &Trip<'_>) -> Mode {
        trip.legs()
            .find_map(|leg| leg.routing_mode.clone())
            .unwrap_or_else(|| trip.first_leg().mode.clone())
    }
}
