//! Observer trait for progress reporting during the demand transform.

use dp_core::PersonId;
use dp_population::Person;

/// Counters reported once the transform has visited every person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemandSummary {
    /// Persons visited.
    pub persons: usize,
    /// Persons carrying the configured subpopulation tag (one draw each).
    pub eligible: usize,
    /// Eligible persons whose draw fell below the selection probability.
    pub selected: usize,
    /// Plans of selected persons that were rewritten.
    pub plans_rewritten: usize,
    /// Trips collapsed into single legs, summed over all rewritten plans.
    pub trips_collapsed: usize,
}

/// Callbacks invoked by [`DemandTransformer::run`][crate::DemandTransformer::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait DemandObserver {
    /// The person is outside the configured subpopulation.  No draw was taken.
    fn on_person_skipped(&mut self, _person: &Person) {}

    /// The person was selected; `draw` is the uniform value that selected it.
    fn on_person_selected(&mut self, _person: &PersonId, _draw: f64) {}

    /// One plan of a selected person was collapsed.
    fn on_plan_collapsed(&mut self, _person: &PersonId, _trips: usize) {}

    /// Called once after the last person.
    fn on_demand_end(&mut self, _summary: &DemandSummary) {}
}

/// A [`DemandObserver`] that does nothing.
pub struct NoopDemandObserver;

impl DemandObserver for NoopDemandObserver {}

/// Records the ids of selected persons, in selection order.
#[derive(Debug, Default)]
pub struct SelectionRecorder {
    pub selected: Vec<PersonId>,
}

impl DemandObserver for SelectionRecorder {
    fn on_person_selected(&mut self, person: &PersonId, _draw: f64) {
        self.selected.push(person.clone());
    }
}
