//! Trip collapse: every trip of a plan becomes one leg.

use dp_population::{Leg, Plan, PlanElement, TripDecomposer};

/// Replace every trip of `plan` with a single leg of the trip's main mode.
///
/// Stage activities and sub-legs are dropped.  The new leg carries the main
/// mode as both mode and routing mode and no timing; departure is left to the
/// preceding activity's end time.  Main activities and any elements outside
/// trips are kept as-is.
///
/// Returns the number of trips collapsed, which equals the number of legs the
/// plan has afterwards (for a well-formed plan).
pub fn trips_to_legs<D: TripDecomposer + ?Sized>(plan: &mut Plan, decomposer: &D) -> usize {
    // (first element index, destination index, replacement leg)
    let spans: Vec<(usize, usize, Leg)> = decomposer
        .trips(plan)
        .iter()
        .map(|trip| {
            let main_mode = decomposer.main_mode(trip);
            let leg = Leg::new(main_mode.clone()).routed_as(main_mode);
            (trip.origin + 1, trip.destination, leg)
        })
        .collect();

    let collapsed = spans.len();
    if collapsed == 0 {
        return 0;
    }

    let old = std::mem::take(&mut plan.elements);
    let mut elements = Vec::with_capacity(old.len());
    let mut spans = spans.into_iter().peekable();

    for (i, element) in old.into_iter().enumerate() {
        match spans.peek() {
            Some(&(start, end, _)) if i >= start => {
                // Inside a trip: drop the element, emit the new leg once at
                // the last position of the span.
                if i + 1 == end {
                    if let Some((_, _, leg)) = spans.next() {
                        elements.push(PlanElement::Leg(leg));
                    }
                }
            }
            _ => elements.push(element),
        }
    }

    plan.elements = elements;
    collapsed
}
