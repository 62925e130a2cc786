//! Core plan types: `Activity`, `Leg`, `PlanElement`, `Plan` and `Trip`.
//!
//! # Trip model
//!
//! A plan alternates activities and legs:
//!
//! ```text
//! home ─walk─ pt interaction ─pt─ pt interaction ─walk─ work ─car─ home
//! └──────────────────── trip 1 ─────────────────────────┘└─ trip 2 ─┘
//! ```
//!
//! *Main* activities (`home`, `work`) delimit trips.  *Stage* activities
//! (`pt interaction`, …) only exist to connect the legs of one trip.  Which
//! activities count as stages is decided by a
//! [`TripDecomposer`](crate::TripDecomposer).

use dp_core::{LinkId, Mode};

// ── Activity ──────────────────────────────────────────────────────────────────

/// An activity performed at a location, or a stage between two legs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Activity type, e.g. `"home"`, `"work_3600"`, `"pt interaction"`.
    pub kind: String,
    pub link: Option<LinkId>,
    /// Planned end time in seconds after midnight; `None` for the last
    /// activity of the day.
    pub end_time: Option<f64>,
}

impl Activity {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), link: None, end_time: None }
    }

    pub fn at(mut self, link: impl Into<LinkId>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn ending(mut self, end_time: f64) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// One atomic movement between two activities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Mode the leg is executed with.
    pub mode: Mode,
    /// Mode the whole trip is routed and scored as (e.g. a `walk` access leg
    /// of a `pt` trip has routing mode `pt`).
    pub routing_mode: Option<Mode>,
    pub departure_time: Option<f64>,
    pub travel_time: Option<f64>,
}

impl Leg {
    pub fn new(mode: impl Into<Mode>) -> Self {
        Self { mode: mode.into(), routing_mode: None, departure_time: None, travel_time: None }
    }

    pub fn routed_as(mut self, routing_mode: impl Into<Mode>) -> Self {
        self.routing_mode = Some(routing_mode.into());
        self
    }

    pub fn departing(mut self, departure_time: f64) -> Self {
        self.departure_time = Some(departure_time);
        self
    }

    /// Overwrite both the execution and the routing mode.
    pub fn set_modes(&mut self, mode: &Mode) {
        self.mode = mode.clone();
        self.routing_mode = Some(mode.clone());
    }
}

impl From<&str> for Leg {
    fn from(mode: &str) -> Self {
        Leg::new(Mode::from(mode))
    }
}

// ── PlanElement ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanElement {
    Activity(Activity),
    Leg(Leg),
}

impl PlanElement {
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            PlanElement::Activity(a) => Some(a),
            PlanElement::Leg(_) => None,
        }
    }

    pub fn as_leg(&self) -> Option<&Leg> {
        match self {
            PlanElement::Leg(l) => Some(l),
            PlanElement::Activity(_) => None,
        }
    }
}

impl From<Activity> for PlanElement {
    fn from(a: Activity) -> Self {
        PlanElement::Activity(a)
    }
}

impl From<Leg> for PlanElement {
    fn from(l: Leg) -> Self {
        PlanElement::Leg(l)
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// One daily plan of a person: activities and legs in execution order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub elements: Vec<PlanElement>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element (builder style).
    pub fn with(mut self, element: impl Into<PlanElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn push(&mut self, element: impl Into<PlanElement>) {
        self.elements.push(element.into());
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.elements.iter().filter_map(PlanElement::as_leg)
    }

    pub fn legs_mut(&mut self) -> impl Iterator<Item = &mut Leg> {
        self.elements.iter_mut().filter_map(|e| match e {
            PlanElement::Leg(l) => Some(l),
            PlanElement::Activity(_) => None,
        })
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.elements.iter().filter_map(PlanElement::as_activity)
    }
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// A borrowed view of one trip: the elements strictly between two
/// consecutive main activities.
///
/// A `Trip` always contains at least one leg; spans of stage activities with
/// no leg are not trips.
#[derive(Clone, Copy, Debug)]
pub struct Trip<'p> {
    /// Index of the origin main activity in `Plan::elements`.
    pub origin: usize,
    /// Index of the destination main activity in `Plan::elements`.
    pub destination: usize,
    elements: &'p [PlanElement],
    first_leg: &'p Leg,
}

impl<'p> Trip<'p> {
    /// Build a trip over `plan.elements[origin + 1 .. destination]`.
    ///
    /// Returns `None` if the span holds no leg or the indices are out of
    /// order or out of bounds.
    pub fn new(plan: &'p Plan, origin: usize, destination: usize) -> Option<Self> {
        if destination <= origin || destination >= plan.elements.len() {
            return None;
        }
        let elements = &plan.elements[origin + 1..destination];
        let first_leg = elements.iter().find_map(PlanElement::as_leg)?;
        Some(Self { origin, destination, elements, first_leg })
    }

    /// All elements between origin and destination (legs and stages).
    pub fn elements(&self) -> &'p [PlanElement] {
        self.elements
    }

    pub fn legs(&self) -> impl Iterator<Item = &'p Leg> + use<'p> {
        let elements = self.elements;
        elements.iter().filter_map(PlanElement::as_leg)
    }

    pub fn stage_activities(&self) -> impl Iterator<Item = &'p Activity> + use<'p> {
        let elements = self.elements;
        elements.iter().filter_map(PlanElement::as_activity)
    }

    pub fn first_leg(&self) -> &'p Leg {
        self.first_leg
    }

    pub fn leg_count(&self) -> usize {
        self.legs().count()
    }
}
