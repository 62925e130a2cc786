//! `dp-demand` — seeded demand selection and trip collapse.
//!
//! # Pipeline
//!
//! ```text
//! for person in population (stable order):
//!   ① Filter    — skip persons outside the configured subpopulation
//!                 (no random draw is taken for them).
//!   ② Draw      — one uniform draw u ∈ [0, 1) per eligible person;
//!                 selected iff u < selection_probability.
//!   ③ Collapse  — for every plan of a selected person, each trip becomes
//!                 one leg (stage activities and sub-legs dropped).
//!   ④ Retag     — every leg of those plans gets mode = routing mode =
//!                 target mode.
//! ```
//!
//! The set of selected persons depends only on the seed, the population
//! order, the probability and the subpopulation tag, never on the target
//! mode.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::DemandConfig;
//! use dp_demand::transform_demand;
//!
//! let mut population = dp_population::load_population_csv(path)?;
//! transform_demand(&mut population, &DemandConfig::default())?;
//! ```

pub mod collapse;
pub mod error;
pub mod observer;
pub mod transform;


pub use collapse::trips_to_legs;
pub use error::{DemandError, DemandResult};
pub use observer::{DemandObserver, DemandSummary, NoopDemandObserver, SelectionRecorder};
pub use transform::{transform_demand, DemandTransformer};
