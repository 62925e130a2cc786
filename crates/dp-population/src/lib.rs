//! `dp-population` — persons, plans, trip decomposition and CSV plan files.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`plan`]       | `Activity`, `Leg`, `PlanElement`, `Plan`, `Trip`          |
//! | [`population`] | `Person`, `Population`, `PopulationSource` trait          |
//! | [`decomposer`] | `TripDecomposer` trait, `StageActivityDecomposer`         |
//! | [`loader`]     | `load_population_csv`, `load_population_reader`           |
//! | [`writer`]     | `write_population_csv`, `write_population_writer`         |
//! | [`error`]      | `PopulationError`, `PopulationResult<T>`                  |
//!
//! Persons are iterated in insertion (file) order everywhere; seeded
//! selection downstream relies on that order being stable.

pub mod decomposer;
pub mod error;
pub mod loader;
pub mod plan;
pub mod population;
pub mod writer;


pub use decomposer::{StageActivityDecomposer, TripDecomposer, STAGE_SUFFIX};
pub use error::{PopulationError, PopulationResult};
pub use loader::{load_population_csv, load_population_reader};
pub use plan::{Activity, Leg, Plan, PlanElement, Trip};
pub use population::{Person, Population, PopulationSource};
pub use writer::{write_population_csv, write_population_writer};
