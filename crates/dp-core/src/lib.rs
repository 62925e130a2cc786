//! `dp-core` — foundational types for the `drt_prep` scenario preparation
//! tools.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `PersonId`, `LinkId`, `NodeId`, `VehicleId`               |
//! | [`mode`]    | `Mode` label, `ModeSet`                                   |
//! | [`rng`]     | `ScenarioRng` (one per pipeline invocation)               |
//! | [`window`]  | `ServiceWindow` (seconds since midnight)                  |
//! | [`config`]  | `DemandConfig`, `FleetConfig`                             |
//! | [`error`]   | `PrepError`, `PrepResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, modes and configs.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod mode;
pub mod rng;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DemandConfig, FleetConfig};
pub use error::{PrepError, PrepResult};
pub use ids::{LinkId, NodeId, PersonId, VehicleId};
pub use mode::{Mode, ModeSet};
pub use rng::ScenarioRng;
pub use window::ServiceWindow;
