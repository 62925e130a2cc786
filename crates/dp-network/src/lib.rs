//! `dp-network` — road network links and mode-eligibility queries.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network`, `Link`, `NetworkBuilder`                         |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`                   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Link`.                 |

pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{Link, Network, NetworkBuilder};
