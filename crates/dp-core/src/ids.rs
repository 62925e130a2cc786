//! Strongly typed string identifiers.
//!
//! Scenario files name persons, links, nodes and vehicles with arbitrary
//! strings (`"10023_1"`, `"link_42"`, `"drt7"`), so unlike integer indices the
//! ids wrap a `String`.  Each kind gets its own type so a `LinkId` can never
//! be passed where a `PersonId` is expected.

use std::fmt;

/// Generate a typed ID wrapper around a `String`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identity of a person (agent) in the population.
    pub struct PersonId;
}

string_id! {
    /// Identity of a directed road-network link.
    pub struct LinkId;
}

string_id! {
    /// Identity of a road-network node.
    pub struct NodeId;
}

string_id! {
    /// Identity of a fleet vehicle.
    pub struct VehicleId;
}

impl VehicleId {
    /// `"{prefix}{index}"`, e.g. `VehicleId::indexed("drt", 7)` → `drt7`.
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}{index}"))
    }
}
