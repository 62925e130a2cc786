//! Transport mode labels.
//!
//! Modes are open-ended strings rather than an enum: a scenario can introduce
//! any service mode (`"drt"`, `"av"`, `"mymode"`) next to the standard ones,
//! and the labels must survive a round trip through scenario files unchanged.

use std::collections::BTreeSet;
use std::fmt;

/// Private vehicle.
pub const CAR: &str = "car";
/// On foot.
pub const WALK: &str = "walk";
/// Bicycle.
pub const BIKE: &str = "bike";
/// Scheduled public transit.
pub const PT: &str = "pt";
/// Demand-responsive transport.
pub const DRT: &str = "drt";

/// A transport mode label such as `"car"` or `"drt"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mode(String);

impl Mode {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if the label is empty (never a valid mode).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::new(CAR)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for Mode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Mode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ── ModeSet ───────────────────────────────────────────────────────────────────

/// The set of modes allowed on a network link.
///
/// Backed by a `BTreeSet` so `Display` output is sorted and stable.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeSet(BTreeSet<Mode>);

impl ModeSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse a comma-separated list (`"car,bike"`).  Whitespace around
    /// entries is trimmed and empty entries are ignored.
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(Mode::from)
            .collect()
    }

    pub fn insert(&mut self, mode: Mode) -> bool {
        self.0.insert(mode)
    }

    pub fn contains(&self, mode: &str) -> bool {
        self.0.iter().any(|m| m.as_str() == mode)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mode> {
        self.0.iter()
    }
}

impl FromIterator<Mode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(m.as_str())?;
        }
        Ok(())
    }
}
