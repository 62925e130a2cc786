//! Vehicle service windows.
//!
//! Times are seconds after midnight of the simulated day, stored as `f64` to
//! match the numeric time format of scenario files.  Windows may extend past
//! 24 h; the default operating day ends at 30:00:00.

use std::fmt;

use crate::PrepError;

/// Seconds in one hour.
pub const HOUR_SECS: f64 = 3_600.0;

/// `[begin, end)` interval during which a vehicle is in service.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceWindow {
    pub begin: f64,
    pub end: f64,
}

impl ServiceWindow {
    /// The default operating day: 00:00 to 30:00.
    pub const DEFAULT: ServiceWindow = ServiceWindow { begin: 0.0, end: 30.0 * HOUR_SECS };

    /// Construct a validated window.
    pub fn new(begin: f64, end: f64) -> Result<Self, PrepError> {
        let w = Self { begin, end };
        w.validate()?;
        Ok(w)
    }

    /// Both bounds finite and non-negative, and `begin < end`.
    pub fn validate(&self) -> Result<(), PrepError> {
        if !self.begin.is_finite() || !self.end.is_finite() {
            return Err(PrepError::Config(format!(
                "service window bounds must be finite, got [{}, {}]",
                self.begin, self.end
            )));
        }
        if self.begin < 0.0 {
            return Err(PrepError::Config(format!(
                "service window begin must be non-negative, got {}",
                self.begin
            )));
        }
        if self.begin >= self.end {
            return Err(PrepError::Config(format!(
                "service window begin ({}) must be before end ({})",
                self.begin, self.end
            )));
        }
        Ok(())
    }

    /// Window length in seconds.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.end - self.begin
    }
}

impl Default for ServiceWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ServiceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", hms(self.begin), hms(self.end))
    }
}

/// Format seconds as `HH:MM:SS`; hours are not wrapped at 24.
pub fn hms(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{:02}:{:02}:{:02}", total / 3_600, (total % 3_600) / 60, total % 60)
}
