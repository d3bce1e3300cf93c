//! Simulation time model.
//!
//! All timestamps are integer milliseconds since the Unix epoch, so sample
//! arithmetic is exact.  Trajectories advance in fixed steps of
//! [`SAMPLING_PERIOD_MS`]; the corresponding duration in seconds,
//! [`SAMPLING_PERIOD_SECS`], converts speed into per-sample distance.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Real-time spacing between consecutive trajectory states.
pub const SAMPLING_PERIOD_MS: i64 = 150;

/// [`SAMPLING_PERIOD_MS`] expressed in seconds.
pub const SAMPLING_PERIOD_SECS: f64 = 0.15;

pub const MS_PER_SEC: i64 = 1_000;
pub const MS_PER_HOUR: i64 = 3_600 * MS_PER_SEC;

// ── SimWindow ─────────────────────────────────────────────────────────────────

/// A closed simulation horizon `[start, end]` in milliseconds, with the
/// additional guarantee that `end > start`.  A trajectory may emit its last
/// state exactly at `end`.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimWindow {
    pub start: Timestamp,
    pub end:   Timestamp,
}

impl SimWindow {
    /// Construct a window, rejecting empty or inverted ranges.
    pub fn new(start: Timestamp, end: Timestamp) -> CoreResult<Self> {
        if end <= start {
            return Err(CoreError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window of `duration_ms` beginning at `start`.  Fails if the end would
    /// fall past the last representable timestamp.
    pub fn starting_at(start: Timestamp, duration_ms: i64) -> CoreResult<Self> {
        let end = start
            .checked_add(duration_ms)
            .ok_or(CoreError::WindowOverflow { start, duration_ms })?;
        Self::new(start, end)
    }

    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        (self.start..=self.end).contains(&t)
    }
}

impl fmt::Display for SimWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.duration_ms() as f64 / MS_PER_HOUR as f64;
        write!(f, "[{}, {}] ({hours:.2} h)", self.start, self.end)
    }
}
