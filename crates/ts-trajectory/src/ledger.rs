//! Per-section entry/exit timestamps derived from a trajectory.
//!
//! # Layout
//!
//! For every section the object visited, the ledger holds a flat list
//!
//! ```text
//!   [entry_0, exit_0, entry_1, exit_1, …]
//! ```
//!
//! with `entry_i <= exit_i`.  On a crossing between two samples the old
//! section's exit is stamped one sampling period *before* the new section's
//! entry (the last instant known to be in the old section), so intervals of
//! different sections never share a timestamp.  The first entry of the whole
//! ledger is the trajectory's start time and the last exit is its end time.

use std::collections::BTreeMap;

use ts_core::{Section, Timestamp};

use crate::{TrajectoryError, TrajectoryResult};

/// One closed stay `[entry, exit]` of an object inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionInterval {
    pub section: Section,
    pub entry:   Timestamp,
    pub exit:    Timestamp,
}

impl SectionInterval {
    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        (self.entry..=self.exit).contains(&t)
    }

    /// `true` if the stay shares at least one instant with `[start, end]`.
    #[inline]
    pub fn overlaps(&self, start: Timestamp, end: Timestamp) -> bool {
        self.entry <= end && start <= self.exit
    }

    /// The intersection with `[start, end]`, if non-empty.
    pub fn clip(&self, start: Timestamp, end: Timestamp) -> Option<(Timestamp, Timestamp)> {
        let lo = self.entry.max(start);
        let hi = self.exit.min(end);
        (lo <= hi).then_some((lo, hi))
    }
}

/// Section → ordered entry/exit timestamps, for one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrossingLedger {
    times: BTreeMap<Section, Vec<Timestamp>>,
}

impl CrossingLedger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one raw timestamp to `section`'s list.
    #[inline]
    pub(crate) fn push(&mut self, section: Section, t: Timestamp) {
        self.times.entry(section).or_default().push(t);
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Raw `[entry, exit, …]` list for `section` (empty if never visited).
    pub fn timestamps(&self, section: Section) -> &[Timestamp] {
        self.times.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sections the object visited, in label order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.times.keys().copied()
    }

    pub fn as_map(&self) -> &BTreeMap<Section, Vec<Timestamp>> {
        &self.times
    }

    pub fn into_map(self) -> BTreeMap<Section, Vec<Timestamp>> {
        self.times
    }

    /// Stays inside `section`, in chronological order.
    pub fn intervals(&self, section: Section) -> impl Iterator<Item = SectionInterval> + '_ {
        self.timestamps(section)
            .chunks_exact(2)
            .map(move |pair| SectionInterval { section, entry: pair[0], exit: pair[1] })
    }

    /// Every stay in every section, ordered by entry time.
    pub fn all_intervals(&self) -> Vec<SectionInterval> {
        let mut all: Vec<SectionInterval> =
            self.sections().flat_map(|s| self.intervals(s)).collect();
        all.sort_by_key(|iv| iv.entry);
        all
    }

    /// Total number of stays across all sections.
    pub fn interval_count(&self) -> usize {
        self.times.values().map(|v| v.len() / 2).sum()
    }

    /// Stays in `section` that share an instant with `[start, end]`.
    pub fn overlapping(
        &self,
        section: Section,
        start:   Timestamp,
        end:     Timestamp,
    ) -> impl Iterator<Item = SectionInterval> + '_ {
        self.intervals(section).filter(move |iv| iv.overlaps(start, end))
    }

    /// Which section the object was recorded in at `t`.
    ///
    /// Returns `None` for instants outside the trajectory and for the
    /// one-period gap that follows every crossing.
    pub fn section_at(&self, t: Timestamp) -> Option<Section> {
        self.sections()
            .find(|&s| self.intervals(s).any(|iv| iv.contains(t)))
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check the structural invariants against the owning trajectory's
    /// `[start_time, end_time]`.
    pub fn validate(&self, start_time: Timestamp, end_time: Timestamp) -> TrajectoryResult<()> {
        for (section, list) in &self.times {
            if list.len() % 2 != 0 {
                return Err(TrajectoryError::InvariantViolation(format!(
                    "section {section} has an odd number ({}) of crossing timestamps",
                    list.len()
                )));
            }
            if let Some(pair) = list.chunks_exact(2).find(|pair| pair[0] > pair[1]) {
                return Err(TrajectoryError::InvariantViolation(format!(
                    "section {section} has entry {} after exit {}",
                    pair[0], pair[1]
                )));
            }
        }

        let first_entry = self.times.values().filter_map(|v| v.first()).min().copied();
        let last_exit = self.times.values().filter_map(|v| v.last()).max().copied();
        if first_entry != Some(start_time) {
            return Err(TrajectoryError::InvariantViolation(format!(
                "first recorded entry {first_entry:?} differs from start time {start_time}"
            )));
        }
        if last_exit != Some(end_time) {
            return Err(TrajectoryError::InvariantViolation(format!(
                "last recorded exit {last_exit:?} differs from end time {end_time}"
            )));
        }
        Ok(())
    }
}
