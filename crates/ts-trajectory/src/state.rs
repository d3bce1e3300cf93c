//! Time-stamped object states and the immutable trajectory container.

use std::f64::consts::TAU;

use ts_core::{Point, SAMPLING_PERIOD_MS, Section, Timestamp, classify};

use crate::{TrajectoryError, TrajectoryResult};

/// One emitted sample of an object's motion.
///
/// `heading` is `None` only for the first state of a trajectory: a heading
/// needs a directional step, and the origin has none.  Every later state
/// carries the angle of its displacement from the previous state, in
/// `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub time:     Timestamp,
    pub position: Point,
    pub heading:  Option<f64>,
}

impl State {
    /// The heading-less state that opens every trajectory.
    #[inline]
    pub fn origin(time: Timestamp, position: Point) -> Self {
        Self { time, position, heading: None }
    }

    #[inline]
    pub fn section(&self) -> Section {
        classify(self.position)
    }
}

/// An ordered sequence of states for one object, spaced exactly
/// [`SAMPLING_PERIOD_MS`] apart.
///
/// Never empty: the first state is always the origin state.  Immutable once
/// built; ownership passes to whichever consumer persists or queries it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    /// Only the generator builds trajectories from raw parts; it upholds the
    /// invariants itself.
    pub(crate) fn from_generated(states: Vec<State>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// Rebuild a trajectory from stored states (e.g. read back from disk),
    /// checking every structural invariant.
    pub fn from_states(states: Vec<State>) -> TrajectoryResult<Self> {
        let Some(first) = states.first() else {
            return Err(TrajectoryError::InvariantViolation("trajectory has no states".into()));
        };
        if first.heading.is_some() {
            return Err(TrajectoryError::InvariantViolation(
                "first state must not carry a heading".into(),
            ));
        }
        for pair in states.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.time - prev.time != SAMPLING_PERIOD_MS {
                return Err(TrajectoryError::InvariantViolation(format!(
                    "states at {} and {} are not {SAMPLING_PERIOD_MS} ms apart",
                    prev.time, next.time
                )));
            }
            match next.heading {
                Some(h) if (0.0..TAU).contains(&h) => {}
                other => {
                    return Err(TrajectoryError::InvariantViolation(format!(
                        "state at {} has heading {other:?} outside [0, 2π)",
                        next.time
                    )));
                }
            }
        }
        Ok(Self { states })
    }

    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    #[inline]
    pub fn into_states(self) -> Vec<State> {
        self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn first(&self) -> &State {
        &self.states[0]
    }

    #[inline]
    pub fn last(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    #[inline]
    pub fn start_time(&self) -> Timestamp {
        self.first().time
    }

    /// Time of the last state; the object "expires" here.
    #[inline]
    pub fn end_time(&self) -> Timestamp {
        self.last().time
    }

    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_time() - self.start_time()
    }

    /// States with `start <= time <= end`, found by binary search.
    pub fn window(&self, start: Timestamp, end: Timestamp) -> &[State] {
        let lo = self.states.partition_point(|s| s.time < start);
        let hi = self.states.partition_point(|s| s.time <= end);
        if lo >= hi {
            return &[];
        }
        &self.states[lo..hi]
    }

    /// The state emitted exactly at `time`, if any.
    pub fn state_at(&self, time: Timestamp) -> Option<&State> {
        self.states
            .binary_search_by_key(&time, |s| s.time)
            .ok()
            .map(|i| &self.states[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
