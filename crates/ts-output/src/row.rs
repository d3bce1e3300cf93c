//! Flat row types written by output backends.
//!
//! Rows borrow their strings from the [`GeneratedObject`] they were built
//! from, so flattening an object allocates only the row vectors.

use ts_core::{Section, Timestamp};
use ts_fleet::GeneratedObject;

/// One object's constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectRow<'a> {
    pub object_id:    &'a str,
    pub speed:        f64,
    pub created_time: Timestamp,
    pub expire_time:  Timestamp,
    /// Lowercase hex.
    pub payload:      &'a str,
}

impl<'a> ObjectRow<'a> {
    pub fn from_object(object: &'a GeneratedObject) -> Self {
        Self {
            object_id:    object.id.as_str(),
            speed:        object.speed,
            created_time: object.created_time,
            expire_time:  object.expire_time,
            payload:      &object.payload,
        }
    }
}

/// One sampled state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow<'a> {
    pub object_id: &'a str,
    pub time:      Timestamp,
    pub x:         f64,
    pub y:         f64,
    /// `None` for the first state of every trajectory.
    pub heading:   Option<f64>,
}

impl<'a> TrajectoryRow<'a> {
    /// All states of `object`, in time order.
    pub fn from_object(object: &'a GeneratedObject) -> Vec<Self> {
        let object_id = object.id.as_str();
        object
            .trajectory
            .iter()
            .map(|s| Self {
                object_id,
                time:    s.time,
                x:       s.position.x,
                y:       s.position.y,
                heading: s.heading,
            })
            .collect()
    }
}

/// One stay inside a section: an (entry, exit) pair from the crossing ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingRow<'a> {
    pub section:   Section,
    pub object_id: &'a str,
    /// Position of the pair within this object's list for `section`.
    pub ordinal:   usize,
    pub start:     Timestamp,
    pub end:       Timestamp,
}

impl<'a> CrossingRow<'a> {
    /// All stays of `object`, grouped by section (A to D), each group in
    /// chronological order.
    pub fn from_object(object: &'a GeneratedObject) -> Vec<Self> {
        let object_id = object.id.as_str();
        object
            .ledger
            .sections()
            .flat_map(|section| {
                object
                    .ledger
                    .intervals(section)
                    .enumerate()
                    .map(move |(ordinal, iv)| Self {
                        section,
                        object_id,
                        ordinal,
                        start: iv.entry,
                        end:   iv.exit,
                    })
            })
            .collect()
    }

    /// `"<object id>_<ordinal>"`, unique within a section.
    pub fn id_index(&self) -> String {
        format!("{}_{}", self.object_id, self.ordinal)
    }
}
