//! Section traffic: which objects were inside a section during a time
//! window, and where exactly.
//!
//! Answered from the crossing ledgers first, so only the matching slices of
//! each trajectory are touched.

use std::cmp::Reverse;

use ts_core::{ObjectId, Section, Timestamp};
use ts_trajectory::State;

use crate::GeneratedObject;

/// The portion of one object's trajectory spent inside a section during a
/// queried window.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTraffic {
    pub id:           ObjectId,
    pub speed:        f64,
    pub created_time: Timestamp,
    pub expire_time:  Timestamp,
    /// States inside the section and the window, chronological.  A re-entry
    /// shows up as a jump in time between two consecutive states.
    pub states:       Vec<State>,
}

/// All objects with at least one state inside `section` during
/// `[start, end]`, most recently created first.
pub fn section_traffic<'a, I>(
    objects: I,
    section: Section,
    start:   Timestamp,
    end:     Timestamp,
) -> Vec<SectionTraffic>
where
    I: IntoIterator<Item = &'a GeneratedObject>,
{
    let mut traffic: Vec<SectionTraffic> = objects
        .into_iter()
        .filter_map(|object| {
            let states: Vec<State> = object
                .ledger
                .overlapping(section, start, end)
                .filter_map(|iv| iv.clip(start, end))
                .flat_map(|(lo, hi)| object.trajectory.window(lo, hi).iter().copied())
                .collect();

            (!states.is_empty()).then(|| SectionTraffic {
                id: object.id.clone(),
                speed: object.speed,
                created_time: object.created_time,
                expire_time: object.expire_time,
                states,
            })
        })
        .collect();

    traffic.sort_by_key(|t| Reverse(t.created_time));
    traffic
}
