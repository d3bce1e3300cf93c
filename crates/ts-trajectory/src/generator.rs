//! The Bezier trajectory generator.
//!
//! # Walk
//!
//! ```text
//! sampling_distance = speed × 0.15 s
//! step              = sampling_distance / control_polygon_length / 20
//!
//! for t in 0, step, 2·step, … ≤ 1:
//!   p         = B(t)
//!   distance += |p − previous raw point|
//!   if distance ≥ sampling_distance:
//!     if next_time + 150 > sim_end_time: stop
//!     next_time += 150
//!     emit State(next_time, p, heading(p − last emitted))
//!     on section change: old += [next_time − 150], new += [next_time]
//!     distance -= sampling_distance      ← overshoot carries forward
//! ```
//!
//! Because the control-polygon length over-estimates the arc length, the
//! effective oversampling is at least [`OVERSAMPLING_FACTOR`] raw evaluations
//! per emitted state.  Subtracting (instead of zeroing) the accumulator keeps
//! the long-run spacing error bounded by one raw step.

use tracing::{debug, trace};
use ts_core::{Point, SAMPLING_PERIOD_MS, SAMPLING_PERIOD_SECS, Timestamp, classify, heading};

use crate::{
    CrossingLedger, QuadraticBezier, State, Trajectory, TrajectoryError, TrajectoryResult,
};

/// Sanity bound on `last_time − start_time`: 10 hours.
pub const MAX_TRAJECTORY_DURATION_MS: i64 = 10 * 3_600 * 1_000;

/// Raw curve evaluations per emitted state (lower bound).
pub const OVERSAMPLING_FACTOR: f64 = 20.0;

/// Control polygons shorter than this (in world units) are rejected: the
/// parametric step would divide by (nearly) zero.
pub const MIN_CONTROL_POLYGON_LENGTH: f64 = 1e-6;

/// Configurable front end to the sampling walk.
///
/// The only tunable is the duration sanity bound; callers that simulate
/// windows longer than 10 h raise it here instead of dropping the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryGenerator {
    pub max_duration_ms: i64,
}

impl Default for TrajectoryGenerator {
    fn default() -> Self {
        Self { max_duration_ms: MAX_TRAJECTORY_DURATION_MS }
    }
}

impl TrajectoryGenerator {
    pub fn with_max_duration_ms(max_duration_ms: i64) -> Self {
        Self { max_duration_ms }
    }

    /// Sample the curve `initial → waypoint → destination` at `speed`
    /// (world units per second) from `start_time`, never past
    /// `sim_end_time`.
    ///
    /// Returns the trajectory and its crossing ledger.  Pure: identical
    /// inputs always give bit-identical outputs.
    ///
    /// # Errors
    ///
    /// - [`TrajectoryError::InvalidSpeed`], [`TrajectoryError::InvalidTimeRange`]
    ///   and [`TrajectoryError::DegenerateControlPolygon`] for out-of-contract
    ///   inputs.
    /// - [`TrajectoryError::InvariantViolation`] if a post-condition fails.
    pub fn generate(
        &self,
        initial:      Point,
        waypoint:     Point,
        destination:  Point,
        speed:        f64,
        start_time:   Timestamp,
        sim_end_time: Timestamp,
    ) -> TrajectoryResult<(Trajectory, CrossingLedger)> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(TrajectoryError::InvalidSpeed(speed));
        }
        if sim_end_time <= start_time {
            return Err(TrajectoryError::InvalidTimeRange { start_time, sim_end_time });
        }

        let curve = QuadraticBezier::new(initial, waypoint, destination);
        let approx_length = curve.control_polygon_length();
        // `!(a >= b)` also rejects NaN lengths from non-finite points.
        if !(approx_length >= MIN_CONTROL_POLYGON_LENGTH) {
            return Err(TrajectoryError::DegenerateControlPolygon {
                length:  approx_length,
                minimum: MIN_CONTROL_POLYGON_LENGTH,
            });
        }

        let sampling_distance = speed * SAMPLING_PERIOD_SECS;
        let step = sampling_distance / approx_length / OVERSAMPLING_FACTOR;

        let mut states = vec![State::origin(start_time, initial)];
        let mut ledger = CrossingLedger::new();
        ledger.push(classify(initial), start_time);

        let mut raw_point = initial;
        let mut next_time = start_time;
        let mut distance = 0.0;

        let mut i: u64 = 0;
        loop {
            let t = i as f64 * step;
            if t > 1.0 {
                break;
            }
            i += 1;

            let point = curve.at(t);
            distance += (point - raw_point).length();
            raw_point = point;

            if distance < sampling_distance {
                continue;
            }
            match next_time.checked_add(SAMPLING_PERIOD_MS) {
                Some(t) if t <= sim_end_time => next_time = t,
                _ => break,
            }

            let previous = states[states.len() - 1].position;
            let from = classify(previous);
            let to = classify(point);

            states.push(State {
                time:     next_time,
                position: point,
                heading:  Some(heading(point - previous)),
            });

            if from != to {
                trace!(%from, %to, time = next_time, "section crossing");
                ledger.push(from, next_time - SAMPLING_PERIOD_MS);
                ledger.push(to, next_time);
            }

            distance -= sampling_distance;
        }

        let last_section = classify(states[states.len() - 1].position);
        ledger.push(last_section, next_time);

        self.check_postconditions(start_time, next_time, sim_end_time, &ledger)?;

        debug!(
            states = states.len(),
            crossings = ledger.interval_count() - 1,
            duration_ms = next_time - start_time,
            speed,
            "generated trajectory"
        );

        Ok((Trajectory::from_generated(states), ledger))
    }

    fn check_postconditions(
        &self,
        start_time:   Timestamp,
        last_time:    Timestamp,
        sim_end_time: Timestamp,
        ledger:       &CrossingLedger,
    ) -> TrajectoryResult<()> {
        if last_time > sim_end_time {
            return Err(TrajectoryError::InvariantViolation(format!(
                "last state at {last_time} is past the simulation end {sim_end_time}"
            )));
        }
        if last_time - start_time >= self.max_duration_ms {
            return Err(TrajectoryError::InvariantViolation(format!(
                "trajectory lasts {} ms, limit is {} ms",
                last_time - start_time,
                self.max_duration_ms
            )));
        }
        ledger.validate(start_time, last_time)
    }
}

/// [`TrajectoryGenerator::generate`] with the default 10 h duration bound.
pub fn generate(
    initial:      Point,
    waypoint:     Point,
    destination:  Point,
    speed:        f64,
    start_time:   Timestamp,
    sim_end_time: Timestamp,
) -> TrajectoryResult<(Trajectory, CrossingLedger)> {
    TrajectoryGenerator::default().generate(
        initial,
        waypoint,
        destination,
        speed,
        start_time,
        sim_end_time,
    )
}
