//! Unit and property tests for ts-trajectory.

use ts_core::{Point, SAMPLING_PERIOD_MS};

use crate::{CrossingLedger, Trajectory, generate};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Straight run along y = 100 000 from x = 400 000 to x = 600 000, crossing
/// the vertical midline halfway.  The waypoint sits at the midpoint, so the
/// curve parameter maps linearly onto distance.
fn midline_run(speed: f64) -> (Trajectory, CrossingLedger) {
    generate(
        Point::new(400_000.0, 100_000.0),
        Point::new(500_000.0, 100_000.0),
        Point::new(600_000.0, 100_000.0),
        speed,
        1_000,
        1_000 + 3_600_000,
    )
    .unwrap()
}

// ── Bezier curve ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod bezier {
    use ts_core::Point;

    use crate::QuadraticBezier;

    #[test]
    fn endpoints() {
        let c = QuadraticBezier::new(Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        assert_eq!(c.at(0.0), Point::new(0.0, 0.0));
        assert_eq!(c.at(1.0), Point::new(10.0, 0.0));
        assert_eq!(c.at(0.5), Point::new(5.0, 5.0));
    }

    #[test]
    fn control_polygon_bounds_chord() {
        let c = QuadraticBezier::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 0.0));
        assert_eq!(c.control_polygon_length(), 10.0);
        assert!(c.control_polygon_length() >= c.start.distance(c.end));
    }
}

// ── Generator scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use ts_core::{Point, SAMPLING_PERIOD_MS, Section};

    use super::midline_run;
    use crate::generate;

    #[test]
    fn straight_line_inside_one_quadrant() {
        let (traj, ledger) = generate(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 0.0),
            100.0,
            0,
            100_000,
        )
        .unwrap();

        assert_eq!(traj.first().time, 0);
        assert_eq!(traj.first().heading, None);
        assert!(traj.len() > 10, "expected ~13 samples, got {}", traj.len());

        for pair in traj.states().windows(2) {
            assert!(pair[1].position.x > pair[0].position.x);
            assert_eq!(pair[1].position.y, 0.0);
            assert_eq!(pair[1].heading, Some(0.0));
        }

        let sections: Vec<_> = ledger.sections().collect();
        assert_eq!(sections, [Section::A]);
        assert_eq!(ledger.timestamps(Section::A), &[0, traj.end_time()]);
        assert_eq!(traj.end_time() % SAMPLING_PERIOD_MS, 0);
        assert!(traj.last().position.x <= 200.0);
    }

    #[test]
    fn sample_spacing_tracks_speed() {
        let (traj, _) = midline_run(1_000.0);
        // 150 world units per sample; first sample may fall up to one raw
        // step short of the target because the accumulator starts at zero.
        for pair in traj.states().windows(2) {
            let d = pair[0].position.distance(pair[1].position);
            assert!((d - 150.0).abs() < 10.0, "spacing {d}");
        }
        // 200 000 units at 1 000 units/s ≈ 200 s.
        let secs = traj.duration_ms() as f64 / 1_000.0;
        assert!((secs - 200.0).abs() < 1.0, "duration {secs} s");
    }

    #[test]
    fn midline_crossing_records_one_pair_each() {
        let (traj, ledger) = midline_run(1_000.0);

        let a = ledger.timestamps(Section::A);
        let b = ledger.timestamps(Section::B);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(a[0], traj.start_time());
        assert_eq!(b[1], traj.end_time());
        assert_eq!(a[1], b[0] - SAMPLING_PERIOD_MS);

        let cross = traj.state_at(b[0]).unwrap();
        assert!(cross.position.x >= 500_000.0);
        let before = traj.state_at(a[1]).unwrap();
        assert!(before.position.x < 500_000.0);
    }

    #[test]
    fn diagonal_run_visits_three_quadrants() {
        // A → B → D: crosses x = 500k first, then y = 500k.
        let (traj, ledger) = generate(
            Point::new(450_000.0, 300_000.0),
            Point::new(700_000.0, 300_000.0),
            Point::new(700_000.0, 700_000.0),
            2_000.0,
            0,
            3_600_000,
        )
        .unwrap();

        let visited: Vec<_> = ledger.all_intervals().iter().map(|iv| iv.section).collect();
        assert_eq!(visited, [Section::A, Section::B, Section::D]);
        assert_eq!(ledger.interval_count(), 3);
        assert_eq!(ledger.section_at(traj.end_time()), Some(Section::D));
        ledger.validate(traj.start_time(), traj.end_time()).unwrap();
    }

    #[test]
    fn horizon_cuts_trajectory() {
        let (traj, ledger) = midline_run(10.0);
        // 200 000 units at 10 units/s would take 5.5 h; the horizon is 1 h.
        assert_eq!(traj.end_time(), 1_000 + 3_600_000);
        assert_eq!(ledger.timestamps(Section::A), &[1_000, traj.end_time()]);
    }

    #[test]
    fn very_low_speed_is_tight_sampling_not_an_error() {
        let (traj, _) = generate(
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(30.0, 10.0),
            0.01,
            0,
            60_000,
        )
        .unwrap();
        assert!(traj.len() > 1);
        assert!(traj.end_time() <= 60_000);
    }
}

// ── Horizon boundary ──────────────────────────────────────────────────────────

#[cfg(test)]
mod horizon {
    use ts_core::{Point, SAMPLING_PERIOD_MS};

    use crate::generate;

    const START: i64 = 5_000;

    fn run(sim_end_time: i64) -> i64 {
        let (traj, _) = generate(
            Point::new(0.0, 0.0),
            Point::new(50_000.0, 0.0),
            Point::new(100_000.0, 0.0),
            50.0,
            START,
            sim_end_time,
        )
        .unwrap();
        traj.end_time()
    }

    #[test]
    fn sample_exactly_at_end_is_emitted() {
        let end = START + 40 * SAMPLING_PERIOD_MS;
        assert_eq!(run(end), end);
    }

    #[test]
    fn sample_one_ms_past_end_is_dropped() {
        let end = START + 40 * SAMPLING_PERIOD_MS - 1;
        assert_eq!(run(end), START + 39 * SAMPLING_PERIOD_MS);
    }

    #[test]
    fn horizon_shorter_than_one_period_keeps_only_origin() {
        assert_eq!(run(START + SAMPLING_PERIOD_MS - 1), START);
    }

    #[test]
    fn horizon_at_timestamp_limit_stops_cleanly() {
        let start = i64::MAX - 1_000;
        let (traj, ledger) = generate(
            Point::new(0.0, 0.0),
            Point::new(50_000.0, 0.0),
            Point::new(100_000.0, 0.0),
            50.0,
            start,
            i64::MAX,
        )
        .unwrap();
        assert_eq!(traj.len(), 7);
        assert_eq!(traj.end_time(), start + 6 * SAMPLING_PERIOD_MS);
        ledger.validate(start, traj.end_time()).unwrap();
    }
}

// ── Input validation and invariants ───────────────────────────────────────────

#[cfg(test)]
mod errors {
    use ts_core::Point;

    use crate::{TrajectoryError, TrajectoryGenerator, generate};

    const A: Point = Point::new(1_000.0, 1_000.0);
    const B: Point = Point::new(2_000.0, 1_000.0);
    const C: Point = Point::new(3_000.0, 1_000.0);

    #[test]
    fn rejects_non_positive_speed() {
        assert!(matches!(generate(A, B, C, 0.0, 0, 1_000), Err(TrajectoryError::InvalidSpeed(_))));
        assert!(matches!(generate(A, B, C, -5.0, 0, 1_000), Err(TrajectoryError::InvalidSpeed(_))));
        assert!(matches!(
            generate(A, B, C, f64::NAN, 0, 1_000),
            Err(TrajectoryError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn rejects_empty_window() {
        assert!(matches!(
            generate(A, B, C, 10.0, 1_000, 1_000),
            Err(TrajectoryError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn rejects_coincident_control_points() {
        assert!(matches!(
            generate(A, A, A, 10.0, 0, 1_000),
            Err(TrajectoryError::DegenerateControlPolygon { .. })
        ));
    }

    #[test]
    fn accepts_colinear_but_distinct_points() {
        // Waypoint beyond the destination: the curve doubles back on itself.
        assert!(generate(A, C, B, 10.0, 0, 600_000).is_ok());
    }

    #[test]
    fn duration_bound_is_enforced() {
        let tight = TrajectoryGenerator::with_max_duration_ms(1_000);
        let err = tight.generate(A, B, C, 10.0, 0, 60_000).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvariantViolation(_)), "{err}");
    }
}

// ── Trajectory & ledger accessors ─────────────────────────────────────────────

#[cfg(test)]
mod accessors {
    use ts_core::{Point, SAMPLING_PERIOD_MS, Section};

    use super::midline_run;
    use crate::{State, Trajectory};

    #[test]
    fn window_is_inclusive() {
        let (traj, _) = midline_run(1_000.0);
        let start = traj.start_time() + 10 * SAMPLING_PERIOD_MS;
        let end = start + 5 * SAMPLING_PERIOD_MS;
        let w = traj.window(start, end);
        assert_eq!(w.len(), 6);
        assert_eq!(w[0].time, start);
        assert_eq!(w[5].time, end);
        assert!(traj.window(end, start).is_empty());
        assert!(traj.window(traj.end_time() + 1, i64::MAX).is_empty());
    }

    #[test]
    fn overlapping_and_clip() {
        let (traj, ledger) = midline_run(1_000.0);
        let b_entry = ledger.timestamps(Section::B)[0];

        assert_eq!(ledger.overlapping(Section::A, b_entry, b_entry + 1).count(), 0);
        let hits: Vec<_> = ledger.overlapping(Section::B, 0, b_entry).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].clip(0, b_entry), Some((b_entry, b_entry)));
        assert_eq!(hits[0].clip(traj.end_time() + 1, i64::MAX), None);
    }

    #[test]
    fn section_at_gap_is_none() {
        let (_, ledger) = midline_run(1_000.0);
        let exit_a = ledger.timestamps(Section::A)[1];
        assert_eq!(ledger.section_at(exit_a), Some(Section::A));
        assert_eq!(ledger.section_at(exit_a + 1), None);
        assert_eq!(ledger.section_at(exit_a + SAMPLING_PERIOD_MS), Some(Section::B));
    }

    #[test]
    fn from_states_validates() {
        let ok = vec![
            State::origin(0, Point::new(0.0, 0.0)),
            State { time: 150, position: Point::new(1.0, 0.0), heading: Some(0.0) },
        ];
        assert!(Trajectory::from_states(ok).is_ok());

        let bad_spacing = vec![
            State::origin(0, Point::new(0.0, 0.0)),
            State { time: 100, position: Point::new(1.0, 0.0), heading: Some(0.0) },
        ];
        assert!(Trajectory::from_states(bad_spacing).is_err());

        let missing_heading = vec![
            State::origin(0, Point::new(0.0, 0.0)),
            State::origin(150, Point::new(1.0, 0.0)),
        ];
        assert!(Trajectory::from_states(missing_heading).is_err());
        assert!(Trajectory::from_states(Vec::new()).is_err());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::f64::consts::TAU;

    use proptest::prelude::*;
    use ts_core::{Point, Section, WORLD_SIZE, classify};

    use super::SAMPLING_PERIOD_MS;
    use crate::{QuadraticBezier, generate};

    fn world_point() -> impl Strategy<Value = Point> {
        (0.0..=WORLD_SIZE, 0.0..=WORLD_SIZE).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn generated_output_is_well_formed(
            initial in world_point(),
            waypoint in world_point(),
            destination in world_point(),
            speed in 10.0f64..80.0,
            start_time in 0i64..2_000_000_000_000,
            window in 1i64..600_000,
        ) {
            let curve = QuadraticBezier::new(initial, waypoint, destination);
            prop_assume!(curve.control_polygon_length() >= 1.0);

            let sim_end_time = start_time + window;
            let (traj, ledger) =
                generate(initial, waypoint, destination, speed, start_time, sim_end_time).unwrap();

            // Origin state.
            prop_assert_eq!(traj.first().time, start_time);
            prop_assert_eq!(traj.first().heading, None);
            prop_assert_eq!(traj.first().position, initial);

            // Cadence and headings.
            for pair in traj.states().windows(2) {
                prop_assert_eq!(pair[1].time - pair[0].time, SAMPLING_PERIOD_MS);
                let h = pair[1].heading.unwrap();
                prop_assert!((0.0..TAU).contains(&h), "heading {}", h);
            }

            // Horizon.
            prop_assert!(traj.end_time() <= sim_end_time);
            prop_assert!(traj.end_time() < sim_end_time + SAMPLING_PERIOD_MS);

            // Ledger shape.
            for list in ledger.as_map().values() {
                prop_assert_eq!(list.len() % 2, 0);
                for pair in list.chunks_exact(2) {
                    prop_assert!(pair[0] <= pair[1]);
                }
            }

            // Replaying the ledger reproduces each state's section, and no
            // instant belongs to two sections.
            for state in traj.states() {
                let owners: Vec<Section> = Section::ALL
                    .into_iter()
                    .filter(|&s| ledger.intervals(s).any(|iv| iv.contains(state.time)))
                    .collect();
                prop_assert_eq!(owners, vec![classify(state.position)]);
            }
        }

        #[test]
        fn generation_is_idempotent(
            initial in world_point(),
            waypoint in world_point(),
            destination in world_point(),
            speed in 10.0f64..80.0,
        ) {
            let curve = QuadraticBezier::new(initial, waypoint, destination);
            prop_assume!(curve.control_polygon_length() >= 1.0);

            let a = generate(initial, waypoint, destination, speed, 0, 300_000).unwrap();
            let b = generate(initial, waypoint, destination, speed, 0, 300_000).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
