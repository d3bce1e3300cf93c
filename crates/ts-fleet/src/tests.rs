//! Integration tests for ts-fleet.

use ts_core::MS_PER_SEC;

use crate::{Fleet, FleetBuilder, FleetConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Small, fast fleet: 10-minute window, fast objects so most trajectories
/// finish their curve (and cross sections) well inside the window.
fn test_config(object_count: u64) -> FleetConfig {
    FleetConfig {
        object_count,
        seed:            7,
        epoch_start_ms:  1_000_000,
        sim_duration_ms: 600 * MS_PER_SEC,
        speed_min:       1_500.0,
        speed_max:       3_000.0,
        num_threads:     Some(2),
        ..FleetConfig::default()
    }
}

fn test_fleet(object_count: u64) -> Fleet {
    FleetBuilder::new(test_config(object_count)).build().unwrap()
}

// ── Config validation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use ts_core::MS_PER_HOUR;

    use crate::{FleetBuilder, FleetConfig, FleetError};

    #[test]
    fn defaults_are_valid() {
        let cfg = FleetConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.object_count, 50);
        assert_eq!(cfg.sim_duration_ms, 10 * MS_PER_HOUR);
        assert_eq!(cfg.window().unwrap().duration_ms(), 10 * MS_PER_HOUR);
    }

    fn rejected(cfg: FleetConfig) -> bool {
        matches!(cfg.validate(), Err(FleetError::Config(_)))
    }

    #[test]
    fn invalid_fields_rejected() {
        let base = FleetConfig::default();
        assert!(rejected(FleetConfig { sim_duration_ms: 1, ..base.clone() }));
        assert!(rejected(FleetConfig { speed_min: 0.0, ..base.clone() }));
        assert!(rejected(FleetConfig { speed_max: 10.0, ..base.clone() }));
        assert!(rejected(FleetConfig { speed_max: f64::INFINITY, ..base.clone() }));
        assert!(rejected(FleetConfig { waypoint_min_dist: 200_000.0, ..base.clone() }));
        assert!(rejected(FleetConfig { destination_min_dist: -1.0, ..base.clone() }));
        assert!(rejected(FleetConfig {
            destination_min_dist: 2_000_000.0,
            destination_max_dist: 3_000_000.0,
            ..base.clone()
        }));
        assert!(rejected(FleetConfig { num_threads: Some(0), ..base }));
    }

    #[test]
    fn epoch_near_timestamp_limit_rejected() {
        let base = FleetConfig::default();
        let cfg = FleetConfig { epoch_start_ms: i64::MAX - 5, ..base.clone() };
        assert!(rejected(cfg.clone()));
        assert!(matches!(FleetBuilder::new(cfg).build(), Err(FleetError::Config(_))));

        let last_fit = FleetConfig { epoch_start_ms: i64::MAX - base.sim_duration_ms, ..base };
        assert_eq!(last_fit.window().unwrap().end, i64::MAX);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use ts_core::MS_PER_HOUR;
    use ts_trajectory::{MAX_TRAJECTORY_DURATION_MS, TrajectoryGenerator};

    use super::test_config;
    use crate::{FleetBuilder, FleetConfig, FleetError};

    #[test]
    fn default_generator_covers_window() {
        let fleet = FleetBuilder::new(test_config(1)).build().unwrap();
        assert_eq!(fleet.generator.max_duration_ms, MAX_TRAJECTORY_DURATION_MS);

        let long = FleetConfig { sim_duration_ms: 24 * MS_PER_HOUR, ..test_config(1) };
        let fleet = FleetBuilder::new(long).build().unwrap();
        assert_eq!(fleet.generator.max_duration_ms, 24 * MS_PER_HOUR);
    }

    #[test]
    fn explicit_generator_is_kept() {
        let fleet = FleetBuilder::new(test_config(1))
            .generator(TrajectoryGenerator::with_max_duration_ms(5))
            .build()
            .unwrap();
        assert_eq!(fleet.generator.max_duration_ms, 5);
    }

    #[test]
    fn invalid_config_fails_build() {
        let cfg = FleetConfig { speed_min: -1.0, ..test_config(1) };
        assert!(matches!(FleetBuilder::new(cfg).build(), Err(FleetError::Config(_))));
    }
}

// ── Generation run ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use ts_trajectory::TrajectoryGenerator;

    use super::{test_config, test_fleet};
    use crate::{FleetBuilder, FleetConfig, FleetError, FleetObserver, FleetSummary, GeneratedObject};

    #[derive(Default)]
    struct Recorder {
        started:  bool,
        indices:  Vec<u64>,
        summary:  Option<FleetSummary>,
    }

    impl FleetObserver for Recorder {
        fn on_run_start(&mut self, _config: &FleetConfig) {
            self.started = true;
        }
        fn on_object(&mut self, object: &GeneratedObject) {
            self.indices.push(object.index);
        }
        fn on_run_end(&mut self, summary: &FleetSummary) {
            self.summary = Some(summary.clone());
        }
    }

    #[test]
    fn observer_sees_objects_in_order() {
        let fleet = test_fleet(12);
        let mut rec = Recorder::default();
        let summary = fleet.run(&mut rec).unwrap();

        assert!(rec.started);
        assert_eq!(rec.indices, (0..12).collect::<Vec<_>>());
        assert_eq!(rec.summary.as_ref(), Some(&summary));
        assert_eq!(summary.objects, 12);
    }

    #[test]
    fn runs_are_reproducible() {
        let a = test_fleet(6).generate_all().unwrap();
        let b = test_fleet(6).generate_all().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn larger_fleet_keeps_prefix() {
        let small = test_fleet(3).generate_all().unwrap();
        let large = test_fleet(8).generate_all().unwrap();
        assert_eq!(small[..], large[..3]);
    }

    #[test]
    fn single_object_matches_run() {
        let fleet = test_fleet(5);
        let all = fleet.generate_all().unwrap();
        assert_eq!(fleet.generate_object(3).unwrap(), all[3]);
    }

    #[test]
    fn seeds_change_output() {
        let a = test_fleet(1).generate_all().unwrap();
        let other = FleetConfig { seed: 8, ..test_config(1) };
        let b = FleetBuilder::new(other).build().unwrap().generate_all().unwrap();
        assert_ne!(a[0].initial, b[0].initial);
    }

    #[test]
    fn objects_respect_config() {
        let cfg = test_config(20);
        let fleet = FleetBuilder::new(cfg.clone()).build().unwrap();
        let window = fleet.window;

        for obj in fleet.generate_all().unwrap() {
            assert!(obj.created_time > window.start && obj.created_time < window.end);
            assert!(obj.expire_time <= window.end);
            assert_eq!(obj.created_time, obj.trajectory.start_time());
            assert_eq!(obj.expire_time, obj.trajectory.end_time());
            assert_eq!(obj.trajectory.first().position, obj.initial);

            assert!((cfg.speed_min..cfg.speed_max).contains(&obj.speed));
            let wd = obj.initial.distance(obj.waypoint);
            let dd = obj.initial.distance(obj.destination);
            assert!((cfg.waypoint_min_dist..=cfg.waypoint_max_dist).contains(&wd));
            assert!((cfg.destination_min_dist..=cfg.destination_max_dist).contains(&dd));

            assert_eq!(obj.payload.len(), 2 * cfg.payload_bytes);
            assert!(obj.payload.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
            assert_eq!(obj.id.as_str().len(), 32);

            obj.ledger.validate(obj.created_time, obj.expire_time).unwrap();
        }
    }

    #[test]
    fn summary_counts_match_objects() {
        let fleet = test_fleet(10);
        let objects = fleet.generate_all().unwrap();
        let summary = fleet.run(&mut crate::NoopObserver).unwrap();

        let states: u64 = objects.iter().map(|o| o.trajectory.len() as u64).sum();
        let intervals: u64 = objects.iter().map(|o| o.ledger.interval_count() as u64).sum();
        assert_eq!(summary.states, states);
        assert_eq!(summary.intervals, intervals);
        assert_eq!(summary.crossings, intervals - 10);
        assert_eq!(summary.earliest_start, objects.iter().map(|o| o.created_time).min());
        assert_eq!(summary.latest_expire, objects.iter().map(|o| o.expire_time).max());
        assert!(summary.to_string().starts_with("10 objects"));
    }

    #[test]
    fn sampling_failure_reports_index() {
        // Passes validation (below the diagonal) but is out of reach from
        // virtually every origin.
        let cfg = FleetConfig {
            waypoint_min_dist: 1_400_000.0,
            waypoint_max_dist: 1_410_000.0,
            ..test_config(1)
        };
        let err = FleetBuilder::new(cfg).build().unwrap().run(&mut crate::NoopObserver).unwrap_err();
        assert!(matches!(err, FleetError::Sampling { index: 0, .. }), "{err}");
    }

    #[test]
    fn generator_failure_reports_index() {
        let fleet = FleetBuilder::new(test_config(2))
            .generator(TrajectoryGenerator::with_max_duration_ms(1))
            .build()
            .unwrap();
        let err = fleet.generate_all().unwrap_err();
        assert!(matches!(err, FleetError::Trajectory { index: 0, .. }), "{err}");
    }
}

// ── Section traffic ───────────────────────────────────────────────────────────

#[cfg(test)]
mod query_tests {
    use ts_core::{Section, classify};

    use super::test_fleet;
    use crate::section_traffic;

    #[test]
    fn traffic_states_lie_in_section_and_window() {
        let fleet = test_fleet(25);
        let objects = fleet.generate_all().unwrap();
        let (start, end) = (fleet.window.start, fleet.window.end);

        let mut total = 0;
        for section in Section::ALL {
            let traffic = section_traffic(&objects, section, start, end);
            for t in &traffic {
                assert!(!t.states.is_empty());
                for s in &t.states {
                    assert_eq!(classify(s.position), section);
                    assert!((start..=end).contains(&s.time));
                }
                assert!(t.states.windows(2).all(|w| w[0].time < w[1].time));
            }
            assert!(traffic.windows(2).all(|w| w[0].created_time >= w[1].created_time));
            total += traffic.iter().map(|t| t.states.len()).sum::<usize>();
        }

        // Over the whole window every state is reported exactly once.
        let all_states: usize = objects.iter().map(|o| o.trajectory.len()).sum();
        assert_eq!(total, all_states);
    }

    #[test]
    fn narrow_window_clips_states() {
        let fleet = test_fleet(10);
        let objects = fleet.generate_all().unwrap();
        let obj = &objects[0];
        let section = obj.trajectory.first().section();
        let (lo, hi) = (obj.created_time, obj.created_time + 450);

        let traffic = section_traffic(std::slice::from_ref(obj), section, lo, hi);
        assert_eq!(traffic.len(), 1);
        assert!(traffic[0].states.len() <= 4);
        assert_eq!(traffic[0].states[0].time, obj.created_time);
        assert!(traffic[0].states.iter().all(|s| s.time <= hi));
    }

    #[test]
    fn window_before_epoch_is_empty() {
        let fleet = test_fleet(5);
        let objects = fleet.generate_all().unwrap();
        for section in Section::ALL {
            assert!(section_traffic(&objects, section, 0, fleet.window.start).is_empty());
        }
    }
}
