//! The `Fleet` struct and its generation loop.

use std::fmt;

use tracing::{debug, info};
use ts_core::{SimWindow, Timestamp};
use ts_trajectory::TrajectoryGenerator;

use crate::{CollectingObserver, FleetConfig, FleetObserver, FleetResult, GeneratedObject};

/// Objects generated per Rayon batch; bounds peak memory for large fleets.
#[cfg(feature = "parallel")]
const PARALLEL_BATCH: u64 = 1_024;

// ── FleetSummary ──────────────────────────────────────────────────────────────

/// Aggregate counts over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetSummary {
    pub objects:        u64,
    pub states:         u64,
    /// Section stays across all ledgers.
    pub intervals:      u64,
    /// Section changes across all trajectories (`intervals − objects`).
    pub crossings:      u64,
    pub earliest_start: Option<Timestamp>,
    pub latest_expire:  Option<Timestamp>,
}

impl FleetSummary {
    fn record(&mut self, object: &GeneratedObject) {
        let intervals = object.ledger.interval_count() as u64;
        self.objects += 1;
        self.states += object.trajectory.len() as u64;
        self.intervals += intervals;
        self.crossings += intervals.saturating_sub(1);
        self.earliest_start = Some(
            self.earliest_start.map_or(object.created_time, |t| t.min(object.created_time)),
        );
        self.latest_expire = Some(
            self.latest_expire.map_or(object.expire_time, |t| t.max(object.expire_time)),
        );
    }
}

impl fmt::Display for FleetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} objects, {} states, {} section crossings",
            self.objects, self.states, self.crossings
        )
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

/// A validated generation run.  Create via [`FleetBuilder`][crate::FleetBuilder].
///
/// Holds no per-object state: every object is generated from
/// `(config, generator, index)` alone, so `run` can be called repeatedly and
/// always yields the same objects.
pub struct Fleet {
    pub config:    FleetConfig,
    pub generator: TrajectoryGenerator,
    pub window:    SimWindow,
}

impl Fleet {
    /// Generate every object and hand each to `observer` in index order.
    pub fn run<O: FleetObserver>(&self, observer: &mut O) -> FleetResult<FleetSummary> {
        info!(
            objects = self.config.object_count,
            seed = self.config.seed,
            window = %self.window,
            "starting fleet generation"
        );
        observer.on_run_start(&self.config);

        let mut summary = FleetSummary::default();

        #[cfg(not(feature = "parallel"))]
        for index in 0..self.config.object_count {
            let object = self.generate_object(index)?;
            summary.record(&object);
            observer.on_object(&object);
        }

        #[cfg(feature = "parallel")]
        self.run_parallel(observer, &mut summary)?;

        observer.on_run_end(&summary);
        info!(%summary, "fleet generation finished");
        Ok(summary)
    }

    /// Generate the whole fleet into memory.
    pub fn generate_all(&self) -> FleetResult<Vec<GeneratedObject>> {
        let mut collector = CollectingObserver::default();
        self.run(&mut collector)?;
        Ok(collector.objects)
    }

    /// Generate object `index` on its own.  Identical to the object `run`
    /// delivers at that position.
    pub fn generate_object(&self, index: u64) -> FleetResult<GeneratedObject> {
        let object = GeneratedObject::generate(&self.config, &self.generator, self.window, index)?;
        debug!(
            index,
            id = %object.id,
            states = object.trajectory.len(),
            speed = object.speed,
            "generated object"
        );
        Ok(object)
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<O: FleetObserver>(
        &self,
        observer: &mut O,
        summary:  &mut FleetSummary,
    ) -> FleetResult<()> {
        use rayon::prelude::*;

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = self.config.num_threads {
            builder = builder.num_threads(n);
        }
        let pool = builder
            .build()
            .map_err(|e| crate::FleetError::ThreadPool(e.to_string()))?;

        let count = self.config.object_count;
        let mut next = 0;
        while next < count {
            let end = (next + PARALLEL_BATCH).min(count);
            let batch: Vec<FleetResult<GeneratedObject>> = pool.install(|| {
                (next..end)
                    .into_par_iter()
                    .map(|index| self.generate_object(index))
                    .collect()
            });

            // Delivered sequentially in index order; the first failing index
            // wins, exactly as in the sequential build.
            for result in batch {
                let object = result?;
                summary.record(&object);
                observer.on_object(&object);
            }
            next = end;
        }
        Ok(())
    }
}
