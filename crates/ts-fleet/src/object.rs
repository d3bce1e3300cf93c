//! One generated object and the per-object generation pipeline.

use std::fmt::Write as _;

use rand::RngCore;
use ts_core::{
    ObjectId, ObjectRng, Point, SimWindow, Timestamp, random_point_in_annulus,
    random_point_in_world,
};
use ts_trajectory::{CrossingLedger, Trajectory, TrajectoryGenerator};

use crate::{FleetConfig, FleetError, FleetResult};

/// A synthetic object: its constants, control polygon, trajectory, and
/// crossing ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedObject {
    /// Position in the generation order; also the RNG stream index.
    pub index:        u64,
    pub id:           ObjectId,
    /// World units per second.
    pub speed:        f64,
    /// First state's time.
    pub created_time: Timestamp,
    /// Last state's time.
    pub expire_time:  Timestamp,
    /// Lowercase hex, two characters per payload byte.
    pub payload:      String,
    pub initial:      Point,
    pub waypoint:     Point,
    pub destination:  Point,
    pub trajectory:   Trajectory,
    pub ledger:       CrossingLedger,
}

impl GeneratedObject {
    /// Run the full pipeline for object `index` of a fleet.
    ///
    /// Every random draw comes from this object's own [`ObjectRng`], so the
    /// result depends only on `(config, generator, index)`.
    pub fn generate(
        config:    &FleetConfig,
        generator: &TrajectoryGenerator,
        window:    SimWindow,
        index:     u64,
    ) -> FleetResult<Self> {
        let mut rng = ObjectRng::new(config.seed, index);
        let sampling = |source| FleetError::Sampling { index, source };

        let initial = random_point_in_world(&mut rng);
        let waypoint = random_point_in_annulus(
            &mut rng,
            initial,
            config.waypoint_min_dist,
            config.waypoint_max_dist,
        )
        .map_err(sampling)?;
        let destination = random_point_in_annulus(
            &mut rng,
            initial,
            config.destination_min_dist,
            config.destination_max_dist,
        )
        .map_err(sampling)?;

        // Strictly inside the window: `end - start` stays below the window
        // length, and `end > start` always holds.
        let start_time = rng.gen_range(window.start + 1..window.end);
        let speed = rng.gen_range(config.speed_min..config.speed_max);

        let (trajectory, ledger) = generator
            .generate(initial, waypoint, destination, speed, start_time, window.end)
            .map_err(|source| FleetError::Trajectory { index, source })?;

        let id = ObjectId::random(&mut rng);
        let payload = random_hex(&mut rng, config.payload_bytes);

        Ok(Self {
            index,
            id,
            speed,
            created_time: trajectory.start_time(),
            expire_time: trajectory.end_time(),
            payload,
            initial,
            waypoint,
            destination,
            trajectory,
            ledger,
        })
    }
}

/// `n` random bytes rendered as `2n` lowercase hex characters.
fn random_hex(rng: &mut ObjectRng, n: usize) -> String {
    let mut bytes = vec![0u8; n];
    rng.fill_bytes(&mut bytes);
    let mut out = String::with_capacity(2 * n);
    for b in bytes {
        // Writing to a `String` cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}
