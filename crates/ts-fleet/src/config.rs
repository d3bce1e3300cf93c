//! Fleet generation parameters.

use ts_core::{MS_PER_HOUR, SimWindow, Timestamp, WORLD_SIZE};

use crate::{FleetError, FleetResult};

/// Everything that shapes a generation run.
///
/// Typically built from CLI flags or a TOML file by the application crate.
/// Defaults reproduce the reference fixture set: 50 objects over a 10-hour
/// window starting 2006-12-01.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Number of objects to generate.
    pub object_count: u64,

    /// Master RNG seed.  The same seed always produces identical fleets.
    pub seed: u64,

    /// Start of the simulation window, in ms since the Unix epoch.
    pub epoch_start_ms: Timestamp,

    /// Length of the simulation window.  Every object starts strictly inside
    /// it and is cut off at its end.
    pub sim_duration_ms: i64,

    /// Object speed is uniform in `[speed_min, speed_max)` world units/s.
    pub speed_min: f64,
    pub speed_max: f64,

    /// Distance band around the initial point for the waypoint.
    pub waypoint_min_dist: f64,
    pub waypoint_max_dist: f64,

    /// Distance band around the initial point for the destination.
    pub destination_min_dist: f64,
    pub destination_max_dist: f64,

    /// Size of each object's random payload, in bytes (hex-encoded on output).
    pub payload_bytes: usize,

    /// Worker threads for the `parallel` feature.  `None` uses all cores.
    pub num_threads: Option<usize>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            object_count:         50,
            seed:                 42,
            epoch_start_ms:       1_164_978_000_000,
            sim_duration_ms:      10 * MS_PER_HOUR,
            speed_min:            10.0,
            speed_max:            80.0,
            waypoint_min_dist:    100_000.0,
            waypoint_max_dist:    150_000.0,
            destination_min_dist: 150_000.0,
            destination_max_dist: 400_000.0,
            payload_bytes:        100,
            num_threads:          None,
        }
    }
}

impl FleetConfig {
    /// The shared simulation horizon `[epoch_start_ms, epoch_start_ms + sim_duration_ms]`.
    pub fn window(&self) -> FleetResult<SimWindow> {
        SimWindow::starting_at(self.epoch_start_ms, self.sim_duration_ms)
            .map_err(|e| FleetError::Config(e.to_string()))
    }

    /// Check every field for internal consistency.
    pub fn validate(&self) -> FleetResult<()> {
        // Objects start strictly after the epoch and strictly before the end.
        if self.sim_duration_ms < 2 {
            return Err(FleetError::Config(format!(
                "sim_duration_ms must be at least 2, got {}",
                self.sim_duration_ms
            )));
        }
        self.window()?;

        if !(self.speed_min.is_finite() && self.speed_min > 0.0) {
            return Err(FleetError::Config(format!(
                "speed_min must be finite and positive, got {}",
                self.speed_min
            )));
        }
        if !(self.speed_max.is_finite() && self.speed_max > self.speed_min) {
            return Err(FleetError::Config(format!(
                "speed range [{}, {}) is empty",
                self.speed_min, self.speed_max
            )));
        }

        check_band("waypoint", self.waypoint_min_dist, self.waypoint_max_dist)?;
        check_band("destination", self.destination_min_dist, self.destination_max_dist)?;

        if self.num_threads == Some(0) {
            return Err(FleetError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

fn check_band(name: &str, min: f64, max: f64) -> FleetResult<()> {
    let diagonal = WORLD_SIZE * std::f64::consts::SQRT_2;
    if !(0.0 <= min && min <= max && max.is_finite()) {
        return Err(FleetError::Config(format!(
            "{name} distance band [{min}, {max}] is empty or negative"
        )));
    }
    if min > diagonal {
        return Err(FleetError::Config(format!(
            "{name} minimum distance {min} exceeds the world diagonal {diagonal:.0}"
        )));
    }
    Ok(())
}
