//! Fluent builder for constructing a [`Fleet`].

use ts_trajectory::{MAX_TRAJECTORY_DURATION_MS, TrajectoryGenerator};

use crate::{Fleet, FleetConfig, FleetResult};

/// Fluent builder for [`Fleet`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                                  |
/// |-----------------|----------------------------------------------------------|
/// | `.generator(g)` | Duration bound = max(10 h, `config.sim_duration_ms`)     |
///
/// # Example
///
/// ```rust,ignore
/// let fleet = FleetBuilder::new(config).build()?;
/// fleet.run(&mut NoopObserver)?;
/// ```
pub struct FleetBuilder {
    config:    FleetConfig,
    generator: Option<TrajectoryGenerator>,
}

impl FleetBuilder {
    pub fn new(config: FleetConfig) -> Self {
        Self { config, generator: None }
    }

    /// Override the trajectory generator (e.g. a tighter duration bound).
    pub fn generator(mut self, generator: TrajectoryGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Fleet`].
    pub fn build(self) -> FleetResult<Fleet> {
        self.config.validate()?;
        let window = self.config.window()?;

        // Objects start after the epoch, so their duration is always below
        // the window length; a window longer than 10 h needs a looser bound.
        let generator = self.generator.unwrap_or_else(|| {
            TrajectoryGenerator::with_max_duration_ms(
                MAX_TRAJECTORY_DURATION_MS.max(window.duration_ms()),
            )
        });

        Ok(Fleet { config: self.config, generator, window })
    }
}
