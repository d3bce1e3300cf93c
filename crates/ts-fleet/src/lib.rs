//! `ts-fleet`: generation loop for many synthetic objects.
//!
//! # Per-object pipeline
//!
//! ```text
//! for index in 0..config.object_count:
//!   rng          = ObjectRng(seed, index)
//!   initial      = uniform point in world
//!   waypoint     = point in annulus(initial, waypoint band)
//!   destination  = point in annulus(initial, destination band)
//!   start_time   = uniform in (epoch, epoch + window)
//!   speed        = uniform in [speed_min, speed_max)
//!   trajectory, ledger = generate(…, sim_end_time = epoch + window)
//!   id, payload  = random
//!   observer.on_object(&object)
//! ```
//!
//! Objects reach the observer in ascending index order whether or not the
//! `parallel` feature is on.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Generates batches of objects on Rayon's thread pool.   |
//! | `serde`    | `Serialize`/`Deserialize` on `FleetConfig`.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_fleet::{FleetBuilder, FleetConfig, NoopObserver};
//!
//! let fleet = FleetBuilder::new(FleetConfig::default()).build()?;
//! let summary = fleet.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod fleet;
pub mod object;
pub mod observer;
pub mod query;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use config::FleetConfig;
pub use error::{FleetError, FleetResult};
pub use fleet::{Fleet, FleetSummary};
pub use object::GeneratedObject;
pub use observer::{CollectingObserver, FleetObserver, NoopObserver};
pub use query::{SectionTraffic, section_traffic};
