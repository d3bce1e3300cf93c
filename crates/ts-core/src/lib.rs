//! `ts-core`: foundational types for the `tracksynth` trajectory generator.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`geometry`]    | `Point`, `heading`, world bounds                          |
//! | [`section`]     | `Section` quadrant labels and the `classify` function     |
//! | [`time`]        | `Timestamp`, sampling cadence, `SimWindow`                |
//! | [`rng`]         | `ObjectRng` (per-object), `SimRng` (global)               |
//! | [`sampler`]     | Uniform world points and annulus rejection sampling       |
//! | [`ids`]         | `ObjectId`: random 32-character object identifiers       |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geometry;
pub mod ids;
pub mod rng;
pub mod sampler;
pub mod section;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geometry::{Point, WORLD_SIZE, heading};
pub use ids::ObjectId;
pub use rng::{ObjectRng, SimRng};
pub use sampler::{MAX_ANNULUS_ATTEMPTS, random_point_in_annulus, random_point_in_world};
pub use section::{SECTION_MIDLINE, Section, classify};
pub use time::{
    MS_PER_HOUR, MS_PER_SEC, SAMPLING_PERIOD_MS, SAMPLING_PERIOD_SECS, SimWindow, Timestamp,
};
