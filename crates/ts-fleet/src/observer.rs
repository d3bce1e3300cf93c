//! Fleet observer trait for progress reporting and data collection.

use crate::{FleetConfig, FleetSummary, GeneratedObject};

/// Callbacks invoked by [`Fleet::run`][crate::Fleet::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Persistence backends hook in here (see
/// `ts-output`), which keeps the generation loop unaware of storage formats.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl FleetObserver for Progress {
///     fn on_object(&mut self, object: &GeneratedObject) {
///         println!("{} → {} states", object.id, object.trajectory.len());
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called once before the first object is generated.
    fn on_run_start(&mut self, _config: &FleetConfig) {}

    /// Called for every object, in ascending `index` order.
    fn on_object(&mut self, _object: &GeneratedObject) {}

    /// Called once after the last object.
    fn on_run_end(&mut self, _summary: &FleetSummary) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}

/// Keeps every generated object in memory, e.g. for
/// [`section_traffic`][crate::section_traffic] queries.
#[derive(Default)]
pub struct CollectingObserver {
    pub objects: Vec<GeneratedObject>,
}

impl FleetObserver for CollectingObserver {
    fn on_object(&mut self, object: &GeneratedObject) {
        self.objects.push(object.clone());
    }
}
