//! Collision detection.
//!
//! Engines' timelines are scanned by one or both [`CollisionPolicy`]
//! implementations. Each policy deduplicates its own output; the
//! [`Detector`] merges the selected policies' results into a time-ordered
//! [`Report`].

mod config;
mod crash;
mod head_on;
mod policy;
mod station;

use tracing::debug;

use crate::domain::{Network, RouteRegistry};
use crate::report::Report;
use crate::timeline::Timetable;

pub use config::{DetectorConfig, PolicySelection, UnknownPolicy};
pub use crash::{BranchCrash, Collision, StationCrash};
pub use head_on::{HeadOn, crash_between};
pub use policy::CollisionPolicy;
pub use station::StationArrival;

/// Runs the configured collision policies over a validated network and its
/// routes.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Create a detector.
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// The detector's configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The policies selected by the configuration, in reporting order.
    pub fn policies(&self) -> Vec<Box<dyn CollisionPolicy>> {
        match self.config.policy {
            PolicySelection::HeadOn => vec![Box::new(HeadOn)],
            PolicySelection::Station => vec![Box::new(StationArrival)],
            PolicySelection::Both => vec![Box::new(HeadOn), Box::new(StationArrival)],
        }
    }

    /// Detect collisions in an already built timetable.
    pub fn detect(&self, timetable: &Timetable) -> Report {
        let mut collisions = Vec::new();
        for policy in self.policies() {
            let found = policy.detect(timetable, &self.config);
            debug!(policy = policy.name(), collisions = found.len(), "policy finished");
            collisions.extend(found);
        }
        Report::new(collisions)
    }

    /// Build every engine's timeline and detect collisions.
    ///
    /// `network` and `routes` are expected to be validated.
    pub fn run(&self, network: &Network, routes: &RouteRegistry) -> Report {
        let timetable = Timetable::build(network, routes);
        debug!(
            engines = timetable.engines().len(),
            passes = timetable.pass_count(),
            policy = %self.config.policy,
            "timetable built"
        );
        self.detect(&timetable)
    }
}
