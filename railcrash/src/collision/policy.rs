//! The collision policy abstraction.

use super::{Collision, DetectorConfig};
use crate::timeline::Timetable;

/// A definition of what counts as a collision.
///
/// The two policies answer different questions and are never merged into a
/// single check: [`HeadOn`](super::HeadOn) finds engines meeting inside a
/// branch, [`StationArrival`](super::StationArrival) finds engines present at
/// a station at the same instant.
pub trait CollisionPolicy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Find every collision in `timetable`, deduplicated.
    ///
    /// Output order is deterministic but not time-ordered; callers sort.
    fn detect(&self, timetable: &Timetable, config: &DetectorConfig) -> Vec<Collision>;
}
