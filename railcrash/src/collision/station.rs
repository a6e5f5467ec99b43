//! Simultaneous arrivals at a station.
//!
//! Every engine is present at its start station at time 0 and at each
//! station its route reaches, at the accumulated arrival time. Any station
//! holding two or more engines at the same instant is a collision. Meetings
//! inside a branch are not seen by this policy.

use tracing::debug;

use super::{Collision, CollisionPolicy, DetectorConfig, StationCrash};
use crate::timeline::{Arrival, Timetable};

/// Station policy.
///
/// Sorts all arrival events by `(time, station, engine)` and groups equal
/// `(time, station)` runs in one linear pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationArrival;

/// Group sorted arrivals into station crashes.
fn group_arrivals(arrivals: &[Arrival]) -> Vec<StationCrash> {
    arrivals
        .chunk_by(|a, b| a.time == b.time && a.station == b.station)
        .filter_map(|group| {
            let mut engines: Vec<_> = group.iter().map(|a| a.engine).collect();
            engines.dedup();
            (engines.len() >= 2).then(|| StationCrash {
                station: group[0].station,
                time: group[0].time,
                engines,
            })
        })
        .collect()
}

impl CollisionPolicy for StationArrival {
    fn name(&self) -> &'static str {
        "station"
    }

    fn detect(&self, timetable: &Timetable, config: &DetectorConfig) -> Vec<Collision> {
        let mut arrivals: Vec<Arrival> = timetable
            .engines()
            .iter()
            .filter(|t| config.include_stationary || !t.is_stationary())
            .flat_map(|t| t.arrivals())
            .collect();
        arrivals.sort_unstable();

        let collisions: Vec<Collision> = group_arrivals(&arrivals)
            .into_iter()
            .map(Collision::Station)
            .collect();

        debug!(
            arrivals = arrivals.len(),
            collisions = collisions.len(),
            include_stationary = config.include_stationary,
            "station scan complete"
        );
        collisions
    }
}
