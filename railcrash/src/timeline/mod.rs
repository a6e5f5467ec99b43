//! Timeline construction.
//!
//! Converts each engine's route into the time intervals it spends on each
//! branch. Engines start at time 0 at the first station of their route, move
//! one distance unit per time unit and never wait, so a branch of length `n`
//! is occupied for exactly `n` time units.

use tracing::{trace, warn};

use crate::domain::{EngineId, Network, RouteRegistry, SimTime, StationId};

/// One engine traversing one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchPass {
    pub engine: EngineId,
    /// Station the engine departs from.
    pub from: StationId,
    /// Station the engine arrives at.
    pub to: StationId,
    /// Time of departure from `from`.
    pub depart: SimTime,
    /// Time of arrival at `to`.
    pub arrive: SimTime,
}

/// An engine present at a station at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arrival {
    // Field order gives the (time, station, engine) sort order.
    pub time: SimTime,
    pub station: StationId,
    pub engine: EngineId,
}

/// Build the branch passes of one engine's route.
///
/// For a route `[s0, s1, ..., sn]` this yields `n` passes, each departing
/// when the previous one arrived. A single-station route yields nothing.
///
/// Routes are expected to be validated against `network`. If a consecutive
/// pair has no branch anyway, the timeline stops at that point.
pub fn build_timeline(engine: EngineId, route: &[StationId], network: &Network) -> Vec<BranchPass> {
    let mut passes = Vec::with_capacity(route.len().saturating_sub(1));
    let mut clock = SimTime::ZERO;

    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let Some(length) = network.branch_length(from, to) else {
            warn!(
                engine = %engine,
                from = %from,
                to = %to,
                "route uses a missing branch, truncating timeline"
            );
            break;
        };

        let arrive = clock + length;
        passes.push(BranchPass {
            engine,
            from,
            to,
            depart: clock,
            arrive,
        });
        clock = arrive;
    }

    trace!(engine = %engine, passes = passes.len(), "built timeline");
    passes
}

/// Every station visit of one engine's route, including the start station at
/// time 0.
pub fn arrivals(engine: EngineId, route: &[StationId], network: &Network) -> Vec<Arrival> {
    let Some(&start) = route.first() else {
        return Vec::new();
    };

    let passes = build_timeline(engine, route, network);
    visits(engine, start, &passes)
}

/// Project passes onto the stations they arrive at, led by the start station.
fn visits(engine: EngineId, start: StationId, passes: &[BranchPass]) -> Vec<Arrival> {
    let mut out = Vec::with_capacity(passes.len() + 1);
    out.push(Arrival {
        time: SimTime::ZERO,
        station: start,
        engine,
    });
    out.extend(passes.iter().map(|p| Arrival {
        time: p.arrive,
        station: p.to,
        engine,
    }));
    out
}

/// The timeline of one engine.
#[derive(Debug, Clone)]
pub struct EngineTimeline {
    pub engine: EngineId,
    /// First station of the route.
    pub start: StationId,
    pub passes: Vec<BranchPass>,
}

impl EngineTimeline {
    /// Returns true if the engine never leaves its start station.
    pub fn is_stationary(&self) -> bool {
        self.passes.is_empty()
    }

    /// Every station visit, including the start station at time 0.
    pub fn arrivals(&self) -> Vec<Arrival> {
        visits(self.engine, self.start, &self.passes)
    }
}

/// Timelines of all engines, built once and then only read.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    engines: Vec<EngineTimeline>,
}

impl Timetable {
    /// Build the timeline of every routed engine.
    pub fn build(network: &Network, routes: &RouteRegistry) -> Self {
        let engines = routes
            .iter()
            .filter_map(|(engine, route)| {
                route.first().map(|&start| EngineTimeline {
                    engine,
                    start,
                    passes: build_timeline(engine, route, network),
                })
            })
            .collect();

        Self { engines }
    }

    /// Per-engine timelines, ascending by engine id.
    pub fn engines(&self) -> &[EngineTimeline] {
        &self.engines
    }

    /// All branch passes of all engines.
    pub fn passes(&self) -> impl Iterator<Item = &BranchPass> + '_ {
        self.engines.iter().flat_map(|t| t.passes.iter())
    }

    /// Total number of branch traversals across all engines.
    pub fn pass_count(&self) -> usize {
        self.engines.iter().map(|t| t.passes.len()).sum()
    }
}
