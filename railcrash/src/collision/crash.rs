//! Collision records.

use serde::Serialize;

use crate::domain::{EngineId, SimTime, StationId, branch_key};

/// Two engines meeting head-on inside a branch.
///
/// Both pairs are stored in ascending order, so two records describing the
/// same event compare equal regardless of which pass was seen first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BranchCrash {
    pub stations: (StationId, StationId),
    pub engines: (EngineId, EngineId),
    pub time: SimTime,
}

impl BranchCrash {
    /// Create a record, normalizing both unordered pairs.
    pub fn new(a: StationId, b: StationId, e1: EngineId, e2: EngineId, time: SimTime) -> Self {
        Self {
            stations: branch_key(a, b),
            engines: if e1 <= e2 { (e1, e2) } else { (e2, e1) },
            time,
        }
    }
}

/// Two or more engines at the same station at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationCrash {
    pub station: StationId,
    pub time: SimTime,
    /// Ascending, at least two.
    pub engines: Vec<EngineId>,
}

/// A collision found by one of the detection policies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Collision {
    Branch(BranchCrash),
    Station(StationCrash),
}

impl Collision {
    /// When the collision happens.
    pub fn time(&self) -> SimTime {
        match self {
            Collision::Branch(c) => c.time,
            Collision::Station(c) => c.time,
        }
    }

    /// Tie-break rank at equal time: branch crashes first.
    pub(crate) fn kind_rank(&self) -> u8 {
        match self {
            Collision::Branch(_) => 0,
            Collision::Station(_) => 1,
        }
    }
}

impl From<BranchCrash> for Collision {
    fn from(c: BranchCrash) -> Self {
        Collision::Branch(c)
    }
}

impl From<StationCrash> for Collision {
    fn from(c: StationCrash) -> Self {
        Collision::Station(c)
    }
}
