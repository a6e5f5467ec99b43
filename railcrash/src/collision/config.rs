//! Detector configuration.

use std::fmt;
use std::str::FromStr;

/// Which collision policies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicySelection {
    /// Head-on meetings inside a branch.
    #[default]
    HeadOn,
    /// Simultaneous arrivals at a station.
    Station,
    /// Both policies. The report is the union of each policy's own
    /// deduplicated output, ordered by time with branch crashes first at
    /// equal time.
    Both,
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collision policy '{0}' (expected head-on, station or both)")]
pub struct UnknownPolicy(String);

impl FromStr for PolicySelection {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head-on" | "branch" => Ok(PolicySelection::HeadOn),
            "station" => Ok(PolicySelection::Station),
            "both" => Ok(PolicySelection::Both),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicySelection::HeadOn => "head-on",
            PolicySelection::Station => "station",
            PolicySelection::Both => "both",
        })
    }
}

/// Configuration parameters for collision detection.
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    /// Policies to run.
    pub policy: PolicySelection,

    /// Let engines whose route is a single station take part in station
    /// collisions. They sit at their station at time 0 and never move.
    pub include_stationary: bool,
}

impl DetectorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(policy: PolicySelection, include_stationary: bool) -> Self {
        Self {
            policy,
            include_stationary,
        }
    }
}
