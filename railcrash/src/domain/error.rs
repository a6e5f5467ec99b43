//! Configuration error type.
//!
//! Every invariant violation found while loading or validating a network or
//! its routes is reported as a [`ConfigError`]. Validation fails fast: the
//! first violation aborts the run and no partial report is produced.

use super::{EngineId, StationId};

/// Which side of a station is missing a branch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Outgoing,
    Incoming,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Side::Outgoing => "outgoing",
            Side::Incoming => "incoming",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invalid network, route or input document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Network has fewer than two stations
    #[error("station count must be greater than 1, got {0}")]
    StationCount(u32),

    /// No engines to simulate
    #[error("engine count must be positive, got {0}")]
    EngineCount(u32),

    /// Branch length is zero or negative
    #[error("branch {from}-{to} must have a positive length, got {length}")]
    NonPositiveLength {
        from: StationId,
        to: StationId,
        length: i64,
    },

    /// Branch joins a station to itself
    #[error("branch from station {0} to itself")]
    SelfLoop(StationId),

    /// Station id outside `[0, station_count)`
    #[error("station {station} is out of range (station count is {station_count})")]
    StationOutOfRange { station: StationId, station_count: u32 },

    /// Station pair redefined with a different length
    #[error("branch {a}-{b} defined with length {requested}, but already has length {existing}")]
    AmbiguousBranch {
        a: StationId,
        b: StationId,
        existing: u32,
        requested: u32,
    },

    /// Network was given no branches at all
    #[error("network has no branches")]
    NoBranches,

    /// Strict check: station lacks an outgoing or incoming branch
    #[error("station {station} has no {side} branch")]
    StationNotConnected { station: StationId, side: Side },

    /// Engine id outside `[0, engine_count)`
    #[error("engine {engine} is out of range (engine count is {engine_count})")]
    EngineOutOfRange { engine: EngineId, engine_count: u32 },

    /// Second route given for the same engine
    #[error("engine {0} already has a route")]
    DuplicateRoute(EngineId),

    /// Route lists no stations
    #[error("route of engine {0} has no stations")]
    EmptyRoute(EngineId),

    /// Consecutive route stations are not joined by a branch
    #[error("route of engine {engine} uses missing branch {from}-{to}")]
    MissingBranch {
        engine: EngineId,
        from: StationId,
        to: StationId,
    },

    /// Engine was never given a route
    #[error("engine {0} has no route")]
    MissingRoute(EngineId),

    /// Required attribute absent from an input element
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// Attribute value is not an integer
    #[error("<{element}> attribute '{attribute}' is not an integer: '{value}'")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// Attribute value does not fit the expected range
    #[error("<{element}> attribute '{attribute}' is out of range: {value}")]
    OutOfRange {
        element: &'static str,
        attribute: &'static str,
        value: i64,
    },

    /// Input is not well-formed or does not match the document layout
    #[error("malformed input document: {0}")]
    Xml(String),

    /// Input file could not be read
    #[error("cannot read {path}: {message}")]
    Read { path: String, message: String },
}
