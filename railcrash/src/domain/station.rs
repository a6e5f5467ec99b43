//! Station and engine identifiers.

use std::fmt;

use serde::Serialize;

/// A station in the network, identified by a small non-negative integer.
///
/// A `StationId` carries no range guarantee on its own: whether it lies in
/// `[0, station_count)` is checked by the [`Network`](super::Network) that
/// receives it.
///
/// # Examples
///
/// ```
/// use railcrash::domain::StationId;
///
/// let s = StationId::new(4);
/// assert_eq!(s.get(), 4);
/// assert_eq!(s.to_string(), "4");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Create a station id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An engine (simulated train). Each engine owns exactly one route.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EngineId(u32);

impl EngineId {
    /// Create an engine id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EngineId({})", self.0)
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The lowest id not produced by `sorted_ids`, which must be ascending and
/// free of duplicates.
pub(crate) fn lowest_absent(sorted_ids: impl IntoIterator<Item = u32>) -> u64 {
    let mut expected = 0u64;
    for id in sorted_ids {
        if u64::from(id) != expected {
            break;
        }
        expected += 1;
    }
    expected
}
