//! Railway network: stations joined by single-track branches.

use std::collections::{BTreeSet, HashMap};

use super::{ConfigError, Side, StationId, lowest_absent};

/// How strictly [`Network::validate`] checks station connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Only require at least one branch.
    #[default]
    Lenient,
    /// Also require every station to appear as the `from` endpoint of some
    /// declared branch and as the `to` endpoint of some declared branch.
    Strict,
}

/// A single-track branch between two distinct stations.
///
/// Branches are undirected, so the pair is stored normalized with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Branch {
    pub a: StationId,
    pub b: StationId,
    pub length: u32,
}

/// Normalize an unordered station pair so the smaller id comes first.
pub(crate) fn branch_key(a: StationId, b: StationId) -> (StationId, StationId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// The station graph.
///
/// Built once from input, then only read. Lookups are symmetric: a branch
/// added as `a -> b` is traversable as `b -> a` in the same time.
#[derive(Debug, Clone)]
pub struct Network {
    station_count: u32,

    /// Branch lengths keyed by the normalized station pair.
    branches: HashMap<(StationId, StationId), u32>,

    /// Stations seen as the `from` endpoint of a declared branch.
    has_outgoing: BTreeSet<StationId>,

    /// Stations seen as the `to` endpoint of a declared branch.
    has_incoming: BTreeSet<StationId>,
}

impl Network {
    /// Create an empty network with `station_count` stations.
    ///
    /// Fails if there are fewer than two stations.
    pub fn new(station_count: u32) -> Result<Self, ConfigError> {
        if station_count <= 1 {
            return Err(ConfigError::StationCount(station_count));
        }

        Ok(Self {
            station_count,
            branches: HashMap::new(),
            has_outgoing: BTreeSet::new(),
            has_incoming: BTreeSet::new(),
        })
    }

    /// Add a branch between `from` and `to`.
    ///
    /// Adding the same pair again with the same length is a no-op; with a
    /// different length it is an error.
    pub fn add_branch(
        &mut self,
        from: StationId,
        to: StationId,
        length: u32,
    ) -> Result<(), ConfigError> {
        if length == 0 {
            return Err(ConfigError::NonPositiveLength {
                from,
                to,
                length: 0,
            });
        }
        if from == to {
            return Err(ConfigError::SelfLoop(from));
        }
        self.check_station(from)?;
        self.check_station(to)?;

        let (a, b) = branch_key(from, to);
        match self.branches.get(&(a, b)) {
            Some(&existing) if existing != length => {
                return Err(ConfigError::AmbiguousBranch {
                    a,
                    b,
                    existing,
                    requested: length,
                });
            }
            Some(_) => {}
            None => {
                self.branches.insert((a, b), length);
            }
        }

        self.has_outgoing.insert(from);
        self.has_incoming.insert(to);
        Ok(())
    }

    /// Length of the branch between `a` and `b`, in either direction.
    ///
    /// Returns `None` if there is no direct branch.
    pub fn branch_length(&self, a: StationId, b: StationId) -> Option<u32> {
        self.branches.get(&branch_key(a, b)).copied()
    }

    /// Returns true if `station` is in `[0, station_count)`.
    pub fn contains(&self, station: StationId) -> bool {
        station.get() < self.station_count
    }

    /// Fail with `StationOutOfRange` unless `station` belongs to this network.
    pub fn check_station(&self, station: StationId) -> Result<(), ConfigError> {
        if self.contains(station) {
            Ok(())
        } else {
            Err(ConfigError::StationOutOfRange {
                station,
                station_count: self.station_count,
            })
        }
    }

    /// Returns true if the network is ready for use.
    pub fn is_complete(&self, strictness: Strictness) -> bool {
        self.validate(strictness).is_ok()
    }

    /// Check the completeness invariants, reporting the first violation.
    pub fn validate(&self, strictness: Strictness) -> Result<(), ConfigError> {
        if self.branches.is_empty() {
            return Err(ConfigError::NoBranches);
        }

        if strictness == Strictness::Strict {
            // Lowest station missing each side; outgoing wins a tie
            let outgoing = lowest_absent(self.has_outgoing.iter().map(|s| s.get()));
            let incoming = lowest_absent(self.has_incoming.iter().map(|s| s.get()));
            let (missing, side) = if outgoing <= incoming {
                (outgoing, Side::Outgoing)
            } else {
                (incoming, Side::Incoming)
            };

            if missing < u64::from(self.station_count) {
                return Err(ConfigError::StationNotConnected {
                    // Below station_count, so it fits in u32
                    station: StationId::new(missing as u32),
                    side,
                });
            }
        }

        Ok(())
    }

    /// Number of stations.
    pub fn station_count(&self) -> u32 {
        self.station_count
    }

    /// Number of distinct branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// All branches, in no particular order.
    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        self.branches
            .iter()
            .map(|(&(a, b), &length)| Branch { a, b, length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(id: u32) -> StationId {
        StationId::new(id)
    }

    #[test]
    fn rejects_small_station_count() {
        assert_eq!(Network::new(0).unwrap_err(), ConfigError::StationCount(0));
        assert_eq!(Network::new(1).unwrap_err(), ConfigError::StationCount(1));
        assert!(Network::new(2).is_ok());
    }

    #[test]
    fn add_and_lookup_symmetric() {
        let mut net = Network::new(3).unwrap();
        net.add_branch(s(2), s(0), 5).unwrap();

        assert_eq!(net.branch_length(s(0), s(2)), Some(5));
        assert_eq!(net.branch_length(s(2), s(0)), Some(5));
        assert_eq!(net.branch_length(s(0), s(1)), None);
        assert_eq!(net.branch_count(), 1);
    }

    #[test]
    fn rejects_zero_length() {
        let mut net = Network::new(3).unwrap();
        let err = net.add_branch(s(0), s(1), 0).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveLength { .. }));
    }

    #[test]
    fn rejects_self_loop() {
        let mut net = Network::new(3).unwrap();
        assert_eq!(
            net.add_branch(s(1), s(1), 2).unwrap_err(),
            ConfigError::SelfLoop(s(1))
        );
    }

    #[test]
    fn rejects_out_of_range_station() {
        let mut net = Network::new(3).unwrap();
        assert_eq!(
            net.add_branch(s(0), s(3), 2).unwrap_err(),
            ConfigError::StationOutOfRange {
                station: s(3),
                station_count: 3
            }
        );
    }

    #[test]
    fn same_branch_twice_is_noop() {
        let mut net = Network::new(3).unwrap();
        net.add_branch(s(0), s(1), 4).unwrap();
        net.add_branch(s(1), s(0), 4).unwrap();

        assert_eq!(net.branch_count(), 1);
        assert_eq!(net.branch_length(s(0), s(1)), Some(4));
    }

    #[test]
    fn ambiguous_redefinition_fails() {
        let mut net = Network::new(3).unwrap();
        net.add_branch(s(0), s(1), 4).unwrap();
        let err = net.add_branch(s(1), s(0), 6).unwrap_err();

        assert_eq!(
            err,
            ConfigError::AmbiguousBranch {
                a: s(0),
                b: s(1),
                existing: 4,
                requested: 6
            }
        );
        // Original length survives
        assert_eq!(net.branch_length(s(0), s(1)), Some(4));
    }

    #[test]
    fn empty_network_is_incomplete() {
        let net = Network::new(3).unwrap();
        assert!(!net.is_complete(Strictness::Lenient));
        assert_eq!(
            net.validate(Strictness::Lenient).unwrap_err(),
            ConfigError::NoBranches
        );
    }

    #[test]
    fn lenient_accepts_dangling_station() {
        let mut net = Network::new(3).unwrap();
        net.add_branch(s(0), s(1), 1).unwrap();
        assert!(net.is_complete(Strictness::Lenient));
    }

    #[test]
    fn strict_requires_both_sides() {
        let mut net = Network::new(3).unwrap();
        net.add_branch(s(0), s(1), 1).unwrap();
        net.add_branch(s(1), s(2), 1).unwrap();

        // Station 0 is never a `to` endpoint
        assert_eq!(
            net.validate(Strictness::Strict).unwrap_err(),
            ConfigError::StationNotConnected {
                station: s(0),
                side: Side::Incoming
            }
        );

        net.add_branch(s(2), s(0), 1).unwrap();
        assert!(net.is_complete(Strictness::Strict));
    }

    #[test]
    fn strict_reports_missing_outgoing() {
        let mut net = Network::new(2).unwrap();
        net.add_branch(s(1), s(0), 1).unwrap();
        assert_eq!(
            net.validate(Strictness::Strict).unwrap_err(),
            ConfigError::StationNotConnected {
                station: s(0),
                side: Side::Outgoing
            }
        );
    }

    #[test]
    fn huge_station_count_is_cheap() {
        let mut net = Network::new(u32::MAX).unwrap();
        net.add_branch(s(0), s(1), 1).unwrap();
        net.add_branch(s(1), s(0), 1).unwrap();

        assert!(net.is_complete(Strictness::Lenient));
        assert_eq!(
            net.validate(Strictness::Strict).unwrap_err(),
            ConfigError::StationNotConnected {
                station: s(2),
                side: Side::Outgoing
            }
        );
        assert!(net.contains(s(u32::MAX - 1)));
    }

    #[test]
    fn strict_reports_lowest_station_first() {
        // Station 1 lacks an incoming branch, station 2 lacks an outgoing one
        let mut net = Network::new(3).unwrap();
        net.add_branch(s(0), s(2), 1).unwrap();
        net.add_branch(s(1), s(0), 1).unwrap();

        assert_eq!(
            net.validate(Strictness::Strict).unwrap_err(),
            ConfigError::StationNotConnected {
                station: s(1),
                side: Side::Incoming
            }
        );
    }

    #[test]
    fn branches_are_normalized() {
        let mut net = Network::new(4).unwrap();
        net.add_branch(s(3), s(1), 2).unwrap();
        let branches: Vec<_> = net.branches().collect();
        assert_eq!(
            branches,
            vec![Branch {
                a: s(1),
                b: s(3),
                length: 2
            }]
        );
    }
}
