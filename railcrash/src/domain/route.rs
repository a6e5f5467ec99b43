//! Per-engine routes.

use std::collections::BTreeMap;

use super::{ConfigError, EngineId, Network, StationId, lowest_absent};

/// The fixed route of every engine, validated against a [`Network`].
///
/// Engines are numbered `[0, engine_count)` and each must end up with exactly
/// one route before the registry is usable (see [`RouteRegistry::validate`]).
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    engine_count: u32,
    /// Only engines that have been given a route.
    routes: BTreeMap<EngineId, Vec<StationId>>,
}

impl RouteRegistry {
    /// Create a registry for `engine_count` engines, none of them routed yet.
    pub fn new(engine_count: u32) -> Result<Self, ConfigError> {
        if engine_count == 0 {
            return Err(ConfigError::EngineCount(engine_count));
        }

        Ok(Self {
            engine_count,
            routes: BTreeMap::new(),
        })
    }

    /// Assign `stations` as the route of `engine`.
    ///
    /// Every consecutive pair of stations must be joined by a branch of
    /// `network`, so the network must already hold all of its branches.
    /// A single-station route is legal; it never traverses a branch.
    pub fn add_route(
        &mut self,
        network: &Network,
        engine: EngineId,
        stations: Vec<StationId>,
    ) -> Result<(), ConfigError> {
        if engine.get() >= self.engine_count {
            return Err(ConfigError::EngineOutOfRange {
                engine,
                engine_count: self.engine_count,
            });
        }
        if self.routes.contains_key(&engine) {
            return Err(ConfigError::DuplicateRoute(engine));
        }
        if stations.is_empty() {
            return Err(ConfigError::EmptyRoute(engine));
        }
        if network.branch_count() == 0 {
            return Err(ConfigError::NoBranches);
        }

        for &station in &stations {
            network.check_station(station)?;
        }
        for pair in stations.windows(2) {
            if network.branch_length(pair[0], pair[1]).is_none() {
                return Err(ConfigError::MissingBranch {
                    engine,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }

        self.routes.insert(engine, stations);
        Ok(())
    }

    /// The stations `engine` visits, in order.
    ///
    /// Empty if the engine has no route (or is out of range).
    pub fn route(&self, engine: EngineId) -> &[StationId] {
        self.routes.get(&engine).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if every engine has a route.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Fail with `MissingRoute` for the lowest engine without a route.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = lowest_absent(self.routes.keys().map(|e| e.get()));
        if missing < u64::from(self.engine_count) {
            // Below engine_count, so it fits in u32
            Err(ConfigError::MissingRoute(EngineId::new(missing as u32)))
        } else {
            Ok(())
        }
    }

    /// Number of engines.
    pub fn engine_count(&self) -> u32 {
        self.engine_count
    }

    /// Routed engines and their routes, ascending by engine id.
    pub fn iter(&self) -> impl Iterator<Item = (EngineId, &[StationId])> + '_ {
        self.routes
            .iter()
            .map(|(&engine, route)| (engine, route.as_slice()))
    }
}
