//! Input document loading.
//!
//! The input is an XML document describing the network and the routes:
//!
//! ```xml
//! <network stationCount="3" engineCount="2">
//!   <branch from="0" to="1" length="1"/>
//!   <branch from="1" to="2" length="1"/>
//!   <route engine="0"><track station="0"/><track station="1"/></route>
//!   <route engine="1"><track station="2"/><track station="1"/></route>
//! </network>
//! ```
//!
//! Attributes are deserialized as raw strings and converted here, so that a
//! missing or malformed value is reported as a [`ConfigError`] naming the
//! element and attribute. The loader only ever feeds the domain through
//! [`Network::add_branch`] and [`RouteRegistry::add_route`].

mod document;

use std::path::Path;

use tracing::debug;

use crate::collision::{Detector, DetectorConfig};
use crate::domain::{ConfigError, EngineId, Network, RouteRegistry, StationId, Strictness};
use crate::report::Report;

use document::{Document, RawBranch, RawRoute};

/// A validated network together with its validated routes.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub network: Network,
    pub routes: RouteRegistry,
}

impl Scenario {
    /// Run collision detection over this scenario.
    pub fn detect(&self, config: &DetectorConfig) -> Report {
        Detector::new(config.clone()).run(&self.network, &self.routes)
    }
}

/// Parse and validate a scenario from XML text.
pub fn load_str(xml: &str, strictness: Strictness) -> Result<Scenario, ConfigError> {
    let doc: Document =
        quick_xml::de::from_str(xml).map_err(|e| ConfigError::Xml(e.to_string()))?;
    build(doc, strictness)
}

/// Read, parse and validate a scenario from an XML file.
pub fn load_file(path: &Path, strictness: Strictness) -> Result<Scenario, ConfigError> {
    let xml = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = xml.len(), "read input document");
    load_str(&xml, strictness)
}

fn build(doc: Document, strictness: Strictness) -> Result<Scenario, ConfigError> {
    let station_count = u32_attr(doc.station_count.as_deref(), "network", "stationCount")?;
    let engine_count = u32_attr(doc.engine_count.as_deref(), "network", "engineCount")?;

    let mut network = Network::new(station_count)?;
    let mut routes = RouteRegistry::new(engine_count)?;

    for branch in &doc.branches {
        add_branch(&mut network, branch)?;
    }
    network.validate(strictness)?;

    for route in &doc.routes {
        add_route(&mut routes, &network, route)?;
    }
    routes.validate()?;

    debug!(
        stations = station_count,
        branches = network.branch_count(),
        engines = engine_count,
        ?strictness,
        "scenario loaded"
    );

    Ok(Scenario { network, routes })
}

fn add_branch(network: &mut Network, raw: &RawBranch) -> Result<(), ConfigError> {
    let from = StationId::new(u32_attr(raw.from.as_deref(), "branch", "from")?);
    let to = StationId::new(u32_attr(raw.to.as_deref(), "branch", "to")?);
    let length = int_attr(raw.length.as_deref(), "branch", "length")?;

    if length <= 0 {
        return Err(ConfigError::NonPositiveLength { from, to, length });
    }
    let length = u32::try_from(length).map_err(|_| ConfigError::OutOfRange {
        element: "branch",
        attribute: "length",
        value: length,
    })?;

    network.add_branch(from, to, length)
}

fn add_route(
    routes: &mut RouteRegistry,
    network: &Network,
    raw: &RawRoute,
) -> Result<(), ConfigError> {
    let engine = EngineId::new(u32_attr(raw.engine.as_deref(), "route", "engine")?);
    let stations = raw
        .tracks
        .iter()
        .map(|track| u32_attr(track.station.as_deref(), "track", "station").map(StationId::new))
        .collect::<Result<Vec<_>, _>>()?;

    routes.add_route(network, engine, stations)
}

/// Read a required integer attribute.
fn int_attr(
    value: Option<&str>,
    element: &'static str,
    attribute: &'static str,
) -> Result<i64, ConfigError> {
    let value = value.ok_or(ConfigError::MissingAttribute { element, attribute })?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAttribute {
            element,
            attribute,
            value: value.to_string(),
        })
}

/// Read a required non-negative integer attribute.
fn u32_attr(
    value: Option<&str>,
    element: &'static str,
    attribute: &'static str,
) -> Result<u32, ConfigError> {
    let value = int_attr(value, element, attribute)?;
    u32::try_from(value).map_err(|_| ConfigError::OutOfRange {
        element,
        attribute,
        value,
    })
}
