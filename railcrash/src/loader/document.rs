//! Serde model of the input document.
//!
//! Every attribute is optional text; presence and numeric format are checked
//! by the loader so errors can name the offending element.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct Document {
    #[serde(rename = "@stationCount")]
    pub station_count: Option<String>,
    #[serde(rename = "@engineCount")]
    pub engine_count: Option<String>,
    #[serde(rename = "branch", default)]
    pub branches: Vec<RawBranch>,
    #[serde(rename = "route", default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawBranch {
    #[serde(rename = "@from")]
    pub from: Option<String>,
    #[serde(rename = "@to")]
    pub to: Option<String>,
    #[serde(rename = "@length")]
    pub length: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawRoute {
    #[serde(rename = "@engine")]
    pub engine: Option<String>,
    #[serde(rename = "track", default)]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTrack {
    #[serde(rename = "@station")]
    pub station: Option<String>,
}
