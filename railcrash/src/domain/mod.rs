//! Domain types for the collision simulator.
//!
//! The network and route tables enforce their invariants as they are
//! populated, so code that receives a validated [`Network`] and
//! [`RouteRegistry`] can trust every route to run over existing branches.

mod error;
mod network;
mod route;
mod station;
mod time;

pub use error::{ConfigError, Side};
pub use network::{Branch, Network, Strictness};
pub(crate) use network::branch_key;
pub use route::RouteRegistry;
pub use station::{EngineId, StationId};
pub(crate) use station::lowest_absent;
pub use time::SimTime;
