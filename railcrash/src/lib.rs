//! Railway collision simulator.
//!
//! Models a railway network of stations joined by single-track branches,
//! runs every engine along its fixed route at unit speed, and reports each
//! unsafe encounter between two engines, earliest first.

pub mod cli;
pub mod collision;
pub mod domain;
pub mod loader;
pub mod report;
pub mod timeline;
