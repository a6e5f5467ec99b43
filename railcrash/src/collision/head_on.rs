//! Head-on collisions inside a branch.
//!
//! Two engines collide head-on when they traverse the same branch in
//! opposite directions and their occupancy intervals overlap. Meeting
//! exactly at an endpoint (one departs as the other arrives) counts. The
//! engines meet halfway between the first one's departure and the second
//! one's arrival.

use std::collections::BTreeMap;

use tracing::debug;

use super::{BranchCrash, Collision, CollisionPolicy, DetectorConfig};
use crate::domain::{SimTime, StationId, branch_key};
use crate::report::dedup;
use crate::timeline::{BranchPass, Timetable};

/// Returns the crash between `p` and `q`, if they meet head-on.
///
/// Symmetric: `crash_between(p, q) == crash_between(q, p)`. Both passes
/// cover the same branch and so take the same time, which makes the two
/// midpoints coincide.
pub fn crash_between(p: &BranchPass, q: &BranchPass) -> Option<BranchCrash> {
    let opposite = p.from == q.to && p.to == q.from;
    let overlapping = p.depart <= q.arrive && p.arrive >= q.depart;

    if p.engine != q.engine && opposite && overlapping {
        Some(BranchCrash::new(
            p.from,
            p.to,
            p.engine,
            q.engine,
            SimTime::midpoint(p.depart, q.arrive),
        ))
    } else {
        None
    }
}

/// Head-on policy.
///
/// Passes are grouped by branch first, so only passes that share a branch
/// are compared. The result equals a full pairwise scan over all passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadOn;

impl CollisionPolicy for HeadOn {
    fn name(&self) -> &'static str {
        "head-on"
    }

    fn detect(&self, timetable: &Timetable, _config: &DetectorConfig) -> Vec<Collision> {
        let mut by_branch: BTreeMap<(StationId, StationId), Vec<&BranchPass>> = BTreeMap::new();
        for pass in timetable.passes() {
            by_branch
                .entry(branch_key(pass.from, pass.to))
                .or_default()
                .push(pass);
        }

        let mut found = Vec::new();
        for passes in by_branch.values() {
            for (i, p) in passes.iter().enumerate() {
                // Only one of (p, q) / (q, p) is needed; the rule is symmetric.
                for q in &passes[i + 1..] {
                    if let Some(crash) = crash_between(p, q) {
                        found.push(Collision::Branch(crash));
                    }
                }
            }
        }

        let collisions = dedup(found);
        debug!(
            branches = by_branch.len(),
            passes = timetable.pass_count(),
            collisions = collisions.len(),
            "head-on scan complete"
        );
        collisions
    }
}
