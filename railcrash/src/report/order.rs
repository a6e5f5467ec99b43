//! Deduplication and ordering of collision records.

use std::collections::HashSet;

use crate::collision::Collision;

/// Remove records describing the same event.
///
/// Records are canonical (see [`BranchCrash::new`](crate::collision::BranchCrash::new)),
/// so two records are the same event exactly when they compare equal: same
/// time, same unordered station pair and same unordered engine pair for
/// branch crashes. The first occurrence of each event is kept and the
/// relative order of the survivors is preserved.
pub fn dedup(collisions: Vec<Collision>) -> Vec<Collision> {
    if collisions.len() <= 1 {
        return collisions;
    }

    let mut seen = HashSet::with_capacity(collisions.len());
    let mut result = Vec::with_capacity(collisions.len());

    for collision in collisions {
        if !seen.contains(&collision) {
            seen.insert(collision.clone());
            result.push(collision);
        }
    }

    result
}

/// Sort collisions by time, earliest first.
///
/// At equal time branch crashes come before station crashes; otherwise the
/// sort is stable, so ties keep their detection order.
pub fn sort_by_time(mut collisions: Vec<Collision>) -> Vec<Collision> {
    collisions.sort_by_key(|c| (c.time(), c.kind_rank()));
    collisions
}
