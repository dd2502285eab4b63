//! Identity reconciliation for layer and feature collections.
//!
//! Matches members of the prev and next collections by stable id and yields
//! the (prev, next) pairs the per-entity comparators diff. The two-pass walk
//! fixes the output order: removals and updates surface in prev order, pure
//! additions afterwards in next order, so repeated runs over the same
//! snapshots always produce the same commit sequence.

use std::collections::HashSet;

use crate::types::EntityId;

/// Reconcile two collections by id.
///
/// Every id appearing on either side is paired exactly once. An entity
/// without an id can never be matched and always surfaces as a one-sided
/// pair (pure add or pure remove).
pub(crate) fn reconcile<'a, E>(
    prev: &'a [E],
    next: &'a [E],
    id_of: impl Fn(&E) -> Option<&EntityId>,
) -> Vec<(Option<&'a E>, Option<&'a E>)> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut pairs = Vec::with_capacity(prev.len() + next.len());

    for entity in prev {
        match id_of(entity) {
            Some(id) => {
                if !visited.insert(id.as_str()) {
                    continue;
                }
                let matched = next.iter().find(|candidate| id_of(candidate) == Some(id));
                pairs.push((Some(entity), matched));
            }
            None => pairs.push((Some(entity), None)),
        }
    }

    for entity in next {
        match id_of(entity) {
            Some(id) => {
                if !visited.insert(id.as_str()) {
                    continue;
                }
                // By construction nothing in prev carries this id, but a
                // duplicate-id prev entry makes the lookup still well-defined.
                let matched = prev.iter().find(|candidate| id_of(candidate) == Some(id));
                pairs.push((matched, Some(entity)));
            }
            None => pairs.push((None, Some(entity))),
        }
    }

    pairs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
