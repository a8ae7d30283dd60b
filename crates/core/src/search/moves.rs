//! Admissible-move generation for one ship state.

use std::collections::BTreeSet;

use slotmap::SlotMap;

use super::blast::BlastZone;
use super::{NodeId, ShipState, StateKey};
use crate::belt::Belt;

/// Candidate accelerations, in selection priority order.
const ACCELERATIONS: [i64; 3] = [1, 0, -1];

/// Produce the admissible children of `parent_id`, allocated in the arena,
/// ordered by acceleration priority.
///
/// A candidate is dropped when its position is negative, when the blast
/// gate rejects it (the gate's side effect still happens), when its arrival
/// slot is occupied, or when its `(position, velocity)` key was already
/// visited. A candidate at or past the belt end is the finishing step: it is
/// returned alone and the remaining directions are never evaluated.
pub(in crate::search) fn candidate_moves(
    belt: &Belt,
    blast: &mut BlastZone,
    visited: &BTreeSet<StateKey>,
    arena: &mut SlotMap<NodeId, ShipState>,
    parent_id: NodeId,
) -> Vec<NodeId> {
    let parent = arena[parent_id];
    let mut out = Vec::new();

    for d in ACCELERATIONS {
        let next_pos = parent.position + parent.velocity + d;
        if next_pos < 0 {
            continue;
        }
        if !blast.check(next_pos, parent.time) {
            continue;
        }

        let child = ShipState {
            position: next_pos,
            velocity: parent.velocity + d,
            time: parent.time + 1,
            acceleration: Some(d),
            parent: Some(parent_id),
        };

        if next_pos >= belt.len() as i64 {
            // finishing step
            return vec![arena.insert(child)];
        }
        if belt.blocked_on_arrival(next_pos, parent.time + 1) {
            continue;
        }
        if visited.contains(&child.key()) {
            continue;
        }
        out.push(arena.insert(child));
    }
    out
}
