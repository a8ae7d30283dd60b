//! Reconstruction of the acceleration sequence from a terminal state.

use slotmap::SlotMap;

use super::{NodeId, ShipState};
use crate::belt::Belt;

/// The boundary-facing result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapePlan {
    /// Accelerations in root-to-terminal order, each in {-1, 0, 1}.
    pub accelerations: Vec<i64>,
    /// True when the terminal position reached or passed the belt end.
    /// False means the search stopped at the one-slot-early loop boundary.
    pub escaped: bool,
    pub terminal_position: i64,
    pub terminal_time: u64,
}

pub(in crate::search) fn reconstruct_plan(
    belt: &Belt,
    arena: &SlotMap<NodeId, ShipState>,
    terminal: NodeId,
) -> EscapePlan {
    let end = arena[terminal];
    let mut accelerations = Vec::new();

    let mut cursor = end;
    while let Some(parent_id) = cursor.parent {
        if let Some(d) = cursor.acceleration {
            accelerations.push(d);
        }
        cursor = arena[parent_id];
    }
    accelerations.reverse();

    EscapePlan {
        accelerations,
        escaped: end.position >= belt.len() as i64,
        terminal_position: end.position,
        terminal_time: end.time,
    }
}
