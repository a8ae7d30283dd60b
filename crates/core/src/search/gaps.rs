//! Precomputation of impossible gaps: runs of slots no ship can ever occupy.

use crate::belt::Belt;

/// A contiguous run of positions that are never collision-free. Records are
/// emitted in ascending `start_index` order. The recorded bounds are wider
/// than the run itself: a bounded run of `k` unsafe slots starting at `s`
/// is recorded as `start_index = s - 1`, `length = k + 1`, so `start_index`
/// can be negative for a run touching the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapRecord {
    pub start_index: i64,
    pub length: u64,
}

/// Scan the belt once, left to right, for runs of permanently unsafe slots.
/// Only a cycle of 1 is permanently unsafe (occupied at every turn);
/// every other cycle has collision-free turns.
pub fn find_impossible_gaps(belt: &Belt) -> Vec<GapRecord> {
    let mut gaps = Vec::new();
    let mut streak: u64 = 0;

    for (i, slot) in belt.slots().iter().enumerate() {
        let safe = slot.cycle != 1;
        if !safe {
            streak += 1;
        } else if streak != 0 {
            gaps.push(GapRecord {
                start_index: i as i64 - (streak as i64 + 1),
                length: streak + 1,
            });
            streak = 0;
        }
    }
    if streak != 0 {
        // Trailing run reaching the belt end: anchored at its first cell.
        gaps.push(GapRecord {
            start_index: belt.len() as i64 - streak as i64,
            length: streak + 1,
        });
    }
    gaps
}
