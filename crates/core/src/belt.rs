//! Immutable description of the asteroid belt the ship must cross.

use std::fmt;

/// One belt position. The slot is physically occupied at turn `t`
/// exactly when `(offset + t) % cycle == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsteroidSlot {
    pub cycle: u64,
    pub offset: u64,
}

/// Ordered obstacle slots plus the blast advance interval.
/// Read-only for the duration of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Belt {
    slots: Vec<AsteroidSlot>,
    blast_interval: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum BeltError {
    /// A cycle of 0 makes the occupancy modulus undefined.
    ZeroCycle { index: usize },
    ZeroBlastInterval,
}

impl fmt::Display for BeltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeltError::ZeroCycle { index } => {
                write!(f, "asteroid {index} has t_per_asteroid_cycle 0")
            }
            BeltError::ZeroBlastInterval => write!(f, "t_per_blast_move must be at least 1"),
        }
    }
}

impl Belt {
    pub fn new(slots: Vec<AsteroidSlot>, blast_interval: u64) -> Result<Self, BeltError> {
        if blast_interval == 0 {
            return Err(BeltError::ZeroBlastInterval);
        }
        if let Some(index) = slots.iter().position(|slot| slot.cycle == 0) {
            return Err(BeltError::ZeroCycle { index });
        }
        Ok(Self { slots, blast_interval })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn blast_interval(&self) -> u64 {
        self.blast_interval
    }

    pub(crate) fn slots(&self) -> &[AsteroidSlot] {
        &self.slots
    }

    /// Whether a ship arriving at `pos` on turn `arrival` lands on an
    /// occupied slot. Callers guarantee `0 <= pos < len`.
    pub(crate) fn blocked_on_arrival(&self, pos: i64, arrival: u64) -> bool {
        let slot = self.arrival_slot(pos);
        (slot.offset + arrival) % slot.cycle == 0
    }

    // Occupancy lookups are 1-based, so position `p` reads slot `p - 1`;
    // position 0 wraps to the final slot.
    fn arrival_slot(&self, pos: i64) -> &AsteroidSlot {
        let len = self.slots.len();
        &self.slots[(pos as usize + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_cycle_before_search_begins() {
        let err = Belt::new(
            vec![AsteroidSlot { cycle: 2, offset: 0 }, AsteroidSlot { cycle: 0, offset: 1 }],
            2,
        )
        .unwrap_err();
        assert_eq!(err, BeltError::ZeroCycle { index: 1 });
    }

    #[test]
    fn rejects_zero_blast_interval() {
        let err = Belt::new(vec![], 0).unwrap_err();
        assert_eq!(err, BeltError::ZeroBlastInterval);
    }

    #[test]
    fn arrival_at_position_one_reads_the_first_slot() {
        let belt = Belt::new(
            vec![AsteroidSlot { cycle: 2, offset: 0 }, AsteroidSlot { cycle: 7, offset: 3 }],
            2,
        )
        .unwrap();
        // slot 0: occupied when t % 2 == 0
        assert!(belt.blocked_on_arrival(1, 2));
        assert!(!belt.blocked_on_arrival(1, 3));
    }

    #[test]
    fn arrival_at_position_zero_wraps_to_the_final_slot() {
        let belt = Belt::new(
            vec![AsteroidSlot { cycle: 2, offset: 0 }, AsteroidSlot { cycle: 7, offset: 3 }],
            2,
        )
        .unwrap();
        // final slot: occupied when (3 + t) % 7 == 0
        assert!(belt.blocked_on_arrival(0, 4));
        assert!(!belt.blocked_on_arrival(0, 5));
    }
}
