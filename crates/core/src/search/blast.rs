//! Tracker for the destructive front expanding behind the ship.

/// How far the blast has advanced. Monotonically non-decreasing and private
/// to one search run.
#[derive(Clone, Debug)]
pub struct BlastZone {
    position: i64,
    interval: u64,
}

impl BlastZone {
    pub fn new(interval: u64) -> Self {
        Self { position: 0, interval }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Gate a candidate position at time `t`, advancing the front as a side
    /// effect of every call.
    ///
    /// Two quirks are load-bearing here. The rejection predicate requires
    /// `pos < 0`, which callers have already filtered out, so no candidate
    /// is ever rejected. And because this runs once per candidate direction
    /// rather than once per turn, the front can advance up to three
    /// intervals for a single time step.
    pub fn check(&mut self, pos: i64, t: u64) -> bool {
        if pos <= self.position && self.position != 0 && pos < 0 {
            return false;
        }
        if t > 0 && t % self.interval == 0 {
            self.position += self.interval as i64;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_rejects_non_negative_positions() {
        let mut blast = BlastZone::new(2);
        for t in 0..20 {
            for pos in 0..5 {
                assert!(blast.check(pos, t), "pos {pos} at t {t} should pass the gate");
            }
        }
    }

    #[test]
    fn does_not_advance_at_time_zero() {
        let mut blast = BlastZone::new(2);
        blast.check(1, 0);
        blast.check(0, 0);
        assert_eq!(blast.position(), 0);
    }

    #[test]
    fn advances_once_per_call_at_interval_multiples() {
        let mut blast = BlastZone::new(2);
        // three candidate directions checked for the same time step
        blast.check(3, 2);
        blast.check(2, 2);
        blast.check(1, 2);
        assert_eq!(blast.position(), 6, "front advances per call, not per turn");
    }

    #[test]
    fn off_interval_times_leave_the_front_alone() {
        let mut blast = BlastZone::new(3);
        blast.check(4, 1);
        blast.check(4, 2);
        blast.check(4, 4);
        assert_eq!(blast.position(), 0);
        blast.check(4, 3);
        assert_eq!(blast.position(), 3);
    }
}
