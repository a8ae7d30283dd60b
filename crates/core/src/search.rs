//! Heuristic-guided expansion loop that searches for an escape path.
//!
//! The engine owns all per-search state (arena, visited set, open list,
//! blast tracker, gap list); nothing is shared between searches, so two
//! runs on the same belt are fully independent and deterministic.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::debug;
use slotmap::{SlotMap, new_key_type};

use crate::belt::Belt;

mod blast;
mod gaps;
mod moves;
mod path;

pub use blast::BlastZone;
pub use gaps::{GapRecord, find_impossible_gaps};
pub use path::EscapePlan;

use moves::candidate_moves;

new_key_type! {
    pub struct NodeId;
}

/// Dedup key for visitation: time and acceleration are deliberately
/// excluded, which is what keeps the search finite. A state reachable at
/// two different times is merged into one node for visitation purposes.
pub(crate) type StateKey = (i64, i64);

/// One node of the search tree. Parent links are arena keys, so the tree
/// is structurally acyclic (a child's `time` strictly exceeds its parent's).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipState {
    pub position: i64,
    pub velocity: i64,
    pub time: u64,
    /// The acceleration that produced this state; `None` only for the root.
    pub acceleration: Option<i64>,
    pub parent: Option<NodeId>,
}

impl ShipState {
    pub(crate) fn key(&self) -> StateKey {
        (self.position, self.velocity)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The expansion loop hit its safety budget without reaching the escape
    /// boundary. The open list never shrinks, so a belt with no way out can
    /// otherwise spin forever.
    ExpansionBudgetExhausted { expansions: u64 },
}

pub const DEFAULT_EXPANSION_BUDGET: u64 = 1_000_000;

pub struct EscapeSearch<'a> {
    belt: &'a Belt,
    blast: BlastZone,
    arena: SlotMap<NodeId, ShipState>,
    visited: BTreeSet<StateKey>,
    open: Vec<NodeId>,
    gaps: Vec<GapRecord>,
    gap_index: usize,
    equilibrium: i64,
    root: NodeId,
}

impl<'a> EscapeSearch<'a> {
    pub fn new(belt: &'a Belt) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(ShipState {
            position: 0,
            velocity: 0,
            time: 0,
            acceleration: None,
            parent: None,
        });
        Self {
            belt,
            blast: BlastZone::new(belt.blast_interval()),
            arena,
            visited: BTreeSet::new(),
            open: Vec::new(),
            gaps: find_impossible_gaps(belt),
            gap_index: 0,
            equilibrium: 0,
            root,
        }
    }

    pub fn run(&mut self) -> Result<Option<NodeId>, SearchError> {
        self.run_with_budget(DEFAULT_EXPANSION_BUDGET)
    }

    /// Expand candidates until a chosen child crosses the stop boundary.
    ///
    /// Returns the chosen terminal node, or the last chosen child if the
    /// open list runs dry, or `None` when the root has no admissible move.
    /// Selection follows the equilibrium pivot: first candidate when the
    /// slack is negative, last when positive, the middle of the whole
    /// accumulated list when zero. Chosen candidates are never removed, so
    /// the middle index drifts as the list grows.
    pub fn run_with_budget(&mut self, budget: u64) -> Result<Option<NodeId>, SearchError> {
        self.open = candidate_moves(
            self.belt,
            &mut self.blast,
            &self.visited,
            &mut self.arena,
            self.root,
        );

        let mut expansions = 0u64;
        let mut last_chosen = None;

        while !self.open.is_empty() {
            if expansions >= budget {
                return Err(SearchError::ExpansionBudgetExhausted { expansions });
            }
            expansions += 1;

            // Sentinel gap of length 0 when the belt has no impossible runs:
            // no steering bias, equilibrium tracks raw velocity.
            let active_gap = if self.gaps.is_empty() {
                GapRecord { start_index: 0, length: 0 }
            } else {
                self.gaps[self.gap_index]
            };

            let child_id = match select_index(self.equilibrium, self.open.len()) {
                Some(index) => self.open[index],
                // Selection found nothing to pivot on: take the furthest
                // accumulated candidate instead.
                None => match self.open.pop() {
                    Some(id) => id,
                    None => break,
                },
            };
            let child = self.arena[child_id];

            // Stop boundary. This compares against len - 1, not len, so the
            // loop can stop one slot before the finishing step in move
            // generation would; `EscapePlan::escaped` tells the cases apart.
            if child.position >= self.belt.len() as i64 - 1 {
                return Ok(Some(child_id));
            }

            self.visited.insert(child.key());

            if !self.gaps.is_empty()
                && child.position >= active_gap.start_index
                && self.gap_index < self.gaps.len() - 1
            {
                self.gap_index += 1;
            }

            debug!(
                "expand pos={} v={} t={} gap_len={} equilibrium={}",
                child.position, child.velocity, child.time, active_gap.length, self.equilibrium
            );

            // Recomputed slack relative to the governing gap size steers the
            // next selection.
            self.equilibrium = child.velocity - active_gap.length as i64;

            let mut children = candidate_moves(
                self.belt,
                &mut self.blast,
                &self.visited,
                &mut self.arena,
                child_id,
            );
            self.open.append(&mut children);
            last_chosen = Some(child_id);
        }

        Ok(last_chosen)
    }

    /// Walk the terminal's parent chain into an ordered acceleration plan.
    pub fn plan(&self, terminal: NodeId) -> EscapePlan {
        path::reconstruct_plan(self.belt, &self.arena, terminal)
    }

    pub fn state(&self, id: NodeId) -> &ShipState {
        &self.arena[id]
    }

    pub fn states(&self) -> impl Iterator<Item = &ShipState> {
        self.arena.values()
    }

    pub fn gaps(&self) -> &[GapRecord] {
        &self.gaps
    }
}

fn select_index(equilibrium: i64, open_len: usize) -> Option<usize> {
    if open_len == 0 {
        return None;
    }
    match equilibrium.cmp(&0) {
        Ordering::Less => Some(0),
        Ordering::Greater => Some(open_len - 1),
        Ordering::Equal => Some(open_len / 2),
    }
}

/// Run a whole search on `belt` and reconstruct the resulting plan.
/// `None` means the launch position had no admissible first move.
pub fn plan_escape(belt: &Belt) -> Result<Option<EscapePlan>, SearchError> {
    let mut search = EscapeSearch::new(belt);
    let terminal = search.run()?;
    Ok(terminal.map(|id| search.plan(id)))
}
