use core::search::SearchError;
use core::{AsteroidSlot, Belt, Chart, EscapeSearch, plan_escape};

fn belt(slots: Vec<AsteroidSlot>, blast_interval: u64) -> Belt {
    Belt::new(slots, blast_interval).expect("scenario belt should validate")
}

#[test]
fn single_cycling_asteroid_is_escaped() {
    let chart = Chart::from_json_str(
        r#"{
            "asteroids": [{ "t_per_asteroid_cycle": 2, "offset": 0 }],
            "t_per_blast_move": 2
        }"#,
    )
    .expect("chart should parse");
    let belt = chart.into_belt().expect("belt should validate");

    let plan = plan_escape(&belt)
        .expect("search should stay within budget")
        .expect("launch position has an admissible move");
    assert!(!plan.accelerations.is_empty());
    assert!(plan.terminal_position >= 0);
    assert!(plan.escaped);
}

#[test]
fn empty_belt_escapes_on_the_first_expansion() {
    let belt = belt(vec![], 2);
    let plan = plan_escape(&belt)
        .expect("search should stay within budget")
        .expect("launch position has an admissible move");
    assert_eq!(plan.terminal_time, 1, "first move already clears a zero-length belt");
    assert!(plan.escaped);
}

#[test]
fn always_occupied_slot_is_routed_around_not_stalled_on() {
    let belt = belt(vec![AsteroidSlot { cycle: 1, offset: 0 }], 2);

    let mut search = EscapeSearch::new(&belt);
    assert_eq!(search.gaps().len(), 1);
    assert_eq!(search.gaps()[0].start_index, 0);

    let terminal = search
        .run()
        .expect("search should terminate, not stall against the impossible slot")
        .expect("launch position has an admissible move");
    let plan = search.plan(terminal);
    assert!(plan.escaped);
}

#[test]
fn unwinnable_belt_exhausts_the_expansion_budget() {
    // Every reachable arrival from rest lands on an occupied slot at turn 2,
    // so the open list keeps re-offering the same stationary candidate.
    let belt = belt(vec![AsteroidSlot { cycle: 3, offset: 1 }; 4], 2);
    let mut search = EscapeSearch::new(&belt);
    let result = search.run_with_budget(50);
    assert_eq!(result, Err(SearchError::ExpansionBudgetExhausted { expansions: 50 }));
}

#[test]
fn fully_blocked_launch_has_no_plan() {
    // Cycle-1 slots are occupied at every turn; neither holding still nor
    // advancing is admissible, so the root generates no candidates.
    let belt = belt(vec![AsteroidSlot { cycle: 1, offset: 0 }; 3], 2);
    let plan = plan_escape(&belt).expect("an empty open list is not an error");
    assert!(plan.is_none());
}
