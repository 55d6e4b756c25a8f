//! Tests for the simulation engine: route walking, clock commands,
//! and waypoint mutation.

use sandtable_core::commands::SimCommand;
use sandtable_core::constants::MOVE_SPEED_KPH;
use sandtable_core::enums::{Side, SimStatus, Task, UnitType};
use sandtable_core::state::Entity;
use sandtable_core::types::LatLon;

use crate::engine::SimEngine;

fn test_unit(id: &str, route: Vec<LatLon>) -> Entity {
    let position = route.first().copied().unwrap_or(LatLon::new(0.0, 0.0));
    Entity {
        id: id.into(),
        side: Side::Blue,
        unit_type: UnitType::LightInfantry,
        callsign: "TEST 1".into(),
        position,
        task: Task::Idle,
        speed_kph: 0.0,
        damage_pct: 0.0,
        ammo_pct: 100.0,
        route,
    }
}

fn three_point_route() -> Vec<LatLon> {
    vec![
        LatLon::new(0.0, 0.0),
        LatLon::new(0.0, 1.0),
        LatLon::new(0.0, 2.0),
    ]
}

// ---- advance ----

#[test]
fn test_advance_skips_entities_without_meaningful_route() {
    let mut engine = SimEngine::with_roster([
        test_unit("empty", vec![]),
        test_unit("single", vec![LatLon::new(1.0, 1.0)]),
    ]);

    let changed = engine.advance(0.8);
    assert!(changed.is_empty(), "no unit should move");

    let single = engine.store().get("single").unwrap();
    assert_eq!(single.entity.position, LatLon::new(1.0, 1.0));
    assert_eq!(single.entity.task, Task::Idle);
    assert_eq!(single.entity.speed_kph, 0.0);
}

#[test]
fn test_advance_walks_one_hop_regardless_of_dt() {
    let mut engine = SimEngine::with_roster([test_unit("walker", three_point_route())]);

    // A huge dt still moves exactly one waypoint.
    let changed = engine.advance(1000.0);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].position, LatLon::new(0.0, 1.0));
    assert_eq!(changed[0].task, Task::Move);
    assert_eq!(changed[0].speed_kph, MOVE_SPEED_KPH);
}

#[test]
fn test_advance_idempotent_at_route_end() {
    let mut engine = SimEngine::with_roster([test_unit("walker", three_point_route())]);

    assert_eq!(engine.advance(1.0).len(), 1);
    assert_eq!(engine.advance(1.0).len(), 1);

    // Route exhausted: no further movement and not re-reported.
    for _ in 0..5 {
        let changed = engine.advance(1.0);
        assert!(changed.is_empty(), "exhausted route must not re-report");
    }
    let walker = engine.store().get("walker").unwrap();
    assert_eq!(walker.entity.position, LatLon::new(0.0, 2.0));
}

#[test]
fn test_advance_changed_set_matches_cursor_movement() {
    let mut engine = SimEngine::with_roster([
        test_unit("moving", three_point_route()),
        test_unit("parked", vec![]),
    ]);

    let changed = engine.advance(0.8);
    let ids: Vec<_> = changed.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["moving"]);
}

#[test]
fn test_advance_accumulates_time_unconditionally() {
    let mut engine = SimEngine::with_roster([]);
    engine.advance(0.8);
    engine.advance(0.8);
    assert!((engine.sim_state().time_sec - 1.6).abs() < 1e-9);
}

// ---- sim commands ----

#[test]
fn test_sim_command_status_transitions() {
    let mut engine = SimEngine::with_roster([]);
    assert_eq!(engine.sim_state().status, SimStatus::Stopped);

    engine.apply_sim_command(SimCommand::Play);
    assert_eq!(engine.sim_state().status, SimStatus::Running);

    engine.apply_sim_command(SimCommand::Pause);
    assert_eq!(engine.sim_state().status, SimStatus::Paused);

    engine.apply_sim_command(SimCommand::Stop);
    assert_eq!(engine.sim_state().status, SimStatus::Stopped);
}

#[test]
fn test_step_advances_regardless_of_status() {
    let mut engine = SimEngine::with_roster([test_unit("walker", three_point_route())]);
    assert_eq!(engine.sim_state().status, SimStatus::Stopped);

    let changed = engine.apply_sim_command(SimCommand::Step);
    assert_eq!(changed.len(), 1);
    assert!((engine.sim_state().time_sec - 1.0).abs() < 1e-9);
    // Status is untouched by step.
    assert_eq!(engine.sim_state().status, SimStatus::Stopped);
}

/// Scenario from the route-walking contract: three steps over
/// [[0,0],[0,1],[0,2]] visit (0,1), (0,2), then nothing.
#[test]
fn test_three_step_scenario() {
    let mut engine = SimEngine::with_roster([test_unit("e", three_point_route())]);

    let changed = engine.apply_sim_command(SimCommand::Step);
    assert_eq!(changed[0].position, LatLon::new(0.0, 1.0));

    let changed = engine.apply_sim_command(SimCommand::Step);
    assert_eq!(changed[0].position, LatLon::new(0.0, 2.0));

    let changed = engine.apply_sim_command(SimCommand::Step);
    assert!(changed.is_empty(), "third step must report no change");
    let e = engine.store().get("e").unwrap();
    assert_eq!(e.entity.position, LatLon::new(0.0, 2.0));
}

// ---- waypoint mutation ----

#[test]
fn test_add_waypoint_appends_only() {
    let mut engine = SimEngine::with_roster([test_unit("e", three_point_route())]);

    let updated = engine
        .add_waypoint("e", LatLon::new(0.0, 3.0))
        .expect("known id");
    assert_eq!(updated.route.len(), 4);
    assert_eq!(updated.route[..3], three_point_route()[..]);
    assert_eq!(updated.route[3], LatLon::new(0.0, 3.0));
}

#[test]
fn test_add_waypoint_creates_route_when_none() {
    let mut engine = SimEngine::with_roster([test_unit("e", vec![])]);

    let updated = engine.add_waypoint("e", LatLon::new(5.0, 5.0)).unwrap();
    assert_eq!(updated.route, vec![LatLon::new(5.0, 5.0)]);
    // One point is not a path; the unit stays put.
    assert!(engine.advance(1.0).is_empty());
}

#[test]
fn test_add_waypoint_extends_exhausted_route() {
    let mut engine = SimEngine::with_roster([test_unit("e", three_point_route())]);
    engine.advance(1.0);
    engine.advance(1.0);
    assert!(engine.advance(1.0).is_empty(), "route exhausted");

    engine.add_waypoint("e", LatLon::new(0.0, 3.0)).unwrap();
    let changed = engine.advance(1.0);
    assert_eq!(changed.len(), 1, "new leg walked next tick");
    assert_eq!(changed[0].position, LatLon::new(0.0, 3.0));
}

#[test]
fn test_add_waypoint_unknown_id() {
    let mut engine = SimEngine::with_roster([]);
    assert!(engine.add_waypoint("ghost", LatLon::new(0.0, 0.0)).is_none());
}

#[test]
fn test_set_target_replaces_route() {
    let mut engine = SimEngine::with_roster([test_unit("e", three_point_route())]);
    engine.advance(1.0); // mid-route, cursor at 1

    let target = LatLon::new(9.0, 9.0);
    let updated = engine.set_target("e", target).expect("known id");

    // Exactly [current position, target], cursor reset.
    assert_eq!(updated.route, vec![LatLon::new(0.0, 1.0), target]);
    assert_eq!(updated.task, Task::Move);
    assert_eq!(updated.speed_kph, MOVE_SPEED_KPH);
    assert_eq!(engine.store().get("e").unwrap().route_index, 0);

    let changed = engine.advance(1.0);
    assert_eq!(changed[0].position, target);
}

#[test]
fn test_set_target_unknown_id() {
    let mut engine = SimEngine::with_roster([]);
    assert!(engine.set_target("ghost", LatLon::new(0.0, 0.0)).is_none());
}

// ---- roster ----

#[test]
fn test_default_roster_seed() {
    let engine = SimEngine::new();
    let roster = engine.roster();
    assert!(!roster.is_empty());
    assert!(roster.iter().any(|e| e.side == Side::Blue));
    assert!(roster.iter().any(|e| e.side == Side::Red));
    for e in &roster {
        assert_eq!(e.task, Task::Idle);
        assert!(e.route.is_empty());
        assert_eq!(e.ammo_pct, 100.0);
    }
}

#[test]
fn test_last_write_wins_between_mutations() {
    let mut engine = SimEngine::with_roster([test_unit("e", vec![])]);

    engine.set_target("e", LatLon::new(1.0, 1.0)).unwrap();
    engine.add_waypoint("e", LatLon::new(2.0, 2.0)).unwrap();
    // set_target after add_waypoint discards the appended leg.
    let updated = engine.set_target("e", LatLon::new(3.0, 3.0)).unwrap();
    assert_eq!(updated.route.len(), 2);
    assert_eq!(updated.route[1], LatLon::new(3.0, 3.0));
}
