//! Seed roster for the shared sand table.
//!
//! Units exist for the lifetime of the process; nothing is created or
//! destroyed at runtime. Positions are scattered around a training
//! area near Hamina on the Gulf of Finland.

use sandtable_core::enums::{Side, Task, UnitType};
use sandtable_core::state::Entity;
use sandtable_core::types::LatLon;

fn unit(
    id: &str,
    side: Side,
    unit_type: UnitType,
    callsign: &str,
    lat: f64,
    lon: f64,
) -> Entity {
    Entity {
        id: id.into(),
        side,
        unit_type,
        callsign: callsign.into(),
        position: LatLon::new(lat, lon),
        task: Task::Idle,
        speed_kph: 0.0,
        damage_pct: 0.0,
        ammo_pct: 100.0,
        route: vec![],
    }
}

/// The fixed roster every server start begins with.
pub fn default_roster() -> Vec<Entity> {
    vec![
        unit(
            "blue-inf-1",
            Side::Blue,
            UnitType::LightInfantry,
            "ASPEN 1-1",
            60.569,
            27.198,
        ),
        unit(
            "blue-inf-2",
            Side::Blue,
            UnitType::LightInfantry,
            "ASPEN 1-2",
            60.561,
            27.214,
        ),
        unit(
            "blue-tank-1",
            Side::Blue,
            UnitType::Tank,
            "IRONSIDE 6",
            60.552,
            27.181,
        ),
        unit(
            "blue-arty-1",
            Side::Blue,
            UnitType::Artillery,
            "THUNDER 3",
            60.539,
            27.165,
        ),
        unit(
            "red-inf-1",
            Side::Red,
            UnitType::LightInfantry,
            "KRASNY 2",
            60.601,
            27.302,
        ),
        unit(
            "red-tank-1",
            Side::Red,
            UnitType::Tank,
            "MOLOT 1",
            60.612,
            27.321,
        ),
        unit(
            "red-arty-1",
            Side::Red,
            UnitType::Artillery,
            "GROM 4",
            60.628,
            27.344,
        ),
    ]
}
