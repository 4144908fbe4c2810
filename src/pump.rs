// Gravity-fed pump station scenarios: elevated tank height sets line pressure and deliverable flow
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpScenario {
    pub id: &'static str,
    pub tank_height_m: f64,
    pub pressure_bar: f64,
    pub capacity_lph: f64, // [L/h]
}

impl PumpScenario {
    /// Looks a scenario up by its id, e.g. `"15m"`.
    pub fn by_id(id: &str) -> Option<&'static PumpScenario> {
        PUMP_SCENARIOS.iter().find(|s| s.id == id)
    }

    // Below 1 bar emitters at the far end of long runs starve
    pub fn is_low_pressure(&self) -> bool {
        self.pressure_bar < LOW_PRESSURE_BAR
    }
}

const LOW_PRESSURE_BAR: f64 = 1.0;

// A configured capacity matches a scenario when within this band [L/h]
const CAPACITY_MATCH_TOLERANCE: f64 = 1000.0;

/// Tallest tank first; the first entry is the default station.
pub static PUMP_SCENARIOS: [PumpScenario; 4] = [
    PumpScenario {
        id: "20m",
        tank_height_m: 20.0,
        pressure_bar: 2.0,
        capacity_lph: 360_000.0,
    },
    PumpScenario {
        id: "15m",
        tank_height_m: 15.0,
        pressure_bar: 1.5,
        capacity_lph: 310_000.0,
    },
    PumpScenario {
        id: "10m",
        tank_height_m: 10.0,
        pressure_bar: 1.0,
        capacity_lph: 250_000.0,
    },
    PumpScenario {
        id: "5m",
        tank_height_m: 5.0,
        pressure_bar: 0.5,
        capacity_lph: 170_000.0,
    },
];

pub const DEFAULT_PUMP_CAPACITY_LPH: f64 = 360_000.0;

/// Scenario whose capacity lies within 1000 L/h of `capacity_lph`, or the default 20 m station.
pub fn scenario_for_capacity(capacity_lph: f64) -> &'static PumpScenario {
    PUMP_SCENARIOS
        .iter()
        .find(|s| (s.capacity_lph - capacity_lph).abs() < CAPACITY_MATCH_TOLERANCE)
        .unwrap_or(&PUMP_SCENARIOS[0])
}
