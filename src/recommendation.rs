// Irrigation method, emitter layout, runtime and pipe sizing for a zone
use serde::{Deserialize, Serialize};

use crate::zone::{IrrigationMethod, PlantCategory, Zone, ZoneId};

// Max safe flow per PVC/PE pipe diameter, keeping velocity under ~1.5 m/s: (diameter [mm], flow [L/h])
pub const PIPE_FLOW_LIMITS: [(u32, f64); 10] = [
    (16, 800.0),
    (20, 1200.0),
    (25, 2200.0),   // 1"
    (32, 3800.0),   // 1.25"
    (40, 6000.0),   // 1.5"
    (50, 10000.0),  // 2"
    (63, 18000.0),  // 2.5"
    (75, 28000.0),  // 3"
    (90, 42000.0),
    (110, 65000.0),
];

pub const DISTANCE_THRESHOLD_FOR_UPSIZING: f64 = 100.0; // [m]
pub const IRRIGATION_DAYS_PER_WEEK: u32 = 7;

// Emitter specs
pub const STANDARD_EMITTER_FLOW: f64 = 8.0; // [L/h]
pub const DRIP_EMITTERS_PER_TREE: u32 = 4;
pub const BUBBLER_FLOW: f64 = 240.0; // [L/h]
pub const BASIN_FLOW: f64 = 200.0; // Single open outlet sized to fill the basin [L/h]
pub const SPRINKLER_FLOW: f64 = 50.0; // [L/h]

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationRecommendation {
    pub zone_id: ZoneId,
    pub method: IrrigationMethod,
    pub emitters_per_tree: u32,
    pub flow_rate_per_emitter: f64, // [L/h]
    pub runtime_minutes: u32,
    pub days_per_week: u32,
    pub pipe_diameter_mm: u32,
    pub is_overridden: bool,
}

/// Emitter layout of an irrigation method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterConfig {
    pub emitters_per_tree: u32,
    pub flow_rate_per_emitter: f64, // [L/h]
}

impl EmitterConfig {
    pub fn for_method(method: IrrigationMethod) -> Self {
        let (emitters_per_tree, flow_rate_per_emitter) = match method {
            IrrigationMethod::Drip => (DRIP_EMITTERS_PER_TREE, STANDARD_EMITTER_FLOW),
            IrrigationMethod::Bubbler => (1, BUBBLER_FLOW),
            IrrigationMethod::Basin => (1, BASIN_FLOW),
            IrrigationMethod::Sprinkler | IrrigationMethod::Auto => (1, SPRINKLER_FLOW),
        };
        EmitterConfig {
            emitters_per_tree,
            flow_rate_per_emitter,
        }
    }

    // Total flow delivered to one tree [L/h]
    pub fn flow_per_tree(&self) -> f64 {
        self.emitters_per_tree as f64 * self.flow_rate_per_emitter
    }
}

/// Resolves `Auto` to the method suited to the crop; explicit methods pass through.
pub fn resolve_method(method: IrrigationMethod, category: PlantCategory) -> IrrigationMethod {
    if method != IrrigationMethod::Auto {
        return method;
    }
    match category {
        PlantCategory::Palm => IrrigationMethod::Basin,
        PlantCategory::Olive | PlantCategory::Citrus | PlantCategory::Grape => IrrigationMethod::Bubbler,
        PlantCategory::Lawn => IrrigationMethod::Sprinkler,
        PlantCategory::Fruit => IrrigationMethod::Drip,
        PlantCategory::Ornamental => IrrigationMethod::Bubbler,
    }
}

/**
Smallest pipe diameter able to carry `flow_lph`, or the largest pipe when none can.

# Arguments
* `flow_lph` - Peak flow through the pipe [L/h].
* `distance_m` - Run length from the irrigation center [m]; runs beyond 100 m go one size up.
*/
pub fn select_pipe_diameter(flow_lph: f64, distance_m: f64) -> u32 {
    let last = PIPE_FLOW_LIMITS.len() - 1;
    let mut tier = PIPE_FLOW_LIMITS
        .iter()
        .position(|&(_, max_flow)| max_flow >= flow_lph)
        .unwrap_or(last);

    // Upsize to offset friction loss on long runs
    if distance_m > DISTANCE_THRESHOLD_FOR_UPSIZING && tier < last {
        tier += 1;
    }
    PIPE_FLOW_LIMITS[tier].0
}

/**
Builds the irrigation recommendation for a zone from its peak daily demand.

# Arguments
* `zone` - The zone being irrigated.
* `peak_daily_demand_liters` - Highest monthly daily demand of the whole zone [L/day].

# Returns
A fresh, non-overridden recommendation. Degenerate inputs (no trees, no demand) give a zero runtime.
*/
pub fn compute_recommendation(zone: &Zone, peak_daily_demand_liters: f64) -> IrrigationRecommendation {
    let method = resolve_method(zone.irrigation_method, zone.plant_category);
    let emitters = EmitterConfig::for_method(method);

    let trees = zone.tree_count.max(1) as f64;
    let peak_per_tree = peak_daily_demand_liters.max(0.0) / trees;
    let flow_per_tree = emitters.flow_per_tree();
    let hours_needed = if flow_per_tree > 0.0 {
        peak_per_tree / flow_per_tree
    } else {
        0.0
    };
    let runtime_minutes = (hours_needed * 60.0).ceil() as u32;

    let zone_flow = zone.tree_count as f64 * flow_per_tree;
    let pipe_diameter_mm = select_pipe_diameter(zone_flow, zone.distance_from_center);

    IrrigationRecommendation {
        zone_id: zone.id,
        method,
        emitters_per_tree: emitters.emitters_per_tree,
        flow_rate_per_emitter: emitters.flow_rate_per_emitter,
        runtime_minutes,
        days_per_week: IRRIGATION_DAYS_PER_WEEK,
        pipe_diameter_mm,
        is_overridden: false,
    }
}

/// Manually pinned recommendation fields. `Some` fields survive every recalculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOverride {
    pub method: Option<IrrigationMethod>,
    pub emitters_per_tree: Option<u32>,
    pub flow_rate_per_emitter: Option<f64>,
    pub runtime_minutes: Option<u32>,
    pub days_per_week: Option<u32>,
    pub pipe_diameter_mm: Option<u32>,
}

impl RecommendationOverride {
    pub fn is_empty(&self) -> bool {
        *self == RecommendationOverride::default()
    }

    /// Folds a newer edit into this one; fields set in `newer` win.
    pub fn merge(&mut self, newer: RecommendationOverride) {
        self.method = newer.method.or(self.method);
        self.emitters_per_tree = newer.emitters_per_tree.or(self.emitters_per_tree);
        self.flow_rate_per_emitter = newer.flow_rate_per_emitter.or(self.flow_rate_per_emitter);
        self.runtime_minutes = newer.runtime_minutes.or(self.runtime_minutes);
        self.days_per_week = newer.days_per_week.or(self.days_per_week);
        self.pipe_diameter_mm = newer.pipe_diameter_mm.or(self.pipe_diameter_mm);
    }

    /// Builds the recommendation for `zone` with these pins in place.
    ///
    /// A pinned method is sized like a zone configured with that method; the remaining pins are
    /// applied on top.
    pub fn recommend(&self, zone: &Zone, peak_daily_demand_liters: f64) -> IrrigationRecommendation {
        let mut rec = match self.method {
            Some(method) => compute_recommendation(&zone.clone().with_method(method), peak_daily_demand_liters),
            None => compute_recommendation(zone, peak_daily_demand_liters),
        };
        self.apply_to(&mut rec);
        rec
    }

    pub fn apply_to(&self, rec: &mut IrrigationRecommendation) {
        if self.is_empty() {
            return;
        }
        if let Some(method) = self.method {
            rec.method = method;
        }
        if let Some(emitters) = self.emitters_per_tree {
            rec.emitters_per_tree = emitters;
        }
        if let Some(flow) = self.flow_rate_per_emitter {
            rec.flow_rate_per_emitter = flow;
        }
        if let Some(minutes) = self.runtime_minutes {
            rec.runtime_minutes = minutes;
        }
        if let Some(days) = self.days_per_week {
            rec.days_per_week = days;
        }
        if let Some(diameter) = self.pipe_diameter_mm {
            rec.pipe_diameter_mm = diameter;
        }
        rec.is_overridden = true;
    }
}
