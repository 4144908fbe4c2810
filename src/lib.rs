mod boq;
mod calendar;
mod config;
mod crop_schedule;
mod engine;
mod error;
mod fertilization;
mod harvest;
mod network;
mod pest_calendar;
mod plant_needs;
mod pump;
mod recommendation;
mod warnings;
mod water_demand;
mod zone;

pub use boq::{BoqItem, reference_procurement_list, write_boq_csv};
pub use calendar::{DAYS_IN_MONTH, Month};
pub use config::FarmConfig;
pub use crop_schedule::{CropSchedule, Frequency, MonthlyProfile};
pub use engine::{IrrigationEngine, WaterTotals, ZoneCalculation, recalculate};
pub use error::{EngineError, Result};
pub use fertilization::{FERTILIZATION_SCHEDULE, FertilizationEntry, FertilizerType, fertilization_tasks};
pub use harvest::{HARVEST_CALENDAR, HarvestWindow, harvest_windows};
pub use network::{NetworkSegment, SegmentKind, compute_network_segments};
pub use pest_calendar::{PEST_CALENDAR, PestEntry, PestSeverity, critical_alerts, pest_risks};
pub use plant_needs::{
    PlantNeed, PlantNeedsSource, ReferenceCatalog, find_plant_need, load_plant_needs, reference_plant_needs,
};
pub use pump::{DEFAULT_PUMP_CAPACITY_LPH, PUMP_SCENARIOS, PumpScenario, scenario_for_capacity};
pub use recommendation::{
    EmitterConfig, IrrigationRecommendation, PIPE_FLOW_LIMITS, RecommendationOverride, compute_recommendation,
    resolve_method, select_pipe_diameter,
};
pub use warnings::{DesignWarning, Severity, WarningKind, design_warnings};
pub use water_demand::{
    MonthlyWaterDemand, compute_monthly_demand, compute_monthly_demand_with, monthly_volume_m3, peak_daily_demand,
};
pub use zone::{
    IrrigationCenter, IrrigationMethod, PlantCategory, Region, SoilType, Zone, ZoneId, ZoneSpec, ZoneUpdate,
    site_multiplier,
};
