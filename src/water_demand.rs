/*!
Monthly water-demand estimation for an irrigation zone.

Demand is read from the crop's reference schedule, scaled by the zone's unit count (trees, or m²
for lawn) and by a site multiplier for region and soil. Volumes are in liters per day and cubic
meters per month.
*/
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::Month;
use crate::crop_schedule::{CropSchedule, MonthlyProfile, generic_base_liters, seasonal_curve};
use crate::zone::{PlantCategory, Region, SoilType, Zone, ZoneId, site_multiplier};

// Band applied around a session volume for display
const SESSION_BAND: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWaterDemand {
    pub zone_id: ZoneId,
    pub month: Month,
    pub water_liters_per_day: f64, // Whole zone, site-adjusted [L/day]
    pub water_cubic_meters_per_month: f64, // [m³]
    pub frequency_description: String,
    pub amount_per_session: f64, // Per tree or per m² [L]
    pub amount_range: String,
    pub stage: Option<String>,
    pub is_overridden: bool,
    pub notes: Option<String>,
}

impl MonthlyWaterDemand {
    /// Replaces the daily volume with a user-entered value and freezes the entry.
    pub fn set_override(&mut self, liters_per_day: f64) {
        self.water_liters_per_day = liters_per_day;
        self.water_cubic_meters_per_month = monthly_volume_m3(liters_per_day, self.month);
        self.is_overridden = true;
    }
}

/**
Computes the 12-month demand profile of a zone from its crop schedule.

# Arguments
* `zone` - The zone; `tree_count` of zero yields an all-zero profile.
* `region` - Climate region of the irrigation center.
* `soil` - Soil type of the site.

# Returns
One entry per month, January first, none of them overridden.
*/
pub fn compute_monthly_demand(zone: &Zone, region: Region, soil: SoilType) -> [MonthlyWaterDemand; 12] {
    let schedule = CropSchedule::for_category(zone.plant_category);
    compute_monthly_demand_with(zone, region, soil, Some(schedule))
}

/**
Same as [`compute_monthly_demand`] with an explicit schedule.

When `schedule` is `None` the generic estimate is used: a base volume per tree shaped by a
seasonal curve, watered daily.
*/
pub fn compute_monthly_demand_with(
    zone: &Zone,
    region: Region,
    soil: SoilType,
    schedule: Option<&CropSchedule>,
) -> [MonthlyWaterDemand; 12] {
    let multiplier = site_multiplier(region, soil);
    match schedule {
        Some(schedule) => Month::ALL.map(|month| scheduled_demand(zone, schedule, month, multiplier)),
        None => {
            warn!(zone = %zone.name, category = ?zone.plant_category, "no crop schedule, using generic estimate");
            generic_demand(zone, multiplier)
        }
    }
}

fn scheduled_demand(zone: &Zone, schedule: &CropSchedule, month: Month, multiplier: f64) -> MonthlyWaterDemand {
    let per_unit = schedule.daily_liters_per_unit(month);
    let adjusted_per_unit = per_unit * multiplier;
    let total_daily = (per_unit * zone.tree_count as f64 * multiplier).round();

    let frequency = schedule.frequency(month);
    let interval = frequency.interval_days();
    let session = (adjusted_per_unit * interval).round();

    MonthlyWaterDemand {
        zone_id: zone.id,
        month,
        water_liters_per_day: total_daily,
        water_cubic_meters_per_month: monthly_volume_m3(total_daily, month),
        frequency_description: frequency.to_string(),
        amount_per_session: session,
        amount_range: amount_range(zone.plant_category, adjusted_per_unit, session, interval),
        stage: Some(schedule.stage(month).to_string()),
        is_overridden: false,
        notes: None,
    }
}

fn generic_demand(zone: &Zone, multiplier: f64) -> [MonthlyWaterDemand; 12] {
    let scale = zone.tree_count as f64 * generic_base_liters(zone.plant_category) * multiplier;
    let daily: MonthlyProfile = (seasonal_curve(zone.plant_category) * scale).map(f64::round);

    Month::ALL.map(|month| {
        let liters = daily[month.index()];
        MonthlyWaterDemand {
            zone_id: zone.id,
            month,
            water_liters_per_day: liters,
            water_cubic_meters_per_month: monthly_volume_m3(liters, month),
            frequency_description: "Daily".to_string(),
            amount_per_session: liters,
            amount_range: format!("{liters}"),
            stage: None,
            is_overridden: false,
            notes: Some("Generic estimation".to_string()),
        }
    })
}

// Display range for one session; lawn is shown in L/m²
fn amount_range(category: PlantCategory, adjusted_per_unit: f64, session: f64, interval: f64) -> String {
    let low = (session * (1.0 - SESSION_BAND)).round();
    let high = (session * (1.0 + SESSION_BAND)).round();

    if category == PlantCategory::Lawn {
        if interval <= 1.0 {
            let value = adjusted_per_unit.round();
            format!("{}-{} L/m²", value - 1.0, value + 1.0)
        } else {
            format!("{low}-{high} L/m²")
        }
    } else if interval == 1.0 {
        format!("{}", adjusted_per_unit.round())
    } else {
        format!("{low}-{high}")
    }
}

/// Monthly volume in m³, rounded to one decimal.
pub fn monthly_volume_m3(liters_per_day: f64, month: Month) -> f64 {
    (liters_per_day * month.days() as f64 / 100.0).round() / 10.0
}

/// Highest daily volume across a demand profile; zero for an empty profile.
pub fn peak_daily_demand(demands: &[MonthlyWaterDemand]) -> f64 {
    demands
        .iter()
        .map(|d| d.water_liters_per_day)
        .fold(0.0, f64::max)
}
