use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::boq::{BoqItem, reference_procurement_list};
use crate::calendar::Month;
use crate::config::FarmConfig;
use crate::error::{EngineError, Result};
use crate::network::{NetworkSegment, compute_network_segments};
use crate::recommendation::{IrrigationRecommendation, RecommendationOverride, compute_recommendation};
use crate::warnings::{DesignWarning, design_warnings};
use crate::water_demand::{MonthlyWaterDemand, compute_monthly_demand, peak_daily_demand};
use crate::zone::{IrrigationCenter, Zone, ZoneId, ZoneSpec, ZoneUpdate};

/// Derived records of one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCalculation {
    pub demand: [MonthlyWaterDemand; 12],
    pub recommendation: IrrigationRecommendation,
}

/// Runs the zone pipeline: monthly demand, then the recommendation sized on its peak.
pub fn recalculate(zone: &Zone, center: &IrrigationCenter) -> ZoneCalculation {
    let demand = compute_monthly_demand(zone, center.region(), center.soil_type());
    let recommendation = compute_recommendation(zone, peak_daily_demand(&demand));
    ZoneCalculation { demand, recommendation }
}

// Farm-wide water use for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WaterTotals {
    pub liters_per_day: f64,
    pub cubic_meters: f64,
}

/// Owns the farm's zones and everything derived from them.
///
/// Every mutation re-runs the pipeline for the affected zones and then regenerates the network
/// and BOQ, so readers always see consistent state. Overridden monthly demand entries are kept
/// across recalculation; recommendation overrides are pinned per field.
#[derive(Debug, Clone)]
pub struct IrrigationEngine {
    center: IrrigationCenter,
    zones: Vec<Zone>,
    demands: HashMap<ZoneId, [MonthlyWaterDemand; 12]>,
    recommendations: HashMap<ZoneId, IrrigationRecommendation>,
    overrides: HashMap<ZoneId, RecommendationOverride>,
    segments: Vec<NetworkSegment>,
    boq: Vec<BoqItem>,
}

impl Default for IrrigationEngine {
    fn default() -> Self {
        Self::new(IrrigationCenter::default())
    }
}

impl IrrigationEngine {
    pub fn new(mut center: IrrigationCenter) -> Self {
        center.fill_pump_default();
        IrrigationEngine {
            center,
            zones: Vec::new(),
            demands: HashMap::new(),
            recommendations: HashMap::new(),
            overrides: HashMap::new(),
            segments: Vec::new(),
            boq: reference_procurement_list(),
        }
    }

    pub fn from_config(config: FarmConfig) -> Result<Self> {
        let mut engine = Self::new(config.center);
        for spec in config.zones {
            let zone = spec.into_zone();
            zone.validate()?;
            engine.zones.push(zone);
        }
        engine.recalculate_all();
        Ok(engine)
    }

    pub fn center(&self) -> &IrrigationCenter {
        &self.center
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn demand(&self, id: ZoneId) -> Option<&[MonthlyWaterDemand]> {
        self.demands.get(&id).map(|d| d.as_slice())
    }

    pub fn recommendation(&self, id: ZoneId) -> Option<&IrrigationRecommendation> {
        self.recommendations.get(&id)
    }

    pub fn recommendations(&self) -> &HashMap<ZoneId, IrrigationRecommendation> {
        &self.recommendations
    }

    pub fn segments(&self) -> &[NetworkSegment] {
        &self.segments
    }

    pub fn boq(&self) -> &[BoqItem] {
        &self.boq
    }

    pub fn warnings(&self) -> Vec<DesignWarning> {
        design_warnings(&self.zones, &self.recommendations)
    }

    /// Replaces the center; a region or soil change recalculates every zone.
    pub fn set_center(&mut self, mut center: IrrigationCenter) {
        center.fill_pump_default();
        let site_changed = center.region() != self.center.region()
            || center.soil_type() != self.center.soil_type();
        self.center = center;

        if site_changed {
            info!(
                region = ?self.center.region(),
                soil = ?self.center.soil_type(),
                zones = self.zones.len(),
                "site changed, recalculating all zones"
            );
            self.recalculate_all();
        }
    }

    pub fn add_zone(&mut self, spec: ZoneSpec) -> Result<ZoneId> {
        let zone = spec.into_zone();
        zone.validate()?;
        let id = zone.id;
        self.zones.push(zone);
        self.refresh_zone(id)?;
        self.refresh_network();
        Ok(id)
    }

    pub fn update_zone(&mut self, id: ZoneId, update: ZoneUpdate) -> Result<()> {
        let position = self.position(id)?;
        let mut zone = self.zones[position].clone();
        update.apply_to(&mut zone);
        zone.validate()?;
        self.zones[position] = zone;

        self.refresh_zone(id)?;
        self.refresh_network();
        Ok(())
    }

    pub fn delete_zone(&mut self, id: ZoneId) -> Result<Zone> {
        let position = self.position(id)?;
        let zone = self.zones.remove(position);
        self.demands.remove(&id);
        self.recommendations.remove(&id);
        self.overrides.remove(&id);
        self.refresh_network();
        Ok(zone)
    }

    /// Flips a zone between active and inactive and returns the new state.
    pub fn toggle_zone(&mut self, id: ZoneId) -> Result<bool> {
        let active = !self.zones[self.position(id)?].is_active;
        self.update_zone(
            id,
            ZoneUpdate {
                is_active: Some(active),
                ..Default::default()
            },
        )?;
        Ok(active)
    }

    /// Pins a month's daily volume for a zone and re-sizes its recommendation.
    pub fn override_demand(&mut self, id: ZoneId, month: Month, liters_per_day: f64) -> Result<()> {
        let position = self.position(id)?;
        if !liters_per_day.is_finite() || liters_per_day < 0.0 {
            return Err(EngineError::InvalidZone {
                name: self.zones[position].name.clone(),
                reason: format!("demand override must be a non-negative volume, got {liters_per_day}"),
            });
        }
        if let Some(demand) = self.demands.get_mut(&id) {
            demand[month.index()].set_override(liters_per_day);
        }
        self.refresh_zone(id)?;
        self.refresh_network();
        Ok(())
    }

    /// Pins recommendation fields for a zone; later edits of the same field win.
    pub fn override_recommendation(&mut self, id: ZoneId, edit: RecommendationOverride) -> Result<()> {
        self.position(id)?;
        self.overrides.entry(id).or_default().merge(edit);
        self.refresh_zone(id)?;
        self.refresh_network();
        Ok(())
    }

    /// Drops every demand and recommendation override of a zone.
    pub fn clear_overrides(&mut self, id: ZoneId) -> Result<()> {
        self.position(id)?;
        self.overrides.remove(&id);
        self.demands.remove(&id);
        self.refresh_zone(id)?;
        self.refresh_network();
        Ok(())
    }

    pub fn recalculate_all(&mut self) {
        let ids: Vec<ZoneId> = self.zones.iter().map(|z| z.id).collect();
        for id in ids {
            // Ids come from self.zones, so the lookup cannot miss
            if let Err(err) = self.refresh_zone(id) {
                warn!(%id, %err, "skipped zone during recalculation");
            }
        }
        self.refresh_network();
    }

    /// Water use of all active zones in `month`.
    pub fn month_totals(&self, month: Month) -> WaterTotals {
        self.zones
            .iter()
            .filter(|z| z.is_active)
            .filter_map(|z| self.demands.get(&z.id))
            .map(|d| &d[month.index()])
            .fold(WaterTotals::default(), |acc, d| WaterTotals {
                liters_per_day: acc.liters_per_day + d.water_liters_per_day,
                cubic_meters: acc.cubic_meters + d.water_cubic_meters_per_month,
            })
    }

    fn position(&self, id: ZoneId) -> Result<usize> {
        self.zones
            .iter()
            .position(|z| z.id == id)
            .ok_or(EngineError::UnknownZone(id))
    }

    // Recomputes demand and recommendation of one zone, keeping overridden entries and fields
    fn refresh_zone(&mut self, id: ZoneId) -> Result<()> {
        let zone = &self.zones[self.position(id)?];
        let mut demand = compute_monthly_demand(zone, self.center.region(), self.center.soil_type());

        let mut pinned_months = 0;
        if let Some(previous) = self.demands.get(&id) {
            for (fresh, old) in demand.iter_mut().zip(previous.iter()) {
                if old.is_overridden {
                    *fresh = old.clone();
                    pinned_months += 1;
                }
            }
        }

        let peak = peak_daily_demand(&demand);
        let recommendation = match self.overrides.get(&id) {
            Some(pin) => pin.recommend(zone, peak),
            None => compute_recommendation(zone, peak),
        };

        debug!(
            zone = %zone.name,
            peak_liters = peak,
            method = ?recommendation.method,
            pipe_mm = recommendation.pipe_diameter_mm,
            runtime_min = recommendation.runtime_minutes,
            pinned_months,
            "recalculated zone"
        );

        self.demands.insert(id, demand);
        self.recommendations.insert(id, recommendation);
        Ok(())
    }

    fn refresh_network(&mut self) {
        self.segments = compute_network_segments(&self.zones, &self.recommendations);
        self.boq = reference_procurement_list();
        debug!(segments = self.segments.len(), "regenerated network");
    }
}
