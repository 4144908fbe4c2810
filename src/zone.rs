use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::pump::{DEFAULT_PUMP_CAPACITY_LPH, PumpScenario, scenario_for_capacity};

pub type ZoneId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantCategory {
    Palm,
    Olive,
    Citrus,
    Grape,
    Lawn, // tree_count is read as area [m²]
    Fruit,
    Ornamental,
}

impl PlantCategory {
    pub const ALL: [PlantCategory; 7] = [
        PlantCategory::Palm,
        PlantCategory::Olive,
        PlantCategory::Citrus,
        PlantCategory::Grape,
        PlantCategory::Lawn,
        PlantCategory::Fruit,
        PlantCategory::Ornamental,
    ];

    // Crops costed at the higher generic base volume
    pub(crate) fn is_fruit_like(self) -> bool {
        matches!(
            self,
            PlantCategory::Fruit
                | PlantCategory::Palm
                | PlantCategory::Citrus
                | PlantCategory::Grape
                | PlantCategory::Olive
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IrrigationMethod {
    #[default]
    Auto,
    Drip,
    Bubbler,
    Sprinkler,
    Basin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    Central,
    Qassim,
    Coastal,
    Northern,
}

impl Region {
    // Evapotranspiration factor relative to the Central region
    pub fn factor(self) -> f64 {
        match self {
            Region::Central => 1.00,
            Region::Qassim => 1.15,
            Region::Coastal => 0.80,
            Region::Northern => 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Clay,
    #[default]
    Loam,
}

impl SoilType {
    // Sandy soils drain fast; clay only raises an alert upstream, so it stays at 1.0
    pub fn factor(self) -> f64 {
        match self {
            SoilType::Sandy => 1.10,
            SoilType::Clay | SoilType::Loam => 1.00,
        }
    }
}

/// Combined demand multiplier for a region and soil.
pub fn site_multiplier(region: Region, soil: SoilType) -> f64 {
    region.factor() * soil.factor()
}

/// The farm's central irrigation hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationCenter {
    #[serde(default = "default_center_name")]
    pub name: String,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub soil_type: Option<SoilType>,
    #[serde(default = "default_pump_capacity")]
    pub pump_capacity_lph: f64, // [L/h]
}

impl IrrigationCenter {
    pub fn region(&self) -> Region {
        self.region.unwrap_or_default()
    }

    pub fn soil_type(&self) -> SoilType {
        self.soil_type.unwrap_or_default()
    }

    /// Pump scenario matching the configured capacity.
    pub fn pump_scenario(&self) -> &'static PumpScenario {
        scenario_for_capacity(self.pump_capacity_lph)
    }

    // Zero or unusable capacity means the station was never configured
    pub(crate) fn fill_pump_default(&mut self) {
        if self.pump_capacity_lph.is_nan() || self.pump_capacity_lph <= 0.0 {
            self.pump_capacity_lph = DEFAULT_PUMP_CAPACITY_LPH;
        }
    }
}

impl Default for IrrigationCenter {
    fn default() -> Self {
        IrrigationCenter {
            name: default_center_name(),
            region: None,
            soil_type: None,
            pump_capacity_lph: DEFAULT_PUMP_CAPACITY_LPH,
        }
    }
}

fn default_center_name() -> String {
    "Main Farm Center".to_string()
}

fn default_pump_capacity() -> f64 {
    DEFAULT_PUMP_CAPACITY_LPH
}

/// A managed planting area with a single crop type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub plant_category: PlantCategory,
    pub tree_count: u32,
    pub irrigation_method: IrrigationMethod,
    pub distance_from_center: f64, // [m]
    pub is_active: bool,
}

impl Zone {
    pub fn new(name: impl Into<String>, plant_category: PlantCategory, tree_count: u32) -> Self {
        Zone {
            id: Uuid::new_v4(),
            name: name.into(),
            plant_category,
            tree_count,
            irrigation_method: IrrigationMethod::Auto,
            distance_from_center: 0.0,
            is_active: true,
        }
    }

    pub fn with_method(mut self, method: IrrigationMethod) -> Self {
        self.irrigation_method = method;
        self
    }

    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance_from_center = meters;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.distance_from_center.is_finite() || self.distance_from_center < 0.0 {
            return Err(EngineError::InvalidZone {
                name: self.name.clone(),
                reason: format!(
                    "distance from center must be a non-negative number of meters, got {}",
                    self.distance_from_center
                ),
            });
        }
        Ok(())
    }
}

/// Zone attributes as supplied by a caller or a farm config file; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub name: String,
    pub plant_category: PlantCategory,
    #[serde(default)]
    pub tree_count: u32,
    #[serde(default)]
    pub irrigation_method: IrrigationMethod,
    #[serde(default = "default_distance")]
    pub distance_from_center: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_distance() -> f64 {
    50.0
}

fn default_active() -> bool {
    true
}

impl ZoneSpec {
    pub fn into_zone(self) -> Zone {
        Zone {
            id: Uuid::new_v4(),
            name: self.name,
            plant_category: self.plant_category,
            tree_count: self.tree_count,
            irrigation_method: self.irrigation_method,
            distance_from_center: self.distance_from_center,
            is_active: self.is_active,
        }
    }
}

/// Partial edit of a zone; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub plant_category: Option<PlantCategory>,
    pub tree_count: Option<u32>,
    pub irrigation_method: Option<IrrigationMethod>,
    pub distance_from_center: Option<f64>,
    pub is_active: Option<bool>,
}

impl ZoneUpdate {
    pub(crate) fn apply_to(self, zone: &mut Zone) {
        if let Some(name) = self.name {
            zone.name = name;
        }
        if let Some(category) = self.plant_category {
            zone.plant_category = category;
        }
        if let Some(count) = self.tree_count {
            zone.tree_count = count;
        }
        if let Some(method) = self.irrigation_method {
            zone.irrigation_method = method;
        }
        if let Some(distance) = self.distance_from_center {
            zone.distance_from_center = distance;
        }
        if let Some(active) = self.is_active {
            zone.is_active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unset_center_defaults_to_central_loam() {
        let center = IrrigationCenter::default();
        assert_eq!(center.region(), Region::Central);
        assert_eq!(center.soil_type(), SoilType::Loam);
        assert_relative_eq!(site_multiplier(center.region(), center.soil_type()), 1.0);
    }

    #[test]
    fn unconfigured_pump_uses_tallest_tank() {
        let center = IrrigationCenter::default();
        assert_eq!(center.pump_scenario().id, "20m");

        let mut center = IrrigationCenter {
            pump_capacity_lph: 0.0,
            ..IrrigationCenter::default()
        };
        center.fill_pump_default();
        assert_relative_eq!(center.pump_capacity_lph, 360_000.0);

        let mut five_meter = IrrigationCenter {
            pump_capacity_lph: 170_000.0,
            ..IrrigationCenter::default()
        };
        five_meter.fill_pump_default();
        assert_eq!(five_meter.pump_scenario().id, "5m");
        assert!(five_meter.pump_scenario().is_low_pressure());
    }

    #[test]
    fn sandy_soil_compounds_region_factor() {
        assert_relative_eq!(site_multiplier(Region::Qassim, SoilType::Sandy), 1.265, epsilon = 1e-12);
        assert_relative_eq!(site_multiplier(Region::Northern, SoilType::Clay), 0.75);
    }

    #[test]
    fn negative_distance_is_rejected() {
        let zone = Zone::new("Grove", PlantCategory::Olive, 10).with_distance(-5.0);
        assert!(matches!(zone.validate(), Err(EngineError::InvalidZone { .. })));
        assert!(zone.with_distance(0.0).validate().is_ok());
    }

    #[test]
    fn update_touches_only_given_fields() {
        let mut zone = Zone::new("Palms", PlantCategory::Palm, 55).with_distance(50.0);
        ZoneUpdate {
            tree_count: Some(60),
            ..Default::default()
        }
        .apply_to(&mut zone);
        assert_eq!(zone.tree_count, 60);
        assert_eq!(zone.name, "Palms");
        assert_relative_eq!(zone.distance_from_center, 50.0);
    }
}
