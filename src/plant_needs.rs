/*!
Plant-needs reference catalog.

Typical daily water, fertilizer and heat tolerance per plant, shown next to the zone schedules.
Catalogs come from a [`PlantNeedsSource`]; loading is attempted once and an unavailable catalog
resolves to an empty list.
*/
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantNeed {
    pub plant_name: String,
    pub daily_irrigation_liters: f64, // Per plant [L/day]
    pub fertilizer_type: String,
    pub max_temp_c: f64, // Highest well-tolerated temperature [°C]
}

// (plant, daily liters, fertilizer, max temperature)
const REFERENCE_NEEDS: [(&str, f64, &str, f64); 8] = [
    ("Tomato", 2.5, "NPK 10-10-10", 30.0),
    ("Cucumber", 3.0, "High Nitrogen", 28.0),
    ("Palm", 150.0, "Organic Compost", 50.0),
    ("Olive", 45.0, "Balanced 20-20-20", 40.0),
    ("Citrus", 60.0, "Citrus Blend", 35.0),
    ("Lettuce", 0.5, "Nitrogen", 24.0),
    ("Eggplant", 2.8, "High Phosphorus", 32.0),
    ("Pepper", 2.2, "Balanced", 30.0),
];

/// Where a plant-needs catalog is read from.
pub trait PlantNeedsSource {
    fn fetch(&self) -> Result<Vec<PlantNeed>>;
}

/// The built-in eight-plant catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceCatalog;

impl PlantNeedsSource for ReferenceCatalog {
    fn fetch(&self) -> Result<Vec<PlantNeed>> {
        Ok(reference_plant_needs())
    }
}

pub fn reference_plant_needs() -> Vec<PlantNeed> {
    REFERENCE_NEEDS
        .iter()
        .map(|&(plant_name, daily_irrigation_liters, fertilizer_type, max_temp_c)| PlantNeed {
            plant_name: plant_name.to_string(),
            daily_irrigation_liters,
            fertilizer_type: fertilizer_type.to_string(),
            max_temp_c,
        })
        .collect()
}

/// Fetches the catalog once; a failing source yields an empty list.
pub fn load_plant_needs(source: &dyn PlantNeedsSource) -> Vec<PlantNeed> {
    match source.fetch() {
        Ok(needs) => needs,
        Err(err) => {
            warn!(%err, "plant needs catalog unavailable");
            Vec::new()
        }
    }
}

/// Case-insensitive lookup by plant name.
pub fn find_plant_need<'a>(needs: &'a [PlantNeed], plant_name: &str) -> Option<&'a PlantNeed> {
    needs
        .iter()
        .find(|need| need.plant_name.eq_ignore_ascii_case(plant_name.trim()))
}
