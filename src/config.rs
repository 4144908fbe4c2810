use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, Result};
use crate::zone::{IrrigationCenter, ZoneSpec};

/// Farm layout as read from a TOML file.
///
/// ```toml
/// [center]
/// name = "Hail Farm"
/// region = "Qassim"
/// soil_type = "Sandy"
/// pump_capacity_lph = 310000.0
///
/// [[zones]]
/// name = "North Palms"
/// plant_category = "Palm"
/// tree_count = 55
/// distance_from_center = 50.0
/// ```
///
/// `region` and `soil_type` may be left out (Central and Loam apply), as may `pump_capacity_lph`
/// (the 20 m tank station, 360000 L/h). Zones default to the
/// `Auto` method, 50 m from the center, active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmConfig {
    #[serde(default)]
    pub center: IrrigationCenter,
    #[serde(default)]
    pub zones: Vec<ZoneSpec>,
}

impl FarmConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: FarmConfig = toml::from_str(text)?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            zones = config.zones.len(),
            region = ?config.center.region(),
            soil = ?config.center.soil_type(),
            "loaded farm config"
        );
        Ok(config)
    }
}
